// ABOUTME: Input records parsed from the training document
// ABOUTME: Fields are optional at parse time so the formatter can report which one is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Deserialize;

/// Top-level training document
///
/// A document without a `trainings` key holds no workouts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrainingDocument {
    /// Planned workouts in upload order
    #[serde(default)]
    pub trainings: Vec<Workout>,
}

/// A single planned training session
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Workout {
    /// Display name; also carries the sport marker ("Bike", "Run", "Swim")
    pub name: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Ordered workout segments
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One segment of a workout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Step {
    /// Free text shown above the target line
    pub description: Option<String>,
    /// Magnitude plus unit marker, e.g. `10m`, `30s`, `5km`
    pub duration: Option<String>,
    /// Named intensity zone, e.g. `Z2`
    pub zone: Option<String>,
    /// Cadence target; `Free` when absent
    pub cadence: Option<String>,
    /// Fraction of FTP, used instead of `zone` in power target mode
    pub power: Option<f64>,
}

impl Workout {
    /// Convenience constructor used by callers building workouts in code
    #[must_use]
    pub fn new(name: impl Into<String>, date: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: Some(name.into()),
            date: Some(date.into()),
            steps,
        }
    }
}

impl Step {
    /// Zone-targeted step with no explicit cadence
    #[must_use]
    pub fn zone(
        description: impl Into<String>,
        duration: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            duration: Some(duration.into()),
            zone: Some(zone.into()),
            cadence: None,
            power: None,
        }
    }

    /// Set the cadence target
    #[must_use]
    pub fn with_cadence(mut self, cadence: impl Into<String>) -> Self {
        self.cadence = Some(cadence.into());
        self
    }

    /// Set the power target as a fraction of FTP
    #[must_use]
    pub const fn with_power(mut self, power: f64) -> Self {
        self.power = Some(power);
        self
    }
}
