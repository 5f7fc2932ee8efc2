// ABOUTME: Sport classification from workout names
// ABOUTME: Marker search in priority order with an explicit unclassified variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::sport_markers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sport detected in a workout name
///
/// `Unknown` means no marker matched. It is never sent to the service; the
/// formatter resolves it through an [`UnclassifiedSport`] policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SportType {
    /// Name contains "Bike"
    Ride,
    /// Name contains "Run"
    Run,
    /// Name contains "Swim"
    Swim,
    /// No marker found
    Unknown,
}

impl SportType {
    /// Classify a workout by substring markers: "Bike", then "Run", then "Swim"
    ///
    /// Matching is case-sensitive, so "Brunch" does not count as a run.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        if name.contains(sport_markers::BIKE) {
            Self::Ride
        } else if name.contains(sport_markers::RUN) {
            Self::Run
        } else if name.contains(sport_markers::SWIM) {
            Self::Swim
        } else {
            Self::Unknown
        }
    }

    /// Event type for a classified sport; `None` for `Unknown`
    #[must_use]
    pub const fn event_type(self) -> Option<EventType> {
        match self {
            Self::Ride => Some(EventType::Ride),
            Self::Run => Some(EventType::Run),
            Self::Swim => Some(EventType::Swim),
            Self::Unknown => None,
        }
    }
}

/// Activity type accepted by the calendar event schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Cycling
    Ride,
    /// Running
    Run,
    /// Swimming
    Swim,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ride => write!(f, "Ride"),
            Self::Run => write!(f, "Run"),
            Self::Swim => write!(f, "Swim"),
        }
    }
}

/// What to do with a workout whose name has no sport marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnclassifiedSport {
    /// Upload it with this event type
    Fallback(EventType),
    /// Fail formatting for the batch
    Reject,
}

impl Default for UnclassifiedSport {
    fn default() -> Self {
        Self::Fallback(EventType::Swim)
    }
}

impl FromStr for UnclassifiedSport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ride" | "bike" => Ok(Self::Fallback(EventType::Ride)),
            "run" => Ok(Self::Fallback(EventType::Run)),
            "swim" => Ok(Self::Fallback(EventType::Swim)),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "expected one of ride, run, swim, reject; got '{other}'"
            )),
        }
    }
}

impl fmt::Display for UnclassifiedSport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback(event_type) => write!(f, "{}", event_type.to_string().to_lowercase()),
            Self::Reject => write!(f, "reject"),
        }
    }
}
