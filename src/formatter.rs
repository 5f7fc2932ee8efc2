// ABOUTME: Maps planned workouts onto intervals.icu calendar events
// ABOUTME: Duration parsing, description synthesis, sport classification, and step targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout formatting
//!
//! Formatting is pure: no I/O and no state beyond the [`FormatterConfig`].
//! Structural problems (missing name, date, step duration or zone) fail the
//! batch. Unrecognized duration units only cost accuracy: the step counts as
//! zero seconds and a warning is logged.

use chrono::NaiveDate;
use tracing::{debug, warn};
use workout_core::constants::{defaults, duration_units, event_schema};
use workout_core::errors::{DurationParseWarning, FormatError};
use workout_core::models::{
    Event, EventCategory, EventType, SportType, Step, StepTarget, TargetMode, TargetType,
    UnclassifiedSport, Workout, ZoneType,
};

/// Settings that shape every formatted event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatterConfig {
    /// Zone family named in each target line
    pub zone_type: ZoneType,
    /// Whether steps target zones or power
    pub target_mode: TargetMode,
    /// Handling of names without a sport marker
    pub unclassified_sport: UnclassifiedSport,
}

/// Converts [`Workout`] records into [`Event`] records
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutFormatter {
    config: FormatterConfig,
}

/// Step after validation, borrowing from the input
struct ResolvedStep<'a> {
    description: &'a str,
    duration: &'a str,
    target: Target<'a>,
    cadence: &'a str,
}

enum Target<'a> {
    Zone(&'a str),
    PowerPercent(u32),
}

impl WorkoutFormatter {
    /// Create a formatter
    #[must_use]
    pub const fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format every workout, stopping at the first malformed one
    ///
    /// # Errors
    ///
    /// Returns the first [`FormatError`], tagged with the workout's position.
    pub fn format_all(&self, workouts: &[Workout]) -> Result<Vec<Event>, FormatError> {
        workouts
            .iter()
            .enumerate()
            .map(|(index, workout)| self.format(workout).map_err(|e| e.at_workout(index)))
            .collect()
    }

    /// Format a single workout
    ///
    /// Errors report workout position 0; [`WorkoutFormatter::format_all`]
    /// rewrites it to the real position.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::FieldMissing`] or [`FormatError::StepFieldMissing`]
    /// for absent required fields, [`FormatError::InvalidDate`] for a non-ISO
    /// date, [`FormatError::InvalidPower`] for an unusable power target, and
    /// [`FormatError::UnclassifiedSport`] when the name has no marker and the
    /// policy is `Reject`.
    pub fn format(&self, workout: &Workout) -> Result<Event, FormatError> {
        let name = workout
            .name
            .as_deref()
            .ok_or(FormatError::FieldMissing {
                workout: 0,
                field: "name",
            })?;
        let date = workout
            .date
            .as_deref()
            .ok_or(FormatError::FieldMissing {
                workout: 0,
                field: "date",
            })?;
        let start_date_local =
            NaiveDate::parse_from_str(date.trim(), event_schema::DATE_FORMAT).map_err(|_| {
                FormatError::InvalidDate {
                    workout: 0,
                    value: date.to_owned(),
                }
            })?;

        let event_type = self.resolve_event_type(name)?;

        let steps = workout
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| self.resolve_step(index, step))
            .collect::<Result<Vec<_>, _>>()?;

        let moving_time = steps
            .iter()
            .map(|step| duration_seconds(step.duration))
            .fold(0_u32, u32::saturating_add);

        debug!(
            workout = name,
            event_type = %event_type,
            moving_time,
            steps = steps.len(),
            "Formatted workout"
        );

        Ok(Event {
            start_date_local,
            category: EventCategory::Workout,
            name: name.to_owned(),
            description: self.describe(&steps),
            event_type,
            moving_time,
            steps: steps.iter().map(Self::step_target).collect(),
        })
    }

    fn resolve_event_type(&self, name: &str) -> Result<EventType, FormatError> {
        if let Some(event_type) = SportType::classify(name).event_type() {
            return Ok(event_type);
        }
        match self.config.unclassified_sport {
            UnclassifiedSport::Fallback(event_type) => {
                warn!(
                    workout = name,
                    fallback = %event_type,
                    "Workout name has no Bike/Run/Swim marker, using fallback sport"
                );
                Ok(event_type)
            }
            UnclassifiedSport::Reject => Err(FormatError::UnclassifiedSport {
                workout: 0,
                name: name.to_owned(),
            }),
        }
    }

    fn resolve_step<'a>(
        &self,
        index: usize,
        step: &'a Step,
    ) -> Result<ResolvedStep<'a>, FormatError> {
        let missing = |field| FormatError::StepFieldMissing {
            workout: 0,
            step: index,
            field,
        };

        let duration = step.duration.as_deref().ok_or_else(|| missing("duration"))?;
        let target = match self.config.target_mode {
            TargetMode::Zone => {
                Target::Zone(step.zone.as_deref().ok_or_else(|| missing("zone"))?)
            }
            TargetMode::Power => {
                let power = step.power.ok_or_else(|| missing("power"))?;
                if !power.is_finite() || power < 0.0 {
                    return Err(FormatError::InvalidPower {
                        workout: 0,
                        step: index,
                        value: power.to_string(),
                    });
                }
                Target::PowerPercent((power * 100.0).round() as u32)
            }
        };

        Ok(ResolvedStep {
            description: step.description.as_deref().unwrap_or_default(),
            duration,
            target,
            cadence: step.cadence.as_deref().unwrap_or(defaults::CADENCE),
        })
    }

    /// One block per step, blank line between blocks, trailing whitespace removed
    fn describe(&self, steps: &[ResolvedStep<'_>]) -> String {
        let blocks: Vec<String> = steps
            .iter()
            .map(|step| {
                let target_line = match step.target {
                    Target::Zone(zone) => {
                        format!("- {} in {} {}", step.duration, zone, self.config.zone_type)
                    }
                    Target::PowerPercent(percent) => {
                        format!("- {} at {percent}% FTP", step.duration)
                    }
                };
                if step.description.trim().is_empty() {
                    target_line
                } else {
                    format!("{}\n{target_line}", step.description)
                }
            })
            .collect();

        blocks.join("\n\n").trim_end().to_owned()
    }

    fn step_target(step: &ResolvedStep<'_>) -> StepTarget {
        let (target_type, target_value) = match step.target {
            Target::Zone(zone) => (TargetType::Zone, zone.to_owned()),
            Target::PowerPercent(percent) => (TargetType::Power, format!("{percent}%")),
        };
        StepTarget {
            description: step.description.to_owned(),
            duration: step.duration.to_owned(),
            target_type,
            target_value,
            cadence: step.cadence.to_owned(),
        }
    }
}

/// Parse a duration token into seconds
///
/// A token is a leading integer followed by exactly one unit marker: `km` or
/// `m` means the integer is minutes, `s` means seconds. Surrounding
/// whitespace is ignored.
///
/// # Errors
///
/// Returns [`DurationParseWarning`] when the token has no leading integer, no
/// unit marker, anything other than a unit after the integer (`1h30m`,
/// `1.5m`), or a result that does not fit in `u32`.
pub fn parse_duration(token: &str) -> Result<u32, DurationParseWarning> {
    let warning = |reason| DurationParseWarning {
        token: token.to_owned(),
        reason,
    };

    let trimmed = token.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(digits_end);
    if digits.is_empty() {
        return Err(warning("no leading integer"));
    }

    let multiplier = match unit.trim() {
        duration_units::KILOMETRES | duration_units::MINUTES => {
            duration_units::SECONDS_PER_MINUTE
        }
        duration_units::SECONDS => 1,
        "" => return Err(warning("no unit marker (expected km, m or s)")),
        _ => return Err(warning("unexpected text after magnitude")),
    };

    digits
        .parse::<u32>()
        .ok()
        .and_then(|magnitude| magnitude.checked_mul(multiplier))
        .ok_or_else(|| warning("value out of range"))
}

/// Fail-soft wrapper around [`parse_duration`]: unrecognized tokens count as 0
pub fn duration_seconds(token: &str) -> u32 {
    parse_duration(token).unwrap_or_else(|w| {
        warn!(duration = token, "{w}; counting step as 0 seconds");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_and_seconds() {
        assert_eq!(parse_duration("10m"), Ok(600));
        assert_eq!(parse_duration("30s"), Ok(30));
        assert_eq!(parse_duration("5km"), Ok(300));
        assert_eq!(parse_duration(" 2m"), Ok(120));
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        for token in ["1h30m", "10m30s", "1.5m", "2x5m", "1ms", "5 min"] {
            let warning = parse_duration(token).unwrap_err();
            assert_eq!(warning.reason, "unexpected text after magnitude", "{token}");
            assert_eq!(duration_seconds(token), 0);
        }
    }

    #[test]
    fn test_unit_may_be_spaced() {
        assert_eq!(parse_duration("10 m"), Ok(600));
        assert_eq!(parse_duration("45s "), Ok(45));
    }

    #[test]
    fn test_unrecognized_tokens() {
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("1h").is_err());
        assert!(parse_duration("m").is_err());
        assert!(parse_duration("99999999999m").is_err());
        assert_eq!(duration_seconds("10"), 0);
        assert_eq!(duration_seconds(""), 0);
    }

    #[test]
    fn test_parse_is_idempotent() {
        for token in ["10m", "45s", "3km", "oops"] {
            assert_eq!(parse_duration(token), parse_duration(token));
        }
    }

    #[test]
    fn test_description_skips_empty_step_text() {
        let workout = Workout::new(
            "Bike intervals",
            "2024-06-02",
            vec![
                Step {
                    description: None,
                    ..Step::zone("", "5m", "Z1")
                },
                Step::zone("Hard", "2m", "Z5"),
            ],
        );
        let event = WorkoutFormatter::default().format(&workout).unwrap();
        assert_eq!(event.description, "- 5m in Z1 HR\n\nHard\n- 2m in Z5 HR");
        assert_eq!(event.steps[0].description, "");
    }

    #[test]
    fn test_blank_step_text_renders_like_empty() {
        let workout = Workout::new(
            "Bike spin",
            "2024-06-02",
            vec![Step::zone("  ", "5m", "Z1"), Step::zone("", "5m", "Z1")],
        );
        let event = WorkoutFormatter::default().format(&workout).unwrap();
        assert_eq!(event.description, "- 5m in Z1 HR\n\n- 5m in Z1 HR");
    }

    #[test]
    fn test_moving_time_saturates() {
        let workout = Workout::new(
            "Run forever",
            "2024-06-02",
            vec![
                Step::zone("a", "4000000000s", "Z1"),
                Step::zone("b", "4000000000s", "Z1"),
            ],
        );
        let event = WorkoutFormatter::default().format(&workout).unwrap();
        assert_eq!(event.moving_time, u32::MAX);
    }
}
