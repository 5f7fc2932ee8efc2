// ABOUTME: Integration tests for workout formatting
// ABOUTME: Covers description layout, moving time, sport classification, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use workout_uploader::errors::{ErrorCode, FormatError};
use workout_uploader::formatter::{FormatterConfig, WorkoutFormatter};
use workout_uploader::loader::parse_trainings;
use workout_uploader::models::{
    EventType, Step, TargetMode, TargetType, UnclassifiedSport, Workout, ZoneType,
};

mod common;

fn morning_run() -> Workout {
    Workout::new(
        "Morning Run",
        "2024-05-01",
        vec![
            Step::zone("Warm up", "10m", "Z2"),
            Step::zone("Tempo", "30s", "Z4"),
        ],
    )
}

#[test]
fn test_morning_run_event() {
    let event = WorkoutFormatter::default().format(&morning_run()).unwrap();

    assert_eq!(event.name, "Morning Run");
    assert_eq!(event.event_type, EventType::Run);
    assert_eq!(event.moving_time, 630);
    assert_eq!(
        event.description,
        "Warm up\n- 10m in Z2 HR\n\nTempo\n- 30s in Z4 HR"
    );
    assert_eq!(
        event.start_date_local,
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    );
    assert_eq!(event.steps.len(), 2);
    assert_eq!(event.steps[0].target_type, TargetType::Zone);
    assert_eq!(event.steps[0].target_value, "Z2");
    assert_eq!(event.steps[0].cadence, "Free");
}

#[test]
fn test_wire_format_from_loaded_document() {
    let workouts = parse_trainings(common::MORNING_RUN).unwrap();
    let events = WorkoutFormatter::default().format_all(&workouts).unwrap();
    let json = serde_json::to_value(&events[0]).unwrap();

    assert_eq!(json["start_date_local"], "2024-05-01T00:00:00");
    assert_eq!(json["category"], "WORKOUT");
    assert_eq!(json["type"], "Run");
    assert_eq!(json["moving_time"], 630);
    assert_eq!(json["steps"][1]["target_type"], "zone");
    assert_eq!(json["steps"][1]["target_value"], "Z4");
    assert_eq!(json["steps"][1]["duration"], "30s");
}

#[test]
fn test_pace_zone_label() {
    let formatter = WorkoutFormatter::new(FormatterConfig {
        zone_type: ZoneType::Pace,
        ..FormatterConfig::default()
    });
    let event = formatter.format(&morning_run()).unwrap();
    assert!(event.description.contains("- 10m in Z2 Pace"));
}

#[test]
fn test_zero_steps_gives_empty_description() {
    let event = WorkoutFormatter::default()
        .format(&Workout::new("Recovery Swim", "2024-05-03", vec![]))
        .unwrap();
    assert_eq!(event.description, "");
    assert_eq!(event.moving_time, 0);
    assert!(event.steps.is_empty());
    assert_eq!(event.event_type, EventType::Swim);
}

#[test]
fn test_sport_marker_priority() {
    let formatter = WorkoutFormatter::default();
    let brick = formatter
        .format(&Workout::new("Bike to Run brick", "2024-05-04", vec![]))
        .unwrap();
    assert_eq!(brick.event_type, EventType::Ride);

    let lowercase = formatter
        .format(&Workout::new("easy run", "2024-05-04", vec![]))
        .unwrap();
    assert_eq!(lowercase.event_type, EventType::Swim);
}

#[test]
fn test_unclassified_fallback_sport() {
    let formatter = WorkoutFormatter::new(FormatterConfig {
        unclassified_sport: UnclassifiedSport::Fallback(EventType::Ride),
        ..FormatterConfig::default()
    });
    let event = formatter
        .format(&Workout::new("Strength session", "2024-05-05", vec![]))
        .unwrap();
    assert_eq!(event.event_type, EventType::Ride);
}

#[test]
fn test_unclassified_reject_policy() {
    let formatter = WorkoutFormatter::new(FormatterConfig {
        unclassified_sport: UnclassifiedSport::Reject,
        ..FormatterConfig::default()
    });
    let workouts = vec![
        morning_run(),
        Workout::new("Yoga", "2024-05-06", vec![]),
    ];
    let err = formatter.format_all(&workouts).unwrap_err();
    assert_eq!(
        err,
        FormatError::UnclassifiedSport {
            workout: 1,
            name: "Yoga".to_owned(),
        }
    );
    assert_eq!(err.code(), ErrorCode::InvalidInput);
}

#[test]
fn test_unknown_duration_counts_as_zero() {
    let workout = Workout::new(
        "Tempo Run",
        "2024-05-07",
        vec![
            Step::zone("Warm up", "10m", "Z2"),
            Step::zone("Strides", "4x", "Z5"),
            Step::zone("Long easy", "1h30m", "Z1"),
        ],
    );
    let event = WorkoutFormatter::default().format(&workout).unwrap();
    assert_eq!(event.moving_time, 600);
    assert!(event.description.contains("- 4x in Z5 HR"));
    assert_eq!(event.steps[2].duration, "1h30m");
}

#[test]
fn test_missing_name_aborts_batch_with_position() {
    let workouts = parse_trainings(
        r#"{"trainings": [
            {"name": "Easy Run", "date": "2024-05-01", "steps": []},
            {"date": "2024-05-02", "steps": []}
        ]}"#,
    )
    .unwrap();
    let err = WorkoutFormatter::default().format_all(&workouts).unwrap_err();
    assert_eq!(
        err,
        FormatError::FieldMissing {
            workout: 1,
            field: "name",
        }
    );
    assert_eq!(err.code(), ErrorCode::MissingRequiredField);
}

#[test]
fn test_missing_step_zone() {
    let workout = Workout::new(
        "Easy Run",
        "2024-05-01",
        vec![Step {
            zone: None,
            ..Step::zone("Warm up", "10m", "Z2")
        }],
    );
    let err = WorkoutFormatter::default().format(&workout).unwrap_err();
    assert_eq!(
        err,
        FormatError::StepFieldMissing {
            workout: 0,
            step: 0,
            field: "zone",
        }
    );
}

#[test]
fn test_invalid_date_rejected() {
    let err = WorkoutFormatter::default()
        .format(&Workout::new("Easy Run", "May 1st", vec![]))
        .unwrap_err();
    assert!(matches!(err, FormatError::InvalidDate { ref value, .. } if value == "May 1st"));
}

#[test]
fn test_explicit_cadence_is_kept() {
    let workout = Workout::new(
        "Hill Bike",
        "2024-05-08",
        vec![Step::zone("Climb", "8m", "Z4").with_cadence("70-80")],
    );
    let event = WorkoutFormatter::default().format(&workout).unwrap();
    assert_eq!(event.steps[0].cadence, "70-80");
}

#[test]
fn test_power_target_mode() {
    let formatter = WorkoutFormatter::new(FormatterConfig {
        target_mode: TargetMode::Power,
        ..FormatterConfig::default()
    });
    let workout = Workout::new(
        "Sweet spot Bike",
        "2024-05-09",
        vec![Step::zone("Block", "10m", "Z3").with_power(0.85)],
    );
    let event = formatter.format(&workout).unwrap();

    assert_eq!(event.description, "Block\n- 10m at 85% FTP");
    assert_eq!(event.steps[0].target_type, TargetType::Power);
    assert_eq!(event.steps[0].target_value, "85%");
}

#[test]
fn test_power_mode_requires_power() {
    let formatter = WorkoutFormatter::new(FormatterConfig {
        target_mode: TargetMode::Power,
        ..FormatterConfig::default()
    });
    let workout = Workout::new(
        "Sweet spot Bike",
        "2024-05-09",
        vec![Step::zone("Block", "10m", "Z3")],
    );
    let err = formatter.format(&workout).unwrap_err();
    assert!(matches!(
        err,
        FormatError::StepFieldMissing { field: "power", .. }
    ));

    let negative = Workout::new(
        "Sweet spot Bike",
        "2024-05-09",
        vec![Step::zone("Block", "10m", "Z3").with_power(-0.5)],
    );
    assert!(matches!(
        formatter.format(&negative).unwrap_err(),
        FormatError::InvalidPower { .. }
    ));
}

#[test]
fn test_formatting_is_deterministic() {
    let formatter = WorkoutFormatter::default();
    let first = formatter.format(&morning_run()).unwrap();
    let second = formatter.format(&morning_run()).unwrap();
    assert_eq!(first, second);
}
