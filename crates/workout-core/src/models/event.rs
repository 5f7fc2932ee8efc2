// ABOUTME: Calendar event records in the intervals.icu bulk-create schema
// ABOUTME: Serialization matches the wire format field for field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::sport::EventType;
use crate::constants::event_schema;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A planned workout on the athlete's calendar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Workout date; serialized at local midnight (`YYYY-MM-DDT00:00:00`)
    #[serde(serialize_with = "serialize_local_midnight")]
    pub start_date_local: NaiveDate,
    /// Event category, always `WORKOUT`
    pub category: EventCategory,
    /// Workout name as given in the input
    pub name: String,
    /// Step blocks separated by blank lines
    pub description: String,
    /// Activity type derived from the name
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Sum of step durations in seconds
    pub moving_time: u32,
    /// One target per input step, in order
    pub steps: Vec<StepTarget>,
}

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EventCategory {
    /// Planned workout
    #[default]
    #[serde(rename = "WORKOUT")]
    Workout,
}

/// Per-step target carried alongside the event description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTarget {
    /// Step description, empty when the input had none
    pub description: String,
    /// Duration token exactly as written in the input
    pub duration: String,
    /// What `target_value` refers to
    pub target_type: TargetType,
    /// Zone name, or percent of FTP in power mode
    pub target_value: String,
    /// Cadence target
    pub cadence: String,
}

/// Kind of step target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Named intensity zone
    Zone,
    /// Percent of FTP
    Power,
}

fn serialize_local_midnight<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(event_schema::START_TIME_FORMAT))
}
