// ABOUTME: Data models for planned workouts and intervals.icu calendar events
// ABOUTME: Input records from the training document and output records for the bulk upload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calendar events sent to the bulk-create endpoint
pub mod event;
/// Sport classification of workouts
pub mod sport;
/// Workout and step records read from the training document
pub mod workout;
/// Intensity zone labels and step target modes
pub mod zone;

pub use event::{Event, EventCategory, StepTarget, TargetType};
pub use sport::{EventType, SportType, UnclassifiedSport};
pub use workout::{Step, TrainingDocument, Workout};
pub use zone::{TargetMode, ZoneType};
