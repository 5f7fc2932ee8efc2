// ABOUTME: Error types for loading the training document and formatting workouts
// ABOUTME: Hard failures for missing structure, a soft warning type for bad durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or parsing the training document
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document path does not exist
    #[error("Training file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The document exists but could not be read
    #[error("Failed to read training file {}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON, or its workouts have the wrong shape
    #[error("Failed to parse training document {origin}: {source}")]
    Parse {
        /// File path or other description of where the document came from
        origin: String,
        /// Underlying JSON error, carrying line and column
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Error code classifying this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::Io { .. } => ErrorCode::StorageError,
            Self::Parse { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Errors turning a workout into a calendar event
///
/// Any of these aborts the whole batch: a partially formatted set is never uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A workout-level field is absent
    #[error("Workout #{workout} is missing required field '{field}'")]
    FieldMissing {
        /// Zero-based position of the workout in the document
        workout: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A step-level field is absent
    #[error("Step #{step} of workout #{workout} is missing required field '{field}'")]
    StepFieldMissing {
        /// Zero-based position of the workout in the document
        workout: usize,
        /// Zero-based position of the step in the workout
        step: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// The workout date is not an ISO 8601 calendar date
    #[error("Workout #{workout} has invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Zero-based position of the workout in the document
        workout: usize,
        /// The rejected value
        value: String,
    },

    /// A power target is negative or not a finite number
    #[error("Step #{step} of workout #{workout} has invalid power '{value}'")]
    InvalidPower {
        /// Zero-based position of the workout in the document
        workout: usize,
        /// Zero-based position of the step in the workout
        step: usize,
        /// The rejected value as written
        value: String,
    },

    /// The workout name carries no sport marker and fallback is disabled
    #[error("Workout #{workout} '{name}' has no Bike/Run/Swim marker in its name")]
    UnclassifiedSport {
        /// Zero-based position of the workout in the document
        workout: usize,
        /// The workout name
        name: String,
    },
}

impl FormatError {
    /// Error code classifying this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::FieldMissing { .. } | Self::StepFieldMissing { .. } => {
                ErrorCode::MissingRequiredField
            }
            Self::InvalidDate { .. }
            | Self::InvalidPower { .. }
            | Self::UnclassifiedSport { .. } => ErrorCode::InvalidInput,
        }
    }

    /// Re-target this error at the workout in position `index`
    #[must_use]
    pub fn at_workout(mut self, index: usize) -> Self {
        match &mut self {
            Self::FieldMissing { workout, .. }
            | Self::StepFieldMissing { workout, .. }
            | Self::InvalidDate { workout, .. }
            | Self::InvalidPower { workout, .. }
            | Self::UnclassifiedSport { workout, .. } => *workout = index,
        }
        self
    }
}

/// A duration token whose unit could not be recognized
///
/// Not fatal: the step counts as zero seconds toward `moving_time`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized duration '{token}': {reason}")]
pub struct DurationParseWarning {
    /// The token as written in the input
    pub token: String,
    /// What was wrong with it
    pub reason: &'static str,
}
