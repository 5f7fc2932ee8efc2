// ABOUTME: Reads the training document from disk
// ABOUTME: Distinguishes a missing file, an unreadable file, and malformed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};
use workout_core::errors::LoadError;
use workout_core::models::{TrainingDocument, Workout};

/// Load the ordered workouts from the JSON document at `path`
///
/// A document without a `trainings` key yields an empty list.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if `path` does not exist,
/// [`LoadError::Io`] if it cannot be read, and [`LoadError::Parse`] if the
/// contents are not a valid training document.
pub fn load_trainings(path: &Path) -> Result<Vec<Workout>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Read training file");

    let workouts = parse_trainings_from(&contents, &path.display().to_string())?;
    info!(path = %path.display(), workouts = workouts.len(), "Loaded trainings");
    Ok(workouts)
}

/// Parse a training document held in memory
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if `json` is not a valid training document.
pub fn parse_trainings(json: &str) -> Result<Vec<Workout>, LoadError> {
    parse_trainings_from(json, "<memory>")
}

fn parse_trainings_from(json: &str, origin: &str) -> Result<Vec<Workout>, LoadError> {
    serde_json::from_str::<TrainingDocument>(json)
        .map(|document| document.trainings)
        .map_err(|source| LoadError::Parse {
            origin: origin.to_owned(),
            source,
        })
}
