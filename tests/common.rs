// ABOUTME: Shared test utilities for the uploader integration tests
// ABOUTME: Quiet logging setup, temporary training files, and config builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `workout_uploader`

use std::fs;
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;
use workout_uploader::config::UploaderConfig;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The two-step run used throughout the docs
pub const MORNING_RUN: &str = r#"{
    "trainings": [
        {
            "name": "Morning Run",
            "date": "2024-05-01",
            "steps": [
                {"description": "Warm up", "duration": "10m", "zone": "Z2"},
                {"description": "Tempo", "duration": "30s", "zone": "Z4"}
            ]
        }
    ]
}"#;

/// A training document written to a temporary directory
pub struct TrainingFile {
    /// Keeps the directory alive for the duration of the test
    pub dir: TempDir,
    /// Path of the written document
    pub path: PathBuf,
}

/// Write `contents` as `training.json` in a fresh temporary directory
pub fn write_training_file(contents: &str) -> TrainingFile {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("training.json");
    fs::write(&path, contents).unwrap();
    TrainingFile { dir, path }
}

/// Configuration pointing at `training_file` and `base_url` with test credentials
pub fn test_config(training_file: PathBuf, base_url: &str) -> UploaderConfig {
    UploaderConfig {
        training_file,
        base_url: base_url.to_owned(),
        athlete_id: Some("i12345".to_owned()),
        api_key: Some("secret-key".to_owned()),
        ..UploaderConfig::default()
    }
}
