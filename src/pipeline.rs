// ABOUTME: Load, format, and upload pipeline for planned workouts
// ABOUTME: Applies the abort-early error policy and the single-request upload rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pipeline driver
//!
//! Configuration problems stop the run before any file or network access.
//! Load and format errors stop it before the upload, so a malformed batch is
//! never partially sent. The upload itself is attempted exactly once.

use crate::config::UploaderConfig;
use crate::formatter::WorkoutFormatter;
use crate::loader::load_trainings;
use std::path::PathBuf;
use tracing::info;
use workout_core::errors::PipelineError;
use workout_core::models::Event;
use workout_providers::{build_client, BulkUpload, CalendarProvider, IntervalsClient, UploadReceipt};

/// How a successful run ended
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// The service accepted the batch
    Uploaded(UploadReceipt),
    /// The document held no workouts; no request was made
    NothingToUpload,
    /// Events were formatted but deliberately not sent
    DryRun(Vec<Event>),
}

/// Loader and formatter bound to one configuration
#[derive(Debug, Clone)]
pub struct UploadPipeline {
    training_file: PathBuf,
    formatter: WorkoutFormatter,
}

impl UploadPipeline {
    /// Build the pipeline from the startup configuration
    #[must_use]
    pub fn from_config(config: &UploaderConfig) -> Self {
        Self {
            training_file: config.training_file.clone(),
            formatter: WorkoutFormatter::new(config.formatter),
        }
    }

    /// Load and format every workout
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Load`] or [`PipelineError::Format`].
    pub fn prepare(&self) -> Result<Vec<Event>, PipelineError> {
        let workouts = load_trainings(&self.training_file)?;
        let events = self.formatter.format_all(&workouts)?;
        info!(events = events.len(), "Formatted trainings");
        Ok(events)
    }

    /// Prepare the events and send them to `provider` in one request
    ///
    /// An empty document skips the request.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Load`] or [`PipelineError::Format`] before any
    /// request is made, or [`PipelineError::Upload`] if the request fails.
    pub async fn upload(
        &self,
        provider: &dyn CalendarProvider,
    ) -> Result<PipelineOutcome, PipelineError> {
        let events = self.prepare()?;
        if events.is_empty() {
            info!("No trainings to upload");
            return Ok(PipelineOutcome::NothingToUpload);
        }

        let receipt = BulkUpload::new(provider).send(&events).await?;
        Ok(PipelineOutcome::Uploaded(receipt))
    }
}

/// Render formatted events as pretty-printed JSON for dry-run output
///
/// # Errors
///
/// Returns [`PipelineError::Output`] if the events cannot be serialized.
pub fn render_events(events: &[Event]) -> Result<String, PipelineError> {
    serde_json::to_string_pretty(events).map_err(PipelineError::Output)
}

/// Run the full pipeline against intervals.icu
///
/// With `dry_run` the events are returned instead of sent, and credentials
/// are not required.
///
/// # Errors
///
/// Returns [`PipelineError::Config`] when credentials are missing (checked
/// before any I/O), otherwise the first load, format, or upload error.
pub async fn run(
    config: &UploaderConfig,
    dry_run: bool,
) -> Result<PipelineOutcome, PipelineError> {
    let pipeline = UploadPipeline::from_config(config);

    if dry_run {
        return Ok(PipelineOutcome::DryRun(pipeline.prepare()?));
    }

    let credentials = config.require_credentials()?;
    let http = build_client(config.http)?;
    let client = IntervalsClient::new(http, config.base_url.clone(), credentials);
    pipeline.upload(&client).await
}
