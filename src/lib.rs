// ABOUTME: Main library entry point for the intervals.icu workout uploader
// ABOUTME: Loads planned workouts, formats them as calendar events, and bulk-uploads them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Uploader
//!
//! Pushes a JSON file of planned training workouts to an intervals.icu
//! athlete calendar with one bulk-create request.
//!
//! ## Architecture
//!
//! - **Loader**: reads the `trainings` array from the input document
//! - **Formatter**: pure mapping from workouts to calendar events
//! - **Pipeline**: runs loader, formatter and the provider upload in order
//! - **Config**: environment settings with command-line overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_uploader::config::UploaderConfig;
//! use workout_uploader::pipeline::{self, PipelineOutcome};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UploaderConfig::from_env()?;
//!     match pipeline::run(&config, false).await? {
//!         PipelineOutcome::Uploaded(receipt) => println!("status {}", receipt.status),
//!         PipelineOutcome::NothingToUpload | PipelineOutcome::DryRun(_) => {}
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration and command-line overrides
pub mod config;

/// Workout to calendar event formatting
pub mod formatter;

/// Training document loading
pub mod loader;

/// Structured logging setup
pub mod logging;

/// Load, format and upload pipeline
pub mod pipeline;

pub use workout_core::{constants, errors, models};
