// ABOUTME: Configuration management module for uploader settings
// ABOUTME: Environment-based configuration with command-line overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the workout uploader
//!
//! Settings are read once at startup into an [`UploaderConfig`], then passed
//! by reference to the formatter and uploader. Nothing is global.

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{ConfigOverrides, UploaderConfig};
