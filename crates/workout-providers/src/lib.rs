// ABOUTME: Calendar provider implementations for uploading planned workouts
// ABOUTME: Provider trait, shared HTTP client construction, and the intervals.icu client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calendar provider implementations and the upload session.
//!
//! The pipeline talks to a [`CalendarProvider`]; [`IntervalsClient`] is the
//! production implementation for intervals.icu.

// Re-export workout-core modules so provider code can keep `use crate::errors::*`
pub use workout_core::constants;
pub use workout_core::errors;
pub use workout_core::models;

/// Core provider trait
pub mod core;
/// HTTP client construction with bounded timeouts
pub mod http_client;
/// intervals.icu REST client
pub mod intervals;
/// Single-shot bulk upload session
pub mod upload;

pub use core::{CalendarProvider, UploadReceipt};
pub use http_client::{build_client, HttpClientConfig};
pub use intervals::{IntervalsClient, IntervalsCredentials};
pub use upload::{BulkUpload, UploadState};
