// ABOUTME: Core provider trait for services that accept planned calendar events
// ABOUTME: Lets the pipeline run against intervals.icu or a test double
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::UploadError;
use crate::models::Event;
use async_trait::async_trait;

/// Successful bulk-create response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// HTTP status code (2xx)
    pub status: u16,
    /// Response body as returned by the service
    pub body: String,
    /// Number of events sent
    pub event_count: usize,
}

/// A service that creates planned workouts on an athlete calendar
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Create all `events` with one request
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Rejected`] for a non-2xx response,
    /// [`UploadError::Transport`] when no response arrives, and
    /// [`UploadError::Serialization`] when the batch cannot be encoded.
    async fn bulk_create_events(&self, events: &[Event]) -> Result<UploadReceipt, UploadError>;
}
