// ABOUTME: Single-shot bulk upload session with an explicit state machine
// ABOUTME: NotStarted -> Sent -> Succeeded | Failed, with no retries or resumption
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::core::{CalendarProvider, UploadReceipt};
use crate::errors::UploadError;
use crate::models::Event;
use std::fmt;
use tracing::{error, info};

/// Lifecycle of a bulk upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    /// No request made yet
    NotStarted,
    /// Request in flight
    Sent,
    /// Service accepted the batch
    Succeeded,
    /// Service rejected the batch or was unreachable
    Failed,
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not_started"),
            Self::Sent => write!(f, "sent"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One bulk upload against a provider
///
/// A session sends at most one request. Calling [`BulkUpload::send`] again,
/// whatever the outcome of the first call, returns [`UploadError::AlreadySent`].
pub struct BulkUpload<'a> {
    provider: &'a dyn CalendarProvider,
    state: UploadState,
}

impl<'a> BulkUpload<'a> {
    /// Start a session against `provider`
    #[must_use]
    pub fn new(provider: &'a dyn CalendarProvider) -> Self {
        Self {
            provider,
            state: UploadState::NotStarted,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> UploadState {
        self.state
    }

    /// Send `events` in a single bulk-create request
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::AlreadySent`] if this session already made its
    /// request, otherwise whatever the provider reports.
    pub async fn send(&mut self, events: &[Event]) -> Result<UploadReceipt, UploadError> {
        if self.state != UploadState::NotStarted {
            return Err(UploadError::AlreadySent);
        }
        self.state = UploadState::Sent;
        info!(
            provider = self.provider.name(),
            events.count = events.len(),
            "Uploading trainings"
        );

        match self.provider.bulk_create_events(events).await {
            Ok(receipt) => {
                self.state = UploadState::Succeeded;
                Ok(receipt)
            }
            Err(e) => {
                self.state = UploadState::Failed;
                error!(provider = self.provider.name(), "Upload failed: {e}");
                Err(e)
            }
        }
    }
}
