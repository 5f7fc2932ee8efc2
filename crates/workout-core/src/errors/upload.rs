// ABOUTME: Error types for the intervals.icu bulk event upload
// ABOUTME: Separates remote rejections (with status and body) from transport failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use thiserror::Error;

/// Errors from the single bulk-create request
#[derive(Debug, Error)]
pub enum UploadError {
    /// The service answered with a non-2xx status
    #[error("Failed to upload trainings. Status code: {status}\n{body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the service
        body: String,
    },

    /// The request never produced a response
    #[error("Request to intervals.icu failed: {reason}")]
    Transport {
        /// Transport error description
        reason: String,
        /// Whether the bounded timeout expired
        timed_out: bool,
    },

    /// The event batch could not be encoded as JSON
    #[error("Failed to serialize events: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The upload session already sent its request
    #[error("Bulk upload already sent; uploads are never repeated")]
    AlreadySent,
}

impl UploadError {
    /// Error code classifying this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Rejected { status: 401 | 403, .. } => ErrorCode::ExternalAuthFailed,
            Self::Rejected { .. } => ErrorCode::ExternalServiceError,
            Self::Transport { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::Serialization(_) => ErrorCode::SerializationError,
            Self::AlreadySent => ErrorCode::InternalError,
        }
    }

    /// HTTP status reported by the service, if a response arrived
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for UploadError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            timed_out: error.is_timeout(),
            reason: error.to_string(),
        }
    }
}
