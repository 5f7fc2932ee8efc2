// ABOUTME: Unified error handling for the workout upload pipeline
// ABOUTME: Stage-specific error enums, stable error codes, and process exit statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every pipeline stage returns its own error type so callers can tell a bad
//! configuration from a bad input file or a rejected upload. `PipelineError`
//! wraps them and maps each onto an `ErrorCode` with a stable exit status.

/// Configuration errors raised before any I/O
pub mod config;
/// Input loading and workout formatting errors
pub mod input;
/// Bulk upload errors
pub mod upload;

pub use config::ConfigError;
pub use input::{DurationParseWarning, FormatError, LoadError};
pub use upload::UploadError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Configuration (6000-6999)
    /// A required setting was not supplied
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// A setting was supplied but could not be used
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Resource Management (4000-4999)
    /// The input document does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Validation (3000-3999)
    /// The input document is not valid JSON of the expected shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A workout or step lacks a required field
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A field is present but its value is unusable
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // External Services (5000-5999)
    /// The remote service answered with a non-2xx status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The remote service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// The remote service refused the credentials
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,

    // Internal Errors (9000-9999)
    /// Local I/O failed for a reason other than a missing file
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Events could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
    /// The uploader was driven out of order
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Process exit status reported for this error
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::ConfigMissing | Self::ConfigInvalid => 2,
            Self::ResourceNotFound | Self::InvalidFormat | Self::StorageError => 3,
            Self::MissingRequiredField | Self::InvalidInput => 4,
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalAuthFailed => 5,
            Self::SerializationError | Self::InternalError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::ResourceNotFound => "The training file was not found",
            Self::InvalidFormat => "The training file is not valid",
            Self::MissingRequiredField => "A required workout field is missing",
            Self::InvalidInput => "A workout field has an invalid value",
            Self::ExternalServiceError => "intervals.icu rejected the upload",
            Self::ExternalServiceUnavailable => "intervals.icu could not be reached",
            Self::ExternalAuthFailed => "Authentication with intervals.icu failed",
            Self::StorageError => "Reading the training file failed",
            Self::SerializationError => "Event serialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Any error that stops a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration was missing or invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The training document could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A workout could not be formatted; nothing was uploaded
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The bulk upload did not succeed
    #[error(transparent)]
    Upload(#[from] UploadError),
    /// Formatted events could not be rendered for output
    #[error("Failed to render events as JSON: {0}")]
    Output(#[source] serde_json::Error),
}

impl PipelineError {
    /// Error code classifying this failure
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config(e) => e.code(),
            Self::Load(e) => e.code(),
            Self::Format(e) => e.code(),
            Self::Upload(e) => e.code(),
            Self::Output(_) => ErrorCode::SerializationError,
        }
    }

    /// Process exit status for this failure
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_separate_stages() {
        let config = PipelineError::from(ConfigError::Missing {
            key: "API_KEY".to_owned(),
        });
        let load = PipelineError::from(LoadError::NotFound {
            path: "training.json".into(),
        });
        let format = PipelineError::from(FormatError::FieldMissing {
            workout: 0,
            field: "name",
        });
        let upload = PipelineError::from(UploadError::Rejected {
            status: 500,
            body: String::new(),
        });

        assert_eq!(config.exit_code(), 2);
        assert_eq!(load.exit_code(), 3);
        assert_eq!(format.exit_code(), 4);
        assert_eq!(upload.exit_code(), 5);
    }

    #[test]
    fn test_output_error_is_not_an_upload_failure() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = PipelineError::Output(source);

        assert_eq!(err.code(), ErrorCode::SerializationError);
        assert_eq!(err.exit_code(), 70);
        assert!(!matches!(err, PipelineError::Upload(_)));
        assert!(err.to_string().starts_with("Failed to render events"));
    }

    #[test]
    fn test_error_code_serializes_screaming_case() {
        let json = serde_json::to_string(&ErrorCode::MissingRequiredField).unwrap();
        assert_eq!(json, "\"MISSING_REQUIRED_FIELD\"");
    }
}
