// ABOUTME: Configuration error types raised while assembling uploader settings
// ABOUTME: Distinguishes missing settings from settings with unusable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use thiserror::Error;

/// Errors detected while building the uploader configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required setting was absent or empty
    #[error("Missing required configuration: {key}")]
    Missing {
        /// Environment variable or flag name
        key: String,
    },

    /// A setting could not be parsed or validated
    #[error("Invalid value for {key}: {reason}")]
    Invalid {
        /// Environment variable or flag name
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Missing`]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Shorthand for [`ConfigError::Invalid`]
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Error code classifying this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Missing { .. } => ErrorCode::ConfigMissing,
            Self::Invalid { .. } => ErrorCode::ConfigInvalid,
        }
    }
}
