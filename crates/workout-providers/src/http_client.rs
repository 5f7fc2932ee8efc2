// ABOUTME: HTTP client construction for provider API calls
// ABOUTME: Applies request and connect timeouts plus the uploader user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, intervals};
use crate::errors::UploadError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Timeout settings for the outbound client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Build the client used for the bulk upload
///
/// # Errors
///
/// Returns [`UploadError::Transport`] if the TLS backend cannot be initialized.
pub fn build_client(config: HttpClientConfig) -> Result<Client, UploadError> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(intervals::USER_AGENT)
        .build()
        .map_err(UploadError::from)
}
