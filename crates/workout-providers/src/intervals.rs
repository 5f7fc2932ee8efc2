// ABOUTME: intervals.icu REST client for creating planned workouts
// ABOUTME: Basic auth with the API_KEY user and one POST to the bulk events endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::intervals;
use crate::core::{CalendarProvider, UploadReceipt};
use crate::errors::UploadError;
use crate::models::Event;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::fmt;
use tracing::{debug, info, warn};

/// Athlete identity and API key for intervals.icu
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalsCredentials {
    /// Athlete identifier, e.g. `i12345`
    pub athlete_id: String,
    /// Personal API key from the intervals.icu settings page
    pub api_key: String,
}

impl IntervalsCredentials {
    /// Create credentials
    pub fn new(athlete_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            athlete_id: athlete_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Value of the `Authorization` header: `Basic base64("API_KEY:<key>")`
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        let credential = format!("{}:{}", intervals::BASIC_AUTH_USER, self.api_key);
        format!("Basic {}", STANDARD.encode(credential))
    }
}

impl fmt::Debug for IntervalsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalsCredentials")
            .field("athlete_id", &self.athlete_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Client for the intervals.icu athlete calendar
pub struct IntervalsClient {
    http: Client,
    base_url: String,
    credentials: IntervalsCredentials,
}

impl IntervalsClient {
    /// Create a client against `base_url` (e.g. `https://intervals.icu/api/v1`)
    pub fn new(http: Client, base_url: impl Into<String>, credentials: IntervalsCredentials) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Full URL of the bulk event creation endpoint
    #[must_use]
    pub fn bulk_events_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            intervals::ATHLETE_PATH,
            self.credentials.athlete_id,
            intervals::EVENTS_BULK_PATH
        )
    }
}

#[async_trait]
impl CalendarProvider for IntervalsClient {
    fn name(&self) -> &'static str {
        "intervals.icu"
    }

    async fn bulk_create_events(&self, events: &[Event]) -> Result<UploadReceipt, UploadError> {
        let body = serde_json::to_vec(events)?;
        let url = self.bulk_events_url();
        debug!(url = %url, events.count = events.len(), bytes = body.len(), "Posting bulk events");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.credentials.basic_auth_header())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_else(|e| {
            warn!("Failed to read intervals.icu response body: {e}");
            String::new()
        });

        if !status.is_success() {
            warn!(
                http.status = status.as_u16(),
                body_length = text.len(),
                "intervals.icu rejected bulk event upload"
            );
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        info!(
            http.status = status.as_u16(),
            events.count = events.len(),
            "intervals.icu accepted bulk event upload"
        );
        Ok(UploadReceipt {
            status: status.as_u16(),
            body: text,
            event_count: events.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> IntervalsClient {
        IntervalsClient::new(
            Client::new(),
            base_url,
            IntervalsCredentials::new("i12345", "abc"),
        )
    }

    #[test]
    fn test_bulk_events_url() {
        assert_eq!(
            client("https://intervals.icu/api/v1").bulk_events_url(),
            "https://intervals.icu/api/v1/athlete/i12345/events/bulk"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(
            client("http://localhost:9000/").bulk_events_url(),
            "http://localhost:9000/athlete/i12345/events/bulk"
        );
    }

    #[test]
    fn test_basic_auth_uses_api_key_user() {
        let credentials = IntervalsCredentials::new("i1", "abc");
        assert_eq!(credentials.basic_auth_header(), "Basic QVBJX0tFWTphYmM=");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let credentials = IntervalsCredentials::new("i1", "super-secret");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("i1"));
    }
}
