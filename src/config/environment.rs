// ABOUTME: Environment configuration for the workout uploader
// ABOUTME: Reads credentials, zone settings, and timeouts from env vars with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::formatter::FormatterConfig;
use std::env;
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use workout_core::constants::{defaults, env_config};
use workout_core::errors::ConfigError;
use workout_core::models::{TargetMode, UnclassifiedSport, ZoneType};
use workout_providers::{HttpClientConfig, IntervalsCredentials};

/// Everything the pipeline needs, assembled once at startup
#[derive(Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    /// Path of the workouts document
    pub training_file: PathBuf,
    /// intervals.icu API root
    pub base_url: String,
    /// Athlete identifier, required for uploading
    pub athlete_id: Option<String>,
    /// API key, required for uploading
    pub api_key: Option<String>,
    /// Formatting settings
    pub formatter: FormatterConfig,
    /// Outbound request timeouts
    pub http: HttpClientConfig,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            training_file: PathBuf::from(defaults::TRAINING_FILE),
            base_url: defaults::BASE_URL.to_owned(),
            athlete_id: None,
            api_key: None,
            formatter: FormatterConfig::default(),
            http: HttpClientConfig::default(),
        }
    }
}

impl fmt::Debug for UploaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploaderConfig")
            .field("training_file", &self.training_file)
            .field("base_url", &self.base_url)
            .field("athlete_id", &self.athlete_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("formatter", &self.formatter)
            .field("http", &self.http)
            .finish()
    }
}

/// Values supplied on the command line; each replaces its env counterpart
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Workouts document path
    pub training_file: Option<PathBuf>,
    /// Athlete identifier
    pub athlete_id: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// API root
    pub base_url: Option<String>,
    /// Zone family label
    pub zone_type: Option<ZoneType>,
    /// Step target mode
    pub target_mode: Option<TargetMode>,
    /// Policy for names without a sport marker
    pub unclassified_sport: Option<UnclassifiedSport>,
    /// Total request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl UploaderConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to a value that
    /// cannot be parsed. Missing credentials are only reported by
    /// [`UploaderConfig::require_credentials`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty and whitespace-only values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let config = Self {
            training_file: get(env_config::TRAINING_FILE)
                .map_or_else(|| PathBuf::from(defaults::TRAINING_FILE), PathBuf::from),
            base_url: get(env_config::BASE_URL).unwrap_or_else(|| defaults::BASE_URL.to_owned()),
            athlete_id: get(env_config::ATHLETE_ID),
            api_key: get(env_config::API_KEY),
            formatter: FormatterConfig {
                zone_type: parse_or(env_config::ZONE_TYPE, get(env_config::ZONE_TYPE))?,
                target_mode: parse_or(env_config::TARGET_MODE, get(env_config::TARGET_MODE))?,
                unclassified_sport: parse_or(
                    env_config::UNCLASSIFIED_SPORT,
                    get(env_config::UNCLASSIFIED_SPORT),
                )?,
            },
            http: HttpClientConfig {
                timeout_secs: parse_or_value(
                    env_config::HTTP_TIMEOUT_SECS,
                    get(env_config::HTTP_TIMEOUT_SECS),
                    defaults::HTTP_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: parse_or_value(
                    env_config::HTTP_CONNECT_TIMEOUT_SECS,
                    get(env_config::HTTP_CONNECT_TIMEOUT_SECS),
                    defaults::HTTP_CONNECT_TIMEOUT_SECS,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line values on top of this configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the merged configuration fails validation.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(path) = overrides.training_file {
            self.training_file = path;
        }
        if let Some(athlete_id) = non_empty(overrides.athlete_id) {
            self.athlete_id = Some(athlete_id);
        }
        if let Some(api_key) = non_empty(overrides.api_key) {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = non_empty(overrides.base_url) {
            self.base_url = base_url;
        }
        if let Some(zone_type) = overrides.zone_type {
            self.formatter.zone_type = zone_type;
        }
        if let Some(target_mode) = overrides.target_mode {
            self.formatter.target_mode = target_mode;
        }
        if let Some(policy) = overrides.unclassified_sport {
            self.formatter.unclassified_sport = policy;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.http.timeout_secs = timeout_secs;
        }

        self.validate()?;
        Ok(self)
    }

    /// Credentials for the upload; both athlete ID and API key must be set
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent variable.
    pub fn require_credentials(&self) -> Result<IntervalsCredentials, ConfigError> {
        let athlete_id = self
            .athlete_id
            .clone()
            .ok_or_else(|| ConfigError::missing(env_config::ATHLETE_ID))?;
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| ConfigError::missing(env_config::API_KEY))?;
        Ok(IntervalsCredentials::new(athlete_id, api_key))
    }

    /// Log a summary of the loaded configuration without secrets
    pub fn log_summary(&self) {
        info!(
            training_file = %self.training_file.display(),
            base_url = %self.base_url,
            athlete_id = self.athlete_id.as_deref().unwrap_or("<unset>"),
            api_key = if self.api_key.is_some() { "<set>" } else { "<unset>" },
            zone_type = %self.formatter.zone_type,
            target_mode = %self.formatter.target_mode,
            unclassified_sport = %self.formatter.unclassified_sport,
            http.timeout_secs = self.http.timeout_secs,
            "Configuration loaded"
        );
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                env_config::BASE_URL,
                format!("'{}' is not an http(s) URL", self.base_url),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                env_config::HTTP_TIMEOUT_SECS,
                "timeout must be greater than 0",
            ));
        }
        if self.http.connect_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                "timeout must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Parse `value` or fall back to the type's default
fn parse_or<T>(key: &str, value: Option<String>) -> Result<T, ConfigError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    parse_or_value(key, value, T::default())
}

fn parse_or_value<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| ConfigError::invalid(key, format!("'{raw}': {e}")))
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
