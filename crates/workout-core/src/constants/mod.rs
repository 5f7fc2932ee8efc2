// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, defaults, and intervals.icu wire-format literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Environment variable names read at startup
pub mod env_config {
    /// intervals.icu athlete identifier (e.g. `i12345`)
    pub const ATHLETE_ID: &str = "ATHLETE_ID";
    /// intervals.icu personal API key
    pub const API_KEY: &str = "API_KEY";
    /// Override for the intervals.icu API base URL
    pub const BASE_URL: &str = "INTERVALS_BASE_URL";
    /// Zone type label used in step descriptions (`HR` or `Pace`)
    pub const ZONE_TYPE: &str = "ZONE_TYPE";
    /// Step target mode (`zone` or `power`)
    pub const TARGET_MODE: &str = "TARGET_MODE";
    /// Path to the workouts document
    pub const TRAINING_FILE: &str = "TRAINING_FILE";
    /// Policy for workouts whose name carries no sport marker
    pub const UNCLASSIFIED_SPORT: &str = "UNCLASSIFIED_SPORT";
    /// Total request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    /// Connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";
}

/// Default configuration values
pub mod defaults {
    /// Public intervals.icu API root
    pub const BASE_URL: &str = "https://intervals.icu/api/v1";
    /// Workouts document read when no path is configured
    pub const TRAINING_FILE: &str = "training.json";
    /// Total request timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connection timeout
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Cadence written when a step does not specify one
    pub const CADENCE: &str = "Free";
}

/// intervals.icu API paths and auth scheme
pub mod intervals {
    /// Username half of the Basic credential; the password is the API key
    pub const BASIC_AUTH_USER: &str = "API_KEY";
    /// Bulk event creation path under `/athlete/{id}`
    pub const EVENTS_BULK_PATH: &str = "events/bulk";
    /// Athlete resource prefix
    pub const ATHLETE_PATH: &str = "athlete";
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("workout-uploader/", env!("CARGO_PKG_VERSION"));
}

/// Literal values of the calendar event schema
pub mod event_schema {
    /// Fixed local start time appended to the workout date
    pub const START_TIME_FORMAT: &str = "%Y-%m-%dT00:00:00";
    /// Input date format
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Duration token grammar
pub mod duration_units {
    /// Distance marker; read as minutes
    pub const KILOMETRES: &str = "km";
    /// Minute marker
    pub const MINUTES: &str = "m";
    /// Second marker
    pub const SECONDS: &str = "s";
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: u32 = 60;
}

/// Sport markers searched for in workout names, in priority order
pub mod sport_markers {
    /// Cycling marker
    pub const BIKE: &str = "Bike";
    /// Running marker
    pub const RUN: &str = "Run";
    /// Swimming marker
    pub const SWIM: &str = "Swim";
}
