// ABOUTME: Intensity zone labels and step target modes
// ABOUTME: Selects how step targets are described and encoded in uploaded events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

/// Zone family appended to each step's target line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneType {
    /// Heart-rate zones
    #[default]
    Hr,
    /// Pace zones
    Pace,
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hr => write!(f, "HR"),
            Self::Pace => write!(f, "Pace"),
        }
    }
}

impl FromStr for ZoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hr" | "heart_rate" | "heartrate" => Ok(Self::Hr),
            "pace" => Ok(Self::Pace),
            other => Err(format!("expected HR or Pace; got '{other}'")),
        }
    }
}

/// Which step field drives the uploaded target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// Target the step's named zone
    #[default]
    Zone,
    /// Target the step's power fraction of FTP
    Power,
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zone => write!(f, "zone"),
            Self::Power => write!(f, "power"),
        }
    }
}

impl FromStr for TargetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zone" => Ok(Self::Zone),
            "power" => Ok(Self::Power),
            other => Err(format!("expected zone or power; got '{other}'")),
        }
    }
}
