// ABOUTME: Core types and constants for the intervals.icu workout uploader
// ABOUTME: Foundation crate with error handling, workout and event models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Shared types for the workout upload pipeline. Nothing in this crate performs
//! I/O; the loader, formatter and uploader build on these types.
//!
//! ## Modules
//!
//! - **errors**: Typed errors per pipeline stage plus `ErrorCode` for exit statuses
//! - **constants**: Environment variable names, defaults and wire-format literals
//! - **models**: Input workouts, output calendar events, sport and zone types

/// Typed error enums for configuration, loading, formatting and uploading
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Workout input records and calendar event output records
pub mod models;
