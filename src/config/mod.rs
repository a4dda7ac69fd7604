// ABOUTME: Configuration management module for the RepCoach server
// ABOUTME: Groups environment-driven server settings with the coaching thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the RepCoach server
//!
//! - **Environment**: Server configuration from environment variables
//! - **Coaching**: Rep counting thresholds, re-exported from the intelligence crate

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, NoPersonPolicy, ServerConfig};
pub use repcoach_intelligence::config::{CoachingConfig, ConfigError};
