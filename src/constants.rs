// ABOUTME: Application constants for the RepCoach server package
// ABOUTME: Re-exports core constants and adds server-only environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

pub use repcoach_core::constants::{feedback, ports, routes, service_names, thresholds};

/// Environment variable names read by the server configuration
pub mod env_vars {
    /// Bind host
    pub const HOST: &str = "HOST";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const RUST_LOG: &str = "RUST_LOG";
    /// What to emit for frames without a person
    pub const NO_PERSON_POLICY: &str = "NO_PERSON_POLICY";
}

/// Server defaults
pub mod defaults {
    /// Bind on every interface
    pub const HOST: &str = "0.0.0.0";
    /// Banner returned by `GET /`
    pub const ROOT_BANNER: &str = "RepCoach backend is running.";
    /// Snapshot analysis found nobody
    pub const NO_PERSON_IN_IMAGE: &str = "Could not detect a person in the image.";
}
