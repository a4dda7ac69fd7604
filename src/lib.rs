// ABOUTME: Main library entry point for the RepCoach live exercise feedback server
// ABOUTME: Wires pose frames from WebSocket clients through classification and rep counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RepCoach Server
//!
//! Real-time exercise feedback over WebSocket. Each connection streams
//! body-keypoint frames; the server detects which exercise is being
//! started, counts repetitions, and answers every processed frame with a
//! short `{"feedback": "..."}` cue.
//!
//! ## Architecture
//!
//! - **pose**: Seam to the external pose estimator (`PoseEstimator`)
//! - **protocol**: Inbound message decoding and outbound feedback payloads
//! - **session**: Per-connection controller owning the `SessionState`
//! - **websocket**: One worker per connection driving a `SessionController`
//! - **routes**: Axum routes for the live socket, snapshot analysis and health
//! - **config** / **logging**: Environment configuration and tracing setup
//!
//! The geometric rules themselves live in `repcoach-intelligence`; the data
//! model and errors in `repcoach-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use repcoach_server::config::environment::ServerConfig;
//! use repcoach_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("RepCoach configured on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Data models re-exported from the core crate
pub mod models;

/// Pose estimator seam
pub mod pose;

/// WebSocket wire protocol
pub mod protocol;

/// Shared, immutable server resources
pub mod resources;

/// HTTP and WebSocket routes
pub mod routes;

/// Server bootstrap
pub mod server;

/// Per-connection session controller
pub mod session;

/// Live posture WebSocket connection handling
pub mod websocket;
