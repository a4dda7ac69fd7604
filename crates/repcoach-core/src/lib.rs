// ABOUTME: Core types and constants for the RepCoach exercise feedback service
// ABOUTME: Foundation crate with the keypoint data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RepCoach Core
//!
//! Foundation crate providing shared types and constants for the RepCoach
//! exercise feedback service. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode` for the HTTP surface and the per-frame `FrameError`
//!   taxonomy
//! - **constants**: Thresholds, fixed feedback strings, ports and routes
//! - **models**: Keypoints, frames, exercise kinds, and the per-connection session state

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration defaults organized by domain
pub mod constants;

/// Core data models (`JointName`, `Keypoint`, `Frame`, `ExerciseKind`, `SessionState`)
pub mod models;
