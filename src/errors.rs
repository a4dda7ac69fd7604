// ABOUTME: Unified error handling for the RepCoach server package
// ABOUTME: Re-exports the core error system so server modules share one AppError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error types live in `repcoach-core` so the intelligence crate and the
//! server agree on codes and status mapping. With the `http-response`
//! feature enabled (as this package does) `AppError` renders itself as a
//! JSON `ErrorResponse`.

pub use repcoach_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, FrameError,
};
