// ABOUTME: Core data models for pose frames, exercises, and workout sessions
// ABOUTME: Re-exports the keypoint schema and session state types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exercise catalogue and repetition stages
pub mod exercise;
/// Keypoints, 2D points and frames
pub mod frame;
/// Landmark names
pub mod joint;
/// Per-connection session state
pub mod session;

pub use exercise::{ExerciseKind, Stage};
pub use frame::{Frame, Keypoint, Point2D};
pub use joint::JointName;
pub use session::SessionState;
