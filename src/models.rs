// ABOUTME: Data model re-exports for the RepCoach server package
// ABOUTME: Keypoints, frames, exercises and session state come from the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use repcoach_core::models::{
    ExerciseKind, Frame, JointName, Keypoint, Point2D, SessionState, Stage,
};
