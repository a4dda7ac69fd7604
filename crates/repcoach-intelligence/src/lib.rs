// ABOUTME: Exercise intelligence engine for the RepCoach service
// ABOUTME: Joint geometry, start-pose classification, phrase bank and rep state machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RepCoach Intelligence
//!
//! Deterministic geometric rules turning one frame of keypoints into
//! exercise feedback. Nothing in this crate performs I/O; time enters only
//! through the `now` argument (or a [`clock::Clock`]).

/// Start-pose classification rule table
pub mod classifier;
/// Time sources
pub mod clock;
/// Coaching thresholds and validation
pub mod config;
/// Joint angle computation
pub mod geometry;
/// Feedback phrase sets
pub mod phrases;
/// Repetition state machines
pub mod rep_counter;

pub use classifier::{ExerciseClassifier, StartPoseRule};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CoachingConfig, ConfigError};
pub use geometry::angle_at;
pub use phrases::{pick, PhraseCategory};
pub use rep_counter::{ExerciseEngine, PushupCounter, RepCounter};
