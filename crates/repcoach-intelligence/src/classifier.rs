// ABOUTME: Single-frame starting pose classifier driven by an ordered rule table
// ABOUTME: Detects a plank-like posture as the start of a pushup set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Start-pose classification.
//!
//! The classifier is a coarse, deterministic rule set. New exercises are
//! recognised by appending a [`StartPoseRule`], not by replacing the
//! mechanism. Rules are evaluated in order and the first match wins.

use crate::config::CoachingConfig;
use repcoach_core::errors::FrameError;
use repcoach_core::models::{ExerciseKind, Frame, JointName};
use tracing::trace;

/// Predicate deciding whether a frame shows an exercise's starting pose
pub type StartPoseMatcher = fn(&Frame, &CoachingConfig) -> Result<bool, FrameError>;

/// One entry of the classifier rule table
#[derive(Debug, Clone, Copy)]
pub struct StartPoseRule {
    /// Exercise reported when the rule matches
    pub exercise: ExerciseKind,
    /// Pose predicate
    pub matches: StartPoseMatcher,
}

/// Built-in rules, in evaluation order
pub const BUILTIN_RULES: [StartPoseRule; 1] = [StartPoseRule {
    exercise: ExerciseKind::Pushup,
    matches: plank_posture,
}];

/// Decides which exercise, if any, a single frame is starting
#[derive(Debug, Clone)]
pub struct ExerciseClassifier {
    config: CoachingConfig,
    rules: Vec<StartPoseRule>,
}

impl ExerciseClassifier {
    /// Classifier with the built-in rule table
    #[must_use]
    pub fn new(config: CoachingConfig) -> Self {
        Self {
            config,
            rules: BUILTIN_RULES.to_vec(),
        }
    }

    /// Append a rule evaluated after the existing ones
    #[must_use]
    pub fn with_rule(mut self, rule: StartPoseRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Classify the exercise being started in this frame.
    ///
    /// Pure function of the frame: rules whose joints are missing or not
    /// visible enough simply do not match.
    #[must_use]
    pub fn classify_start(&self, frame: &Frame) -> ExerciseKind {
        for rule in &self.rules {
            match (rule.matches)(frame, &self.config) {
                Ok(true) => return rule.exercise,
                Ok(false) => {}
                Err(e) => trace!(exercise = %rule.exercise, reason = %e, "Start pose rule skipped"),
            }
        }
        ExerciseKind::None
    }
}

impl Default for ExerciseClassifier {
    fn default() -> Self {
        Self::new(CoachingConfig::default())
    }
}

/// Torso and legs roughly horizontal: shoulder, hip and ankle at similar height
///
/// # Errors
///
/// Returns a `FrameError` when the left shoulder, hip or ankle is unusable
pub fn plank_posture(frame: &Frame, config: &CoachingConfig) -> Result<bool, FrameError> {
    let min_visibility = config.min_visibility;
    let shoulder = frame.require(JointName::LeftShoulder, min_visibility)?;
    let hip = frame.require(JointName::LeftHip, min_visibility)?;
    let ankle = frame.require(JointName::LeftAnkle, min_visibility)?;

    let tolerance = config.start_pose.tolerance;
    Ok((shoulder.y - hip.y).abs() < tolerance && (hip.y - ankle.y).abs() < tolerance)
}
