// ABOUTME: Integration tests for start-pose exercise classification
// ABOUTME: Covers the plank rule, missing or hidden joints and rule table extension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use repcoach_intelligence::classifier::StartPoseRule;
use repcoach_intelligence::{CoachingConfig, ExerciseClassifier};
use repcoach_server::errors::FrameError;
use repcoach_server::models::{ExerciseKind, Frame, JointName, Keypoint};

#[test]
fn test_plank_is_classified_as_pushup() {
    let frame = Frame::new()
        .with(Keypoint::new(JointName::LeftShoulder, 0.3, 0.30))
        .with(Keypoint::new(JointName::LeftHip, 0.5, 0.32))
        .with(Keypoint::new(JointName::LeftAnkle, 0.8, 0.33));
    assert_eq!(
        ExerciseClassifier::default().classify_start(&frame),
        ExerciseKind::Pushup
    );
}

#[test]
fn test_standing_is_not_an_exercise_start() {
    assert_eq!(
        ExerciseClassifier::default().classify_start(&common::standing_joints()),
        ExerciseKind::None
    );
}

#[test]
fn test_only_the_legs_out_of_line_fails_the_rule() {
    let frame = common::plank_joints().with(Keypoint::new(JointName::LeftAnkle, 0.8, 0.60));
    assert_eq!(
        ExerciseClassifier::default().classify_start(&frame),
        ExerciseKind::None
    );
}

#[test]
fn test_missing_or_hidden_joints_yield_none() {
    let classifier = ExerciseClassifier::default();

    let mut missing_hip = common::plank_joints();
    missing_hip.remove(JointName::LeftHip);
    assert_eq!(classifier.classify_start(&missing_hip), ExerciseKind::None);

    let hidden_ankle = common::plank_joints()
        .with(Keypoint::new(JointName::LeftAnkle, 0.85, 0.33).with_visibility(0.2));
    assert_eq!(classifier.classify_start(&hidden_ankle), ExerciseKind::None);

    assert_eq!(classifier.classify_start(&Frame::new()), ExerciseKind::None);
}

#[test]
fn test_classification_is_pure() {
    let classifier = ExerciseClassifier::default();
    let frame = common::arms_at(120.0);
    let first = classifier.classify_start(&frame);
    for _ in 0..10 {
        assert_eq!(classifier.classify_start(&frame), first);
    }
}

#[test]
fn test_tolerance_comes_from_config() {
    let mut config = CoachingConfig::default();
    config.start_pose.tolerance = 0.01;
    let strict = ExerciseClassifier::new(config);
    assert_eq!(
        strict.classify_start(&common::plank_joints()),
        ExerciseKind::None
    );
}

fn upright(frame: &Frame, config: &CoachingConfig) -> Result<bool, FrameError> {
    let shoulder = frame.require(JointName::LeftShoulder, config.min_visibility)?;
    let ankle = frame.require(JointName::LeftAnkle, config.min_visibility)?;
    Ok(ankle.y - shoulder.y > 0.5)
}

#[test]
fn test_rules_are_extended_in_order() {
    let classifier = ExerciseClassifier::default().with_rule(StartPoseRule {
        exercise: ExerciseKind::Squat,
        matches: upright,
    });
    assert_eq!(
        classifier.classify_start(&common::standing_joints()),
        ExerciseKind::Squat
    );
    // Built-in plank rule still runs first
    assert_eq!(
        classifier.classify_start(&common::plank_joints()),
        ExerciseKind::Pushup
    );
}
