// ABOUTME: Integration tests for the per-connection session controller
// ABOUTME: Covers lock-in, no-person policies, unsupported exercises and estimator payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::TimeDelta;
use repcoach_intelligence::classifier::StartPoseRule;
use repcoach_intelligence::{CoachingConfig, ExerciseClassifier, PhraseCategory};
use repcoach_server::config::environment::NoPersonPolicy;
use repcoach_server::constants::feedback;
use repcoach_server::errors::FrameError;
use repcoach_server::models::{ExerciseKind, Frame, Stage};
use repcoach_server::pose::{EstimatorError, FramePayload};
use repcoach_server::protocol;
use repcoach_server::session::{SessionController, SessionPhase};

#[test]
fn test_no_person_prompts_without_touching_state() {
    let resources = common::test_resources(common::manual_clock(), NoPersonPolicy::Prompt);
    let mut session = SessionController::new(resources);
    let before = *session.state();

    assert_eq!(
        session.handle_frame(None).as_deref(),
        Some(feedback::GET_INTO_STARTING_POSE)
    );
    assert_eq!(
        session.handle_frame(Some(&Frame::new())).as_deref(),
        Some(feedback::GET_INTO_STARTING_POSE)
    );
    assert_eq!(*session.state(), before);
    assert_eq!(session.phase(), SessionPhase::NoExercise);
}

#[test]
fn test_suppress_policy_sends_nothing_for_empty_frames() {
    let resources = common::test_resources(common::manual_clock(), NoPersonPolicy::Suppress);
    let mut session = SessionController::new(resources);

    assert_eq!(session.handle_frame(None), None);
    // Frames with a person are still answered
    assert_eq!(
        session.handle_frame(Some(&common::standing_joints())).as_deref(),
        Some(feedback::GET_INTO_STARTING_POSE)
    );
}

#[test]
fn test_non_matching_pose_keeps_classifying() {
    let resources = common::test_resources(common::manual_clock(), NoPersonPolicy::Prompt);
    let mut session = SessionController::new(resources);

    let reply = session.handle_frame(Some(&common::standing_joints()));

    assert_eq!(reply.as_deref(), Some(feedback::GET_INTO_STARTING_POSE));
    assert_eq!(session.phase(), SessionPhase::Classifying);
    assert_eq!(session.state().active_exercise, ExerciseKind::None);
}

#[test]
fn test_plank_locks_pushup_and_resets_session() {
    let clock = common::manual_clock();
    let resources = common::test_resources(clock.clone(), NoPersonPolicy::Prompt);
    let mut session = SessionController::new(resources);
    clock.advance(TimeDelta::seconds(4));

    let reply = session.handle_frame(Some(&common::arms_at(80.0)));

    assert_eq!(reply.as_deref(), Some("Detected pushup. Let's begin."));
    assert_eq!(session.phase(), SessionPhase::Locked(ExerciseKind::Pushup));
    let state = session.state();
    assert_eq!(state.active_exercise, ExerciseKind::Pushup);
    assert_eq!(state.rep_count, 0);
    assert_eq!(state.stage, Stage::Unset);
    assert_eq!(state.last_stage_change_time, common::session_start() + TimeDelta::seconds(4));
}

#[test]
fn test_locked_session_counts_reps_and_never_reclassifies() {
    let clock = common::manual_clock();
    let resources = common::test_resources(clock.clone(), NoPersonPolicy::Prompt);
    let mut session = SessionController::new(resources);

    session.handle_frame(Some(&common::plank_joints()));
    for _ in 0..2 {
        clock.advance(TimeDelta::milliseconds(500));
        session.handle_frame(Some(&common::arms_at(80.0)));
        clock.advance(TimeDelta::milliseconds(500));
        session.handle_frame(Some(&common::arms_at(170.0)));
    }
    assert_eq!(session.state().rep_count, 2);

    // A standing frame no longer matters for classification
    let reply = session.handle_frame(Some(&common::standing_joints()));
    assert_eq!(reply.as_deref(), Some(feedback::KEEP_BODY_IN_FRAME));
    assert_eq!(session.state().active_exercise, ExerciseKind::Pushup);
    assert_eq!(session.state().rep_count, 2);
}

#[test]
fn test_stalling_in_session_is_encouraged() {
    let clock = common::manual_clock();
    let resources = common::test_resources(clock.clone(), NoPersonPolicy::Prompt);
    let mut session = SessionController::new(resources);

    session.handle_frame(Some(&common::plank_joints()));
    session.handle_frame(Some(&common::arms_at(80.0)));
    clock.advance(TimeDelta::seconds(7));

    let reply = session.handle_frame(Some(&common::arms_at(170.0))).unwrap();
    assert!(PhraseCategory::Encouragement.contains(&reply));
    assert_eq!(session.state().rep_count, 0);
    assert_eq!(session.state().stage, Stage::Down);
}

fn always(_: &Frame, _: &CoachingConfig) -> Result<bool, FrameError> {
    Ok(true)
}

#[test]
fn test_unsupported_exercise_reports_and_keeps_state() {
    let classifier = ExerciseClassifier::default().with_rule(StartPoseRule {
        exercise: ExerciseKind::BicepCurl,
        matches: always,
    });
    let resources = common::test_resources(common::manual_clock(), NoPersonPolicy::Prompt)
        .with_classifier(classifier);
    let mut session = SessionController::new(resources);

    let reply = session.handle_frame(Some(&common::standing_joints()));
    assert_eq!(reply.as_deref(), Some("Detected bicep_curl. Let's begin."));
    let locked = *session.state();

    let reply = session.handle_frame(Some(&common::standing_joints()));
    assert_eq!(reply.as_deref(), Some("Bicep curl analysis is not yet supported."));
    assert_eq!(*session.state(), locked);
}

#[tokio::test]
async fn test_payloads_flow_through_the_estimator() {
    let resources = common::test_resources(common::manual_clock(), NoPersonPolicy::Prompt);
    let mut session = SessionController::new(resources);

    let text = common::landmarks_message(&common::plank_joints()).to_string();
    let payload = protocol::decode_text(&text).unwrap();
    let reply = session.handle_payload(payload).await.unwrap();
    assert_eq!(reply.as_deref(), Some("Detected pushup. Let's begin."));

    let rejected = session
        .handle_payload(FramePayload::Image(vec![0xFF, 0xD8, 0xFF]))
        .await;
    assert!(matches!(rejected, Err(EstimatorError::UnsupportedPayload(_))));
    assert_eq!(session.state().active_exercise, ExerciseKind::Pushup);
}
