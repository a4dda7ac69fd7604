// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides frame builders for plank and arm poses, manual clocks and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `repcoach_server`

use chrono::{DateTime, Utc};
use repcoach_intelligence::ManualClock;
use repcoach_server::config::environment::{NoPersonPolicy, ServerConfig};
use repcoach_server::models::{Frame, JointName, Keypoint};
use repcoach_server::pose::LandmarkPayload;
use repcoach_server::resources::ServerResources;
use serde_json::{json, Value};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed session start for deterministic timers
pub fn session_start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// Manual clock frozen at `session_start`
pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(session_start()))
}

/// Server resources on a manual clock with the given no-person policy
pub fn test_resources(clock: Arc<ManualClock>, policy: NoPersonPolicy) -> ServerResources {
    init_test_logging();
    let config = ServerConfig {
        no_person_policy: policy,
        ..ServerConfig::default()
    };
    ServerResources::new(config).with_clock(clock)
}

/// Shoulder, hip and ankle at the heights of a plank seen side-on
pub fn plank_joints() -> Frame {
    Frame::new()
        .with(Keypoint::new(JointName::LeftShoulder, 0.30, 0.30))
        .with(Keypoint::new(JointName::LeftHip, 0.55, 0.32))
        .with(Keypoint::new(JointName::LeftAnkle, 0.85, 0.33))
}

/// Standing upright: shoulder, hip and ankle stacked vertically
pub fn standing_joints() -> Frame {
    Frame::new()
        .with(Keypoint::new(JointName::LeftShoulder, 0.50, 0.25))
        .with(Keypoint::new(JointName::LeftHip, 0.50, 0.55))
        .with(Keypoint::new(JointName::LeftAnkle, 0.50, 0.90))
}

/// Both arms bent to `elbow_angle_deg`, on top of a plank posture
pub fn arms_at(elbow_angle_deg: f64) -> Frame {
    let theta = elbow_angle_deg.to_radians();
    let reach = 0.1;
    let mut frame = plank_joints();
    for (shoulder, elbow, wrist, side) in [
        (
            JointName::LeftShoulder,
            JointName::LeftElbow,
            JointName::LeftWrist,
            1.0,
        ),
        (
            JointName::RightShoulder,
            JointName::RightElbow,
            JointName::RightWrist,
            -1.0,
        ),
    ] {
        let (ex, ey) = (0.5 - side * 0.05, 0.5);
        frame.insert(Keypoint::new(shoulder, ex, ey - reach));
        frame.insert(Keypoint::new(elbow, ex, ey));
        frame.insert(Keypoint::new(
            wrist,
            side.mul_add(reach * theta.sin(), ex),
            ey - reach * theta.cos(),
        ));
    }
    frame
}

/// Arms at `elbow_angle_deg` with both wrists cut out of the frame
pub fn arms_without_wrists(elbow_angle_deg: f64) -> Frame {
    let mut frame = arms_at(elbow_angle_deg);
    frame.remove(JointName::LeftWrist);
    frame.remove(JointName::RightWrist);
    frame
}

/// Wire message carrying `frame` as client landmarks
pub fn landmarks_message(frame: &Frame) -> Value {
    let landmarks: Vec<LandmarkPayload> = frame.iter().map(LandmarkPayload::from).collect();
    json!({ "type": "landmarks", "landmarks": landmarks })
}

/// Wire message for a frame without anybody in it
pub fn no_person_message() -> Value {
    json!({ "type": "landmarks", "landmarks": null })
}
