// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Thresholds, fixed feedback strings, ports and routes for the RepCoach service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace. Threshold values here are defaults; the running values
//! come from `CoachingConfig`.

/// Fixed feedback strings sent to the client
pub mod feedback {
    /// Required joints are missing or unusable in this frame
    pub const KEEP_BODY_IN_FRAME: &str = "Keep your body in frame.";
    /// No person detected while no exercise is locked in
    pub const GET_INTO_STARTING_POSE: &str = "Get into a starting pose.";
    /// Pushup transitional prompt when not coming from the top
    pub const PUSH_UP_PROMPT: &str = "Push up!";
    /// Emitted when a state machine step produced no other text
    pub const KEEP_GOOD_FORM: &str = "Keep good form.";
}

/// Geometric thresholds for start-pose classification and rep counting
pub mod thresholds {
    /// Minimum keypoint visibility for a joint to be used
    pub const MIN_KEYPOINT_VISIBILITY: f64 = 0.5;
    /// Max normalized vertical offset between shoulder/hip and hip/ankle for a plank
    pub const START_POSE_TOLERANCE: f64 = 0.15;
    /// Elbow angle above which the arms count as extended (degrees)
    pub const PUSHUP_EXTENDED_ANGLE_DEG: f64 = 160.0;
    /// Elbow angle below which the arms count as flexed (degrees)
    pub const PUSHUP_FLEXED_ANGLE_DEG: f64 = 90.0;
    /// Seconds in the flexed stage before encouragement replaces cueing
    pub const STRUGGLE_THRESHOLD_SECS: u64 = 5;
    /// Distances below this are treated as coincident points
    pub const COINCIDENT_EPSILON: f64 = 1e-9;
}

/// Network ports
pub mod ports {
    /// Default HTTP/WebSocket port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}

/// HTTP and WebSocket routes
pub mod routes {
    /// Service banner
    pub const ROOT: &str = "/";
    /// Health check
    pub const HEALTH: &str = "/health";
    /// Live posture analysis WebSocket
    pub const LIVE_POSTURE: &str = "/analysis/live-posture";
    /// One-shot snapshot analysis
    pub const ANALYZE_SNAPSHOT: &str = "/analyze/snapshot";
}

/// Service names for structured logging
pub mod service_names {
    /// Main server
    pub const REPCOACH_SERVER: &str = "repcoach-server";
}
