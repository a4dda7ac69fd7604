// ABOUTME: Per-connection session controller driving classification and rep counting
// ABOUTME: Locks in the exercise from a start pose, then feeds frames to its rep state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Controller
//!
//! One controller exists per live connection and owns that connection's
//! [`SessionState`] exclusively. Frames are handled one at a time to
//! completion; nothing here is shared between connections.
//!
//! ```text
//! NoExercise --frame--> Classifying --start pose--> Locked(exercise)
//! ```

use crate::config::environment::NoPersonPolicy;
use crate::constants::feedback;
use crate::models::{ExerciseKind, Frame, SessionState};
use crate::pose::{EstimatorError, FramePayload};
use crate::resources::ServerResources;
use tracing::{debug, info};

/// Connection-level lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No frame with a person seen yet
    NoExercise,
    /// Watching frames for a starting pose
    Classifying,
    /// Exercise locked in; frames go to its state machine
    Locked(ExerciseKind),
}

/// Owns one connection's workout
#[derive(Debug)]
pub struct SessionController {
    resources: ServerResources,
    state: SessionState,
    phase: SessionPhase,
}

impl SessionController {
    /// Controller with a fresh session starting now
    #[must_use]
    pub fn new(resources: ServerResources) -> Self {
        let state = SessionState::new(resources.clock.now());
        Self {
            resources,
            state,
            phase: SessionPhase::NoExercise,
        }
    }

    /// Current session state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Estimate the pose in `payload` and handle the resulting frame
    ///
    /// # Errors
    ///
    /// Returns the estimator's error; the session is untouched in that case
    pub async fn handle_payload(
        &mut self,
        payload: FramePayload,
    ) -> Result<Option<String>, EstimatorError> {
        let frame = self.resources.estimator.estimate(payload).await?;
        Ok(self.handle_frame(frame.as_ref()))
    }

    /// Handle one frame, `None` meaning no person was detected.
    ///
    /// Returns the feedback to send, or `None` when the no-person policy
    /// suppresses the reply.
    pub fn handle_frame(&mut self, frame: Option<&Frame>) -> Option<String> {
        let Some(frame) = frame.filter(|frame| !frame.is_empty()) else {
            return match self.resources.config.no_person_policy {
                NoPersonPolicy::Prompt => Some(feedback::GET_INTO_STARTING_POSE.to_owned()),
                NoPersonPolicy::Suppress => None,
            };
        };

        let now = self.resources.clock.now();

        if !self.state.has_active_exercise() {
            self.phase = SessionPhase::Classifying;
            let exercise = self.resources.classifier.classify_start(frame);
            if exercise.is_none() {
                return Some(feedback::GET_INTO_STARTING_POSE.to_owned());
            }
            self.state = SessionState::locked(exercise, now);
            self.phase = SessionPhase::Locked(exercise);
            info!(exercise = %exercise, "Exercise locked in");
            return Some(format!("Detected {exercise}. Let's begin."));
        }

        match self.resources.engine.step(frame, self.state, now) {
            Ok((text, next)) => {
                if next.rep_count != self.state.rep_count {
                    info!(
                        exercise = %next.active_exercise,
                        rep_count = next.rep_count,
                        "Rep completed"
                    );
                }
                if next.stage != self.state.stage {
                    debug!(from = %self.state.stage, to = %next.stage, "Stage changed");
                }
                self.state = next;
                Some(text)
            }
            Err(e) => {
                debug!(exercise = %self.state.active_exercise, reason = %e, "Frame not counted");
                Some(e.feedback())
            }
        }
    }
}
