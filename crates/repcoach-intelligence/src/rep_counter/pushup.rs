// ABOUTME: Pushup repetition state machine driven by the averaged elbow angle
// ABOUTME: Counts reps on the Down to Up edge and encourages users stalled at the bottom
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RepCounter;
use crate::config::{CoachingConfig, PushupThresholds};
use crate::geometry::angle_at;
use crate::phrases::{pick, PhraseCategory};
use chrono::{DateTime, TimeDelta, Utc};
use repcoach_core::constants::feedback;
use repcoach_core::errors::FrameError;
use repcoach_core::models::{ExerciseKind, Frame, JointName, SessionState, Stage};
use tracing::debug;

/// Shoulder, elbow and wrist of one arm
const LEFT_ARM: [JointName; 3] = [
    JointName::LeftShoulder,
    JointName::LeftElbow,
    JointName::LeftWrist,
];
const RIGHT_ARM: [JointName; 3] = [
    JointName::RightShoulder,
    JointName::RightElbow,
    JointName::RightWrist,
];

/// Pushup counter
#[derive(Debug, Clone)]
pub struct PushupCounter {
    thresholds: PushupThresholds,
    min_visibility: f64,
    struggle_threshold: TimeDelta,
}

impl PushupCounter {
    /// Counter using the given thresholds
    #[must_use]
    pub fn new(config: &CoachingConfig) -> Self {
        Self {
            thresholds: config.pushup,
            min_visibility: config.min_visibility,
            struggle_threshold: config.struggle_threshold(),
        }
    }

    /// Mean of the left and right elbow angles
    ///
    /// # Errors
    ///
    /// Returns a `FrameError` if any arm joint is unusable or degenerate
    pub fn elbow_angle(&self, frame: &Frame) -> Result<f64, FrameError> {
        let left = self.arm_angle(frame, LEFT_ARM)?;
        let right = self.arm_angle(frame, RIGHT_ARM)?;
        Ok((left + right) / 2.0)
    }

    fn arm_angle(
        &self,
        frame: &Frame,
        [shoulder, elbow, wrist]: [JointName; 3],
    ) -> Result<f64, FrameError> {
        let shoulder = frame.require(shoulder, self.min_visibility)?;
        let elbow = frame.require(elbow, self.min_visibility)?;
        let wrist = frame.require(wrist, self.min_visibility)?;
        angle_at(shoulder.point(), elbow.point(), wrist.point())
    }

    /// Advance the machine by one frame.
    ///
    /// # Errors
    ///
    /// Returns a `FrameError` when the arms are not usable in this frame;
    /// the caller keeps the previous state in that case.
    pub fn try_step(
        &self,
        frame: &Frame,
        mut state: SessionState,
        now: DateTime<Utc>,
    ) -> Result<(String, SessionState), FrameError> {
        let elbow_angle = self.elbow_angle(frame)?;

        // Stalled at the bottom: encouragement wins over the angle branches
        let stalled_for = now - state.last_stage_change_time;
        if state.stage == Stage::Down && stalled_for > self.struggle_threshold {
            return Ok((pick(PhraseCategory::Encouragement).to_owned(), state));
        }

        let text = if elbow_angle > self.thresholds.extended_angle_deg {
            let rep = if state.stage == Stage::Down {
                state.rep_count = state.rep_count.saturating_add(1);
                debug!(rep_count = state.rep_count, elbow_angle, "Pushup rep counted");
                Some(format!("Rep {}", state.rep_count))
            } else {
                None
            };
            state.stage = Stage::Up;
            rep
        } else if elbow_angle < self.thresholds.flexed_angle_deg {
            let cue =
                (state.stage != Stage::Down).then(|| pick(PhraseCategory::DownCue).to_owned());
            state.stage = Stage::Down;
            state.last_stage_change_time = now;
            cue
        } else if state.stage == Stage::Up {
            Some(pick(PhraseCategory::UpCue).to_owned())
        } else {
            Some(feedback::PUSH_UP_PROMPT.to_owned())
        };

        Ok((
            text.unwrap_or_else(|| feedback::KEEP_GOOD_FORM.to_owned()),
            state,
        ))
    }
}

impl RepCounter for PushupCounter {
    fn exercise(&self) -> ExerciseKind {
        ExerciseKind::Pushup
    }

    fn step(
        &self,
        frame: &Frame,
        state: SessionState,
        now: DateTime<Utc>,
    ) -> (String, SessionState) {
        self.try_step(frame, state, now).unwrap_or_else(|e| {
            debug!(reason = %e, "Pushup frame skipped");
            (e.feedback(), state)
        })
    }
}
