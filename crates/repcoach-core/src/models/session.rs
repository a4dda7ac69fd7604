// ABOUTME: Per-connection workout session state passed through the rep state machines
// ABOUTME: Plain value type: created at connect, replaced on exercise lock, dropped at disconnect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExerciseKind, Stage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutable workout state owned by exactly one connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Completed repetitions of the active exercise
    pub rep_count: u32,
    /// Current repetition phase
    pub stage: Stage,
    /// Exercise locked in for this workout
    pub active_exercise: ExerciseKind,
    /// When `stage` last entered (or re-confirmed) its flexed position
    pub last_stage_change_time: DateTime<Utc>,
}

impl SessionState {
    /// Fresh state at connection start
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            rep_count: 0,
            stage: Stage::Unset,
            active_exercise: ExerciseKind::None,
            last_stage_change_time: now,
        }
    }

    /// Fresh state for a newly locked-in exercise
    #[must_use]
    pub const fn locked(exercise: ExerciseKind, now: DateTime<Utc>) -> Self {
        Self {
            rep_count: 0,
            stage: Stage::Unset,
            active_exercise: exercise,
            last_stage_change_time: now,
        }
    }

    /// True once an exercise has been locked in
    #[must_use]
    pub const fn has_active_exercise(&self) -> bool {
        !self.active_exercise.is_none()
    }
}
