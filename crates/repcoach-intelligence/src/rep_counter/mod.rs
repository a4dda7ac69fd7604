// ABOUTME: Repetition state machine trait and the per-exercise engine registry
// ABOUTME: Dispatches frames to the counter for the locked-in exercise or reports it unsupported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pushup state machine
pub mod pushup;

pub use pushup::PushupCounter;

use crate::config::CoachingConfig;
use chrono::{DateTime, Utc};
use repcoach_core::errors::FrameError;
use repcoach_core::models::{ExerciseKind, Frame, SessionState};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A per-exercise repetition state machine.
///
/// Implementations are stateless; all evolution lives in the
/// [`SessionState`] passed in and returned.
pub trait RepCounter: Send + Sync {
    /// Exercise this machine counts
    fn exercise(&self) -> ExerciseKind;

    /// Consume one frame, returning the feedback text and the next state.
    ///
    /// Per-frame problems never escape: they yield a fixed feedback string
    /// with the state unchanged.
    fn step(
        &self,
        frame: &Frame,
        state: SessionState,
        now: DateTime<Utc>,
    ) -> (String, SessionState);
}

/// Registry of state machines keyed by exercise
#[derive(Clone)]
pub struct ExerciseEngine {
    counters: HashMap<ExerciseKind, Arc<dyn RepCounter>>,
}

impl ExerciseEngine {
    /// Engine with every implemented state machine registered
    #[must_use]
    pub fn new(config: &CoachingConfig) -> Self {
        Self::empty().with_counter(Arc::new(PushupCounter::new(config)))
    }

    /// Engine with nothing registered
    #[must_use]
    pub fn empty() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    /// Register (or replace) the machine for its exercise
    #[must_use]
    pub fn with_counter(mut self, counter: Arc<dyn RepCounter>) -> Self {
        self.counters.insert(counter.exercise(), counter);
        self
    }

    /// Whether a state machine exists for `exercise`
    #[must_use]
    pub fn supports(&self, exercise: ExerciseKind) -> bool {
        self.counters.contains_key(&exercise)
    }

    /// State machine for `exercise`
    ///
    /// # Errors
    ///
    /// Returns `FrameError::UnsupportedExercise` for catalogued exercises
    /// without an implementation (and for `None`)
    pub fn counter_for(&self, exercise: ExerciseKind) -> Result<&dyn RepCounter, FrameError> {
        self.counters
            .get(&exercise)
            .map(|counter| &**counter)
            .ok_or(FrameError::UnsupportedExercise(exercise))
    }

    /// Step the machine for the state's active exercise
    ///
    /// # Errors
    ///
    /// Returns `FrameError::UnsupportedExercise` without touching the state
    /// when the active exercise has no machine
    pub fn step(
        &self,
        frame: &Frame,
        state: SessionState,
        now: DateTime<Utc>,
    ) -> Result<(String, SessionState), FrameError> {
        let counter = self.counter_for(state.active_exercise)?;
        Ok(counter.step(frame, state, now))
    }
}

impl Default for ExerciseEngine {
    fn default() -> Self {
        Self::new(&CoachingConfig::default())
    }
}

impl fmt::Debug for ExerciseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut supported: Vec<&str> = self.counters.keys().map(|k| k.id()).collect();
        supported.sort_unstable();
        f.debug_struct("ExerciseEngine")
            .field("supported", &supported)
            .finish()
    }
}
