// ABOUTME: Exercise catalogue and repetition stage enums
// ABOUTME: Stable wire ids and display names for each supported or planned exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exercise the user is performing
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// No exercise locked in yet
    #[default]
    None,
    /// Push-up, counted from elbow flexion
    Pushup,
    /// Bicep curl (catalogued, no state machine yet)
    BicepCurl,
    /// Bodyweight squat (catalogued, no state machine yet)
    Squat,
}

impl ExerciseKind {
    /// Stable identifier used on the wire and in log fields
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pushup => "pushup",
            Self::BicepCurl => "bicep_curl",
            Self::Squat => "squat",
        }
    }

    /// Human readable name used in feedback text
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "No exercise",
            Self::Pushup => "Push-up",
            Self::BicepCurl => "Bicep curl",
            Self::Squat => "Squat",
        }
    }

    /// True for `None`
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Phase of the current repetition; meaning is owned by each state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// No stage observed since the exercise was locked in
    #[default]
    Unset,
    /// Extended position
    Up,
    /// Maximally flexed position
    Down,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}
