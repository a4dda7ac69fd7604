// ABOUTME: Recoverable per-frame error taxonomy for classification and rep counting
// ABOUTME: Every variant degrades to a fixed user-facing feedback string, never a fault
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::feedback;
use crate::models::{ExerciseKind, JointName};
use thiserror::Error;

/// Problems with a single frame that the session recovers from locally
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameError {
    /// A required joint is absent from the frame
    #[error("required joint {joint} is missing")]
    MissingInput {
        /// Joint that was not reported
        joint: JointName,
    },
    /// A required joint was reported below the confidence threshold
    #[error("joint {joint} visibility {visibility:.2} is below threshold")]
    LowVisibility {
        /// Joint with insufficient confidence
        joint: JointName,
        /// Reported visibility
        visibility: f64,
    },
    /// Coincident or non-finite points leave the joint angle undefined
    #[error("joint angle is undefined for degenerate points")]
    GeometryDegenerate,
    /// The locked-in exercise has no state machine yet
    #[error("{} analysis is not yet supported", .0.display_name())]
    UnsupportedExercise(ExerciseKind),
}

impl FrameError {
    /// Whether this error means the body is not usable in this frame
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::MissingInput { .. } | Self::LowVisibility { .. } | Self::GeometryDegenerate
        )
    }

    /// Fixed feedback text shown to the user for this error
    #[must_use]
    pub fn feedback(&self) -> String {
        match self {
            Self::MissingInput { .. } | Self::LowVisibility { .. } | Self::GeometryDegenerate => {
                feedback::KEEP_BODY_IN_FRAME.to_owned()
            }
            Self::UnsupportedExercise(kind) => {
                format!("{} analysis is not yet supported.", kind.display_name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_variants_share_fallback() {
        let errors = [
            FrameError::MissingInput {
                joint: JointName::LeftWrist,
            },
            FrameError::LowVisibility {
                joint: JointName::RightElbow,
                visibility: 0.1,
            },
            FrameError::GeometryDegenerate,
        ];
        for error in errors {
            assert!(error.is_missing_input());
            assert_eq!(error.feedback(), feedback::KEEP_BODY_IN_FRAME);
        }
    }

    #[test]
    fn test_unsupported_feedback_is_deterministic() {
        let error = FrameError::UnsupportedExercise(ExerciseKind::Squat);
        assert!(!error.is_missing_input());
        assert_eq!(error.feedback(), "Squat analysis is not yet supported.");
        assert_eq!(error.feedback(), error.feedback());
    }
}
