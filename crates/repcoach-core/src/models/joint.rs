// ABOUTME: Anatomical landmark names in the 33-point MediaPipe pose topology
// ABOUTME: Provides stable wire names and landmark index conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named body landmark produced by the external pose estimator.
///
/// Declaration order matches the estimator's landmark indices, so
/// `JointName::ALL[i]` is the landmark with index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JointName {
    /// Nose
    Nose,
    /// Left eye, inner corner
    LeftEyeInner,
    /// Left eye
    LeftEye,
    /// Left eye, outer corner
    LeftEyeOuter,
    /// Right eye, inner corner
    RightEyeInner,
    /// Right eye
    RightEye,
    /// Right eye, outer corner
    RightEyeOuter,
    /// Left ear
    LeftEar,
    /// Right ear
    RightEar,
    /// Left mouth corner
    MouthLeft,
    /// Right mouth corner
    MouthRight,
    /// Left shoulder
    LeftShoulder,
    /// Right shoulder
    RightShoulder,
    /// Left elbow
    LeftElbow,
    /// Right elbow
    RightElbow,
    /// Left wrist
    LeftWrist,
    /// Right wrist
    RightWrist,
    /// Left pinky knuckle
    LeftPinky,
    /// Right pinky knuckle
    RightPinky,
    /// Left index knuckle
    LeftIndex,
    /// Right index knuckle
    RightIndex,
    /// Left thumb
    LeftThumb,
    /// Right thumb
    RightThumb,
    /// Left hip
    LeftHip,
    /// Right hip
    RightHip,
    /// Left knee
    LeftKnee,
    /// Right knee
    RightKnee,
    /// Left ankle
    LeftAnkle,
    /// Right ankle
    RightAnkle,
    /// Left heel
    LeftHeel,
    /// Right heel
    RightHeel,
    /// Left foot index
    LeftFootIndex,
    /// Right foot index
    RightFootIndex,
}

impl JointName {
    /// Every landmark, ordered by estimator index
    pub const ALL: [Self; 33] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Look up a landmark by estimator index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Estimator index of this landmark
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name (e.g. `LEFT_SHOULDER`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "NOSE",
            Self::LeftEyeInner => "LEFT_EYE_INNER",
            Self::LeftEye => "LEFT_EYE",
            Self::LeftEyeOuter => "LEFT_EYE_OUTER",
            Self::RightEyeInner => "RIGHT_EYE_INNER",
            Self::RightEye => "RIGHT_EYE",
            Self::RightEyeOuter => "RIGHT_EYE_OUTER",
            Self::LeftEar => "LEFT_EAR",
            Self::RightEar => "RIGHT_EAR",
            Self::MouthLeft => "MOUTH_LEFT",
            Self::MouthRight => "MOUTH_RIGHT",
            Self::LeftShoulder => "LEFT_SHOULDER",
            Self::RightShoulder => "RIGHT_SHOULDER",
            Self::LeftElbow => "LEFT_ELBOW",
            Self::RightElbow => "RIGHT_ELBOW",
            Self::LeftWrist => "LEFT_WRIST",
            Self::RightWrist => "RIGHT_WRIST",
            Self::LeftPinky => "LEFT_PINKY",
            Self::RightPinky => "RIGHT_PINKY",
            Self::LeftIndex => "LEFT_INDEX",
            Self::RightIndex => "RIGHT_INDEX",
            Self::LeftThumb => "LEFT_THUMB",
            Self::RightThumb => "RIGHT_THUMB",
            Self::LeftHip => "LEFT_HIP",
            Self::RightHip => "RIGHT_HIP",
            Self::LeftKnee => "LEFT_KNEE",
            Self::RightKnee => "RIGHT_KNEE",
            Self::LeftAnkle => "LEFT_ANKLE",
            Self::RightAnkle => "RIGHT_ANKLE",
            Self::LeftHeel => "LEFT_HEEL",
            Self::RightHeel => "RIGHT_HEEL",
            Self::LeftFootIndex => "LEFT_FOOT_INDEX",
            Self::RightFootIndex => "RIGHT_FOOT_INDEX",
        }
    }
}

impl fmt::Display for JointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|joint| joint.as_str() == upper)
            .ok_or_else(|| format!("unknown joint name: {s}"))
    }
}
