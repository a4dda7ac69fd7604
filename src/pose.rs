// ABOUTME: Pose estimator seam turning inbound frame payloads into joint-keyed frames
// ABOUTME: Ships a passthrough estimator for landmarks computed on the client device
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pose Estimation
//!
//! The server never runs a pose model itself. Keypoints either arrive
//! already extracted by the client, or as an encoded image that an injected
//! [`PoseEstimator`] implementation converts. The estimator is a long-lived
//! dependency held in `ServerResources`, never a global.

use crate::models::{Frame, JointName, Keypoint};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// One landmark as sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPayload {
    /// SCREAMING_SNAKE joint name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MediaPipe landmark index (0..32)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    /// Normalized horizontal coordinate
    pub x: f64,
    /// Normalized vertical coordinate
    pub y: f64,
    /// Relative depth
    #[serde(default)]
    pub z: f64,
    /// Visibility confidence; absent means fully visible
    #[serde(default = "default_visibility")]
    pub visibility: f64,
}

const fn default_visibility() -> f64 {
    1.0
}

impl LandmarkPayload {
    /// Joint this entry describes, falling back to its position in the list
    #[must_use]
    pub fn joint(&self, position: usize) -> Option<JointName> {
        if let Some(name) = &self.name {
            return JointName::from_str(name).ok();
        }
        JointName::from_index(self.id.unwrap_or(position))
    }
}

impl From<&Keypoint> for LandmarkPayload {
    fn from(keypoint: &Keypoint) -> Self {
        Self {
            name: Some(keypoint.name.as_str().to_owned()),
            id: Some(keypoint.name.index()),
            x: keypoint.x,
            y: keypoint.y,
            z: keypoint.z,
            visibility: keypoint.visibility,
        }
    }
}

/// Raw input for one instant, before pose estimation
#[derive(Debug, Clone, PartialEq)]
pub enum FramePayload {
    /// Landmarks already extracted by the client; `None` means nobody was found
    Landmarks(Option<Vec<LandmarkPayload>>),
    /// Encoded image bytes
    Image(Vec<u8>),
}

/// Pose estimation failures
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EstimatorError {
    /// This estimator cannot process this kind of payload
    #[error("unsupported payload: {0}")]
    UnsupportedPayload(&'static str),
    /// The estimator accepted the payload but failed to process it
    #[error("pose estimation failed: {0}")]
    Failed(String),
}

/// Converts frame payloads to keypoints
#[async_trait]
pub trait PoseEstimator: Send + Sync {
    /// Estimator name for logs
    fn name(&self) -> &'static str;

    /// Estimate the pose in `payload`
    ///
    /// Returns `Ok(None)` when the payload is valid but shows no person.
    ///
    /// # Errors
    ///
    /// Returns an `EstimatorError` if the payload cannot be processed
    async fn estimate(&self, payload: FramePayload) -> Result<Option<Frame>, EstimatorError>;
}

/// Passthrough for landmarks computed on the client
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientLandmarkEstimator;

impl ClientLandmarkEstimator {
    /// Build a frame from wire landmarks; unresolvable entries are dropped
    #[must_use]
    pub fn to_frame(landmarks: &[LandmarkPayload]) -> Option<Frame> {
        let frame: Frame = landmarks
            .iter()
            .enumerate()
            .filter_map(|(position, landmark)| {
                let Some(joint) = landmark.joint(position) else {
                    debug!(
                        position,
                        name = ?landmark.name,
                        id = ?landmark.id,
                        "Dropping unrecognised landmark"
                    );
                    return None;
                };
                Some(
                    Keypoint::new(joint, landmark.x, landmark.y)
                        .with_z(landmark.z)
                        .with_visibility(landmark.visibility),
                )
            })
            .collect();
        (!frame.is_empty()).then_some(frame)
    }
}

#[async_trait]
impl PoseEstimator for ClientLandmarkEstimator {
    fn name(&self) -> &'static str {
        "client-landmarks"
    }

    async fn estimate(&self, payload: FramePayload) -> Result<Option<Frame>, EstimatorError> {
        match payload {
            FramePayload::Landmarks(landmarks) => {
                Ok(landmarks.as_deref().and_then(Self::to_frame))
            }
            FramePayload::Image(_) => Err(EstimatorError::UnsupportedPayload(
                "image frames need a server-side pose model; send landmarks instead",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark(name: Option<&str>, id: Option<usize>) -> LandmarkPayload {
        LandmarkPayload {
            name: name.map(str::to_owned),
            id,
            x: 0.5,
            y: 0.5,
            z: 0.0,
            visibility: 0.9,
        }
    }

    #[test]
    fn test_joint_resolution_prefers_name_then_id_then_position() {
        assert_eq!(
            landmark(Some("LEFT_WRIST"), Some(0)).joint(3),
            Some(JointName::LeftWrist)
        );
        assert_eq!(landmark(None, Some(11)).joint(3), Some(JointName::LeftShoulder));
        assert_eq!(landmark(None, None).joint(0), Some(JointName::Nose));
        assert_eq!(landmark(Some("TAIL"), None).joint(0), None);
        assert_eq!(landmark(None, None).joint(40), None);
    }

    #[test]
    fn test_empty_or_unknown_landmarks_mean_no_person() {
        assert!(ClientLandmarkEstimator::to_frame(&[]).is_none());
        assert!(ClientLandmarkEstimator::to_frame(&[landmark(Some("TAIL"), None)]).is_none());
    }

    #[tokio::test]
    async fn test_images_are_rejected() {
        let result = ClientLandmarkEstimator
            .estimate(FramePayload::Image(vec![0xFF, 0xD8]))
            .await;
        assert!(matches!(result, Err(EstimatorError::UnsupportedPayload(_))));
    }
}
