// ABOUTME: Keypoint and frame types consumed from the external pose estimator
// ABOUTME: A frame is one instant's joint-keyed set of landmarks with validated lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::JointName;
use crate::errors::FrameError;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// A point in the estimator's normalized image plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point2D {
    /// Create a point from coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single named landmark with position and confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Which landmark this is
    pub name: JointName,
    /// Normalized horizontal coordinate
    pub x: f64,
    /// Normalized vertical coordinate
    pub y: f64,
    /// Relative depth
    pub z: f64,
    /// Estimator confidence that the landmark is visible (0-1)
    pub visibility: f64,
}

impl Keypoint {
    /// Create a fully visible keypoint
    #[must_use]
    pub const fn new(name: JointName, x: f64, y: f64) -> Self {
        Self {
            name,
            x,
            y,
            z: 0.0,
            visibility: 1.0,
        }
    }

    /// Set the visibility score
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the depth coordinate
    #[must_use]
    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Projection onto the image plane
    #[must_use]
    pub const fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// One instant's full set of body keypoints, keyed by joint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    keypoints: BTreeMap<JointName, Keypoint>,
}

impl Frame {
    /// Create an empty frame
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a keypoint, keyed by its own name
    pub fn insert(&mut self, keypoint: Keypoint) {
        self.keypoints.insert(keypoint.name, keypoint);
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, keypoint: Keypoint) -> Self {
        self.insert(keypoint);
        self
    }

    /// Remove a joint from the frame
    pub fn remove(&mut self, joint: JointName) -> Option<Keypoint> {
        self.keypoints.remove(&joint)
    }

    /// Lookup without visibility validation
    #[must_use]
    pub fn get(&self, joint: JointName) -> Option<&Keypoint> {
        self.keypoints.get(&joint)
    }

    /// Lookup a joint that must be present with at least `min_visibility`
    ///
    /// # Errors
    ///
    /// Returns `FrameError::MissingInput` when the joint is absent and
    /// `FrameError::LowVisibility` when its confidence is below the threshold
    pub fn require(&self, joint: JointName, min_visibility: f64) -> Result<&Keypoint, FrameError> {
        let keypoint = self
            .keypoints
            .get(&joint)
            .ok_or(FrameError::MissingInput { joint })?;
        if keypoint.visibility.is_nan() || keypoint.visibility < min_visibility {
            return Err(FrameError::LowVisibility {
                joint,
                visibility: keypoint.visibility,
            });
        }
        Ok(keypoint)
    }

    /// Number of joints present
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// True when the estimator reported no joints at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Iterate keypoints in landmark index order
    pub fn iter(&self) -> btree_map::Values<'_, JointName, Keypoint> {
        self.keypoints.values()
    }
}

impl FromIterator<Keypoint> for Frame {
    fn from_iter<I: IntoIterator<Item = Keypoint>>(iter: I) -> Self {
        let mut frame = Self::new();
        for keypoint in iter {
            frame.insert(keypoint);
        }
        frame
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Keypoint;
    type IntoIter = btree_map::Values<'a, JointName, Keypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_missing_and_low_visibility() {
        let frame = Frame::new()
            .with(Keypoint::new(JointName::LeftHip, 0.5, 0.5).with_visibility(0.2))
            .with(Keypoint::new(JointName::LeftAnkle, 0.6, 0.5));

        assert!(frame.require(JointName::LeftAnkle, 0.5).is_ok());
        assert!(matches!(
            frame.require(JointName::LeftHip, 0.5),
            Err(FrameError::LowVisibility {
                joint: JointName::LeftHip,
                ..
            })
        ));
        assert_eq!(
            frame.require(JointName::LeftShoulder, 0.5),
            Err(FrameError::MissingInput {
                joint: JointName::LeftShoulder
            })
        );
    }

    #[test]
    fn test_require_rejects_nan_visibility() {
        let frame =
            Frame::new().with(Keypoint::new(JointName::LeftHip, 0.5, 0.5).with_visibility(f64::NAN));

        assert!(matches!(
            frame.require(JointName::LeftHip, 0.5),
            Err(FrameError::LowVisibility {
                joint: JointName::LeftHip,
                ..
            })
        ));
    }

    #[test]
    fn test_iteration_follows_landmark_order() {
        let frame: Frame = [
            Keypoint::new(JointName::LeftAnkle, 0.0, 0.0),
            Keypoint::new(JointName::Nose, 0.0, 0.0),
            Keypoint::new(JointName::LeftShoulder, 0.0, 0.0),
        ]
        .into_iter()
        .collect();

        let order: Vec<JointName> = frame.iter().map(|k| k.name).collect();
        assert_eq!(
            order,
            vec![
                JointName::Nose,
                JointName::LeftShoulder,
                JointName::LeftAnkle
            ]
        );
    }
}
