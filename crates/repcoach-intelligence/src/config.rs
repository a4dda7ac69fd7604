// ABOUTME: Coaching thresholds for start-pose classification, rep counting, and struggle detection
// ABOUTME: Loaded from environment variables with range and ordering validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching configuration.
//!
//! Defaults reproduce the reference thresholds: plank tolerance `0.15`,
//! elbow extended above `160°`, flexed below `90°`, struggle after `5s`.

use chrono::TimeDelta;
use repcoach_core::constants::thresholds;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound for the struggle threshold
const MAX_STRUGGLE_THRESHOLD_SECS: u64 = 3600;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Thresholds that must be ordered are not
    #[error("Invalid threshold ordering: {0}")]
    InvalidOrdering(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error for {name}: {value:?}")]
    Parse {
        /// Environment variable name
        name: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

/// Plank detection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartPoseConfig {
    /// Max normalized vertical offset between aligned joints
    pub tolerance: f64,
}

/// Elbow angle thresholds for the pushup state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PushupThresholds {
    /// Averaged elbow angle above which the arms are extended
    pub extended_angle_deg: f64,
    /// Averaged elbow angle below which the arms are flexed
    pub flexed_angle_deg: f64,
}

/// All tunables used by the per-frame engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoachingConfig {
    /// Joints below this visibility are treated as missing
    pub min_visibility: f64,
    /// Start-pose classifier settings
    pub start_pose: StartPoseConfig,
    /// Pushup angle thresholds
    pub pushup: PushupThresholds,
    /// Seconds spent flexed before encouragement takes over
    pub struggle_threshold_secs: u64,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            min_visibility: thresholds::MIN_KEYPOINT_VISIBILITY,
            start_pose: StartPoseConfig {
                tolerance: thresholds::START_POSE_TOLERANCE,
            },
            pushup: PushupThresholds {
                extended_angle_deg: thresholds::PUSHUP_EXTENDED_ANGLE_DEG,
                flexed_angle_deg: thresholds::PUSHUP_FLEXED_ANGLE_DEG,
            },
            struggle_threshold_secs: thresholds::STRUGGLE_THRESHOLD_SECS,
        }
    }
}

impl CoachingConfig {
    /// Load coaching configuration from environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparseable, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            min_visibility: parse_env("MIN_KEYPOINT_VISIBILITY", defaults.min_visibility)?,
            start_pose: StartPoseConfig {
                tolerance: parse_env("START_POSE_TOLERANCE", defaults.start_pose.tolerance)?,
            },
            pushup: PushupThresholds {
                extended_angle_deg: parse_env(
                    "PUSHUP_EXTENDED_ANGLE",
                    defaults.pushup.extended_angle_deg,
                )?,
                flexed_angle_deg: parse_env(
                    "PUSHUP_FLEXED_ANGLE",
                    defaults.pushup.flexed_angle_deg,
                )?,
            },
            struggle_threshold_secs: parse_env(
                "STRUGGLE_THRESHOLD_SECS",
                defaults.struggle_threshold_secs,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and ordering of all thresholds
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(ConfigError::ValueOutOfRange(
                "MIN_KEYPOINT_VISIBILITY must be within [0, 1]",
            ));
        }
        if !(self.start_pose.tolerance > 0.0 && self.start_pose.tolerance <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "START_POSE_TOLERANCE must be within (0, 1]",
            ));
        }
        for angle in [self.pushup.extended_angle_deg, self.pushup.flexed_angle_deg] {
            if !(angle > 0.0 && angle < 180.0) {
                return Err(ConfigError::ValueOutOfRange(
                    "pushup angle thresholds must be within (0, 180)",
                ));
            }
        }
        if self.pushup.flexed_angle_deg >= self.pushup.extended_angle_deg {
            return Err(ConfigError::InvalidOrdering(
                "PUSHUP_FLEXED_ANGLE must be below PUSHUP_EXTENDED_ANGLE",
            ));
        }
        if self.struggle_threshold_secs == 0
            || self.struggle_threshold_secs > MAX_STRUGGLE_THRESHOLD_SECS
        {
            return Err(ConfigError::ValueOutOfRange(
                "STRUGGLE_THRESHOLD_SECS must be within [1, 3600]",
            ));
        }
        Ok(())
    }

    /// Struggle threshold as a time delta
    #[must_use]
    pub fn struggle_threshold(&self) -> TimeDelta {
        let secs = self
            .struggle_threshold_secs
            .min(MAX_STRUGGLE_THRESHOLD_SECS);
        TimeDelta::seconds(i64::try_from(secs).unwrap_or(0))
    }
}

fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CoachingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.struggle_threshold(), TimeDelta::seconds(5));
    }

    #[test]
    fn test_rejects_inverted_angles() {
        let mut config = CoachingConfig::default();
        config.pushup.flexed_angle_deg = 170.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOrdering(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut config = CoachingConfig::default();
        config.min_visibility = 1.5;
        assert!(config.validate().is_err());

        let mut config = CoachingConfig::default();
        config.start_pose.tolerance = 0.0;
        assert!(config.validate().is_err());

        let mut config = CoachingConfig::default();
        config.struggle_threshold_secs = 0;
        assert!(config.validate().is_err());

        let mut config = CoachingConfig::default();
        config.pushup.extended_angle_deg = f64::NAN;
        assert!(config.validate().is_err());
    }
}
