// ABOUTME: Centralized resource container for dependency injection in the RepCoach server
// ABOUTME: Holds the configuration, classifier, rep engine, pose estimator and clock as shared Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Everything here is immutable after startup. Per-connection mutable state
//! lives in `SessionController`, never in this container.

use crate::config::environment::ServerConfig;
use crate::pose::{ClientLandmarkEstimator, PoseEstimator};
use repcoach_intelligence::{Clock, ExerciseClassifier, ExerciseEngine, SystemClock};
use std::fmt;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Start-pose classifier
    pub classifier: Arc<ExerciseClassifier>,
    /// Rep state machines keyed by exercise
    pub engine: Arc<ExerciseEngine>,
    /// Converts payloads to frames
    pub estimator: Arc<dyn PoseEstimator>,
    /// Session time source
    pub clock: Arc<dyn Clock>,
}

impl ServerResources {
    /// Resources built from `config` with the client-landmark estimator and wall clock
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let classifier = Arc::new(ExerciseClassifier::new(config.coaching));
        let engine = Arc::new(ExerciseEngine::new(&config.coaching));
        Self {
            config: Arc::new(config),
            classifier,
            engine,
            estimator: Arc::new(ClientLandmarkEstimator),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the pose estimator
    #[must_use]
    pub fn with_estimator(mut self, estimator: Arc<dyn PoseEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the rep engine
    #[must_use]
    pub fn with_engine(mut self, engine: ExerciseEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    /// Replace the classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: ExerciseClassifier) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }
}

impl Default for ServerResources {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

impl fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerResources")
            .field("config", &self.config)
            .field("classifier", &self.classifier)
            .field("engine", &self.engine)
            .field("estimator", &self.estimator.name())
            .finish_non_exhaustive()
    }
}
