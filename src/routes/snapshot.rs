// ABOUTME: One-shot snapshot analysis route returning landmarks and the detected exercise
// ABOUTME: Runs the pose estimator and start-pose classifier on a single posted payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Snapshot analysis
//!
//! Accepts the same JSON bodies as the live socket. No session is created;
//! the response only reports what the estimator saw and which exercise the
//! pose would lock in.

use crate::constants::routes;
use crate::errors::{AppError, AppResult};
use crate::models::ExerciseKind;
use crate::pose::{EstimatorError, FramePayload, LandmarkPayload};
use crate::protocol::InboundMessage;
use crate::resources::ServerResources;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    /// Landmarks recognised in the payload, in joint order
    pub landmarks: Vec<LandmarkPayload>,
    /// Exercise whose start pose the frame shows, `none` if any
    pub detected_exercise: ExerciseKind,
}

/// Snapshot routes implementation
pub struct SnapshotRoutes;

impl SnapshotRoutes {
    /// Create the snapshot analysis route
    pub fn routes(resources: ServerResources) -> Router {
        Router::new()
            .route(routes::ANALYZE_SNAPSHOT, post(Self::analyze_snapshot))
            .with_state(resources)
    }

    async fn analyze_snapshot(
        State(resources): State<ServerResources>,
        Json(message): Json<InboundMessage>,
    ) -> AppResult<Json<SnapshotResponse>> {
        let payload =
            FramePayload::try_from(message).map_err(|e| AppError::invalid_format(e.to_string()))?;

        let frame = resources
            .estimator
            .estimate(payload)
            .await
            .map_err(|e| match e {
                EstimatorError::UnsupportedPayload(_) => {
                    AppError::unsupported_payload(e.to_string())
                }
                EstimatorError::Failed(_) => {
                    AppError::external_service(resources.estimator.name(), e.to_string())
                }
            })?
            .ok_or_else(AppError::no_person_detected)?;

        let detected_exercise = resources.classifier.classify_start(&frame);
        debug!(exercise = %detected_exercise, keypoints = frame.len(), "Snapshot analysed");

        Ok(Json(SnapshotResponse {
            landmarks: frame.iter().map(LandmarkPayload::from).collect(),
            detected_exercise,
        }))
    }
}
