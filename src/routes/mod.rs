// ABOUTME: Route module organization for the RepCoach HTTP and WebSocket endpoints
// ABOUTME: Assembles health, snapshot and live posture routes behind tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the RepCoach server
//!
//! Each domain module contains only route definitions and thin handlers
//! that delegate to the session, estimator and classifier layers.

/// Banner and health check routes
pub mod health;
/// One-shot snapshot analysis
pub mod snapshot;
/// Live posture WebSocket route
pub mod websocket;

pub use health::HealthRoutes;
pub use snapshot::{SnapshotResponse, SnapshotRoutes};
pub use websocket::WebSocketRoutes;

use crate::resources::ServerResources;
use crate::websocket::LivePostureManager;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application router
#[must_use]
pub fn router(resources: ServerResources) -> Router {
    let manager = Arc::new(LivePostureManager::new(resources.clone()));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(SnapshotRoutes::routes(resources))
        .merge(WebSocketRoutes::routes(manager))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
