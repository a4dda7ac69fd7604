// ABOUTME: Banner and health check route handlers for service monitoring
// ABOUTME: Answers the root banner used by clients and a health probe for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::constants::{defaults, routes, service_names};
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the banner and health check routes
    pub fn routes() -> Router {
        async fn root_handler() -> Json<Value> {
            Json(json!({ "message": defaults::ROOT_BANNER }))
        }

        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "ok",
                "service": service_names::REPCOACH_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(routes::ROOT, get(root_handler))
            .route(routes::HEALTH, get(health_handler))
    }
}
