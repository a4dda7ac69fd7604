// ABOUTME: WebSocket route handler for the live posture analysis stream
// ABOUTME: Upgrades the connection and hands the socket to the live posture manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::routes;
use crate::websocket::LivePostureManager;
use axum::{
    extract::{
        ws::{WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{debug, info};

/// WebSocket routes implementation
pub struct WebSocketRoutes;

impl WebSocketRoutes {
    /// Create the live posture route with an injected `LivePostureManager`
    pub fn routes(manager: Arc<LivePostureManager>) -> Router {
        Router::new()
            .route(routes::LIVE_POSTURE, get(Self::handle_websocket))
            .with_state(manager)
    }

    /// Upgrade to WebSocket and delegate the socket to the manager
    async fn handle_websocket(
        ws: WebSocketUpgrade,
        State(manager): State<Arc<LivePostureManager>>,
    ) -> impl IntoResponse {
        info!("New live posture connection request");

        ws.on_upgrade(move |socket: WebSocket| async move {
            debug!("WebSocket upgraded, delegating to manager");
            manager.handle_connection(socket).await;
        })
    }
}
