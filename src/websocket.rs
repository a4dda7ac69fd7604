// ABOUTME: Live posture WebSocket connection handling
// ABOUTME: Runs one sequential frame loop per connection and replies with feedback messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// NOTE: All `.clone()` calls in this file are Safe - they are necessary for:
// - Arc resource clones handed to each connection's session controller

//! `WebSocket` support for live exercise feedback
//!
//! Each upgraded socket gets its own [`SessionController`]. Frames are read,
//! processed and answered strictly in arrival order; the next frame is not
//! read until the previous reply has been sent.

use crate::protocol::{self, FeedbackMessage};
use crate::resources::ServerResources;
use crate::session::SessionController;
use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Counts one live connection for as long as it is held
struct ConnectionGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> ConnectionGuard<'a> {
    fn register(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        Self { counter }
    }
}

impl Drop for ConnectionGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Accepts live posture connections
#[derive(Debug)]
pub struct LivePostureManager {
    resources: ServerResources,
    active_connections: AtomicUsize,
}

impl LivePostureManager {
    /// Manager sharing `resources` with every connection
    #[must_use]
    pub const fn new(resources: ServerResources) -> Self {
        Self {
            resources,
            active_connections: AtomicUsize::new(0),
        }
    }

    /// Number of sockets currently being served
    #[must_use]
    pub fn active_connections(&self) -> usize {
        self.active_connections.load(Ordering::Relaxed)
    }

    /// Serve one socket until the client closes it or the transport fails
    pub async fn handle_connection(&self, ws: WebSocket) {
        let connection_id = Uuid::new_v4();
        let span = info_span!("live_posture", %connection_id);
        let _connection = ConnectionGuard::register(&self.active_connections);

        async {
            info!(
                active_connections = self.active_connections(),
                "Live posture session started"
            );
            let frames = self.run_session(ws).await;
            info!(frames, "Live posture session ended");
        }
        .instrument(span)
        .await;
    }

    /// Frame loop; returns the number of frames processed
    async fn run_session(&self, ws: WebSocket) -> u64 {
        let (mut ws_tx, mut ws_rx) = ws.split();
        let mut session = SessionController::new(self.resources.clone());
        let mut frames: u64 = 0;

        while let Some(msg) = ws_rx.next().await {
            let decoded = match msg {
                Ok(Message::Text(text)) => protocol::decode_text(&text),
                Ok(Message::Binary(bytes)) => Ok(protocol::decode_binary(bytes)),
                Ok(Message::Close(_)) => break,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "WebSocket receive failed, closing session");
                    break;
                }
            };

            let payload = match decoded {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(error = %e, "Skipping undecodable frame");
                    continue;
                }
            };

            let reply = match session.handle_payload(payload).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(
                        estimator = self.resources.estimator.name(),
                        error = %e,
                        "Skipping frame the pose estimator rejected"
                    );
                    continue;
                }
            };
            frames += 1;

            let Some(text) = reply else {
                debug!("No person in frame, reply suppressed");
                continue;
            };

            let json = match FeedbackMessage::new(text).to_json() {
                Ok(json) => json,
                Err(e) => {
                    warn!(error = %e, "Failed to serialize feedback");
                    continue;
                }
            };

            if let Err(e) = ws_tx.send(Message::Text(json)).await {
                warn!(error = %e, "WebSocket send failed, closing session");
                break;
            }
        }

        let state = session.state();
        debug!(
            exercise = %state.active_exercise,
            rep_count = state.rep_count,
            stage = %state.stage,
            "Discarding session state"
        );
        frames
    }
}
