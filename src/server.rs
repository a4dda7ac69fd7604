// ABOUTME: Server bootstrap binding the listener and serving the RepCoach router
// ABOUTME: Shuts down gracefully on Ctrl-C, dropping every live session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// HTTP and WebSocket server
#[derive(Debug, Clone)]
pub struct RepCoachServer {
    resources: ServerResources,
}

impl RepCoachServer {
    /// Server over the given resources
    #[must_use]
    pub const fn new(resources: ServerResources) -> Self {
        Self { resources }
    }

    /// Bind the configured address and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or serving fails
    pub async fn run(self) -> AppResult<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| AppError::config(format!("Failed to bind {address}")).with_source(e))?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// # Errors
    ///
    /// Returns an error if the server loop fails
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> AppResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_address = listener
            .local_addr()
            .map_or_else(|_| "unknown".to_owned(), |addr| addr.to_string());
        info!(address = %local_address, "RepCoach server listening");

        let app = routes::router(self.resources);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::internal("Server loop failed").with_source(e))?;

        info!("RepCoach server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
    }
}
