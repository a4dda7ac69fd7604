// ABOUTME: RepCoach server binary entry point
// ABOUTME: Loads configuration, initializes logging and serves the live posture API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # RepCoach Server Binary
//!
//! Starts the HTTP and WebSocket server for real-time exercise feedback.

use anyhow::Result;
use clap::Parser;
use repcoach_server::{
    config::environment::ServerConfig, logging, resources::ServerResources,
    server::RepCoachServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "repcoach-server")]
#[command(about = "RepCoach - real-time exercise detection and rep counting")]
pub struct Args {
    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load .env before logging so it can set RUST_LOG and LOG_FORMAT
    let dotenv = dotenvy::dotenv();
    logging::init_from_env()?;
    if let Err(e) = dotenv {
        info!("No .env file loaded: {e}");
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.http_port {
        config.http_port = port;
    }
    info!("{}", config.summary());

    let server = RepCoachServer::new(ServerResources::new(config));
    if let Err(e) = server.run().await {
        error!(error = %e, "Server terminated with an error");
        return Err(e.into());
    }
    Ok(())
}
