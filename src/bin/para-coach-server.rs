// ABOUTME: HTTP server binary exposing the predict and coach-chat operations
// ABOUTME: Loads environment config, initializes logging, builds the Gemini provider, and serves axum routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Para Coach API Server Binary
//!
//! Starts the coaching API with the configured generative-text provider and
//! shuts down gracefully on Ctrl-C.

use std::future::pending;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use para_coach::{
    config::ServerConfig,
    llm::{GeminiProvider, LlmProvider},
    logging::LoggingConfig,
    routes::build_router,
    service::CoachService,
};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "para-coach-server")]
#[command(about = "Para-athlete prediction and coaching API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    LoggingConfig::from_env().init()?;

    info!("Starting Para Coach API");
    info!("{}", config.summary());

    let api_key = config
        .llm
        .api_key
        .clone()
        .context("GEMINI_API_KEY must be set to serve coaching replies")?;
    let provider = GeminiProvider::new(api_key).with_default_model(config.llm.model.clone());
    info!(
        provider = provider.display_name(),
        model = provider.default_model(),
        "LLM provider ready"
    );
    check_provider(&provider).await;

    let service = CoachService::from_config(Arc::new(provider), &config);
    let app = build_router(service, &config.cors);

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    display_available_endpoints(&config);
    info!("Ready to coach!");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

/// Probe the provider once and log the outcome; startup continues either way
async fn check_provider(provider: &dyn LlmProvider) {
    match provider.health_check().await {
        Ok(true) => info!(provider = provider.name(), "LLM provider reachable"),
        Ok(false) => warn!(
            provider = provider.name(),
            "LLM provider refused the configured credentials; coaching replies will fail"
        ),
        Err(e) => warn!(provider = provider.name(), error = %e, "LLM provider health check failed"),
    }
}

/// Resolve when Ctrl-C is received
async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Service Banner:  GET  http://{host}:{port}/");
    info!("   Health Check:    GET  http://{host}:{port}/health");
    info!("   Predict:         POST http://{host}:{port}/predict");
    info!("   Coach Chat:      POST http://{host}:{port}/coach/chat");
    info!("=== End of Endpoint List ===");
}
