// ABOUTME: Health check and banner route handlers for service monitoring
// ABOUTME: Root lists the available endpoints; /health reports liveness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the banner and health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/health", get(Self::handle_health))
    }

    async fn handle_root() -> Json<Value> {
        Json(json!({
            "message": "Para-athlete coaching API is running.",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": ["/predict", "/coach/chat", "/health"]
        }))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
