// ABOUTME: Route module organization for the coaching HTTP API
// ABOUTME: Assembles health, predict, and coach routes with CORS and request tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the coaching API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to [`CoachService`].

/// Coaching dialogue routes
pub mod coach;
/// Health check and service banner routes
pub mod health;
/// Prediction routes
pub mod predict;

pub use coach::CoachRoutes;
pub use health::HealthRoutes;
pub use predict::PredictRoutes;

use axum::extract::rejection::JsonRejection;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;
use crate::errors::AppError;
use crate::middleware::setup_cors;
use crate::service::CoachService;

/// Build the full application router
#[must_use]
pub fn build_router(service: CoachService, cors: &CorsConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(PredictRoutes::routes(service.clone()))
        .merge(CoachRoutes::routes(service))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(cors))
}

/// Turn a body that failed to parse into an invalid-input error
pub(crate) fn json_rejection(rejection: &JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid JSON body: {}", rejection.body_text()))
}
