// ABOUTME: Prediction route handler mapping raw athlete JSON to profile and predictions
// ABOUTME: Validation failures become 400 responses naming the field and bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use super::json_rejection;
use crate::errors::AppError;
use crate::models::RawAthleteInput;
use crate::service::{CoachService, PredictionOutcome};

/// Prediction routes
pub struct PredictRoutes;

impl PredictRoutes {
    /// Create the prediction route
    pub fn routes(service: CoachService) -> Router {
        Router::new()
            .route("/predict", post(Self::handle_predict))
            .with_state(service)
    }

    async fn handle_predict(
        State(service): State<CoachService>,
        body: Result<Json<RawAthleteInput>, JsonRejection>,
    ) -> Result<Json<PredictionOutcome>, AppError> {
        let Json(raw) = body.map_err(|rejection| json_rejection(&rejection))?;
        let outcome = service.predict(&raw)?;
        Ok(Json(outcome))
    }
}
