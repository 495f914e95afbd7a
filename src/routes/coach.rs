// ABOUTME: Coaching chat route handler for stateless multi-turn dialogue
// ABOUTME: Clients resend athlete data, predictions, and history; the reply returns updated history
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
use crate::service::{CoachChatRequest, CoachChatResponse, CoachService};

/// Coaching dialogue routes
pub struct CoachRoutes;

impl CoachRoutes {
    /// Create the coaching chat route
    pub fn routes(service: CoachService) -> Router {
        Router::new()
            .route("/coach/chat", post(Self::handle_chat))
            .with_state(service)
    }

    async fn handle_chat(
        State(service): State<CoachService>,
        body: Result<Json<CoachChatRequest>, JsonRejection>,
    ) -> Result<Json<CoachChatResponse>, AppError> {
        let Json(request) = body.map_err(|rejection| json_rejection(&rejection))?;
        let response = service.coach_chat(request).await?;
        Ok(Json(response))
    }
}
