// ABOUTME: Service layer exposing the predict and coach-chat operations
// ABOUTME: Composes normalizer, prediction engine, and dialogue orchestrator behind one cloneable handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach Service
//!
//! Transport-neutral entry point used by the HTTP routes and the CLI.
//!
//! - [`CoachService::predict`] normalizes raw input and runs the three models.
//! - [`CoachService::coach_chat`] answers one question for a stateless caller
//!   that resends the athlete data, predictions and history on every turn.

use std::sync::Arc;

use para_core::errors::PipelineError;
use para_core::models::{
    AthleteProfile, DialogueTurn, PredictionRecord, RawAthleteInput, StructuredReply,
};
use para_intelligence::{FeatureNormalizer, PredictionEngine};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::coaching::{effective_question, CoachingContext, DialogueOrchestrator, GenerationSettings};
use crate::config::ServerConfig;
use crate::llm::LlmProvider;

/// Result of a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Canonical profile the predictions were made for
    pub input: AthleteProfile,
    /// Model outputs
    pub predictions: PredictionRecord,
}

/// One coaching question from a stateless caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachChatRequest {
    /// Canonical athlete profile, as returned by predict
    #[serde(default)]
    pub athlete_data: Option<AthleteProfile>,
    /// Predictions for that profile, as returned by predict
    #[serde(default)]
    pub predictions: Option<PredictionRecord>,
    /// Turns completed so far, oldest first
    #[serde(default)]
    pub conversation_history: Vec<DialogueTurn>,
    /// New question; blank asks for a general overview
    #[serde(default)]
    pub user_question: String,
}

/// Coach reply plus the history to send with the next question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachChatResponse {
    /// Structured reply
    pub response: StructuredReply,
    /// Question that was answered
    pub question: String,
    /// History including this turn
    pub conversation_history: Vec<DialogueTurn>,
}

/// The predict and coach-chat operations
#[derive(Debug, Clone)]
pub struct CoachService {
    normalizer: FeatureNormalizer,
    engine: PredictionEngine,
    orchestrator: DialogueOrchestrator,
}

impl CoachService {
    /// Service with reference models and default generation settings
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_components(
            FeatureNormalizer::default(),
            PredictionEngine::default(),
            DialogueOrchestrator::new(provider),
        )
    }

    /// Service using the generation settings from configuration
    #[must_use]
    pub fn from_config(provider: Arc<dyn LlmProvider>, config: &ServerConfig) -> Self {
        Self::with_components(
            FeatureNormalizer::default(),
            PredictionEngine::default(),
            DialogueOrchestrator::with_settings(provider, GenerationSettings::from(&config.llm)),
        )
    }

    /// Service over explicit components
    #[must_use]
    pub const fn with_components(
        normalizer: FeatureNormalizer,
        engine: PredictionEngine,
        orchestrator: DialogueOrchestrator,
    ) -> Self {
        Self {
            normalizer,
            engine,
            orchestrator,
        }
    }

    /// Prediction engine in use
    #[must_use]
    pub const fn engine(&self) -> &PredictionEngine {
        &self.engine
    }

    /// Dialogue orchestrator in use
    #[must_use]
    pub const fn orchestrator(&self) -> &DialogueOrchestrator {
        &self.orchestrator
    }

    /// Normalize raw input and predict stamina, fatigue and injury risk
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input or a model error if any model
    /// fails.
    #[instrument(skip_all)]
    pub fn predict(&self, raw: &RawAthleteInput) -> Result<PredictionOutcome, PipelineError> {
        let input = self.normalizer.normalize(raw)?;
        let predictions = self.engine.predict(&input)?;
        info!(
            sport = %input.sport_type,
            risk = %predictions.injury_risk_label(),
            "prediction completed"
        );
        Ok(PredictionOutcome { input, predictions })
    }

    /// Answer one coaching question
    ///
    /// # Errors
    ///
    /// Returns a context error when athlete data or predictions are absent, a
    /// validation error when they are out of range or inconsistent, and a
    /// generation error when no valid reply could be produced.
    #[instrument(skip_all, fields(history = request.conversation_history.len()))]
    pub async fn coach_chat(
        &self,
        request: CoachChatRequest,
    ) -> Result<CoachChatResponse, PipelineError> {
        let mut context = CoachingContext::from_parts(
            request.athlete_data,
            request.predictions,
            request.conversation_history,
        )?;
        context.athlete_data().validate()?;
        self.check_predictions(context.predictions())?;

        let question = effective_question(&request.user_question).to_owned();
        let response = self.orchestrator.respond(&mut context, &question).await?;

        Ok(CoachChatResponse {
            response,
            question,
            conversation_history: context.into_history(),
        })
    }

    /// Reject predictions whose values or label break the output contract
    fn check_predictions(&self, predictions: &PredictionRecord) -> Result<(), PipelineError> {
        predictions.validate()?;
        let expected = self
            .engine
            .classifier()
            .classify(predictions.injury_risk_score())?;
        if expected != predictions.injury_risk_label() {
            return Err(PipelineError::validation(
                "injury_risk_label",
                predictions.injury_risk_label(),
                format!(
                    "{expected} for injury_risk_score {}",
                    predictions.injury_risk_score()
                ),
            ));
        }
        Ok(())
    }
}
