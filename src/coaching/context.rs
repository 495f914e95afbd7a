// ABOUTME: Per-session coaching state with athlete profile, predictions, and ordered dialogue turns
// ABOUTME: Append-only history plus a mutex-backed shared handle that serializes concurrent turns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use para_core::errors::PipelineError;
use para_core::models::{AthleteProfile, DialogueTurn, PredictionRecord, StructuredReply};
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

/// Evolving state of one coaching session
///
/// History order is append order. Turns can only be added through
/// [`Self::append_turn`]; there is no API to remove or reorder them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachingContext {
    athlete_data: AthleteProfile,
    predictions: PredictionRecord,
    conversation_history: Vec<DialogueTurn>,
}

impl CoachingContext {
    /// Start a session for an athlete whose predictions are known
    #[must_use]
    pub const fn new(athlete_data: AthleteProfile, predictions: PredictionRecord) -> Self {
        Self {
            athlete_data,
            predictions,
            conversation_history: Vec::new(),
        }
    }

    /// Rebuild a session from parts supplied by a stateless caller
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Context`] naming `athlete_data` or
    /// `predictions` when either is absent.
    pub fn from_parts(
        athlete_data: Option<AthleteProfile>,
        predictions: Option<PredictionRecord>,
        conversation_history: Vec<DialogueTurn>,
    ) -> Result<Self, PipelineError> {
        let athlete_data = athlete_data.ok_or_else(|| PipelineError::context("athlete_data"))?;
        let predictions = predictions.ok_or_else(|| PipelineError::context("predictions"))?;
        Ok(Self {
            athlete_data,
            predictions,
            conversation_history,
        })
    }

    /// Athlete profile the session is about
    #[must_use]
    pub const fn athlete_data(&self) -> &AthleteProfile {
        &self.athlete_data
    }

    /// Latest predictions for the athlete
    #[must_use]
    pub const fn predictions(&self) -> &PredictionRecord {
        &self.predictions
    }

    /// Completed turns, oldest first
    #[must_use]
    pub fn conversation_history(&self) -> &[DialogueTurn] {
        &self.conversation_history
    }

    /// Record a completed exchange at the end of the history
    pub fn append_turn(&mut self, question: impl Into<String>, answer: StructuredReply) {
        self.conversation_history
            .push(DialogueTurn::new(question, answer));
    }

    /// Consume the session and keep only its history
    #[must_use]
    pub fn into_history(self) -> Vec<DialogueTurn> {
        self.conversation_history
    }
}

/// Handle to a coaching session shared between tasks
///
/// The dialogue orchestrator holds the lock for a whole turn, so concurrent
/// questions on the same session are answered one after another and each
/// sees the turns appended before it.
#[derive(Debug, Clone)]
pub struct SharedCoachingContext {
    inner: Arc<Mutex<CoachingContext>>,
}

impl SharedCoachingContext {
    /// Share a session
    #[must_use]
    pub fn new(context: CoachingContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Exclusive access for the duration of a turn
    pub async fn lock(&self) -> MutexGuard<'_, CoachingContext> {
        self.inner.lock().await
    }

    /// Copy of the current state for read-only display
    pub async fn snapshot(&self) -> CoachingContext {
        self.inner.lock().await.clone()
    }
}

impl From<CoachingContext> for SharedCoachingContext {
    fn from(context: CoachingContext) -> Self {
        Self::new(context)
    }
}
