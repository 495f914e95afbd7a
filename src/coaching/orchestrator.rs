// ABOUTME: Dialogue orchestrator turning a question and session state into a structured reply
// ABOUTME: Timeout-bounded provider calls, one regeneration on contract or transport failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dialogue Orchestrator
//!
//! One turn:
//!
//! 1. Build the prompt from the session and the question.
//! 2. Call the provider, bounded by the configured timeout.
//! 3. Parse the reply against the four-section contract.
//! 4. On a contract violation, transport failure or timeout, try exactly once
//!    more. A contract violation is regenerated with a reminder naming the
//!    sections to fix.
//! 5. Append the turn to history only once a valid reply exists.
//!
//! Provider rejections (bad credentials, missing configuration) are returned
//! immediately without a second attempt.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use para_core::constants::{defaults, reply::MAX_GENERATION_ATTEMPTS};
use para_core::errors::{AppError, ErrorCode, GenerationCause, PipelineError};
use para_core::models::StructuredReply;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use super::context::{CoachingContext, SharedCoachingContext};
use super::prompt::CoachingPrompt;
use crate::config::LlmConfig;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Per-call generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Model override; `None` uses the provider default
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Output token cap
    pub max_tokens: Option<u32>,
    /// Upper bound on a single provider call
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: None,
            temperature: Some(defaults::LLM_TEMPERATURE),
            max_tokens: None,
            timeout: Duration::from_secs(defaults::LLM_TIMEOUT_SECS),
        }
    }
}

impl From<&LlmConfig> for GenerationSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: Some(config.model.clone()),
            temperature: Some(config.temperature),
            max_tokens: None,
            timeout: config.timeout(),
        }
    }
}

impl GenerationSettings {
    /// Same settings with a different timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        let mut request = ChatRequest::new(messages);
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request
    }
}

/// Produces structured coaching replies through an [`LlmProvider`]
#[derive(Clone)]
pub struct DialogueOrchestrator {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
}

impl fmt::Debug for DialogueOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogueOrchestrator")
            .field("provider", &self.provider.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl DialogueOrchestrator {
    /// Orchestrator with default generation settings
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_settings(provider, GenerationSettings::default())
    }

    /// Orchestrator with explicit generation settings
    #[must_use]
    pub fn with_settings(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// Generation settings in use
    #[must_use]
    pub const fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Answer `question` and append the turn to `context`
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Generation`] when no valid reply was produced
    /// within the retry policy. History is left untouched on failure.
    #[instrument(
        skip_all,
        fields(provider = self.provider.name(), turn = context.conversation_history().len() + 1)
    )]
    pub async fn respond(
        &self,
        context: &mut CoachingContext,
        question: &str,
    ) -> Result<StructuredReply, PipelineError> {
        let prompt = CoachingPrompt::build(context, question);
        let reply = self.generate(&prompt).await?;
        context.append_turn(prompt.question(), reply.clone());
        Ok(reply)
    }

    /// Answer on a shared session, holding its lock for the whole turn
    ///
    /// # Errors
    ///
    /// Same as [`Self::respond`].
    pub async fn respond_shared(
        &self,
        session: &SharedCoachingContext,
        question: &str,
    ) -> Result<StructuredReply, PipelineError> {
        let mut context = session.lock().await;
        self.respond(&mut context, question).await
    }

    async fn generate(&self, prompt: &CoachingPrompt) -> Result<StructuredReply, PipelineError> {
        let mut messages = prompt.messages();
        let mut last_error = None;

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            match self.attempt(messages.clone()).await {
                Ok(text) => match StructuredReply::parse(text.as_str()) {
                    Ok(reply) => {
                        info!(attempt, "coaching reply accepted");
                        return Ok(reply);
                    }
                    Err(problem) => {
                        warn!(attempt, error = %problem, "coaching reply broke the section contract");
                        messages = prompt.regeneration_messages(&text, &problem);
                        last_error = Some(PipelineError::generation(
                            GenerationCause::MalformedReply,
                            problem.to_string(),
                        ));
                    }
                },
                Err(error) if error.is_retryable() => {
                    warn!(attempt, error = %error, "generation attempt failed");
                    messages = prompt.messages();
                    last_error = Some(error);
                }
                Err(error) => {
                    warn!(attempt, error = %error, "generation rejected by provider");
                    return Err(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            PipelineError::generation(
                GenerationCause::Unavailable,
                "no generation attempt was made",
            )
        }))
    }

    async fn attempt(&self, messages: Vec<ChatMessage>) -> Result<String, PipelineError> {
        let request = self.settings.request(messages);
        match timeout(self.settings.timeout, self.provider.complete(&request)).await {
            Ok(Ok(response)) => Ok(response.content),
            Ok(Err(error)) => Err(generation_error(&error)),
            Err(_) => Err(PipelineError::generation(
                GenerationCause::Timeout,
                format!(
                    "{} did not answer within {} ms",
                    self.provider.name(),
                    self.settings.timeout.as_millis()
                ),
            )),
        }
    }
}

/// Map a provider failure onto the generation taxonomy
fn generation_error(error: &AppError) -> PipelineError {
    let cause = match error.code {
        ErrorCode::ExternalTimeout => GenerationCause::Timeout,
        ErrorCode::ExternalAuthFailed
        | ErrorCode::ConfigMissing
        | ErrorCode::ConfigInvalid
        | ErrorCode::InvalidInput => GenerationCause::Rejected,
        _ if !error.retryable => GenerationCause::Rejected,
        _ => GenerationCause::Unavailable,
    };
    PipelineError::generation(cause, error.message.clone())
}
