// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Sample athlete, scripted LLM provider, stub models, and reply builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `para_coach`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use std::collections::VecDeque;
use std::env;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use para_coach::coaching::CoachingContext;
use para_coach::errors::{AppError, ErrorCode};
use para_coach::intelligence::{
    FeatureNormalizer, FeatureVector, ModelFailure, PerformanceModel, PredictionEngine,
};
use para_coach::llm::{ChatRequest, ChatResponse, LlmProvider};
use para_coach::models::{AthleteProfile, RawAthleteInput};
use para_coach::service::CoachService;
use serde_json::json;
use tokio::time::sleep;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Athlete fixtures
// ============================================================================

/// The documented wheelchair-racing athlete, as a form would submit it
pub fn wheelchair_racer_raw() -> RawAthleteInput {
    serde_json::from_value(json!({
        "age": 28,
        "gender": "Male",
        "disability_type": "spinal-cord",
        "sport": "wheelchair racing",
        "weight_kg": 75,
        "height_cm": 175,
        "training_days_per_week": 6,
        "sleep_hours": 7.5,
        "heart_rate_rest": 60,
        "daily_calorie_intake": 2600,
        "protein_intake_g": 130,
        "water_intake_liters": 3.0,
        "hydration_level": 75
    }))
    .expect("fixture is valid raw input")
}

/// Canonical profile for [`wheelchair_racer_raw`]
pub fn wheelchair_racer() -> AthleteProfile {
    FeatureNormalizer::default()
        .normalize(&wheelchair_racer_raw())
        .expect("fixture normalizes")
}

/// Fresh coaching context for the wheelchair racer with reference predictions
pub fn wheelchair_racer_context() -> CoachingContext {
    let athlete = wheelchair_racer();
    let predictions = PredictionEngine::default()
        .predict(&athlete)
        .expect("reference models predict");
    CoachingContext::new(athlete, predictions)
}

// ============================================================================
// Reply fixtures
// ============================================================================

/// A reply that satisfies the four-section contract
pub fn valid_reply_text(topic: &str) -> String {
    format!(
        "SUMMARY\nYour numbers look steady; {topic}.\n\n\
         CALORIES & DIET\nAim for about 2600 kcal with 130 g protein.\n\n\
         SAMPLE DAY MEAL PLAN\nBreakfast: oats and eggs. Lunch: rice and chicken.\n\n\
         ACTIONS — TRAINING + RECOVERY\n- Keep two easy days.\n- Sleep 8 hours."
    )
}

/// A reply missing the meal plan section
pub fn reply_missing_meal_plan() -> String {
    "SUMMARY\nGood work.\n\n\
     CALORIES & DIET\nEat enough.\n\n\
     ACTIONS — TRAINING + RECOVERY\nRest well."
        .to_owned()
}

// ============================================================================
// Scripted LLM provider
// ============================================================================

/// One scripted provider outcome
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Answer with this text
    Reply(String),
    /// Wait, then answer with this text
    Delayed(Duration, String),
    /// Fail with this error code and message
    Fail(ErrorCode, String),
}

/// Provider that plays back queued outcomes and records every request
///
/// Once the queue is empty it answers with a valid reply.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ChatRequest>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Provider that always answers with a valid reply
    pub fn always_valid() -> Arc<Self> {
        Self::new([])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self) -> Scripted {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Scripted::Reply(valid_reply_text("keep going")))
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let content = match self.next() {
            Scripted::Reply(text) => text,
            Scripted::Delayed(delay, text) => {
                sleep(delay).await;
                text
            }
            Scripted::Fail(code, message) => return Err(AppError::new(code, message)),
        };

        Ok(ChatResponse {
            content,
            model: "scripted-model".to_owned(),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Service over the reference models and a scripted provider
pub fn service_with(provider: Arc<ScriptedProvider>) -> CoachService {
    init_test_logging();
    CoachService::new(provider)
}

// ============================================================================
// Stub models
// ============================================================================

/// Model that always returns the same value
pub struct ConstantModel {
    pub name: &'static str,
    pub value: f64,
    pub range: RangeInclusive<f64>,
}

impl ConstantModel {
    pub fn stamina(value: f64) -> Arc<Self> {
        Arc::new(Self {
            name: "stub_stamina",
            value,
            range: 0.0..=100.0,
        })
    }

    pub fn unit(name: &'static str, value: f64) -> Arc<Self> {
        Arc::new(Self {
            name,
            value,
            range: 0.0..=1.0,
        })
    }
}

impl PerformanceModel for ConstantModel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn output_range(&self) -> RangeInclusive<f64> {
        self.range.clone()
    }

    fn infer(&self, _features: &FeatureVector) -> Result<f64, ModelFailure> {
        Ok(self.value)
    }
}

/// Model that always fails, counting how often it was asked
#[derive(Default)]
pub struct FailingModel {
    pub calls: AtomicUsize,
}

impl PerformanceModel for FailingModel {
    fn name(&self) -> &'static str {
        "broken_fatigue"
    }

    fn output_range(&self) -> RangeInclusive<f64> {
        0.0..=1.0
    }

    fn infer(&self, _features: &FeatureVector) -> Result<f64, ModelFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ModelFailure::Inference("weights not loaded".to_owned()))
    }
}
