// ABOUTME: Main library entry point for the para-athlete coaching service
// ABOUTME: Wires prediction, coaching dialogue, LLM providers, configuration, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Para Coach
//!
//! Turns raw physiological and training inputs for a para-athlete into three
//! performance indicators (stamina, fatigue, injury risk) and a context-aware
//! coaching dialogue conditioned on the athlete profile, the latest predictions
//! and every prior turn.
//!
//! ## Architecture
//!
//! - **`para-core`**: domain models, error taxonomy, field bounds
//! - **`para-intelligence`**: normalization, feature encoding, models, risk labels
//! - **Coaching**: per-session context and the dialogue orchestrator
//! - **LLM**: the text generation capability behind [`llm::LlmProvider`]
//! - **Service / routes**: the two public operations and their thin HTTP binding
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use para_coach::models::RawAthleteInput;
//! use para_coach::service::CoachService;
//! use para_coach::llm::GeminiProvider;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GeminiProvider::from_env()?;
//! let service = CoachService::new(Arc::new(provider));
//! let raw: RawAthleteInput = serde_json::from_str(r#"{"age": 28}"#)?;
//! match service.predict(&raw) {
//!     Ok(outcome) => println!("{}", outcome.predictions.injury_risk_label()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```

/// Coaching context and dialogue orchestration
pub mod coaching;

/// Environment-based configuration
pub mod config;

/// Error types re-exported from `para-core`
pub mod errors;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// The predict and coach-chat operations
pub mod service;

/// Domain models re-exported from `para-core`
pub mod models {
    pub use para_core::models::*;
}

/// Constants re-exported from `para-core`
pub mod constants {
    pub use para_core::constants::*;
}

/// Prediction engine re-exported from `para-intelligence`
pub mod intelligence {
    pub use para_intelligence::*;
}
