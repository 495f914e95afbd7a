// ABOUTME: Normalization, prediction models, and risk classification for para-athletes
// ABOUTME: Turns raw athlete input into a canonical feature vector and a prediction record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Para Intelligence
//!
//! Synchronous, side-effect free half of the pipeline:
//!
//! ```text
//! RawAthleteInput ─► FeatureNormalizer ─► AthleteProfile
//!                                          │
//!                                          ▼
//!                          FeatureVector (fixed 21-slot order)
//!                                          │
//!               ┌──────────────────────────┼──────────────────────────┐
//!               ▼                          ▼                          ▼
//!         StaminaModel               FatigueModel              InjuryRiskModel
//!               └──────────────► PredictionEngine ◄───────────────────┘
//!                                          │ RiskClassifier
//!                                          ▼
//!                                  PredictionRecord
//! ```

/// Canonical feature vector shared by every model
pub mod features;

/// Performance model trait and the three reference models
pub mod models;

/// Free-text canonicalization and bound validation
pub mod normalizer;

/// Typo-tolerant matching of typed category labels
pub mod choices;

/// Prediction engine assembling the three model outputs
pub mod engine;

/// Injury risk score to label classification
pub mod risk;

pub use choices::{match_choice, ChoiceMatch};
pub use engine::PredictionEngine;
pub use features::FeatureVector;
pub use models::{FatigueModel, InjuryRiskModel, ModelFailure, PerformanceModel, StaminaModel};
pub use normalizer::FeatureNormalizer;
pub use risk::RiskClassifier;
