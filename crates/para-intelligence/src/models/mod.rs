// ABOUTME: Performance model contract shared by the stamina, fatigue, and injury-risk models
// ABOUTME: Each model maps the canonical feature vector to one bounded continuous output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Performance Models
//!
//! All three models implement [`PerformanceModel`] and read the same
//! [`FeatureVector`] schema. They are pure: identical vectors always produce
//! bit-identical outputs, and they hold no interior mutability, so a single
//! instance can serve concurrent requests.
//!
//! Coefficients are fitted to the synthetic reference population the
//! original regressors were trained on:
//!
//! - daily training hours are recovered from calorie intake
//!   (`1800 kcal + 250 kcal per training hour`),
//! - weekly load is `hours × mean RPE × training days`,
//! - fatigue rises with normalized load and falls with sleep,
//! - stamina rises with training volume and sleep and falls with fatigue,
//! - injury risk combines fatigue, muscle soreness, stress and sleep quality.

mod fatigue;
mod injury_risk;
mod load;
mod stamina;

pub use fatigue::{FatigueCoefficients, FatigueModel};
pub use injury_risk::{InjuryRiskCoefficients, InjuryRiskModel};
pub use load::{LoadCoefficients, TrainingLoadEstimate};
pub use stamina::{StaminaCoefficients, StaminaModel};

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::features::FeatureVector;

/// Why a model could not produce an output
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelFailure {
    /// Feature vector has the wrong number of slots
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch {
        /// Schema length
        expected: usize,
        /// Received length
        actual: usize,
    },
    /// A feature slot is NaN or infinite
    #[error("feature `{feature}` is not a finite number")]
    NonFiniteFeature {
        /// Name of the slot
        feature: &'static str,
    },
    /// A one-hot block has no slot set, or more than one
    #[error("one-hot block `{block}` must name exactly one category")]
    AmbiguousCategory {
        /// Name of the categorical feature
        block: &'static str,
    },
    /// The model computed a NaN or infinite output
    #[error("model produced a non-finite output")]
    NonFiniteOutput,
    /// The model could not run for another reason
    #[error("{0}")]
    Inference(String),
}

/// A predictive model over the canonical feature vector
pub trait PerformanceModel: Send + Sync {
    /// Stable model name used in errors and logs
    fn name(&self) -> &'static str;

    /// Range every output must fall within
    fn output_range(&self) -> RangeInclusive<f64>;

    /// Run inference
    ///
    /// # Errors
    ///
    /// Returns [`ModelFailure`] when the vector is malformed or inference fails.
    fn infer(&self, features: &FeatureVector) -> Result<f64, ModelFailure>;
}
