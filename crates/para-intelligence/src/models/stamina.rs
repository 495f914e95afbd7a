// ABOUTME: Stamina model rewarding training volume and sleep and penalizing fatigue
// ABOUTME: Outputs a 0-100 stamina level from the canonical feature vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{FatigueCoefficients, ModelFailure, PerformanceModel, TrainingLoadEstimate};
use crate::features::{index, FeatureVector};

/// Coefficients of the stamina model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaminaCoefficients {
    /// Fatigue sub-estimate
    pub fatigue: FatigueCoefficients,
    /// Stamina at zero training, reference sleep and reference fatigue
    pub baseline: f64,
    /// Points per daily training hour
    pub training_hours_weight: f64,
    /// Points per hour of sleep above the reference
    pub sleep_weight: f64,
    /// Sleep duration with neutral effect
    pub reference_sleep_hours: f64,
    /// Points removed per fatigue index point above the reference
    pub fatigue_weight: f64,
    /// Fatigue index with neutral effect
    pub reference_fatigue_index: f64,
    /// Points removed per bpm of resting heart rate above the reference
    pub resting_hr_weight: f64,
    /// Resting heart rate with neutral effect
    pub reference_resting_hr: f64,
}

impl Default for StaminaCoefficients {
    fn default() -> Self {
        Self {
            fatigue: FatigueCoefficients::default(),
            baseline: 40.0,
            training_hours_weight: 2.5,
            sleep_weight: 3.0,
            reference_sleep_hours: 6.0,
            fatigue_weight: 3.0,
            reference_fatigue_index: 5.0,
            resting_hr_weight: 0.2,
            reference_resting_hr: 60.0,
        }
    }
}

/// Predicts stamina on a 0-100 scale
#[derive(Debug, Clone, Default)]
pub struct StaminaModel {
    coefficients: StaminaCoefficients,
}

impl StaminaModel {
    /// Model with custom coefficients
    #[must_use]
    pub const fn new(coefficients: StaminaCoefficients) -> Self {
        Self { coefficients }
    }
}

impl PerformanceModel for StaminaModel {
    fn name(&self) -> &'static str {
        "stamina"
    }

    fn output_range(&self) -> RangeInclusive<f64> {
        0.0..=100.0
    }

    fn infer(&self, features: &FeatureVector) -> Result<f64, ModelFailure> {
        features.ensure_well_formed()?;
        let c = &self.coefficients;

        let load = TrainingLoadEstimate::from_features(features, &c.fatigue.load);
        let fatigue_index = c.fatigue.fatigue_index(features);
        let sleep = features.get(index::SLEEP_HOURS);
        let resting_hr = features.get(index::HEART_RATE_REST);

        let stamina = c.baseline + c.training_hours_weight * load.daily_hours
            + c.sleep_weight * (sleep - c.reference_sleep_hours)
            - c.fatigue_weight * (fatigue_index - c.reference_fatigue_index)
            - c.resting_hr_weight * (resting_hr - c.reference_resting_hr);

        if stamina.is_finite() {
            Ok(stamina.clamp(0.0, 100.0))
        } else {
            Err(ModelFailure::NonFiniteOutput)
        }
    }
}
