// ABOUTME: Fatigue model driven by training load, sleep deficit, hydration, and resting heart rate
// ABOUTME: Outputs fatigue on a 0-1 scale; the 0-10 index also feeds the other models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{LoadCoefficients, ModelFailure, PerformanceModel, TrainingLoadEstimate};
use crate::features::{index, FeatureVector};

/// Upper end of the internal fatigue index
const FATIGUE_INDEX_MAX: f64 = 10.0;

/// Coefficients of the fatigue model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueCoefficients {
    /// Training load estimation
    pub load: LoadCoefficients,
    /// Index points at maximum normalized load
    pub load_weight: f64,
    /// Index points removed per hour of sleep above the reference
    pub sleep_weight: f64,
    /// Sleep duration with neutral effect
    pub reference_sleep_hours: f64,
    /// Index at zero load and reference sleep
    pub baseline: f64,
    /// Index points per hydration percentage point below the reference
    pub dehydration_weight: f64,
    /// Hydration level with neutral effect
    pub reference_hydration: f64,
    /// Index points per bpm of resting heart rate above the reference
    pub resting_hr_weight: f64,
    /// Resting heart rate with neutral effect
    pub reference_resting_hr: f64,
}

impl Default for FatigueCoefficients {
    fn default() -> Self {
        Self {
            load: LoadCoefficients::default(),
            load_weight: 6.0,
            sleep_weight: 0.8,
            reference_sleep_hours: 7.0,
            baseline: 3.0,
            dehydration_weight: 0.02,
            reference_hydration: 60.0,
            resting_hr_weight: 0.03,
            reference_resting_hr: 60.0,
        }
    }
}

impl FatigueCoefficients {
    /// Fatigue index on the 0-10 scale of the reference population
    #[must_use]
    pub fn fatigue_index(&self, features: &FeatureVector) -> f64 {
        let load = TrainingLoadEstimate::from_features(features, &self.load);
        let sleep = features.get(index::SLEEP_HOURS);
        let hydration = features.get(index::HYDRATION_LEVEL);
        let resting_hr = features.get(index::HEART_RATE_REST);

        let dehydration = (self.reference_hydration - hydration).max(0.0);
        let raw = self.baseline + self.load_weight * load.normalized_load
            - self.sleep_weight * (sleep - self.reference_sleep_hours)
            + self.dehydration_weight * dehydration
            + self.resting_hr_weight * (resting_hr - self.reference_resting_hr);

        raw.clamp(0.0, FATIGUE_INDEX_MAX)
    }
}

/// Predicts fatigue on a 0-1 scale
#[derive(Debug, Clone, Default)]
pub struct FatigueModel {
    coefficients: FatigueCoefficients,
}

impl FatigueModel {
    /// Model with custom coefficients
    #[must_use]
    pub const fn new(coefficients: FatigueCoefficients) -> Self {
        Self { coefficients }
    }
}

impl PerformanceModel for FatigueModel {
    fn name(&self) -> &'static str {
        "fatigue"
    }

    fn output_range(&self) -> RangeInclusive<f64> {
        0.0..=1.0
    }

    fn infer(&self, features: &FeatureVector) -> Result<f64, ModelFailure> {
        features.ensure_well_formed()?;
        let fatigue = self.coefficients.fatigue_index(features) / FATIGUE_INDEX_MAX;
        if fatigue.is_finite() {
            Ok(fatigue)
        } else {
            Err(ModelFailure::NonFiniteOutput)
        }
    }
}
