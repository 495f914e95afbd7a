// ABOUTME: Injury risk model combining fatigue, soreness, stress, and sleep quality
// ABOUTME: Outputs a continuous 0-1 risk score; labels are assigned by the risk classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{FatigueCoefficients, ModelFailure, PerformanceModel};
use crate::features::{index, FeatureVector};

/// Coefficients of the injury risk model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InjuryRiskCoefficients {
    /// Fatigue sub-estimate
    pub fatigue: FatigueCoefficients,
    /// Sleep quality (0-10) at the reference sleep duration
    pub sleep_quality_baseline: f64,
    /// Sleep quality points per hour above the reference duration
    pub sleep_quality_per_hour: f64,
    /// Sleep duration with neutral effect on sleep quality
    pub reference_sleep_hours: f64,
    /// Soreness points per fatigue index point
    pub soreness_per_fatigue: f64,
    /// Soreness contribution of the mean training exertion
    pub soreness_exertion: f64,
    /// Stress at zero fatigue and zero sleep quality
    pub stress_baseline: f64,
    /// Stress points per fatigue index point
    pub stress_per_fatigue: f64,
    /// Stress points removed per sleep quality point
    pub stress_per_sleep_quality: f64,
    /// Risk per fatigue index point
    pub fatigue_weight: f64,
    /// Risk per soreness point
    pub soreness_weight: f64,
    /// Risk per stress point
    pub stress_weight: f64,
    /// Risk removed per sleep quality point
    pub sleep_quality_weight: f64,
    /// Age above which risk starts to accumulate
    pub age_threshold: f64,
    /// Risk per year above the age threshold
    pub age_weight: f64,
}

impl Default for InjuryRiskCoefficients {
    fn default() -> Self {
        Self {
            fatigue: FatigueCoefficients::default(),
            sleep_quality_baseline: 5.0,
            sleep_quality_per_hour: 0.8,
            reference_sleep_hours: 7.0,
            soreness_per_fatigue: 0.6,
            // 0.3 × (mean RPE 6 - 3)
            soreness_exertion: 0.9,
            stress_baseline: 3.0,
            stress_per_fatigue: 0.4,
            stress_per_sleep_quality: 0.2,
            fatigue_weight: 0.08,
            soreness_weight: 0.06,
            stress_weight: 0.04,
            sleep_quality_weight: 0.03,
            age_threshold: 35.0,
            age_weight: 0.002,
        }
    }
}

/// Predicts injury risk on a 0-1 scale
#[derive(Debug, Clone, Default)]
pub struct InjuryRiskModel {
    coefficients: InjuryRiskCoefficients,
}

impl InjuryRiskModel {
    /// Model with custom coefficients
    #[must_use]
    pub const fn new(coefficients: InjuryRiskCoefficients) -> Self {
        Self { coefficients }
    }
}

impl PerformanceModel for InjuryRiskModel {
    fn name(&self) -> &'static str {
        "injury_risk"
    }

    fn output_range(&self) -> RangeInclusive<f64> {
        0.0..=1.0
    }

    fn infer(&self, features: &FeatureVector) -> Result<f64, ModelFailure> {
        features.ensure_well_formed()?;
        let c = &self.coefficients;

        let fatigue_index = c.fatigue.fatigue_index(features);
        let sleep = features.get(index::SLEEP_HOURS);
        let age = features.get(index::AGE);

        let sleep_quality = (c.sleep_quality_baseline
            + c.sleep_quality_per_hour * (sleep - c.reference_sleep_hours))
            .clamp(0.0, 10.0);
        let soreness =
            (c.soreness_per_fatigue * fatigue_index + c.soreness_exertion).clamp(0.0, 10.0);
        let stress = (c.stress_baseline + c.stress_per_fatigue * fatigue_index
            - c.stress_per_sleep_quality * sleep_quality)
            .clamp(0.0, 10.0);

        let risk = c.fatigue_weight * fatigue_index
            + c.soreness_weight * soreness
            + c.stress_weight * stress
            - c.sleep_quality_weight * sleep_quality
            + c.age_weight * (age - c.age_threshold).max(0.0);

        if risk.is_finite() {
            Ok(risk.clamp(0.0, 1.0))
        } else {
            Err(ModelFailure::NonFiniteOutput)
        }
    }
}
