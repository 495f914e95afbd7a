// ABOUTME: Maps a continuous injury risk score to a Low, Medium, or High label
// ABOUTME: Fixed monotonic thresholds; scores outside [0, 1] are rejected as contract violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use para_core::constants::risk;
use para_core::errors::PipelineError;
use para_core::models::RiskLabel;

/// Injury risk classifier
///
/// `score < low_upper` is `Low`, `score < medium_upper` is `Medium`, anything
/// else up to `1.0` is `High`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskClassifier {
    low_upper: f64,
    medium_upper: f64,
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self {
            low_upper: risk::LOW_UPPER,
            medium_upper: risk::MEDIUM_UPPER,
        }
    }
}

impl RiskClassifier {
    /// Component name used in errors
    pub const NAME: &'static str = "risk_classifier";

    /// Classify a score
    ///
    /// # Errors
    ///
    /// Returns a model error when the score is NaN, infinite or outside `[0, 1]`.
    pub fn classify(&self, score: f64) -> Result<RiskLabel, PipelineError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(PipelineError::model(
                Self::NAME,
                format!("injury risk score {score} is outside [0, 1]"),
            ));
        }
        Ok(if score < self.low_upper {
            RiskLabel::Low
        } else if score < self.medium_upper {
            RiskLabel::Medium
        } else {
            RiskLabel::High
        })
    }

    /// Upper bound (exclusive) of `Low`
    #[must_use]
    pub const fn low_upper(&self) -> f64 {
        self.low_upper
    }

    /// Upper bound (exclusive) of `Medium`
    #[must_use]
    pub const fn medium_upper(&self) -> f64 {
        self.medium_upper
    }
}
