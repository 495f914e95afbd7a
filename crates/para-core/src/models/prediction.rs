// ABOUTME: Prediction record produced per call with stamina, fatigue, and injury risk
// ABOUTME: Immutable once built; the risk label is derived from the score by fixed thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::bounds;
use crate::errors::PipelineError;

/// Discrete injury risk label, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLabel {
    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outputs of the three performance models for one athlete profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    stamina_level: f64,
    fatigue_level: f64,
    injury_risk_score: f64,
    injury_risk_label: RiskLabel,
}

impl PredictionRecord {
    /// Assemble a record from model outputs
    #[must_use]
    pub const fn new(
        stamina_level: f64,
        fatigue_level: f64,
        injury_risk_score: f64,
        injury_risk_label: RiskLabel,
    ) -> Self {
        Self {
            stamina_level,
            fatigue_level,
            injury_risk_score,
            injury_risk_label,
        }
    }

    /// Stamina, 0 to 100
    #[must_use]
    pub const fn stamina_level(&self) -> f64 {
        self.stamina_level
    }

    /// Fatigue, 0 to 1
    #[must_use]
    pub const fn fatigue_level(&self) -> f64 {
        self.fatigue_level
    }

    /// Injury risk, 0 to 1
    #[must_use]
    pub const fn injury_risk_score(&self) -> f64 {
        self.injury_risk_score
    }

    /// Label derived from [`Self::injury_risk_score`]
    #[must_use]
    pub const fn injury_risk_label(&self) -> RiskLabel {
        self.injury_risk_label
    }

    /// Check every output against its contract range
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first output outside its range.
    pub fn validate(&self) -> Result<(), PipelineError> {
        bounds::STAMINA_LEVEL.check(self.stamina_level)?;
        bounds::FATIGUE_LEVEL.check(self.fatigue_level)?;
        bounds::INJURY_RISK_SCORE.check(self.injury_risk_score)?;
        Ok(())
    }
}
