// ABOUTME: Prediction engine running three independent models over one feature vector
// ABOUTME: Assembles an immutable prediction record atomically or fails with a model error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use para_core::errors::PipelineError;
use para_core::models::{AthleteProfile, PredictionRecord};
use tracing::debug;

use crate::features::FeatureVector;
use crate::models::{FatigueModel, InjuryRiskModel, PerformanceModel, StaminaModel};
use crate::risk::RiskClassifier;

/// Owns the stamina, fatigue and injury-risk models
///
/// Models are read-only after construction and shared through `Arc`, so
/// cloning the engine is cheap and clones can serve requests concurrently.
#[derive(Clone)]
pub struct PredictionEngine {
    stamina: Arc<dyn PerformanceModel>,
    fatigue: Arc<dyn PerformanceModel>,
    injury_risk: Arc<dyn PerformanceModel>,
    classifier: RiskClassifier,
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::with_models(
            Arc::new(StaminaModel::default()),
            Arc::new(FatigueModel::default()),
            Arc::new(InjuryRiskModel::default()),
        )
    }
}

impl fmt::Debug for PredictionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionEngine")
            .field("stamina", &self.stamina.name())
            .field("fatigue", &self.fatigue.name())
            .field("injury_risk", &self.injury_risk.name())
            .field("classifier", &self.classifier)
            .finish()
    }
}

impl PredictionEngine {
    /// Engine over caller-supplied models
    #[must_use]
    pub fn with_models(
        stamina: Arc<dyn PerformanceModel>,
        fatigue: Arc<dyn PerformanceModel>,
        injury_risk: Arc<dyn PerformanceModel>,
    ) -> Self {
        Self {
            stamina,
            fatigue,
            injury_risk,
            classifier: RiskClassifier::default(),
        }
    }

    /// Predict stamina, fatigue and injury risk for a canonical profile
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Model`] naming the first model that fails,
    /// produces a non-finite value, or leaves its output range. No partial
    /// record is ever returned.
    pub fn predict(&self, profile: &AthleteProfile) -> Result<PredictionRecord, PipelineError> {
        let features = FeatureVector::from_profile(profile);
        self.predict_features(&features)
    }

    /// Predict from an already-encoded feature vector
    ///
    /// # Errors
    ///
    /// Same as [`Self::predict`].
    pub fn predict_features(
        &self,
        features: &FeatureVector,
    ) -> Result<PredictionRecord, PipelineError> {
        let stamina = Self::run(self.stamina.as_ref(), features)?;
        let fatigue = Self::run(self.fatigue.as_ref(), features)?;
        let injury_risk = Self::run(self.injury_risk.as_ref(), features)?;
        let label = self.classifier.classify(injury_risk)?;

        debug!(
            stamina,
            fatigue,
            injury_risk,
            label = %label,
            "prediction assembled"
        );

        Ok(PredictionRecord::new(stamina, fatigue, injury_risk, label))
    }

    fn run(model: &dyn PerformanceModel, features: &FeatureVector) -> Result<f64, PipelineError> {
        let output = model
            .infer(features)
            .map_err(|failure| PipelineError::model(model.name(), failure.to_string()))?;

        let range = model.output_range();
        if !output.is_finite() || !range.contains(&output) {
            return Err(PipelineError::model(
                model.name(),
                format!(
                    "output {output} is outside [{}, {}]",
                    range.start(),
                    range.end()
                ),
            ));
        }
        Ok(output)
    }

    /// Classifier used to label injury risk
    #[must_use]
    pub const fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }
}
