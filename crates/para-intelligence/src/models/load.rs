// ABOUTME: Weekly training load estimate recovered from calorie intake and training days
// ABOUTME: Shared intermediate feature used by all three reference performance models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::features::{index, FeatureVector};

/// Coefficients relating calories and training days to weekly load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCoefficients {
    /// Daily calories of an athlete who does not train
    pub base_calories: f64,
    /// Extra calories per daily training hour
    pub calories_per_training_hour: f64,
    /// Shortest daily session in the reference population
    pub min_daily_hours: f64,
    /// Longest daily session in the reference population
    pub max_daily_hours: f64,
    /// Mean rate of perceived exertion (1-10)
    pub mean_rpe: f64,
    /// Lowest weekly load in the reference population
    pub min_weekly_load: f64,
    /// Highest weekly load in the reference population
    pub max_weekly_load: f64,
}

impl Default for LoadCoefficients {
    fn default() -> Self {
        Self {
            base_calories: 1800.0,
            calories_per_training_hour: 250.0,
            min_daily_hours: 0.5,
            max_daily_hours: 4.5,
            mean_rpe: 6.0,
            // 0.5 h × RPE 3 × 3 days
            min_weekly_load: 4.5,
            // 4.5 h × RPE 9 × 7 days
            max_weekly_load: 283.5,
        }
    }
}

/// Training load derived from a feature vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingLoadEstimate {
    /// Estimated training hours per training day
    pub daily_hours: f64,
    /// Estimated weekly load (hours × RPE × days)
    pub weekly_load: f64,
    /// Weekly load scaled to `[0, 1]` over the reference population
    pub normalized_load: f64,
}

impl TrainingLoadEstimate {
    /// Estimate load from the calorie and training-day slots
    #[must_use]
    pub fn from_features(features: &FeatureVector, coefficients: &LoadCoefficients) -> Self {
        let calories = features.get(index::DAILY_CALORIE_INTAKE);
        let days = features.get(index::TRAINING_DAYS_PER_WEEK);

        let daily_hours = ((calories - coefficients.base_calories)
            / coefficients.calories_per_training_hour)
            .clamp(coefficients.min_daily_hours, coefficients.max_daily_hours);
        let weekly_load = daily_hours * coefficients.mean_rpe * days;
        let span = coefficients.max_weekly_load - coefficients.min_weekly_load;
        let normalized_load = ((weekly_load - coefficients.min_weekly_load) / span).clamp(0.0, 1.0);

        Self {
            daily_hours,
            weekly_load,
            normalized_load,
        }
    }
}
