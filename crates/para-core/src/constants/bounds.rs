// ABOUTME: Declared bounds for every athlete attribute with inclusive range checks
// ABOUTME: Out-of-range values become validation errors naming field, value, and bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use crate::errors::PipelineError;

/// Inclusive bound for an integer attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntBound {
    /// Attribute name as it appears on the wire
    pub field: &'static str,
    /// Smallest accepted value
    pub min: u32,
    /// Largest accepted value
    pub max: u32,
}

impl IntBound {
    /// Declare a bound
    #[must_use]
    pub const fn new(field: &'static str, min: u32, max: u32) -> Self {
        Self { field, min, max }
    }

    /// Check an already-typed value
    ///
    /// # Errors
    ///
    /// Returns a validation error when `value` lies outside `[min, max]`.
    pub fn check(&self, value: u32) -> Result<u32, PipelineError> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(PipelineError::validation(self.field, value, self.to_string()))
        }
    }

    /// Check a raw number that must be a whole value within the bound
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-finite, fractional, or out-of-range input.
    pub fn check_raw(&self, value: f64) -> Result<u32, PipelineError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(PipelineError::validation(
                self.field,
                value,
                format!("an integer in {self}"),
            ));
        }
        if value < f64::from(self.min) || value > f64::from(self.max) {
            return Err(PipelineError::validation(self.field, value, self.to_string()));
        }
        // Safe: range-checked against u32 bounds above
        Ok(value as u32)
    }

    /// Clamp a value into the bound
    #[must_use]
    pub fn clamp(&self, value: f64) -> u32 {
        if value.is_nan() {
            return self.min;
        }
        // Safe: clamped into [min, max] before the cast
        value
            .round()
            .clamp(f64::from(self.min), f64::from(self.max)) as u32
    }
}

impl fmt::Display for IntBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Inclusive bound for a continuous attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatBound {
    /// Attribute name as it appears on the wire
    pub field: &'static str,
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

impl FloatBound {
    /// Declare a bound
    #[must_use]
    pub const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Check a value
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-finite or out-of-range input.
    pub fn check(&self, value: f64) -> Result<f64, PipelineError> {
        if value.is_finite() && (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(PipelineError::validation(self.field, value, self.to_string()))
        }
    }

    /// Whether a value lies within the bound
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for FloatBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Athlete age in years
pub const AGE: IntBound = IntBound::new("age", 12, 70);
/// Body weight in kilograms
pub const WEIGHT_KG: FloatBound = FloatBound::new("weight_kg", 25.0, 250.0);
/// Body height in centimetres
pub const HEIGHT_CM: FloatBound = FloatBound::new("height_cm", 90.0, 230.0);
/// Training days per week
pub const TRAINING_DAYS_PER_WEEK: IntBound = IntBound::new("training_days_per_week", 1, 7);
/// Average nightly sleep
pub const SLEEP_HOURS: FloatBound = FloatBound::new("sleep_hours", 0.0, 12.0);
/// Resting heart rate in bpm
pub const HEART_RATE_REST: IntBound = IntBound::new("heart_rate_rest", 30, 120);
/// Daily calorie intake in kcal
pub const DAILY_CALORIE_INTAKE: IntBound = IntBound::new("daily_calorie_intake", 800, 6000);
/// Daily protein intake in grams
pub const PROTEIN_INTAKE_G: FloatBound = FloatBound::new("protein_intake_g", 0.0, 400.0);
/// Daily water intake in litres
pub const WATER_INTAKE_LITERS: FloatBound = FloatBound::new("water_intake_liters", 0.0, 10.0);
/// Hydration level percentage
pub const HYDRATION_LEVEL: IntBound = IntBound::new("hydration_level", 0, 100);

/// Stamina output range
pub const STAMINA_LEVEL: FloatBound = FloatBound::new("stamina_level", 0.0, 100.0);
/// Fatigue output range
pub const FATIGUE_LEVEL: FloatBound = FloatBound::new("fatigue_level", 0.0, 1.0);
/// Injury risk output range
pub const INJURY_RISK_SCORE: FloatBound = FloatBound::new("injury_risk_score", 0.0, 1.0);
