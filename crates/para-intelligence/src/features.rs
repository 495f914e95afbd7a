// ABOUTME: Canonical fixed-order feature vector consumed uniformly by all prediction models
// ABOUTME: One-hot categorical slots followed by numeric attributes in a documented order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feature Vector Schema
//!
//! | Index | Feature |
//! |-------|---------|
//! | 0 | `age` |
//! | 1-3 | `gender` one-hot: Male, Female, Other |
//! | 4-8 | `disability_type` one-hot: Amputation, Visual Impairment, Cerebral Palsy, Spinal Cord Injury, Intellectual Impairment |
//! | 9-13 | `sport_type` one-hot: Wheelchair Racing, Para Swimming, Para Powerlifting, Para Athletics (Track), Para Archery |
//! | 14 | `training_days_per_week` |
//! | 15 | `sleep_hours` |
//! | 16 | `heart_rate_rest` |
//! | 17 | `daily_calorie_intake` |
//! | 18 | `protein_intake_g` |
//! | 19 | `water_intake_liters` |
//! | 20 | `hydration_level` |
//!
//! Every model agrees to this order; changing it is a breaking change for all
//! of them at once.

use para_core::models::{AthleteProfile, DisabilityType, Gender, SportType};

use crate::models::ModelFailure;

/// Slot positions within a [`FeatureVector`]
pub mod index {
    /// Age in years
    pub const AGE: usize = 0;
    /// First gender one-hot slot
    pub const GENDER_START: usize = 1;
    /// First disability one-hot slot
    pub const DISABILITY_START: usize = 4;
    /// First sport one-hot slot
    pub const SPORT_START: usize = 9;
    /// Training days per week
    pub const TRAINING_DAYS_PER_WEEK: usize = 14;
    /// Sleep hours
    pub const SLEEP_HOURS: usize = 15;
    /// Resting heart rate
    pub const HEART_RATE_REST: usize = 16;
    /// Daily calorie intake
    pub const DAILY_CALORIE_INTAKE: usize = 17;
    /// Daily protein intake
    pub const PROTEIN_INTAKE_G: usize = 18;
    /// Daily water intake
    pub const WATER_INTAKE_LITERS: usize = 19;
    /// Hydration level
    pub const HYDRATION_LEVEL: usize = 20;
}

/// Number of slots in the canonical vector
pub const FEATURE_COUNT: usize = 21;

/// Slot names, in order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender=Male",
    "gender=Female",
    "gender=Other",
    "disability_type=Amputation",
    "disability_type=Visual Impairment",
    "disability_type=Cerebral Palsy",
    "disability_type=Spinal Cord Injury",
    "disability_type=Intellectual Impairment",
    "sport_type=Wheelchair Racing",
    "sport_type=Para Swimming",
    "sport_type=Para Powerlifting",
    "sport_type=Para Athletics (Track)",
    "sport_type=Para Archery",
    "training_days_per_week",
    "sleep_hours",
    "heart_rate_rest",
    "daily_calorie_intake",
    "protein_intake_g",
    "water_intake_liters",
    "hydration_level",
];

/// Fixed-order numeric representation of an athlete profile
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Encode a canonical profile
    #[must_use]
    pub fn from_profile(profile: &AthleteProfile) -> Self {
        let mut values = vec![0.0; FEATURE_COUNT];
        values[index::AGE] = f64::from(profile.age);
        values[index::GENDER_START + profile.gender.ordinal()] = 1.0;
        values[index::DISABILITY_START + profile.disability_type.ordinal()] = 1.0;
        values[index::SPORT_START + profile.sport_type.ordinal()] = 1.0;
        values[index::TRAINING_DAYS_PER_WEEK] = f64::from(profile.training_days_per_week);
        values[index::SLEEP_HOURS] = profile.sleep_hours;
        values[index::HEART_RATE_REST] = f64::from(profile.heart_rate_rest);
        values[index::DAILY_CALORIE_INTAKE] = f64::from(profile.daily_calorie_intake);
        values[index::PROTEIN_INTAKE_G] = profile.protein_intake_g;
        values[index::WATER_INTAKE_LITERS] = profile.water_intake_liters;
        values[index::HYDRATION_LEVEL] = f64::from(profile.hydration_level);
        Self { values }
    }

    /// Wrap raw values without checking them
    ///
    /// Models validate shape and finiteness through [`Self::ensure_well_formed`].
    #[must_use]
    pub const fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Slot values in schema order
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of one slot, `0.0` when the slot does not exist
    #[must_use]
    pub fn get(&self, slot: usize) -> f64 {
        self.values.get(slot).copied().unwrap_or(0.0)
    }

    /// Check the vector matches the schema
    ///
    /// # Errors
    ///
    /// Returns [`ModelFailure`] when the length differs from [`FEATURE_COUNT`],
    /// a slot is NaN or infinite, or a one-hot block does not name exactly one
    /// category.
    pub fn ensure_well_formed(&self) -> Result<(), ModelFailure> {
        if self.values.len() != FEATURE_COUNT {
            return Err(ModelFailure::DimensionMismatch {
                expected: FEATURE_COUNT,
                actual: self.values.len(),
            });
        }
        if let Some(slot) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(ModelFailure::NonFiniteFeature {
                feature: FEATURE_NAMES[slot],
            });
        }
        if self.gender().is_none() {
            return Err(ModelFailure::AmbiguousCategory { block: "gender" });
        }
        if self.disability_type().is_none() {
            return Err(ModelFailure::AmbiguousCategory {
                block: "disability_type",
            });
        }
        if self.sport_type().is_none() {
            return Err(ModelFailure::AmbiguousCategory {
                block: "sport_type",
            });
        }
        Ok(())
    }

    /// Gender encoded in the one-hot block, if exactly one slot is set
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.one_hot(index::GENDER_START, &Gender::ALL)
    }

    /// Disability encoded in the one-hot block, if exactly one slot is set
    #[must_use]
    pub fn disability_type(&self) -> Option<DisabilityType> {
        self.one_hot(index::DISABILITY_START, &DisabilityType::ALL)
    }

    /// Sport encoded in the one-hot block, if exactly one slot is set
    #[must_use]
    pub fn sport_type(&self) -> Option<SportType> {
        self.one_hot(index::SPORT_START, &SportType::ALL)
    }

    fn one_hot<T: Copy>(&self, start: usize, variants: &[T]) -> Option<T> {
        let block = self.values.get(start..start + variants.len())?;
        let mut hot = block
            .iter()
            .enumerate()
            .filter(|(_, value)| **value >= 0.5);
        let (position, _) = hot.next()?;
        if hot.next().is_some() {
            return None;
        }
        variants.get(position).copied()
    }
}
