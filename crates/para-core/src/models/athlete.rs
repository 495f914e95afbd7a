// ABOUTME: Athlete profile model with closed categorical vocabularies and bounded attributes
// ABOUTME: Defines raw free-form input and the canonical profile consumed by the models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::bounds;
use crate::errors::PipelineError;

/// Athlete gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// All variants in feature-vector order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Position in [`Self::ALL`]
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Impairment category used by para-sport classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisabilityType {
    /// Limb deficiency or amputation
    #[serde(rename = "Amputation")]
    Amputation,
    /// Visual impairment
    #[serde(rename = "Visual Impairment")]
    VisualImpairment,
    /// Cerebral palsy
    #[serde(rename = "Cerebral Palsy")]
    CerebralPalsy,
    /// Spinal cord injury
    #[serde(rename = "Spinal Cord Injury")]
    SpinalCordInjury,
    /// Intellectual impairment
    #[serde(rename = "Intellectual Impairment")]
    IntellectualImpairment,
}

impl DisabilityType {
    /// All variants in feature-vector order
    pub const ALL: [Self; 5] = [
        Self::Amputation,
        Self::VisualImpairment,
        Self::CerebralPalsy,
        Self::SpinalCordInjury,
        Self::IntellectualImpairment,
    ];

    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Amputation => "Amputation",
            Self::VisualImpairment => "Visual Impairment",
            Self::CerebralPalsy => "Cerebral Palsy",
            Self::SpinalCordInjury => "Spinal Cord Injury",
            Self::IntellectualImpairment => "Intellectual Impairment",
        }
    }

    /// Position in [`Self::ALL`]
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DisabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Para-sport discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SportType {
    /// Wheelchair racing
    #[serde(rename = "Wheelchair Racing")]
    WheelchairRacing,
    /// Para swimming
    #[serde(rename = "Para Swimming")]
    ParaSwimming,
    /// Para powerlifting
    #[serde(rename = "Para Powerlifting")]
    ParaPowerlifting,
    /// Para athletics, track events
    #[serde(rename = "Para Athletics (Track)")]
    ParaAthleticsTrack,
    /// Para archery
    #[serde(rename = "Para Archery")]
    ParaArchery,
}

impl SportType {
    /// All variants in feature-vector order
    pub const ALL: [Self; 5] = [
        Self::WheelchairRacing,
        Self::ParaSwimming,
        Self::ParaPowerlifting,
        Self::ParaAthleticsTrack,
        Self::ParaArchery,
    ];

    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WheelchairRacing => "Wheelchair Racing",
            Self::ParaSwimming => "Para Swimming",
            Self::ParaPowerlifting => "Para Powerlifting",
            Self::ParaAthleticsTrack => "Para Athletics (Track)",
            Self::ParaArchery => "Para Archery",
        }
    }

    /// Position in [`Self::ALL`]
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form athlete attributes as submitted by a form or API client
///
/// Every field is optional so that missing input surfaces as a validation
/// error naming the field instead of an opaque deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAthleteInput {
    /// Age in years
    pub age: Option<f64>,
    /// Gender, free text
    pub gender: Option<String>,
    /// Disability description, free text
    pub disability_type: Option<String>,
    /// Sport description, free text
    #[serde(alias = "sport")]
    pub sport_type: Option<String>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Training days per week, when known directly
    pub training_days_per_week: Option<f64>,
    /// Weekly training volume in hours, converted to training days when days are absent
    pub training_hours_per_week: Option<f64>,
    /// Average nightly sleep in hours
    pub sleep_hours: Option<f64>,
    /// Resting heart rate in bpm
    pub heart_rate_rest: Option<f64>,
    /// Daily calorie intake in kcal
    pub daily_calorie_intake: Option<f64>,
    /// Daily protein intake in grams
    pub protein_intake_g: Option<f64>,
    /// Daily water intake in litres
    pub water_intake_liters: Option<f64>,
    /// Hydration level percentage
    pub hydration_level: Option<f64>,
}

impl From<&AthleteProfile> for RawAthleteInput {
    fn from(profile: &AthleteProfile) -> Self {
        Self {
            age: Some(f64::from(profile.age)),
            gender: Some(profile.gender.as_str().to_owned()),
            disability_type: Some(profile.disability_type.as_str().to_owned()),
            sport_type: Some(profile.sport_type.as_str().to_owned()),
            weight_kg: Some(profile.weight_kg),
            height_cm: Some(profile.height_cm),
            training_days_per_week: Some(f64::from(profile.training_days_per_week)),
            training_hours_per_week: None,
            sleep_hours: Some(profile.sleep_hours),
            heart_rate_rest: Some(f64::from(profile.heart_rate_rest)),
            daily_calorie_intake: Some(f64::from(profile.daily_calorie_intake)),
            protein_intake_g: Some(profile.protein_intake_g),
            water_intake_liters: Some(profile.water_intake_liters),
            hydration_level: Some(f64::from(profile.hydration_level)),
        }
    }
}

/// Canonical athlete profile; every attribute lies within its declared bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Impairment category
    pub disability_type: DisabilityType,
    /// Sport discipline
    pub sport_type: SportType,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimetres
    pub height_cm: f64,
    /// Training days per week
    pub training_days_per_week: u32,
    /// Average nightly sleep in hours
    pub sleep_hours: f64,
    /// Resting heart rate in bpm
    pub heart_rate_rest: u32,
    /// Daily calorie intake in kcal
    pub daily_calorie_intake: u32,
    /// Daily protein intake in grams
    pub protein_intake_g: f64,
    /// Daily water intake in litres
    pub water_intake_liters: f64,
    /// Hydration level percentage
    pub hydration_level: u32,
}

impl AthleteProfile {
    /// Re-check every bounded attribute
    ///
    /// Profiles built by the normalizer always pass; this guards profiles that
    /// arrive already structured, such as athlete data echoed back by a client.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first attribute outside its bound.
    pub fn validate(&self) -> Result<(), PipelineError> {
        bounds::AGE.check(self.age)?;
        bounds::WEIGHT_KG.check(self.weight_kg)?;
        bounds::HEIGHT_CM.check(self.height_cm)?;
        bounds::TRAINING_DAYS_PER_WEEK.check(self.training_days_per_week)?;
        bounds::SLEEP_HOURS.check(self.sleep_hours)?;
        bounds::HEART_RATE_REST.check(self.heart_rate_rest)?;
        bounds::DAILY_CALORIE_INTAKE.check(self.daily_calorie_intake)?;
        bounds::PROTEIN_INTAKE_G.check(self.protein_intake_g)?;
        bounds::WATER_INTAKE_LITERS.check(self.water_intake_liters)?;
        bounds::HYDRATION_LEVEL.check(self.hydration_level)?;
        Ok(())
    }

    /// Body mass index derived from weight and height
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}
