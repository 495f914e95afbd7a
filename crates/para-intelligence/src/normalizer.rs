// ABOUTME: Feature normalizer mapping free-form athlete input to the canonical profile schema
// ABOUTME: Ordered first-match keyword rules for categories plus inclusive bound validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feature Normalizer
//!
//! Categorical attributes arrive as free text from forms. They are resolved by
//! ordered `(matcher, canonical)` rule lists evaluated top to bottom; the first
//! match wins, so precedence is explicit and never depends on hashing.
//!
//! Disability and sport fall back to a configurable default instead of
//! failing, which keeps free-text input permissive. Gender is a closed
//! vocabulary and unknown values are rejected. Numeric attributes are checked
//! against the inclusive bounds in [`para_core::constants::bounds`].

use para_core::constants::{bounds, normalization};
use para_core::errors::PipelineError;
use para_core::models::{AthleteProfile, DisabilityType, Gender, RawAthleteInput, SportType};
use tracing::warn;

/// How a rule recognizes lower-cased free text
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Text contains at least one keyword
    AnyOf(&'static [&'static str]),
    /// Text contains every keyword
    AllOf(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, text: &str) -> bool {
        match self {
            Self::AnyOf(keywords) => keywords.iter().any(|k| text.contains(k)),
            Self::AllOf(keywords) => keywords.iter().all(|k| text.contains(k)),
        }
    }
}

/// One `(matcher, canonical)` pair
#[derive(Debug, Clone, Copy)]
struct CategoryRule<T> {
    matcher: Matcher,
    canonical: T,
}

const DISABILITY_RULES: &[CategoryRule<DisabilityType>] = &[
    CategoryRule {
        matcher: Matcher::AnyOf(&["lower-limb", "upper-limb", "lower limb", "upper limb", "amput"]),
        canonical: DisabilityType::Amputation,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["visual", "blind", "sight"]),
        canonical: DisabilityType::VisualImpairment,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["cerebral"]),
        canonical: DisabilityType::CerebralPalsy,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["spinal"]),
        canonical: DisabilityType::SpinalCordInjury,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["intellectual"]),
        canonical: DisabilityType::IntellectualImpairment,
    },
];

const SPORT_RULES: &[CategoryRule<SportType>] = &[
    CategoryRule {
        matcher: Matcher::AllOf(&["wheelchair", "racing"]),
        canonical: SportType::WheelchairRacing,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["swimming"]),
        canonical: SportType::ParaSwimming,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["powerlifting"]),
        canonical: SportType::ParaPowerlifting,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["archery"]),
        canonical: SportType::ParaArchery,
    },
    CategoryRule {
        matcher: Matcher::AnyOf(&["athletics", "track", "sprint"]),
        canonical: SportType::ParaAthleticsTrack,
    },
];

const GENDER_ALIASES: &[(&str, Gender)] = &[
    ("male", Gender::Male),
    ("m", Gender::Male),
    ("man", Gender::Male),
    ("female", Gender::Female),
    ("f", Gender::Female),
    ("woman", Gender::Female),
    ("other", Gender::Other),
    ("non-binary", Gender::Other),
    ("nonbinary", Gender::Other),
];

/// Maps raw athlete input to a canonical [`AthleteProfile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureNormalizer {
    disability_fallback: DisabilityType,
    sport_fallback: SportType,
}

impl Default for FeatureNormalizer {
    fn default() -> Self {
        Self {
            disability_fallback: DisabilityType::Amputation,
            sport_fallback: SportType::ParaAthleticsTrack,
        }
    }
}

impl FeatureNormalizer {
    /// Normalizer with custom fallbacks for unrecognized categories
    #[must_use]
    pub const fn with_fallbacks(
        disability_fallback: DisabilityType,
        sport_fallback: SportType,
    ) -> Self {
        Self {
            disability_fallback,
            sport_fallback,
        }
    }

    /// Normalize raw input into a canonical profile
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Validation`] naming the field, the value and the
    /// expected bound for the first missing, malformed or out-of-range attribute.
    pub fn normalize(&self, raw: &RawAthleteInput) -> Result<AthleteProfile, PipelineError> {
        let age = bounds::AGE.check_raw(required(raw.age, bounds::AGE.field)?)?;
        let gender = parse_gender(required_text(raw.gender.as_deref(), "gender")?)?;
        let disability_type = self.canonicalize_disability(required_text(
            raw.disability_type.as_deref(),
            "disability_type",
        )?);
        let sport_type =
            self.canonicalize_sport(required_text(raw.sport_type.as_deref(), "sport_type")?);

        let weight_kg = bounds::WEIGHT_KG.check(required(raw.weight_kg, bounds::WEIGHT_KG.field)?)?;
        let height_cm = bounds::HEIGHT_CM.check(required(raw.height_cm, bounds::HEIGHT_CM.field)?)?;
        let training_days_per_week = training_days(raw)?;
        let sleep_hours =
            bounds::SLEEP_HOURS.check(required(raw.sleep_hours, bounds::SLEEP_HOURS.field)?)?;
        let heart_rate_rest = bounds::HEART_RATE_REST
            .check_raw(required(raw.heart_rate_rest, bounds::HEART_RATE_REST.field)?)?;
        let daily_calorie_intake = bounds::DAILY_CALORIE_INTAKE.check_raw(required(
            raw.daily_calorie_intake,
            bounds::DAILY_CALORIE_INTAKE.field,
        )?)?;
        let protein_intake_g = bounds::PROTEIN_INTAKE_G
            .check(required(raw.protein_intake_g, bounds::PROTEIN_INTAKE_G.field)?)?;
        let water_intake_liters = bounds::WATER_INTAKE_LITERS.check(required(
            raw.water_intake_liters,
            bounds::WATER_INTAKE_LITERS.field,
        )?)?;
        let hydration_level = match raw.hydration_level {
            Some(level) => bounds::HYDRATION_LEVEL.check_raw(level)?,
            None => default_hydration_level(water_intake_liters),
        };

        Ok(AthleteProfile {
            age,
            gender,
            disability_type,
            sport_type,
            weight_kg,
            height_cm,
            training_days_per_week,
            sleep_hours,
            heart_rate_rest,
            daily_calorie_intake,
            protein_intake_g,
            water_intake_liters,
            hydration_level,
        })
    }

    /// Resolve free-text disability to its canonical category
    #[must_use]
    pub fn canonicalize_disability(&self, text: &str) -> DisabilityType {
        let lowered = text.trim().to_lowercase();
        if let Some(exact) = DisabilityType::ALL
            .into_iter()
            .find(|d| d.as_str().to_lowercase() == lowered)
        {
            return exact;
        }
        first_match(DISABILITY_RULES, &lowered).unwrap_or_else(|| {
            warn!(
                input = %text,
                fallback = %self.disability_fallback,
                "unrecognized disability type, using fallback"
            );
            self.disability_fallback
        })
    }

    /// Resolve free-text sport to its canonical discipline
    #[must_use]
    pub fn canonicalize_sport(&self, text: &str) -> SportType {
        let lowered = text.trim().to_lowercase();
        if let Some(exact) = SportType::ALL
            .into_iter()
            .find(|s| s.as_str().to_lowercase() == lowered)
        {
            return exact;
        }
        first_match(SPORT_RULES, &lowered).unwrap_or_else(|| {
            warn!(
                input = %text,
                fallback = %self.sport_fallback,
                "unrecognized sport type, using fallback"
            );
            self.sport_fallback
        })
    }
}

fn first_match<T: Copy>(rules: &[CategoryRule<T>], lowered: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matcher.matches(lowered))
        .map(|rule| rule.canonical)
}

fn required(value: Option<f64>, field: &str) -> Result<f64, PipelineError> {
    value.ok_or_else(|| PipelineError::missing_field(field))
}

fn required_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, PipelineError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| PipelineError::missing_field(field))
}

/// Parse the closed gender vocabulary
///
/// # Errors
///
/// Returns a validation error for anything outside the accepted aliases.
pub fn parse_gender(text: &str) -> Result<Gender, PipelineError> {
    let lowered = text.trim().to_lowercase();
    GENDER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, gender)| *gender)
        .ok_or_else(|| PipelineError::validation("gender", text, "one of Male, Female, Other"))
}

fn training_days(raw: &RawAthleteInput) -> Result<u32, PipelineError> {
    match (raw.training_days_per_week, raw.training_hours_per_week) {
        (Some(days), _) => bounds::TRAINING_DAYS_PER_WEEK.check_raw(days),
        (None, Some(hours)) => training_days_from_hours(hours),
        (None, None) => Err(PipelineError::missing_field(
            bounds::TRAINING_DAYS_PER_WEEK.field,
        )),
    }
}

/// Convert weekly training hours to training days per week
///
/// `days = round(hours / 2.5)`, clamped to the training-day bound.
///
/// # Errors
///
/// Returns a validation error for negative or non-finite hours.
pub fn training_days_from_hours(hours: f64) -> Result<u32, PipelineError> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(PipelineError::validation(
            "training_hours_per_week",
            hours,
            "a non-negative number of hours",
        ));
    }
    Ok(bounds::TRAINING_DAYS_PER_WEEK.clamp(hours / normalization::HOURS_PER_TRAINING_DAY))
}

/// Hydration level assumed when none is reported
///
/// `60 + (water_liters - 2.5) × 12`, rounded and clamped to `[0, 100]`.
#[must_use]
pub fn default_hydration_level(water_intake_liters: f64) -> u32 {
    bounds::HYDRATION_LEVEL.clamp(
        normalization::HYDRATION_BASELINE
            + (water_intake_liters - normalization::HYDRATION_REFERENCE_WATER_LITERS)
                * normalization::HYDRATION_POINTS_PER_LITER,
    )
}
