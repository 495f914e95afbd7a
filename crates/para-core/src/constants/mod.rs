// ABOUTME: Application constants organized by domain
// ABOUTME: Bounds, conversion factors, risk thresholds, reply headers, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Declared inclusive bounds for athlete attributes and model outputs
pub mod bounds;

/// Fixed conversions applied while normalizing raw input
pub mod normalization {
    /// Hours of training that count as one training day
    ///
    /// Mean daily session length of the reference athlete population
    /// (sessions are spread uniformly between 0.5 h and 4.5 h).
    pub const HOURS_PER_TRAINING_DAY: f64 = 2.5;

    /// Hydration level assumed at the reference water intake
    pub const HYDRATION_BASELINE: f64 = 60.0;

    /// Reference daily water intake in litres
    pub const HYDRATION_REFERENCE_WATER_LITERS: f64 = 2.5;

    /// Hydration points gained per extra litre of water
    pub const HYDRATION_POINTS_PER_LITER: f64 = 12.0;
}

/// Injury risk classification thresholds
pub mod risk {
    /// Scores strictly below this are `Low`
    pub const LOW_UPPER: f64 = 0.33;

    /// Scores strictly below this (and at least `LOW_UPPER`) are `Medium`
    pub const MEDIUM_UPPER: f64 = 0.66;
}

/// Structure of a coaching reply
pub mod reply {
    /// Summary section header
    pub const SUMMARY: &str = "SUMMARY";
    /// Calories and diet section header
    pub const CALORIES_AND_DIET: &str = "CALORIES & DIET";
    /// Meal plan section header
    pub const SAMPLE_DAY_MEAL_PLAN: &str = "SAMPLE DAY MEAL PLAN";
    /// Training and recovery actions section header
    pub const ACTIONS: &str = "ACTIONS — TRAINING + RECOVERY";

    /// Question used when the athlete submits an empty one
    pub const DEFAULT_QUESTION: &str =
        "Give me an overview of my fitness, fatigue and injury risk and how to improve.";

    /// Total generation attempts per turn (initial call plus one regeneration)
    pub const MAX_GENERATION_ATTEMPTS: u32 = 2;
}

/// Service identifiers used in logs
pub mod service_names {
    /// HTTP server
    pub const PARA_COACH_SERVER: &str = "para-coach-server";
    /// Command-line client
    pub const PARA_CLI: &str = "para-cli";
}

/// Defaults for environment configuration
pub mod defaults {
    /// HTTP listen port
    pub const HTTP_PORT: u16 = 8000;
    /// HTTP bind address
    pub const HOST: &str = "127.0.0.1";
    /// Generative model identifier
    pub const LLM_MODEL: &str = "gemini-2.5-flash";
    /// Per-call generation timeout in seconds
    pub const LLM_TIMEOUT_SECS: u64 = 30;
    /// Sampling temperature
    pub const LLM_TEMPERATURE: f32 = 0.7;
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}
