// ABOUTME: Predict subcommand for para-cli
// ABOUTME: Normalizes an athlete file or typed form and prints the profile with its predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use para_coach::intelligence::{FeatureNormalizer, PredictionEngine};
use para_coach::service::PredictionOutcome;

use crate::helpers::{display, input};

/// Run the prediction pipeline for one athlete
pub fn run(path: Option<&Path>, as_json: bool) -> Result<()> {
    let outcome = predict_athlete(path)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display::display_outcome(&outcome);
    }
    Ok(())
}

/// Load and predict without needing generation credentials
pub fn predict_athlete(path: Option<&Path>) -> Result<PredictionOutcome> {
    let raw = input::raw_input(path)?;
    let input = FeatureNormalizer::default().normalize(&raw)?;
    let predictions = PredictionEngine::default().predict(&input)?;
    Ok(PredictionOutcome { input, predictions })
}
