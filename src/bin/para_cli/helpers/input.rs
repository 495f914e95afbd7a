// ABOUTME: Athlete input loading for para-cli
// ABOUTME: Parses a JSON file of raw form fields, or asks for them on the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{stdin, stdout};
use std::path::Path;

use anyhow::{Context, Result};
use para_coach::models::RawAthleteInput;

use super::prompt::Prompter;

/// Athlete fields from `path`, or from the interactive form when absent
pub fn raw_input(path: Option<&Path>) -> Result<RawAthleteInput> {
    match path {
        Some(path) => load_raw_input(path),
        None => Prompter::new(stdin().lock(), stdout()).athlete_form(),
    }
}

/// Read raw athlete fields from a JSON file
pub fn load_raw_input(path: &Path) -> Result<RawAthleteInput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read athlete file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Athlete file {} is not valid JSON", path.display()))
}
