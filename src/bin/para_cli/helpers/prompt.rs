// ABOUTME: Interactive athlete form for para-cli
// ABOUTME: Asks each field in turn, re-asks on bad numbers, and confirms typo corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use para_coach::constants::bounds::{self, FloatBound, IntBound};
use para_coach::intelligence::{match_choice, ChoiceMatch};
use para_coach::models::{DisabilityType, Gender, RawAthleteInput, SportType};

const YES_WORDS: [&str; 2] = ["y", "yes"];

/// Line-oriented question and answer over any reader and writer
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask every athlete field, returning a form ready for normalization
    pub fn athlete_form(&mut self) -> Result<RawAthleteInput> {
        writeln!(self.writer, "Enter athlete details:\n")?;

        let age = self.ask_int("Age (years)", bounds::AGE)?;
        let gender = self.ask_choice("Gender", &Gender::ALL)?;
        let disability_type = self.ask_choice("Disability type", &DisabilityType::ALL)?;
        let sport_type = self.ask_choice("Sport type", &SportType::ALL)?;
        let weight_kg = self.ask_float("Body weight (kg)", bounds::WEIGHT_KG)?;
        let height_cm = self.ask_float("Height (cm)", bounds::HEIGHT_CM)?;
        let training_days =
            self.ask_int("Training days per week", bounds::TRAINING_DAYS_PER_WEEK)?;
        let sleep_hours = self.ask_float("Average sleep hours per night", bounds::SLEEP_HOURS)?;
        let heart_rate_rest = self.ask_int("Resting heart rate (bpm)", bounds::HEART_RATE_REST)?;
        let daily_calorie_intake =
            self.ask_int("Daily calorie intake (kcal)", bounds::DAILY_CALORIE_INTAKE)?;
        let protein_intake_g =
            self.ask_float("Daily protein intake (grams)", bounds::PROTEIN_INTAKE_G)?;
        let water_intake_liters =
            self.ask_float("Daily water intake (liters)", bounds::WATER_INTAKE_LITERS)?;
        let hydration_level = self.ask_optional_int(
            "Hydration level, blank to estimate from water intake",
            bounds::HYDRATION_LEVEL,
        )?;

        Ok(RawAthleteInput {
            age: Some(f64::from(age)),
            gender: Some(gender.to_string()),
            disability_type: Some(disability_type.to_string()),
            sport_type: Some(sport_type.to_string()),
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            training_days_per_week: Some(f64::from(training_days)),
            training_hours_per_week: None,
            sleep_hours: Some(sleep_hours),
            heart_rate_rest: Some(f64::from(heart_rate_rest)),
            daily_calorie_intake: Some(f64::from(daily_calorie_intake)),
            protein_intake_g: Some(protein_intake_g),
            water_intake_liters: Some(water_intake_liters),
            hydration_level: hydration_level.map(f64::from),
        })
    }

    /// Print `prompt` and read one trimmed line
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            bail!("input ended before the athlete form was complete");
        }
        Ok(answer.trim().to_owned())
    }

    fn ask_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.line(prompt)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => writeln!(self.writer, "Please enter a valid number.")?,
            }
        }
    }

    fn ask_int(&mut self, label: &str, bound: IntBound) -> Result<u32> {
        let prompt = format!("{label} {bound}: ");
        loop {
            let value = self.ask_number(&prompt)?;
            match bound.check_raw(value) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.writer, "{e}")?,
            }
        }
    }

    fn ask_optional_int(&mut self, label: &str, bound: IntBound) -> Result<Option<u32>> {
        let prompt = format!("{label} {bound}: ");
        loop {
            let answer = self.line(&prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<f64>() {
                Ok(value) => match bound.check_raw(value) {
                    Ok(value) => return Ok(Some(value)),
                    Err(e) => writeln!(self.writer, "{e}")?,
                },
                Err(_) => writeln!(self.writer, "Please enter a valid number.")?,
            }
        }
    }

    fn ask_float(&mut self, label: &str, bound: FloatBound) -> Result<f64> {
        let prompt = format!("{label} {bound}: ");
        loop {
            let value = self.ask_number(&prompt)?;
            match bound.check(value) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.writer, "{e}")?,
            }
        }
    }

    /// Ask for one of `choices`, offering a correction for near misses
    pub fn ask_choice<T: Copy + Display>(&mut self, label: &str, choices: &[T]) -> Result<T> {
        let listed = choices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        let prompt = format!("{label} ({listed}): ");

        loop {
            let answer = self.line(&prompt)?;
            if answer.is_empty() {
                writeln!(self.writer, "Please enter something.")?;
                continue;
            }
            match match_choice(&answer, choices) {
                ChoiceMatch::Exact(choice) => return Ok(choice),
                ChoiceMatch::Suggested(choice) => {
                    let confirm = self.line(&format!("Did you mean '{choice}'? (y/n): "))?;
                    if YES_WORDS.contains(&confirm.to_lowercase().as_str()) {
                        return Ok(choice);
                    }
                }
                ChoiceMatch::Unknown => {}
            }
            writeln!(
                self.writer,
                "Could not understand '{answer}'. Please choose one of: {listed}"
            )?;
        }
    }
}
