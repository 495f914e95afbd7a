// ABOUTME: Structured coaching reply with four required sections in a fixed order
// ABOUTME: Parses free text into sections and reports missing or misordered headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Structured Reply
//!
//! A coaching reply is free text that must contain, in this order, the headers
//! `SUMMARY`, `CALORIES & DIET`, `SAMPLE DAY MEAL PLAN` and
//! `ACTIONS — TRAINING + RECOVERY`, each on its own line.
//!
//! Header lines are matched case-insensitively after stripping markdown
//! decoration (`#`, `*`, `_`, `>`, list numbering, trailing `:`); an ASCII
//! hyphen or en dash stands in for the em dash.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::reply;

/// One of the four required reply sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Interpretation of the predictions
    Summary,
    /// Calorie target and dietary guidance
    CaloriesAndDiet,
    /// One example day of meals
    SampleDayMealPlan,
    /// Training and recovery actions
    Actions,
}

impl SectionKind {
    /// All sections in their required order
    pub const ALL: [Self; 4] = [
        Self::Summary,
        Self::CaloriesAndDiet,
        Self::SampleDayMealPlan,
        Self::Actions,
    ];

    /// Header text as it should appear in a reply
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Summary => reply::SUMMARY,
            Self::CaloriesAndDiet => reply::CALORIES_AND_DIET,
            Self::SampleDayMealPlan => reply::SAMPLE_DAY_MEAL_PLAN,
            Self::Actions => reply::ACTIONS,
        }
    }

    /// Recognize a line consisting only of a section header
    #[must_use]
    pub fn from_header_line(line: &str) -> Option<Self> {
        let candidate = normalize_header(line);
        if candidate.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|kind| normalize_header(kind.header()) == candidate)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

fn is_decoration(c: char) -> bool {
    matches!(c, '#' | '*' | '_' | '>') || c.is_whitespace()
}

fn strip_enumeration(line: &str) -> &str {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return line;
    }
    let rest = &line[digits_end..];
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .map_or(line, str::trim_start)
}

fn normalize_header(line: &str) -> String {
    let stripped = line.trim_start_matches(is_decoration);
    let stripped = strip_enumeration(stripped).trim_start_matches(is_decoration);
    let stripped = stripped.trim_end_matches(|c: char| is_decoration(c) || c == ':');
    let dashed: String = stripped
        .chars()
        .map(|c| if matches!(c, '—' | '–') { '-' } else { c })
        .collect();
    dashed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn join_kinds(kinds: &[SectionKind]) -> String {
    kinds
        .iter()
        .map(SectionKind::header)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a reply does not satisfy the section contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyStructureError {
    /// One or more headers never appear
    #[error("reply is missing sections: {}", join_kinds(.0))]
    MissingSections(Vec<SectionKind>),
    /// All headers appear but not in the required order
    #[error("reply sections are out of order: {}", join_kinds(.0))]
    OutOfOrder(Vec<SectionKind>),
}

impl ReplyStructureError {
    /// Sections the next attempt must get right
    #[must_use]
    pub fn sections_to_fix(&self) -> &[SectionKind] {
        match self {
            Self::MissingSections(missing) => missing,
            Self::OutOfOrder(_) => &SectionKind::ALL,
        }
    }
}

/// Body of one reply section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplySection {
    /// Which section this is
    pub kind: SectionKind,
    /// Header as required by the contract
    pub title: String,
    /// Text between this header and the next one
    pub body: String,
}

#[derive(Deserialize)]
struct ReplyText {
    text: String,
}

/// Coaching reply that satisfies the four-section contract
///
/// Only [`StructuredReply::parse`] constructs values, so every instance has
/// all sections in order. Deserialization re-parses the `text` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReplyText")]
pub struct StructuredReply {
    text: String,
    sections: Vec<ReplySection>,
}

impl StructuredReply {
    /// Parse generated text into a structured reply
    ///
    /// # Errors
    ///
    /// Returns [`ReplyStructureError`] when a header is missing or the headers
    /// are out of order.
    pub fn parse(text: impl Into<String>) -> Result<Self, ReplyStructureError> {
        let text = text.into();
        let lines: Vec<&str> = text.lines().collect();

        let mut headers: Vec<(SectionKind, usize)> = Vec::with_capacity(SectionKind::ALL.len());
        for (index, line) in lines.iter().enumerate() {
            if let Some(kind) = SectionKind::from_header_line(line) {
                if !headers.iter().any(|(seen, _)| *seen == kind) {
                    headers.push((kind, index));
                }
            }
        }

        let missing: Vec<SectionKind> = SectionKind::ALL
            .into_iter()
            .filter(|kind| !headers.iter().any(|(seen, _)| seen == kind))
            .collect();
        if !missing.is_empty() {
            return Err(ReplyStructureError::MissingSections(missing));
        }

        let found: Vec<SectionKind> = headers.iter().map(|(kind, _)| *kind).collect();
        if found != SectionKind::ALL {
            return Err(ReplyStructureError::OutOfOrder(found));
        }

        let sections = headers
            .iter()
            .enumerate()
            .map(|(position, (kind, start))| {
                let end = headers
                    .get(position + 1)
                    .map_or(lines.len(), |(_, next)| *next);
                ReplySection {
                    kind: *kind,
                    title: kind.header().to_owned(),
                    body: lines[start + 1..end].join("\n").trim().to_owned(),
                }
            })
            .collect();

        Ok(Self { text, sections })
    }

    /// Full reply text as generated
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sections in contract order
    #[must_use]
    pub fn sections(&self) -> &[ReplySection] {
        &self.sections
    }

    /// Body of one section
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.kind == kind)
            .map(|section| section.body.as_str())
    }
}

impl TryFrom<ReplyText> for StructuredReply {
    type Error = ReplyStructureError;

    fn try_from(value: ReplyText) -> Result<Self, Self::Error> {
        Self::parse(value.text)
    }
}

impl fmt::Display for StructuredReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
