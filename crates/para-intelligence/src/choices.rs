// ABOUTME: Typo-tolerant matching of typed answers against a closed list of category labels
// ABOUTME: Exact matches ignore case and punctuation; near misses become suggestions to confirm
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Choice Matching
//!
//! Interactive prompts let a person type a category label instead of picking
//! from a menu. [`match_choice`] compares the answer with each label after
//! lowercasing, dropping everything but letters and spaces, and collapsing
//! whitespace. An identical comparison key is an exact match. Otherwise the
//! most similar label at or above [`SUGGESTION_CUTOFF`] is offered as a
//! suggestion, which the caller is expected to confirm.

use std::fmt::Display;

use strsim::normalized_levenshtein;

/// Minimum similarity for a label to be suggested
pub const SUGGESTION_CUTOFF: f64 = 0.6;

/// Outcome of matching a typed answer against a label list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMatch<T> {
    /// The answer names this choice
    Exact(T),
    /// The answer is probably a misspelling of this choice
    Suggested(T),
    /// Nothing is close enough
    Unknown,
}

/// Lowercase, keep letters and single spaces
#[must_use]
pub fn comparison_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Match `answer` against the display labels of `choices`
#[must_use]
pub fn match_choice<T: Copy + Display>(answer: &str, choices: &[T]) -> ChoiceMatch<T> {
    let key = comparison_key(answer);
    if key.is_empty() {
        return ChoiceMatch::Unknown;
    }

    let mut best: Option<(T, f64)> = None;
    for &choice in choices {
        let label = comparison_key(&choice.to_string());
        if label == key {
            return ChoiceMatch::Exact(choice);
        }
        let score = normalized_levenshtein(&key, &label);
        let improves = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if improves {
            best = Some((choice, score));
        }
    }

    match best {
        Some((choice, score)) if score >= SUGGESTION_CUTOFF => ChoiceMatch::Suggested(choice),
        _ => ChoiceMatch::Unknown,
    }
}
