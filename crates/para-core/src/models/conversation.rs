// ABOUTME: Dialogue turn model pairing an athlete question with a structured coach reply
// ABOUTME: Turns render to speaker-tagged transcript lines only when a prompt is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reply::StructuredReply;

/// Who spoke a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The athlete asking questions
    Athlete,
    /// The coaching engine
    Coach,
}

impl Speaker {
    /// Label used in rendered transcripts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Athlete => "Athlete",
            Self::Coach => "Coach",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed exchange of the coaching dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Question asked by the athlete
    pub question: String,
    /// Reply produced by the coach
    pub answer: StructuredReply,
    /// When the turn was recorded; display only, never used for ordering
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl DialogueTurn {
    /// Record a turn now
    #[must_use]
    pub fn new(question: impl Into<String>, answer: StructuredReply) -> Self {
        Self {
            question: question.into(),
            answer,
            created_at: Utc::now(),
        }
    }

    /// The turn as two speaker-tagged lines
    #[must_use]
    pub fn transcript(&self) -> [(Speaker, &str); 2] {
        [
            (Speaker::Athlete, self.question.as_str()),
            (Speaker::Coach, self.answer.text()),
        ]
    }
}
