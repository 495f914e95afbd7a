// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the para-athlete coach instruction with the four-section reply format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Para-athlete coach system prompt
///
/// Contains the coach role, the meaning and scale of each prediction, and the
/// required reply layout (four headed sections in a fixed order).
pub const COACH_SYSTEM_PROMPT: &str = include_str!("coach_system.md");

/// Get the fixed system instruction used for every coaching turn
#[must_use]
pub const fn get_coach_system_prompt() -> &'static str {
    COACH_SYSTEM_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use para_core::models::SectionKind;

    #[test]
    fn test_system_prompt_names_every_section_header() {
        for kind in SectionKind::ALL {
            assert!(
                COACH_SYSTEM_PROMPT.contains(kind.header()),
                "system prompt does not mention {kind}"
            );
        }
    }
}
