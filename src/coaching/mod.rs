// ABOUTME: Coaching dialogue module with session state, prompt building, and orchestration
// ABOUTME: Every turn is conditioned on the athlete profile, predictions, and prior turns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-session coaching state
pub mod context;

/// Dialogue orchestration and retry policy
pub mod orchestrator;

/// Prompt rendering
pub mod prompt;

pub use context::{CoachingContext, SharedCoachingContext};
pub use orchestrator::{DialogueOrchestrator, GenerationSettings};
pub use prompt::{effective_question, CoachingPrompt};
