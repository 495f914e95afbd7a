// ABOUTME: Domain models for athletes, predictions, and coaching dialogue
// ABOUTME: Re-exports the profile, prediction record, reply, and turn types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Athlete profile, raw input and categorical vocabularies
pub mod athlete;

/// Dialogue turns and transcript speakers
pub mod conversation;

/// Prediction record and risk labels
pub mod prediction;

/// Structured coaching replies
pub mod reply;

pub use athlete::{AthleteProfile, DisabilityType, Gender, RawAthleteInput, SportType};
pub use conversation::{DialogueTurn, Speaker};
pub use prediction::{PredictionRecord, RiskLabel};
pub use reply::{ReplySection, ReplyStructureError, SectionKind, StructuredReply};
