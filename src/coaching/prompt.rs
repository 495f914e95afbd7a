// ABOUTME: Deterministic prompt construction for a coaching turn
// ABOUTME: Renders profile, predictions, transcript, and question; builds the regeneration reminder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use para_core::constants::reply;
use para_core::models::{AthleteProfile, PredictionRecord, ReplyStructureError, SectionKind};
use serde_json::{json, Value};

use super::context::CoachingContext;
use crate::llm::{get_coach_system_prompt, ChatMessage};

/// Question actually asked for a turn; blank input becomes the overview question
#[must_use]
pub fn effective_question(question: &str) -> &str {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        reply::DEFAULT_QUESTION
    } else {
        trimmed
    }
}

/// Prompt for one coaching turn
///
/// Built purely from the context and the question, so the same inputs always
/// yield the same messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachingPrompt {
    question: String,
    user_message: String,
}

impl CoachingPrompt {
    /// Build the prompt for `question` against the current session state
    #[must_use]
    pub fn build(context: &CoachingContext, question: &str) -> Self {
        let question = effective_question(question).to_owned();

        let mut user_message = String::new();
        let _ = writeln!(
            user_message,
            "Athlete data:\n{:#}\n",
            profile_json(context.athlete_data())
        );
        let _ = writeln!(
            user_message,
            "Model predictions:\n{:#}\n",
            predictions_json(context.predictions())
        );

        user_message.push_str("Conversation so far:\n");
        if context.conversation_history().is_empty() {
            user_message.push_str("(no previous turns)\n");
        }
        for turn in context.conversation_history() {
            for (speaker, text) in turn.transcript() {
                let _ = writeln!(user_message, "{speaker}: {}", text.trim());
            }
        }

        let _ = write!(user_message, "\nUser question:\n{question}");

        Self {
            question,
            user_message,
        }
    }

    /// Question recorded in history for this turn
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Rendered user message
    #[must_use]
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Messages for the first attempt
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(get_coach_system_prompt()),
            ChatMessage::user(self.user_message.clone()),
        ]
    }

    /// Messages asking the model to rewrite a reply that broke the section contract
    #[must_use]
    pub fn regeneration_messages(
        &self,
        rejected_reply: &str,
        problem: &ReplyStructureError,
    ) -> Vec<ChatMessage> {
        let mut messages = self.messages();
        messages.push(ChatMessage::assistant(rejected_reply));
        messages.push(ChatMessage::user(regeneration_reminder(problem)));
        messages
    }
}

/// Reminder naming what the previous reply got wrong
#[must_use]
pub fn regeneration_reminder(problem: &ReplyStructureError) -> String {
    let required = SectionKind::ALL
        .iter()
        .map(SectionKind::header)
        .collect::<Vec<_>>()
        .join("\n");
    let issue = match problem {
        ReplyStructureError::MissingSections(missing) => format!(
            "Your previous reply is missing these sections: {}.",
            missing
                .iter()
                .map(SectionKind::header)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        ReplyStructureError::OutOfOrder(_) => {
            "Your previous reply has its sections in the wrong order.".to_owned()
        }
    };
    format!(
        "{issue} Rewrite the complete answer using exactly these headers, \
         each on its own line, in this order:\n{required}"
    )
}

fn profile_json(profile: &AthleteProfile) -> Value {
    json!({
        "age": profile.age,
        "gender": profile.gender.as_str(),
        "disability_type": profile.disability_type.as_str(),
        "sport_type": profile.sport_type.as_str(),
        "weight_kg": profile.weight_kg,
        "height_cm": profile.height_cm,
        "training_days_per_week": profile.training_days_per_week,
        "sleep_hours": profile.sleep_hours,
        "heart_rate_rest": profile.heart_rate_rest,
        "daily_calorie_intake": profile.daily_calorie_intake,
        "protein_intake_g": profile.protein_intake_g,
        "water_intake_liters": profile.water_intake_liters,
        "hydration_level": profile.hydration_level,
    })
}

fn predictions_json(predictions: &PredictionRecord) -> Value {
    json!({
        "stamina_level": round2(predictions.stamina_level()),
        "fatigue_level": round2(predictions.fatigue_level()),
        "injury_risk_score": round2(predictions.injury_risk_score()),
        "injury_risk_label": predictions.injury_risk_label().as_str(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
