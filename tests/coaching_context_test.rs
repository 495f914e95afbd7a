// ABOUTME: Integration tests for coaching session state and prompt construction
// ABOUTME: Covers preconditions, append-only ordering, and deterministic prompt rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use para_coach::coaching::{effective_question, CoachingContext, CoachingPrompt};
use para_coach::constants::reply::DEFAULT_QUESTION;
use para_coach::errors::PipelineError;
use para_coach::llm::MessageRole;
use para_coach::models::{ReplyStructureError, SectionKind, Speaker, StructuredReply};

fn reply(topic: &str) -> StructuredReply {
    StructuredReply::parse(common::valid_reply_text(topic)).unwrap()
}

// ============================================================================
// Session state
// ============================================================================

#[test]
fn test_new_session_has_no_history() {
    let context = common::wheelchair_racer_context();
    assert!(context.conversation_history().is_empty());
    assert_eq!(context.athlete_data(), &common::wheelchair_racer());
}

#[test]
fn test_turns_keep_append_order() {
    let mut context = common::wheelchair_racer_context();
    context.append_turn("T1", reply("first"));
    context.append_turn("T2", reply("second"));

    let questions: Vec<&str> = context
        .conversation_history()
        .iter()
        .map(|turn| turn.question.as_str())
        .collect();
    assert_eq!(questions, ["T1", "T2"]);

    let first = context.conversation_history()[0].clone();
    context.append_turn("T3", reply("third"));
    assert_eq!(context.conversation_history()[0], first);
    assert_eq!(context.into_history().len(), 3);
}

#[test]
fn test_turn_transcript_tags_speakers() {
    let mut context = common::wheelchair_racer_context();
    context.append_turn("How am I doing?", reply("fine"));

    let [athlete, coach] = context.conversation_history()[0].transcript();
    assert_eq!(athlete, (Speaker::Athlete, "How am I doing?"));
    assert_eq!(coach.0, Speaker::Coach);
    assert!(coach.1.starts_with("SUMMARY"));
}

#[test]
fn test_from_parts_requires_athlete_and_predictions() {
    let base = common::wheelchair_racer_context();

    let no_athlete =
        CoachingContext::from_parts(None, Some(*base.predictions()), Vec::new()).unwrap_err();
    assert_eq!(no_athlete, PipelineError::context("athlete_data"));

    let no_predictions =
        CoachingContext::from_parts(Some(base.athlete_data().clone()), None, Vec::new())
            .unwrap_err();
    assert_eq!(no_predictions, PipelineError::context("predictions"));

    let rebuilt = CoachingContext::from_parts(
        Some(base.athlete_data().clone()),
        Some(*base.predictions()),
        Vec::new(),
    )
    .unwrap();
    assert_eq!(rebuilt, base);
}

// ============================================================================
// Prompt construction
// ============================================================================

#[test]
fn test_blank_question_becomes_overview() {
    assert_eq!(effective_question("   "), DEFAULT_QUESTION);
    assert_eq!(effective_question("  Diet?  "), "Diet?");
}

#[test]
fn test_prompt_is_deterministic() {
    let mut context = common::wheelchair_racer_context();
    context.append_turn("T1", reply("first"));

    let a = CoachingPrompt::build(&context, "What diet should I follow?");
    let b = CoachingPrompt::build(&context, "What diet should I follow?");
    assert_eq!(a, b);
}

#[test]
fn test_prompt_includes_profile_predictions_history_and_question() {
    let mut context = common::wheelchair_racer_context();
    context.append_turn("How is my stamina?", reply("stamina is good"));

    let prompt = CoachingPrompt::build(&context, "What diet should I follow?");
    let text = prompt.user_message();

    assert!(text.contains("Athlete data:"));
    assert!(text.contains("\"sport_type\": \"Wheelchair Racing\""));
    assert!(text.contains("Model predictions:"));
    assert!(text.contains("injury_risk_label"));
    assert!(text.contains("Athlete: How is my stamina?"));
    assert!(text.contains("stamina is good"));
    assert!(text.ends_with("User question:\nWhat diet should I follow?"));

    let history_at = text.find("Conversation so far:").unwrap();
    let question_at = text.find("User question:").unwrap();
    assert!(history_at < question_at);
}

#[test]
fn test_first_turn_prompt_says_no_history() {
    let context = common::wheelchair_racer_context();
    let prompt = CoachingPrompt::build(&context, "");
    assert!(prompt.user_message().contains("(no previous turns)"));
    assert_eq!(prompt.question(), DEFAULT_QUESTION);
}

#[test]
fn test_messages_carry_system_prompt_first() {
    let context = common::wheelchair_racer_context();
    let messages = CoachingPrompt::build(&context, "Diet?").messages();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::System);
    for kind in SectionKind::ALL {
        assert!(messages[0].content.contains(kind.header()), "{kind}");
    }
    assert_eq!(messages[1].role, MessageRole::User);
}

#[test]
fn test_regeneration_messages_name_the_missing_section() {
    let context = common::wheelchair_racer_context();
    let prompt = CoachingPrompt::build(&context, "Diet?");
    let problem = ReplyStructureError::MissingSections(vec![SectionKind::SampleDayMealPlan]);

    let messages = prompt.regeneration_messages("SUMMARY\nonly this", &problem);
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[2].role, MessageRole::Assistant);
    assert_eq!(messages[2].content, "SUMMARY\nonly this");
    assert_eq!(messages[3].role, MessageRole::User);
    assert!(messages[3]
        .content
        .contains("missing these sections: SAMPLE DAY MEAL PLAN"));
}
