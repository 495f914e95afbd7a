// ABOUTME: Integration tests for the dialogue orchestrator retry and timeout policy
// ABOUTME: Uses a scripted provider to drive regeneration, transport failures, and concurrent turns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{Scripted, ScriptedProvider};
use para_coach::coaching::{DialogueOrchestrator, GenerationSettings, SharedCoachingContext};
use para_coach::errors::{ErrorCode, GenerationCause, PipelineError};
use para_coach::models::{SectionKind, StructuredReply};

const QUESTION: &str = "What diet should I follow?";

fn orchestrator(provider: &Arc<ScriptedProvider>) -> DialogueOrchestrator {
    common::init_test_logging();
    DialogueOrchestrator::with_settings(
        provider.clone(),
        GenerationSettings::default().with_timeout(Duration::from_millis(200)),
    )
}

fn generation_cause(error: &PipelineError) -> GenerationCause {
    match error {
        PipelineError::Generation { cause, .. } => *cause,
        other => panic!("expected a generation error, got {other:?}"),
    }
}

// ============================================================================
// Structural contract
// ============================================================================

#[tokio::test]
async fn test_valid_reply_is_accepted_and_recorded() {
    let provider = ScriptedProvider::new([Scripted::Reply(common::valid_reply_text("diet"))]);
    let mut context = common::wheelchair_racer_context();

    let reply = orchestrator(&provider)
        .respond(&mut context, QUESTION)
        .await
        .unwrap();

    let kinds: Vec<SectionKind> = reply.sections().iter().map(|s| s.kind).collect();
    assert_eq!(kinds, SectionKind::ALL);
    assert_eq!(provider.calls(), 1);
    assert_eq!(context.conversation_history().len(), 1);
    assert_eq!(context.conversation_history()[0].question, QUESTION);
    assert_eq!(context.conversation_history()[0].answer, reply);
}

#[tokio::test]
async fn test_missing_section_triggers_exactly_one_regeneration() {
    let provider = ScriptedProvider::new([
        Scripted::Reply(common::reply_missing_meal_plan()),
        Scripted::Reply(common::valid_reply_text("fixed")),
    ]);
    let mut context = common::wheelchair_racer_context();

    let reply = orchestrator(&provider)
        .respond(&mut context, QUESTION)
        .await
        .unwrap();

    assert!(reply.text().contains("fixed"));
    assert_eq!(provider.calls(), 2);

    let requests = provider.requests();
    assert_eq!(requests[0].messages.len(), 2);
    assert_eq!(requests[1].messages.len(), 4);
    assert_eq!(requests[1].messages[2].content, common::reply_missing_meal_plan());
    assert!(requests[1].messages[3]
        .content
        .contains("SAMPLE DAY MEAL PLAN"));
    assert_eq!(context.conversation_history().len(), 1);
}

#[tokio::test]
async fn test_second_malformed_reply_is_an_error() {
    let provider = ScriptedProvider::new([
        Scripted::Reply(common::reply_missing_meal_plan()),
        Scripted::Reply("No headers at all.".to_owned()),
        Scripted::Reply(common::valid_reply_text("too late")),
    ]);
    let mut context = common::wheelchair_racer_context();

    let error = orchestrator(&provider)
        .respond(&mut context, QUESTION)
        .await
        .unwrap_err();

    assert_eq!(generation_cause(&error), GenerationCause::MalformedReply);
    assert!(error.is_retryable());
    assert_eq!(provider.calls(), 2);
    assert!(context.conversation_history().is_empty());
}

// ============================================================================
// Transport failures and timeouts
// ============================================================================

#[tokio::test]
async fn test_timeout_is_retryable_and_leaves_history_untouched() {
    let slow = common::valid_reply_text("slow");
    let provider = ScriptedProvider::new([
        Scripted::Delayed(Duration::from_secs(5), slow.clone()),
        Scripted::Delayed(Duration::from_secs(5), slow),
    ]);
    let orchestrator = DialogueOrchestrator::with_settings(
        provider.clone(),
        GenerationSettings::default().with_timeout(Duration::from_millis(30)),
    );
    let mut context = common::wheelchair_racer_context();
    context.append_turn(
        "Earlier question",
        StructuredReply::parse(common::valid_reply_text("earlier")).unwrap(),
    );
    let before = context.clone();

    let error = orchestrator
        .respond(&mut context, QUESTION)
        .await
        .unwrap_err();

    assert_eq!(generation_cause(&error), GenerationCause::Timeout);
    assert!(error.is_retryable());
    assert!(error.to_string().contains("30 ms"));
    assert_eq!(provider.calls(), 2);
    assert_eq!(context, before);
}

#[tokio::test]
async fn test_timeout_then_success_recovers() {
    let provider = ScriptedProvider::new([
        Scripted::Delayed(Duration::from_secs(5), common::valid_reply_text("slow")),
        Scripted::Reply(common::valid_reply_text("fast")),
    ]);
    let orchestrator = DialogueOrchestrator::with_settings(
        provider.clone(),
        GenerationSettings::default().with_timeout(Duration::from_millis(30)),
    );
    let mut context = common::wheelchair_racer_context();

    let reply = orchestrator.respond(&mut context, QUESTION).await.unwrap();
    assert!(reply.text().contains("fast"));
    assert_eq!(provider.calls(), 2);
    // the retry after a transport failure resends the original prompt
    let requests = provider.requests();
    assert_eq!(requests[0].messages, requests[1].messages);
}

#[tokio::test]
async fn test_unavailable_provider_is_retried_once() {
    let provider = ScriptedProvider::new([
        Scripted::Fail(ErrorCode::ExternalServiceUnavailable, "overloaded".to_owned()),
        Scripted::Fail(ErrorCode::ExternalRateLimited, "quota".to_owned()),
    ]);
    let mut context = common::wheelchair_racer_context();

    let error = orchestrator(&provider)
        .respond(&mut context, QUESTION)
        .await
        .unwrap_err();

    assert_eq!(generation_cause(&error), GenerationCause::Unavailable);
    assert!(error.is_retryable());
    assert_eq!(provider.calls(), 2);
    assert!(context.conversation_history().is_empty());
}

#[tokio::test]
async fn test_rejection_is_not_retried() {
    let provider = ScriptedProvider::new([
        Scripted::Fail(ErrorCode::ExternalAuthFailed, "API key not valid".to_owned()),
        Scripted::Reply(common::valid_reply_text("never used")),
    ]);
    let mut context = common::wheelchair_racer_context();

    let error = orchestrator(&provider)
        .respond(&mut context, QUESTION)
        .await
        .unwrap_err();

    assert_eq!(generation_cause(&error), GenerationCause::Rejected);
    assert!(!error.is_retryable());
    assert!(error.to_string().contains("API key not valid"));
    assert_eq!(provider.calls(), 1);
}

// ============================================================================
// Context conditioning and settings
// ============================================================================

#[tokio::test]
async fn test_second_turn_prompt_contains_first_turn() {
    let provider = ScriptedProvider::always_valid();
    let orchestrator = orchestrator(&provider);
    let mut context = common::wheelchair_racer_context();

    orchestrator
        .respond(&mut context, "How is my stamina?")
        .await
        .unwrap();
    orchestrator.respond(&mut context, QUESTION).await.unwrap();

    let requests = provider.requests();
    let second_prompt = &requests[1].messages[1].content;
    assert!(second_prompt.contains("Athlete: How is my stamina?"));
    assert!(second_prompt.ends_with(QUESTION));

    let questions: Vec<&str> = context
        .conversation_history()
        .iter()
        .map(|t| t.question.as_str())
        .collect();
    assert_eq!(questions, ["How is my stamina?", QUESTION]);
}

#[tokio::test]
async fn test_generation_settings_reach_the_provider() {
    let provider = ScriptedProvider::always_valid();
    let settings = GenerationSettings {
        model: Some("gemini-test".to_owned()),
        temperature: Some(0.3),
        max_tokens: Some(1024),
        timeout: Duration::from_secs(1),
    };
    let orchestrator = DialogueOrchestrator::with_settings(provider.clone(), settings.clone());
    assert_eq!(orchestrator.settings(), &settings);

    let mut context = common::wheelchair_racer_context();
    orchestrator.respond(&mut context, QUESTION).await.unwrap();

    let request = &provider.requests()[0];
    assert_eq!(request.model.as_deref(), Some("gemini-test"));
    assert_eq!(request.temperature, Some(0.3));
    assert_eq!(request.max_tokens, Some(1024));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_turns_on_one_session_are_serialized() {
    let script = (0..5).map(|i| {
        Scripted::Delayed(
            Duration::from_millis(20),
            common::valid_reply_text(&format!("answer {i}")),
        )
    });
    let provider = ScriptedProvider::new(script);
    let orchestrator = orchestrator(&provider);
    let session = SharedCoachingContext::new(common::wheelchair_racer_context());

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let orchestrator = orchestrator.clone();
            let session = session.clone();
            tokio::spawn(async move {
                orchestrator
                    .respond_shared(&session, &format!("Question {i}"))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.conversation_history().len(), 5);

    // each call saw every turn completed before it
    for (position, request) in provider.requests().iter().enumerate() {
        let prompt = &request.messages[1].content;
        assert_eq!(prompt.matches("\nAthlete: ").count(), position);
    }
}
