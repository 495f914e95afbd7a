// ABOUTME: Coach subcommand for para-cli
// ABOUTME: Runs one coaching session over stdin with serialized turns on a shared context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{stdout, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use para_coach::coaching::{
    effective_question, CoachingContext, DialogueOrchestrator, GenerationSettings,
    SharedCoachingContext,
};
use para_coach::config::ServerConfig;
use para_coach::llm::GeminiProvider;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::predict::predict_athlete;
use crate::helpers::display;

const EXIT_WORDS: [&str; 3] = ["exit", "quit", "q"];

/// Predict for the athlete, then answer questions
pub async fn run(
    config: &ServerConfig,
    path: Option<&Path>,
    question: Option<&str>,
) -> Result<()> {
    let outcome = predict_athlete(path)?;
    display::display_outcome(&outcome);

    let api_key = config
        .llm
        .api_key
        .clone()
        .context("GEMINI_API_KEY must be set to talk to the coach")?;
    let provider = GeminiProvider::new(api_key).with_default_model(config.llm.model.clone());
    let orchestrator = DialogueOrchestrator::with_settings(
        Arc::new(provider),
        GenerationSettings::from(&config.llm),
    );
    let session = SharedCoachingContext::from(CoachingContext::new(
        outcome.input,
        outcome.predictions,
    ));

    let span = info_span!("coach_session", session_id = %Uuid::new_v4());
    converse(&orchestrator, &session, question)
        .instrument(span)
        .await
}

async fn converse(
    orchestrator: &DialogueOrchestrator,
    session: &SharedCoachingContext,
    question: Option<&str>,
) -> Result<()> {
    info!("coaching session started");
    match question {
        Some(question) => ask(orchestrator, session, question).await?,
        None => interactive(orchestrator, session).await?,
    }
    let turns = session.lock().await.conversation_history().len();
    info!(turns, "coaching session finished");
    Ok(())
}

async fn interactive(
    orchestrator: &DialogueOrchestrator,
    session: &SharedCoachingContext,
) -> Result<()> {
    println!("Ask the coach anything (blank line for an overview, `exit` to finish).");
    let mut lines = BufReader::new(stdin()).lines();
    loop {
        print!("> ");
        stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if EXIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
            break;
        }
        if let Err(e) = ask(orchestrator, session, &line).await {
            warn!("coach turn failed: {e:#}");
            eprintln!("The coach could not answer: {e}");
        }
    }
    Ok(())
}

async fn ask(
    orchestrator: &DialogueOrchestrator,
    session: &SharedCoachingContext,
    question: &str,
) -> Result<()> {
    let question = effective_question(question);
    let reply = orchestrator.respond_shared(session, question).await?;
    display::display_reply(&reply);
    Ok(())
}
