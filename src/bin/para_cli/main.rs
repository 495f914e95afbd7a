// ABOUTME: Para CLI - command-line predictions and interactive coaching sessions
// ABOUTME: Reads an athlete JSON file or asks field by field, prints predictions, and runs a coaching loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Predict stamina, fatigue and injury risk
//! para-cli predict --input athlete.json
//!
//! # Same, as JSON
//! para-cli predict --input athlete.json --json
//!
//! # Without --input, each field is asked on the terminal
//! para-cli predict
//!
//! # Ask one coaching question
//! para-cli coach --input athlete.json --question "What diet should I follow?"
//!
//! # Interactive coaching session (type `exit` to finish)
//! para-cli coach --input athlete.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use para_coach::{config::ServerConfig, constants::service_names, logging::LoggingConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "para-cli",
    about = "Para-athlete prediction and coaching CLI",
    long_about = "Predict stamina, fatigue and injury risk for a para-athlete and chat with the coach about the results."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize an athlete and print the predictions
    Predict {
        /// Athlete JSON file (raw form fields); asks interactively when omitted
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Print machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Predict, then talk to the coach about the results
    Coach {
        /// Athlete JSON file (raw form fields); asks interactively when omitted
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Ask a single question and exit instead of starting a session
        #[arg(long, short = 'q')]
        question: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env_for(service_names::PARA_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = ServerConfig::from_env()?;
    debug!("{}", config.summary());

    match cli.command {
        Command::Predict { input, json } => commands::predict::run(input.as_deref(), json)?,
        Command::Coach { input, question } => {
            commands::coach::run(&config, input.as_deref(), question.as_deref()).await?;
        }
    }

    Ok(())
}
