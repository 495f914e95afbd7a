// ABOUTME: Core types and constants for the para-athlete coaching pipeline
// ABOUTME: Foundation crate with domain models, the error taxonomy, and field bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Para Core
//!
//! Foundation crate shared by the prediction engine and the coaching service.
//! It changes rarely, so the heavier crates above it rebuild independently.
//!
//! ## Modules
//!
//! - **errors**: `PipelineError` taxonomy plus the transport-neutral `AppError`/`ErrorCode`
//! - **constants**: field bounds, risk thresholds, reply section headers
//! - **models**: `AthleteProfile`, `PredictionRecord`, `DialogueTurn`, `StructuredReply`

/// Unified error handling: pipeline taxonomy and boundary error codes
pub mod errors;

/// Field bounds, thresholds and other fixed configuration values
pub mod constants;

/// Domain models for athletes, predictions and coaching dialogue
pub mod models;
