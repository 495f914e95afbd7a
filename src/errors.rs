// ABOUTME: Error handling re-exports for the para-coach crate
// ABOUTME: The error taxonomy lives in para-core so every workspace crate shares it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use para_core::errors::{
    AppError, AppResult, ErrorCode, ErrorKind, ErrorResponse, ErrorResponseDetails,
    GenerationCause, PipelineError, PipelineResult,
};
