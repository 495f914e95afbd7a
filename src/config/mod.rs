// ABOUTME: Configuration management module for server and LLM settings
// ABOUTME: Environment-only configuration; no configuration files beyond an optional .env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, LlmConfig, ServerConfig};
