// ABOUTME: HTTP middleware module for cross-cutting request handling
// ABOUTME: Currently provides CORS configuration for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
