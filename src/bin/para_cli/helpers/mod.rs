// ABOUTME: Helper modules for para-cli
// ABOUTME: Input loading, the interactive athlete form, and terminal display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
pub mod prompt;
