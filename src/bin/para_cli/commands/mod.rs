// ABOUTME: Re-exports command modules for para-cli
// ABOUTME: Provides the predict and coach subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod coach;
pub mod predict;
