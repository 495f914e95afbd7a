// ABOUTME: Test helper modules for integration tests
// ABOUTME: Exposes the axum router driver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod axum_test;
