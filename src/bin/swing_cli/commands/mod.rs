// ABOUTME: Re-exports command modules for swing-insight-cli
// ABOUTME: Provides swing analysis, trajectory, and configuration commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod config;
pub mod swing;
pub mod trajectory;
