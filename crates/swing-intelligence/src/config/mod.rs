// ABOUTME: Configuration module for swing-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (biomechanics, feedback, trajectory)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
