// ABOUTME: Configuration command for swing-insight-cli
// ABOUTME: Prints the engine configuration after environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use swing_insight::config::IntelligenceConfig;
use swing_insight::io;

/// Print the effective configuration as JSON
pub fn show(config: &IntelligenceConfig) -> Result<()> {
    println!("{}", io::to_pretty_json(config)?);
    Ok(())
}
