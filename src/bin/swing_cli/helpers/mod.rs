// ABOUTME: Helper utilities for swing-insight-cli
// ABOUTME: Provides display formatting and JSON output routing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use swing_insight::io;
use tracing::info;

/// Write JSON to `output`, or to stdout unless a summary already went there
pub fn emit_json<T: Serialize>(
    value: &T,
    output: Option<&Path>,
    summary_printed: bool,
) -> Result<()> {
    match output {
        Some(path) => {
            io::write_json(path, value)?;
            info!(path = %path.display(), "Report written");
        }
        None if !summary_printed => println!("{}", io::to_pretty_json(value)?),
        None => {}
    }
    Ok(())
}
