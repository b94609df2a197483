// ABOUTME: Swing analysis commands for swing-insight-cli
// ABOUTME: Handles single-swing and batch analysis with JSON or summary output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use std::path::Path;
use swing_insight::{io, SwingAnalysisService};
use tracing::info;

use crate::helpers::display::{display_batch_summary, display_swing_report};
use crate::helpers::emit_json;

/// Analyze one measurement set
pub fn analyze(
    service: &SwingAnalysisService,
    input: &Path,
    output: Option<&Path>,
    summary: bool,
) -> Result<()> {
    let measurement = io::load_measurement(input)
        .with_context(|| format!("Failed to load measurement set from {}", input.display()))?;
    let report = service.analyze(&measurement);

    if summary {
        display_swing_report(&report);
    }
    emit_json(&report, output, summary)
}

/// Analyze every measurement set in a JSON array
pub fn batch(
    service: &SwingAnalysisService,
    input: &Path,
    output: Option<&Path>,
    summary: bool,
) -> Result<()> {
    let measurements = io::load_measurements(input)
        .with_context(|| format!("Failed to load measurement sets from {}", input.display()))?;
    info!(swings = measurements.len(), "Starting batch analysis");

    let reports = service.analyze_batch(&measurements);

    if summary {
        display_batch_summary(&reports);
    }
    emit_json(&reports, output, summary)
}
