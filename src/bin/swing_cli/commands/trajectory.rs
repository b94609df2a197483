// ABOUTME: Ball-flight reconstruction command for swing-insight-cli
// ABOUTME: Fits launch metrics, samples a display path, and reports manual-selection fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::Path;
use swing_insight::models::{BallPosition, DetectionQualityFailure, FlightTrajectory};
use swing_insight::{io, SwingAnalysisService};
use swing_intelligence::TrajectoryPath;
use tracing::warn;

use crate::helpers::display::display_trajectory;
use crate::helpers::emit_json;

/// Canvas used for the display path
#[derive(Debug, Args)]
pub struct CanvasArgs {
    /// Canvas width
    #[arg(long, default_value_t = 400.0)]
    pub width: f64,

    /// Ground line (screen y)
    #[arg(long, default_value_t = 300.0)]
    pub ground_y: f64,

    /// Horizontal launch margin
    #[arg(long, default_value_t = 20.0)]
    pub start_x: f64,

    /// Apex height above the ground line
    #[arg(long, default_value_t = 150.0)]
    pub apex: f64,
}

impl CanvasArgs {
    const fn path(&self) -> TrajectoryPath {
        TrajectoryPath::new(self.start_x, self.width, self.ground_y, self.apex)
    }
}

#[derive(Serialize)]
struct TrajectoryOutput {
    trajectory: FlightTrajectory,
    display_path: Vec<BallPosition>,
}

#[derive(Serialize)]
struct ManualSelectionRequired {
    status: &'static str,
    message: String,
    requires_manual_selection: bool,
    failure: DetectionQualityFailure,
}

/// Reconstruct a ball flight from a detection sequence
pub fn reconstruct(
    service: &SwingAnalysisService,
    input: &Path,
    output: Option<&Path>,
    samples: usize,
    canvas: &CanvasArgs,
) -> Result<()> {
    let sequence = io::load_detections(input)
        .with_context(|| format!("Failed to load detections from {}", input.display()))?;

    match service.reconstruct_trajectory(&sequence) {
        Ok(trajectory) => {
            display_trajectory(&trajectory);
            let result = TrajectoryOutput {
                trajectory,
                display_path: canvas.path().sample(samples),
            };
            emit_json(&result, output, false)
        }
        Err(failure) => {
            warn!(
                detected_frames = failure.detected_frame_count,
                total_frames = failure.total_frames,
                "Ball tracking failed the quality gate"
            );
            let fallback = ManualSelectionRequired {
                status: "manual_selection_required",
                message: failure.to_string(),
                requires_manual_selection: failure.requires_manual_selection(),
                failure,
            };
            emit_json(&fallback, output, false)?;
            Err(failure.into())
        }
    }
}
