// ABOUTME: End-to-end analysis service wiring the derivation, feedback, and trajectory engines
// ABOUTME: Single-swing reports and order-preserving parallel batch analysis with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analysis Service
//!
//! Owns one instance of each engine, built from a single
//! [`IntelligenceConfig`]. The service holds no mutable state, so a shared
//! reference can serve any number of threads.

use crate::logging::AppLogger;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use swing_core::models::{
    DetectionQualityFailure, DetectionSequence, FlightTrajectory, MeasurementSet,
    SwingAnalysisResult, SwingFeedback,
};
use swing_intelligence::{
    BiomechanicsDeriver, FeedbackEngine, FeedbackGenerator, IntelligenceConfig,
    TrajectoryReconstructor,
};
use tracing::info;

/// Biomechanics analysis and coaching feedback for one swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingReport {
    /// Derived biomechanics
    pub analysis: SwingAnalysisResult,
    /// Coaching feedback built from `analysis`
    pub feedback: SwingFeedback,
}

/// Stateless service running the analysis pipelines
#[derive(Debug, Clone, Default)]
pub struct SwingAnalysisService {
    deriver: BiomechanicsDeriver,
    feedback_engine: FeedbackEngine,
    reconstructor: TrajectoryReconstructor,
}

impl SwingAnalysisService {
    /// Create a service with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service from a loaded configuration
    #[must_use]
    pub fn with_config(config: IntelligenceConfig) -> Self {
        Self {
            deriver: BiomechanicsDeriver::with_config(config.biomechanics),
            feedback_engine: FeedbackEngine::with_config(config.feedback),
            reconstructor: TrajectoryReconstructor::with_config(config.trajectory),
        }
    }

    /// Derive and score one swing, stamping feedback with the current time
    #[must_use]
    pub fn analyze(&self, measurement: &MeasurementSet) -> SwingReport {
        let started = Instant::now();
        let report = self.analyze_at(measurement, Utc::now());
        AppLogger::log_swing_analysis(
            report.analysis.swing_id,
            report.feedback.overall_score,
            elapsed_ms(started),
        );
        report
    }

    /// Derive and score one swing with an explicit feedback timestamp
    #[must_use]
    pub fn analyze_at(
        &self,
        measurement: &MeasurementSet,
        generated_at: DateTime<Utc>,
    ) -> SwingReport {
        let analysis = self.deriver.derive(measurement);
        let feedback = self
            .feedback_engine
            .generate_feedback_at(&analysis, generated_at);
        SwingReport { analysis, feedback }
    }

    /// Analyze many swings in parallel; output order matches input order
    ///
    /// All reports in one batch share a single feedback timestamp.
    #[must_use]
    pub fn analyze_batch(&self, measurements: &[MeasurementSet]) -> Vec<SwingReport> {
        let started = Instant::now();
        let generated_at = Utc::now();
        let reports: Vec<SwingReport> = measurements
            .par_iter()
            .map(|measurement| self.analyze_at(measurement, generated_at))
            .collect();

        AppLogger::log_batch(reports.len(), elapsed_ms(started));
        reports
    }

    /// Reconstruct a ball flight from detections
    ///
    /// # Errors
    ///
    /// Returns [`DetectionQualityFailure`] when the caller should offer manual ball selection
    pub fn reconstruct_trajectory(
        &self,
        sequence: &DetectionSequence,
    ) -> Result<FlightTrajectory, DetectionQualityFailure> {
        let outcome = self.reconstructor.reconstruct(sequence);
        AppLogger::log_trajectory(
            outcome.is_ok(),
            sequence.detected_frames(),
            sequence.detection_rate(),
        );
        if let Err(failure) = &outcome {
            info!(reason = failure.reason.description(), "Manual ball selection required");
        }
        outcome
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
