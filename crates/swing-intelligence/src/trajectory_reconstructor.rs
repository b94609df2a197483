// ABOUTME: Reconstructs ball flight from sparse, noisy per-frame ball detections
// ABOUTME: Fail-fast detection quality gate, weighted parabolic fit, and projectile launch metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ball-flight reconstruction
//!
//! The quality gate runs before any fitting: sequences with too few detected
//! frames or too low a detection rate are rejected with a
//! [`DetectionQualityFailure`] so the caller can fall back to manual ball
//! selection. Sequences that pass are converted to world metres and fitted
//! with a confidence-weighted linear `x(t)` and quadratic `y(t)`; the launch
//! velocity at the first detection drives the vacuum projectile estimates.

use crate::config::intelligence::TrajectoryConfig;
use crate::statistical_analysis::{StatisticalAnalyzer, WeightedSample};
use rayon::prelude::*;
use swing_core::models::{
    BallPosition, CoordinateSpace, DetectionQualityFailure, DetectionSequence, FlightTrajectory,
    QualityFailureReason, TrajectoryType,
};
use tracing::debug;

/// Stateless, quality-gated trajectory reconstructor
#[derive(Debug, Clone, Default)]
pub struct TrajectoryReconstructor {
    config: TrajectoryConfig,
}

impl TrajectoryReconstructor {
    /// Create a reconstructor with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reconstructor with custom configuration
    #[must_use]
    pub const fn with_config(config: TrajectoryConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    /// Fit a flight trajectory to one detection sequence
    ///
    /// # Errors
    ///
    /// Returns [`DetectionQualityFailure`] when the detections fail the quality
    /// gate or cannot constrain a unique fit
    pub fn reconstruct(
        &self,
        sequence: &DetectionSequence,
    ) -> Result<FlightTrajectory, DetectionQualityFailure> {
        let detected_frames = sequence.detected_frames();
        let detection_rate = sequence.detection_rate();
        let failure = |reason| DetectionQualityFailure {
            reason,
            detected_frame_count: detected_frames,
            total_frames: sequence.total_frames,
            detection_rate,
        };

        if let Some(reason) = self.gate(detected_frames, detection_rate) {
            debug!(
                detected_frames,
                total_frames = sequence.total_frames,
                detection_rate,
                reason = reason.description(),
                "Detection quality gate rejected sequence"
            );
            return Err(failure(reason));
        }

        let samples = self
            .world_samples(sequence)
            .ok_or_else(|| failure(QualityFailureReason::DegenerateFit))?;
        let x_samples: Vec<WeightedSample> = samples
            .iter()
            .map(|(t, position, weight)| WeightedSample::new(*t, position.x, *weight))
            .collect();
        let y_samples: Vec<WeightedSample> = samples
            .iter()
            .map(|(t, position, weight)| WeightedSample::new(*t, position.y, *weight))
            .collect();

        let (x_fit, y_fit) = StatisticalAnalyzer::weighted_linear_fit(&x_samples)
            .and_then(|x_fit| {
                StatisticalAnalyzer::weighted_quadratic_fit(&y_samples).map(|y_fit| (x_fit, y_fit))
            })
            .map_err(|error| {
                debug!(%error, "Trajectory fit is degenerate");
                failure(QualityFailureReason::DegenerateFit)
            })?;

        let horizontal_velocity = x_fit.coefficient(1).abs();
        let vertical_velocity = y_fit.derivative_at(0.0);
        let launch_speed_mps = horizontal_velocity.hypot(vertical_velocity);
        if !launch_speed_mps.is_finite() {
            return Err(failure(QualityFailureReason::DegenerateFit));
        }
        let launch_angle_deg = vertical_velocity.atan2(horizontal_velocity).to_degrees();

        let trajectory = self.projectile(launch_speed_mps, launch_angle_deg);
        let trajectory = FlightTrajectory {
            detected_frames,
            detection_rate,
            fit_r_squared: y_fit.r_squared,
            ..trajectory
        };

        debug!(
            launch_speed_mps,
            launch_angle_deg,
            max_height_m = trajectory.max_height_m,
            range_m = trajectory.range_m,
            fit_r_squared = trajectory.fit_r_squared,
            "Reconstructed ball flight"
        );
        Ok(trajectory)
    }

    /// Reconstruct many sequences in parallel, preserving input order
    #[must_use]
    pub fn reconstruct_batch(
        &self,
        sequences: &[DetectionSequence],
    ) -> Vec<Result<FlightTrajectory, DetectionQualityFailure>> {
        sequences
            .par_iter()
            .map(|sequence| self.reconstruct(sequence))
            .collect()
    }

    /// Vacuum projectile estimates for a launch
    #[must_use]
    pub fn projectile(&self, launch_speed_mps: f64, launch_angle_deg: f64) -> FlightTrajectory {
        let gravity = self.config.gravity_mps2;
        let angle = launch_angle_deg.to_radians();
        let vertical = launch_speed_mps * angle.sin();

        FlightTrajectory {
            launch_speed_mps,
            launch_angle_deg,
            max_height_m: if vertical > 0.0 {
                vertical * vertical / (2.0 * gravity)
            } else {
                0.0
            },
            range_m: (launch_speed_mps * launch_speed_mps * (2.0 * angle).sin() / gravity)
                .max(0.0),
            flight_time_sec: (2.0 * vertical / gravity).max(0.0),
            trajectory_type: self.classify_launch_angle(launch_angle_deg),
            detected_frames: 0,
            detection_rate: 0.0,
            fit_r_squared: 0.0,
        }
    }

    /// Launch-angle band for display
    #[must_use]
    pub fn classify_launch_angle(&self, launch_angle_deg: f64) -> TrajectoryType {
        let config = &self.config;
        if (config.optimal_launch_min_deg..=config.optimal_launch_max_deg)
            .contains(&launch_angle_deg)
        {
            TrajectoryType::Optimal
        } else if launch_angle_deg > config.optimal_launch_max_deg
            && launch_angle_deg <= config.good_launch_max_deg
        {
            TrajectoryType::Good
        } else {
            TrajectoryType::Suboptimal
        }
    }

    fn gate(&self, detected_frames: usize, detection_rate: f64) -> Option<QualityFailureReason> {
        if detected_frames < self.config.min_detected_frames {
            Some(QualityFailureReason::TooFewDetections)
        } else if detection_rate < self.config.min_detection_rate {
            Some(QualityFailureReason::LowDetectionRate)
        } else {
            None
        }
    }

    /// `(seconds since first detection, world position, fit weight)` per detection
    fn world_samples(&self, sequence: &DetectionSequence) -> Option<Vec<(f64, BallPosition, f64)>> {
        let fps = sequence
            .frame_rate_fps
            .filter(|fps| fps.is_finite() && *fps > 0.0)
            .unwrap_or(self.config.default_frame_rate_fps);
        let first_frame = sequence
            .detections
            .iter()
            .map(|detection| detection.frame_index)
            .min()?;

        sequence
            .detections
            .iter()
            .map(|detection| {
                let t = f64::from(detection.frame_index - first_frame) / fps;
                let position = to_world(detection.position, sequence.coordinate_space)?;
                let confidence = if detection.confidence.is_nan() {
                    0.0
                } else {
                    detection.confidence.clamp(0.0, 1.0)
                };
                Some((t, position, confidence.max(self.config.min_fit_weight)))
            })
            .collect()
    }
}

/// Convert a detection to metres, x downrange and y up
fn to_world(position: BallPosition, space: CoordinateSpace) -> Option<BallPosition> {
    match space {
        CoordinateSpace::World => Some(position),
        CoordinateSpace::Pixel {
            pixels_per_meter,
            image_height,
        } => (pixels_per_meter.is_finite() && pixels_per_meter > 0.0 && image_height.is_finite())
            .then(|| BallPosition {
                x: position.x / pixels_per_meter,
                y: (image_height - position.y) / pixels_per_meter,
            }),
    }
}
