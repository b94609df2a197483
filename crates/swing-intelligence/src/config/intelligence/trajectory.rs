// ABOUTME: Trajectory reconstruction configuration for ball-flight fitting
// ABOUTME: Configures the detection quality gate, gravity, frame rate, and launch-angle bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::biomechanical_constants::ball_flight;
use serde::{Deserialize, Serialize};

/// Trajectory Reconstructor Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Fewest distinct detected frames accepted by the quality gate
    pub min_detected_frames: usize,
    /// Smallest detection rate accepted by the quality gate
    pub min_detection_rate: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity_mps2: f64,
    /// Frame rate assumed when a sequence does not carry one
    pub default_frame_rate_fps: f64,
    /// Lower bound of the optimal launch band (degrees)
    pub optimal_launch_min_deg: f64,
    /// Upper bound of the optimal launch band (degrees)
    pub optimal_launch_max_deg: f64,
    /// Upper bound of the good launch band (degrees)
    pub good_launch_max_deg: f64,
    /// Floor on per-detection fit weight
    pub min_fit_weight: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            min_detected_frames: ball_flight::MIN_DETECTED_FRAMES,
            min_detection_rate: ball_flight::MIN_DETECTION_RATE,
            gravity_mps2: ball_flight::GRAVITY_MPS2,
            default_frame_rate_fps: ball_flight::DEFAULT_FRAME_RATE_FPS,
            optimal_launch_min_deg: ball_flight::OPTIMAL_LAUNCH_MIN_DEG,
            optimal_launch_max_deg: ball_flight::OPTIMAL_LAUNCH_MAX_DEG,
            good_launch_max_deg: ball_flight::GOOD_LAUNCH_MAX_DEG,
            min_fit_weight: ball_flight::MIN_FIT_WEIGHT,
        }
    }
}
