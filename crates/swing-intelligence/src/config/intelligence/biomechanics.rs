// ABOUTME: Biomechanics derivation configuration for swing analysis
// ABOUTME: Configures neutral baselines, tempo window, acceleration curve, and rotation priors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Biomechanics Deriver Configuration
//!
//! Baselines and priors used when turning a raw measurement set into a full
//! biomechanics report. Every value here is a fallback or a model parameter,
//! never a hard limit on the input.

use crate::biomechanical_constants::{acceleration, rotation, spine, swing_plane, tempo, wrist};
use serde::{Deserialize, Serialize};

/// Biomechanics Deriver Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomechanicsConfig {
    /// Neutral swing plane angle (degrees)
    pub neutral_plane_angle_deg: f64,
    /// Wrist cock angle at the neutral plane (degrees)
    pub wrist_baseline_deg: f64,
    /// Wrist cock change per degree of plane deviation
    pub wrist_plane_slope: f64,
    /// Share of the video duration occupied by the swing
    pub swing_fraction_of_video: f64,
    /// Shortest swing the tempo split will produce (seconds)
    pub min_swing_sec: f64,
    /// Longest swing the tempo split will produce (seconds)
    pub max_swing_sec: f64,
    /// Tempo ratio assumed when the model reports an unusable one
    pub ideal_tempo_ratio: f64,
    /// Samples in the synthesized acceleration curve
    pub acceleration_samples: usize,
    /// Gain of the synthesized acceleration curve
    pub acceleration_gain: f64,
    /// Hip turn as a share of shoulder turn when hips are not measured
    pub hip_to_shoulder_ratio: f64,
    /// Spine angle at address when not measured (degrees)
    pub neutral_spine_angle_deg: f64,
    /// Spine drift at which stability reaches zero (degrees)
    pub spine_tolerance_deg: f64,
}

impl Default for BiomechanicsConfig {
    fn default() -> Self {
        Self {
            neutral_plane_angle_deg: swing_plane::NEUTRAL_PLANE_ANGLE_DEG,
            wrist_baseline_deg: wrist::BASELINE_DEG,
            wrist_plane_slope: wrist::PLANE_SLOPE,
            swing_fraction_of_video: tempo::SWING_FRACTION_OF_VIDEO,
            min_swing_sec: tempo::MIN_SWING_SEC,
            max_swing_sec: tempo::MAX_SWING_SEC,
            ideal_tempo_ratio: tempo::IDEAL_RATIO,
            acceleration_samples: acceleration::SAMPLE_COUNT,
            acceleration_gain: acceleration::GAIN,
            hip_to_shoulder_ratio: rotation::HIP_TO_SHOULDER_RATIO,
            neutral_spine_angle_deg: spine::NEUTRAL_ADDRESS_DEG,
            spine_tolerance_deg: spine::STABILITY_TOLERANCE_DEG,
        }
    }
}
