// ABOUTME: Derived swing analysis result built once from a measurement set
// ABOUTME: Club speed profile, body kinematics, swing plane, tempo, and tracking quality types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SwingClassification;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full biomechanics report for one swing
///
/// Created once by the biomechanics deriver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingAnalysisResult {
    /// Swing identifier copied from the measurement set
    pub swing_id: Option<Uuid>,
    /// Recording timestamp copied from the measurement set
    pub recorded_at: Option<DateTime<Utc>>,
    /// Parsed swing classification
    pub classification: SwingClassification,
    /// Club-head speed profile
    pub club_head_speed: ClubHeadSpeedProfile,
    /// Body rotation, posture, and weight transfer
    pub body_kinematics: BodyKinematics,
    /// Swing plane and club delivery
    pub swing_plane: SwingPlaneMetrics,
    /// Backswing/downswing timing
    pub tempo: TempoMetrics,
    /// How trustworthy the upstream visual measurements are
    pub tracking_quality: TrackingQuality,
    /// Model confidence (0-1)
    pub confidence: f64,
}

/// Club-head speed samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubHeadSpeedProfile {
    /// Peak speed (mph)
    pub peak_mph: f64,
    /// Speed at impact (mph)
    pub at_impact_mph: f64,
    /// Synthesized acceleration curve over the normalized swing, never negative
    pub acceleration_profile: Vec<f64>,
    /// Sample index of the acceleration peak
    pub impact_frame_index: usize,
}

/// Rotation extremes for one body segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMetrics {
    /// Maximum rotation at the top of the backswing (degrees)
    pub max_deg: f64,
    /// Rotation remaining at impact (degrees)
    pub at_impact_deg: f64,
}

/// Spine tilt at the three key positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpineAngles {
    /// Forward bend at address (degrees)
    pub address_deg: f64,
    /// Forward bend at the top (degrees)
    pub top_deg: f64,
    /// Forward bend at impact (degrees)
    pub impact_deg: f64,
}

/// Body kinematics derived from the pose signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyKinematics {
    /// Shoulder turn
    pub shoulder_rotation: RotationMetrics,
    /// Hip turn
    pub hip_rotation: RotationMetrics,
    /// Shoulder-hip separation at the top (degrees)
    pub x_factor_deg: f64,
    /// Lead-arm extension (0-1)
    pub arm_extension: f64,
    /// Wrist cock / lag angle (degrees)
    pub wrist_cock_angle_deg: f64,
    /// Spine tilt through the swing
    pub spine_angles: SpineAngles,
    /// How well the spine angle is held from address to impact (0-1)
    pub spine_stability: f64,
    /// Fraction of body weight shifted per second of downswing
    pub weight_transfer_speed: f64,
}

/// Swing plane and club delivery
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPlaneMetrics {
    /// Plane angle (degrees)
    pub angle_deg: f64,
    /// Frame-to-frame plane consistency (0-1)
    pub consistency: f64,
    /// Club path relative to target line (degrees, positive = out-to-in)
    pub club_path_deg: f64,
    /// Attack angle (degrees, negative = descending)
    pub attack_angle_deg: f64,
}

/// Swing timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoMetrics {
    /// Backswing duration (seconds)
    pub backswing_sec: f64,
    /// Downswing duration (seconds)
    pub downswing_sec: f64,
    /// Backswing plus downswing (seconds)
    pub total_sec: f64,
    /// Backswing:downswing ratio
    pub ratio: f64,
    /// Transition pause at the top (seconds)
    pub pause_at_top_sec: f64,
}

/// Composite tracking-quality signals, each in [0,1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingQuality {
    /// Club visibility
    pub club_visibility: f64,
    /// Body visibility
    pub body_visibility: f64,
    /// Lighting quality
    pub lighting: f64,
    /// Camera angle suitability
    pub camera_angle: f64,
    /// Motion blur (higher is worse)
    pub motion_blur: f64,
    /// Mean of the four positive signals and `1 - motion_blur`
    pub overall_score: f64,
}

impl TrackingQuality {
    /// Build from individual signals; each is clamped to [0,1] and the overall score derived
    #[must_use]
    pub fn new(
        club_visibility: f64,
        body_visibility: f64,
        lighting: f64,
        camera_angle: f64,
        motion_blur: f64,
    ) -> Self {
        let club_visibility = unit_interval(club_visibility);
        let body_visibility = unit_interval(body_visibility);
        let lighting = unit_interval(lighting);
        let camera_angle = unit_interval(camera_angle);
        let motion_blur = unit_interval(motion_blur);
        let overall_score =
            (club_visibility + body_visibility + lighting + camera_angle + (1.0 - motion_blur))
                / 5.0;

        Self {
            club_visibility,
            body_visibility,
            lighting,
            camera_angle,
            motion_blur,
            overall_score,
        }
    }
}

/// Clamp to [0,1], mapping NaN to 0
fn unit_interval(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_quality_overall_is_mean_with_inverted_blur() {
        let quality = TrackingQuality::new(0.8, 0.9, 0.75, 0.85, 0.2);
        assert!((quality.overall_score - 0.82).abs() < 1e-12);
    }

    #[test]
    fn test_tracking_quality_clamps_inputs() {
        let quality = TrackingQuality::new(1.4, -0.2, f64::NAN, 0.5, 2.0);
        assert!((quality.club_visibility - 1.0).abs() < f64::EPSILON);
        assert!(quality.body_visibility.abs() < f64::EPSILON);
        assert!(quality.lighting.abs() < f64::EPSILON);
        assert!((quality.motion_blur - 1.0).abs() < f64::EPSILON);
        assert!((0.0..=1.0).contains(&quality.overall_score));
    }
}
