// ABOUTME: Derives a full swing biomechanics report from one upstream measurement set
// ABOUTME: Total function: every missing or unusable input resolves to a documented fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Biomechanics derivation
//!
//! Maps a `MeasurementSet` onto a `SwingAnalysisResult`. Nothing here can
//! fail: absent detailed measurements fall back to model priors, unusable
//! scalars fall back to neutral values, and every bounded output is clamped.

use crate::biomechanical_constants::{
    label_club_path, rotation, spine, swing_plane, tempo, tracking,
};
use crate::config::intelligence::BiomechanicsConfig;
use std::f64::consts::PI;
use swing_core::models::{
    BodyKinematics, ClubHeadSpeedProfile, MeasurementSet, ReliabilityKey, RotationMetrics,
    SpineAngles, SwingAnalysisResult, SwingClassification, SwingPlaneMetrics, TempoMetrics,
    TrackingQuality,
};
use tracing::{debug, warn};

/// Stateless deriver turning raw measurements into a biomechanics report
#[derive(Debug, Clone, Default)]
pub struct BiomechanicsDeriver {
    config: BiomechanicsConfig,
}

impl BiomechanicsDeriver {
    /// Create a deriver with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deriver with custom configuration
    #[must_use]
    pub const fn with_config(config: BiomechanicsConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &BiomechanicsConfig {
        &self.config
    }

    /// Derive the full biomechanics report for one swing
    #[must_use]
    pub fn derive(&self, measurement: &MeasurementSet) -> SwingAnalysisResult {
        let club_speed =
            non_negative_or_zero(measurement.club_head_speed_mph, "club_head_speed_mph");
        let tempo = self.tempo(measurement);
        let plane_angle = measurement
            .plane_angle()
            .unwrap_or(self.config.neutral_plane_angle_deg);
        let classification = measurement.classification();

        let result = SwingAnalysisResult {
            swing_id: measurement.swing_id,
            recorded_at: measurement.recorded_at,
            classification,
            club_head_speed: self.club_head_speed(club_speed),
            body_kinematics: self.body_kinematics(measurement, plane_angle, &tempo),
            swing_plane: self.swing_plane(measurement, plane_angle, classification),
            tempo,
            tracking_quality: tracking_quality(measurement),
            confidence: confidence(measurement.confidence),
        };

        debug!(
            swing_id = ?result.swing_id,
            classification = classification.as_str(),
            club_speed_mph = club_speed,
            tempo_ratio = result.tempo.ratio,
            tracking_score = result.tracking_quality.overall_score,
            "Derived swing biomechanics"
        );
        result
    }

    /// Single-hump acceleration curve peaking mid-swing
    fn club_head_speed(&self, club_speed: f64) -> ClubHeadSpeedProfile {
        let samples = self.config.acceleration_samples.max(2);
        let last = (samples - 1) as f64;
        let acceleration_profile: Vec<f64> = (0..samples)
            .map(|i| {
                let t = i as f64 / last;
                (club_speed * (t * PI).sin() * self.config.acceleration_gain).max(0.0)
            })
            .collect();

        let impact_frame_index = acceleration_profile
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |(best_index, best), (index, &value)| {
                if value > best {
                    (index, value)
                } else {
                    (best_index, best)
                }
            })
            .0;

        ClubHeadSpeedProfile {
            peak_mph: club_speed,
            at_impact_mph: club_speed,
            acceleration_profile,
            impact_frame_index,
        }
    }

    fn body_kinematics(
        &self,
        measurement: &MeasurementSet,
        plane_angle: f64,
        tempo_metrics: &TempoMetrics,
    ) -> BodyKinematics {
        let shoulder_tilt = finite_or(measurement.shoulder_tilt_deg, 0.0);
        let shoulder_max = measurement
            .detailed_value(&["shoulder"])
            .unwrap_or(shoulder_tilt);
        let hip_max = measurement
            .detailed_value(&["hip"])
            .unwrap_or(self.config.hip_to_shoulder_ratio * shoulder_tilt);

        let wrist_cock_angle_deg = measurement
            .detailed_value(&["wrist", "lag"])
            .unwrap_or_else(|| {
                self.config.wrist_plane_slope.mul_add(
                    plane_angle - self.config.neutral_plane_angle_deg,
                    self.config.wrist_baseline_deg,
                )
            });

        let arm_extension = measurement
            .detailed_value(&["extension"])
            .map_or(rotation::DEFAULT_ARM_EXTENSION, |value| value.clamp(0.0, 1.0));

        let spine_angles = self.spine_angles(measurement, tempo_metrics.ratio);
        let spine_drift = (spine_angles.impact_deg - spine_angles.address_deg).abs();
        let spine_stability =
            (1.0 - spine_drift / self.config.spine_tolerance_deg).clamp(0.0, 1.0);

        BodyKinematics {
            shoulder_rotation: RotationMetrics {
                max_deg: shoulder_max,
                at_impact_deg: shoulder_max * rotation::SHOULDER_AT_IMPACT_FRACTION,
            },
            hip_rotation: RotationMetrics {
                max_deg: hip_max,
                at_impact_deg: hip_max * rotation::HIP_AT_IMPACT_FRACTION,
            },
            x_factor_deg: shoulder_max - hip_max,
            arm_extension,
            wrist_cock_angle_deg,
            spine_angles,
            spine_stability,
            weight_transfer_speed: tempo::WEIGHT_TRANSFER_FRACTION / tempo_metrics.downswing_sec,
        }
    }

    /// Spine bend at address, top, and impact; impact drift grows with tempo deviation
    fn spine_angles(&self, measurement: &MeasurementSet, tempo_ratio: f64) -> SpineAngles {
        let address_deg = measurement
            .detailed_value(&["spine"])
            .unwrap_or(self.config.neutral_spine_angle_deg);
        let tempo_deviation = (tempo_ratio - self.config.ideal_tempo_ratio).abs();

        SpineAngles {
            address_deg,
            top_deg: address_deg + spine::TOP_DRIFT_DEG,
            impact_deg: address_deg + spine::TOP_DRIFT_DEG + tempo_deviation,
        }
    }

    fn swing_plane(
        &self,
        measurement: &MeasurementSet,
        plane_angle: f64,
        classification: SwingClassification,
    ) -> SwingPlaneMetrics {
        let plane_deviation = plane_angle - self.config.neutral_plane_angle_deg;
        let club_path_deg = if measurement.plane_angle().is_some() {
            plane_deviation * swing_plane::CLUB_PATH_PER_PLANE_DEG
        } else {
            club_path_from_label(classification)
        };

        let attack_angle_deg = measurement.detailed_value(&["attack"]).unwrap_or_else(|| {
            swing_plane::ATTACK_ANGLE_PER_PLANE_DEG
                .mul_add(plane_deviation, swing_plane::ATTACK_ANGLE_BASELINE_DEG)
        });

        SwingPlaneMetrics {
            angle_deg: plane_angle,
            consistency: measurement.reliability(ReliabilityKey::SwingPlane),
            club_path_deg,
            attack_angle_deg,
        }
    }

    /// Split the visible swing window so that backswing/downswing equals the tempo ratio
    fn tempo(&self, measurement: &MeasurementSet) -> TempoMetrics {
        let ratio = if measurement.tempo_ratio.is_finite() && measurement.tempo_ratio > 0.0 {
            measurement.tempo_ratio
        } else {
            warn!(
                tempo_ratio = measurement.tempo_ratio,
                fallback = self.config.ideal_tempo_ratio,
                "Unusable tempo ratio, falling back to ideal"
            );
            self.config.ideal_tempo_ratio
        };

        let video_duration = finite_or(measurement.video_duration_sec, 0.0);
        let swing_sec = (video_duration * self.config.swing_fraction_of_video)
            .clamp(self.config.min_swing_sec, self.config.max_swing_sec);
        let downswing_sec = swing_sec / (1.0 + ratio);
        let backswing_sec = ratio * downswing_sec;

        TempoMetrics {
            backswing_sec,
            downswing_sec,
            total_sec: backswing_sec + downswing_sec,
            ratio,
            pause_at_top_sec: measurement
                .detailed_value(&["pause"])
                .map_or(tempo::DEFAULT_PAUSE_AT_TOP_SEC, |value| value.max(0.0)),
        }
    }
}

/// Categorical club-path proxy used when no plane angle was measured
const fn club_path_from_label(classification: SwingClassification) -> f64 {
    match classification {
        SwingClassification::OverTheTop => label_club_path::OVER_THE_TOP_DEG,
        SwingClassification::InsideOut => label_club_path::INSIDE_OUT_DEG,
        SwingClassification::TooSteep => label_club_path::TOO_STEEP_DEG,
        SwingClassification::TooFlat => label_club_path::TOO_FLAT_DEG,
        SwingClassification::OnPlane | SwingClassification::Unknown => {
            label_club_path::NEUTRAL_DEG
        }
    }
}

fn tracking_quality(measurement: &MeasurementSet) -> TrackingQuality {
    let motion_blur = measurement
        .reliability_if_present(ReliabilityKey::VideoQuality)
        .map_or(tracking::DEFAULT_MOTION_BLUR, |quality| 1.0 - quality);

    TrackingQuality::new(
        measurement.reliability(ReliabilityKey::ClubTracking),
        measurement.reliability(ReliabilityKey::PoseDetection),
        measurement.reliability(ReliabilityKey::Lighting),
        measurement.reliability(ReliabilityKey::CameraAngle),
        motion_blur,
    )
}

fn confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        warn!(
            confidence = value,
            fallback = tracking::FALLBACK_CONFIDENCE,
            "Non-finite confidence"
        );
        tracking::FALLBACK_CONFIDENCE
    }
}

fn non_negative_or_zero(value: f64, field: &'static str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(field, value, "Unusable measurement, falling back to zero");
        0.0
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swing_core::models::MeasurementSetBuilder;

    fn baseline() -> MeasurementSetBuilder {
        MeasurementSet::builder(70.0, 3.0)
            .plane_angle_deg(65.0)
            .confidence(0.9)
            .video_duration_sec(2.5)
    }

    #[test]
    fn test_acceleration_profile_peaks_mid_swing() {
        let result = BiomechanicsDeriver::new().derive(&baseline().build());
        let profile = &result.club_head_speed;

        assert_eq!(profile.acceleration_profile.len(), 61);
        assert_eq!(profile.impact_frame_index, 30);
        assert!((profile.acceleration_profile[30] - 56.0).abs() < 1e-9);
        assert!(profile.acceleration_profile.iter().all(|a| *a >= 0.0));
    }

    #[test]
    fn test_tempo_split_matches_ratio_and_window() {
        let result = BiomechanicsDeriver::new().derive(&baseline().build());
        let tempo = result.tempo;

        // 2.5s video * 0.6 = 1.5s swing
        assert!((tempo.total_sec - 1.5).abs() < 1e-12);
        assert!((tempo.downswing_sec - 0.375).abs() < 1e-12);
        assert!((tempo.backswing_sec / tempo.downswing_sec - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_short_video_clamps_swing_window() {
        let measurement = baseline().video_duration_sec(0.5).build();
        let result = BiomechanicsDeriver::new().derive(&measurement);
        assert!((result.tempo.total_sec - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hip_prior_and_x_factor() {
        let measurement = baseline().shoulder_tilt_deg(90.0).build();
        let body = BiomechanicsDeriver::new()
            .derive(&measurement)
            .body_kinematics;

        assert!((body.hip_rotation.max_deg - 54.0).abs() < 1e-12);
        assert!((body.x_factor_deg - 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrist_angle_prefers_detailed_lag_measurement() {
        let measurement = baseline().detail("Wrist_Lag_Angle", 82.5).build();
        let body = BiomechanicsDeriver::new()
            .derive(&measurement)
            .body_kinematics;
        assert!((body.wrist_cock_angle_deg - 82.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wrist_angle_fallback_tracks_plane() {
        let measurement = baseline().plane_angle_deg(75.0).build();
        let body = BiomechanicsDeriver::new()
            .derive(&measurement)
            .body_kinematics;
        assert!((body.wrist_cock_angle_deg - 78.0).abs() < 1e-12);
    }

    #[test]
    fn test_club_path_from_plane_when_measured() {
        let measurement = baseline()
            .plane_angle_deg(70.0)
            .predicted_label("over_the_top")
            .build();
        let plane = BiomechanicsDeriver::new().derive(&measurement).swing_plane;
        assert!((plane.club_path_deg - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_club_path_from_label_without_plane() {
        let deriver = BiomechanicsDeriver::new();
        let cases = [
            ("over_the_top", 3.5),
            ("Inside-Out", -2.8),
            ("too steep", 1.2),
            ("too_flat", -1.5),
            ("something_new", 0.2),
        ];
        for (label, expected) in cases {
            let measurement = baseline()
                .plane_angle_deg(0.0)
                .predicted_label(label)
                .build();
            let path = deriver.derive(&measurement).swing_plane.club_path_deg;
            assert!((path - expected).abs() < 1e-12, "{label}: {path}");
        }
    }

    #[test]
    fn test_spine_stability_reflects_tempo_deviation() {
        let deriver = BiomechanicsDeriver::new();
        let ideal = deriver.derive(&baseline().build()).body_kinematics;
        let rushed = deriver
            .derive(&MeasurementSet::builder(70.0, 1.0).build())
            .body_kinematics;

        assert!((ideal.spine_stability - 0.9).abs() < 1e-12);
        assert!((rushed.spine_stability - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_tracking_quality_uses_video_quality_for_blur() {
        let measurement = baseline()
            .reliability(ReliabilityKey::VideoQuality, 0.6)
            .build();
        let quality = BiomechanicsDeriver::new()
            .derive(&measurement)
            .tracking_quality;
        assert!((quality.motion_blur - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_unusable_inputs_fall_back() {
        let mut measurement = baseline().build();
        measurement.tempo_ratio = -2.0;
        measurement.confidence = f64::NAN;
        measurement.club_head_speed_mph = f64::INFINITY;

        let result = BiomechanicsDeriver::new().derive(&measurement);
        assert!((result.tempo.ratio - 3.0).abs() < f64::EPSILON);
        assert!((result.confidence - 0.5).abs() < f64::EPSILON);
        assert!(result.club_head_speed.at_impact_mph.abs() < f64::EPSILON);
    }
}
