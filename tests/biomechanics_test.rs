// ABOUTME: Integration tests for the biomechanics deriver
// ABOUTME: Covers derivation from sparse and detailed measurement sets and input fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use swing_insight::models::{MeasurementSet, ReliabilityKey, SwingClassification};
use swing_intelligence::BiomechanicsDeriver;
use uuid::Uuid;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_sparse_measurement_uses_priors() {
    let measurement = MeasurementSet::builder(92.0, 3.0)
        .shoulder_tilt_deg(90.0)
        .plane_angle_deg(65.0)
        .build();

    let result = BiomechanicsDeriver::new().derive(&measurement);
    let body = &result.body_kinematics;

    assert!(close(body.shoulder_rotation.max_deg, 90.0));
    assert!(close(body.hip_rotation.max_deg, 54.0));
    assert!(close(body.x_factor_deg, 36.0));
    assert!(close(body.wrist_cock_angle_deg, 75.0));
    assert!(close(body.arm_extension, 0.85));
    assert!(close(body.spine_angles.address_deg, 35.0));
    assert!(close(body.spine_angles.top_deg, 37.0));
    assert!(close(result.swing_plane.consistency, 0.8));
    assert!(close(result.swing_plane.club_path_deg, 0.0));
    assert!(close(result.swing_plane.attack_angle_deg, -1.5));
}

#[test]
fn test_detailed_measurements_override_priors() {
    let measurement = MeasurementSet::builder(100.0, 3.0)
        .detail("shoulder_turn", 95.0)
        .detail("hip_rotation", 48.0)
        .detail("wrist_lag_angle", 82.5)
        .detail("spine_angle", 30.0)
        .detail("arm_extension", 0.93)
        .detail("attack_angle", 2.0)
        .build();

    let result = BiomechanicsDeriver::new().derive(&measurement);
    let body = &result.body_kinematics;

    assert!(close(body.shoulder_rotation.max_deg, 95.0));
    assert!(close(body.hip_rotation.max_deg, 48.0));
    assert!(close(body.x_factor_deg, 47.0));
    assert!(close(body.wrist_cock_angle_deg, 82.5));
    assert!(close(body.spine_angles.address_deg, 30.0));
    assert!(close(body.arm_extension, 0.93));
    assert!(close(result.swing_plane.attack_angle_deg, 2.0));
}

#[test]
fn test_identity_and_classification_propagate() {
    let swing_id = Uuid::new_v4();
    let measurement = MeasurementSet::builder(88.0, 2.8)
        .swing_id(swing_id)
        .predicted_label("Over The Top")
        .build();

    let result = BiomechanicsDeriver::new().derive(&measurement);

    assert_eq!(result.swing_id, Some(swing_id));
    assert_eq!(result.classification, SwingClassification::OverTheTop);
}

#[test]
fn test_unmeasured_plane_uses_label_club_path() {
    let deriver = BiomechanicsDeriver::new();
    let cases = [
        ("over_the_top", 3.5),
        ("inside_out", -2.8),
        ("too_steep", 1.2),
        ("too_flat", -1.5),
        ("something_else", 0.2),
    ];

    for (label, expected) in cases {
        let measurement = MeasurementSet::builder(90.0, 3.0)
            .plane_angle_deg(0.0)
            .predicted_label(label)
            .build();
        let result = deriver.derive(&measurement);
        assert!(
            close(result.swing_plane.club_path_deg, expected),
            "{label}: {}",
            result.swing_plane.club_path_deg
        );
        assert!(close(result.swing_plane.angle_deg, 65.0));
    }
}

#[test]
fn test_steep_plane_shifts_path_wrist_and_attack() {
    let measurement = MeasurementSet::builder(90.0, 3.0)
        .plane_angle_deg(75.0)
        .build();

    let result = BiomechanicsDeriver::new().derive(&measurement);

    assert!(close(result.swing_plane.club_path_deg, 1.0));
    assert!(close(result.body_kinematics.wrist_cock_angle_deg, 78.0));
    assert!(close(result.swing_plane.attack_angle_deg, -2.5));
}

#[test]
fn test_tempo_deviation_reduces_spine_stability() {
    let deriver = BiomechanicsDeriver::new();
    let ideal = deriver.derive(&MeasurementSet::builder(90.0, 3.0).build());
    let rushed = deriver.derive(&MeasurementSet::builder(90.0, 1.0).build());

    assert!(close(ideal.body_kinematics.spine_stability, 0.9));
    assert!(close(rushed.body_kinematics.spine_stability, 0.8));
}

#[test]
fn test_tracking_quality_from_reliabilities() {
    let measurement = MeasurementSet::builder(90.0, 3.0)
        .reliability(ReliabilityKey::ClubTracking, 1.0)
        .reliability(ReliabilityKey::PoseDetection, 1.0)
        .reliability(ReliabilityKey::Lighting, 1.0)
        .reliability(ReliabilityKey::CameraAngle, 1.0)
        .reliability(ReliabilityKey::VideoQuality, 0.6)
        .build();

    let tracking = BiomechanicsDeriver::new().derive(&measurement).tracking_quality;

    assert!(close(tracking.motion_blur, 0.4));
    assert!(close(tracking.overall_score, 0.92));
}

#[test]
fn test_default_tracking_score() {
    let result = BiomechanicsDeriver::new().derive(&MeasurementSet::builder(90.0, 3.0).build());
    assert!(close(result.tracking_quality.overall_score, 0.82));
}

#[test]
fn test_unusable_scalars_fall_back() {
    let measurement = MeasurementSet::builder(f64::NAN, -2.0)
        .confidence(f64::INFINITY)
        .video_duration_sec(f64::NAN)
        .build();

    let result = BiomechanicsDeriver::new().derive(&measurement);

    assert!(close(result.club_head_speed.peak_mph, 0.0));
    assert!(result
        .club_head_speed
        .acceleration_profile
        .iter()
        .all(|value| close(*value, 0.0)));
    assert!(close(result.tempo.ratio, 3.0));
    assert!(close(result.tempo.total_sec, 1.0));
    assert!(close(result.confidence, 0.5));
}

#[test]
fn test_bounded_outputs_stay_in_range() {
    let measurement = MeasurementSet::builder(130.0, 9.0)
        .confidence(1.4)
        .reliability(ReliabilityKey::Lighting, -0.3)
        .detail("spine", 10.0)
        .build();

    let result = BiomechanicsDeriver::new().derive(&measurement);

    assert!((0.0..=1.0).contains(&result.confidence));
    assert!((0.0..=1.0).contains(&result.body_kinematics.spine_stability));
    assert!((0.0..=1.0).contains(&result.tracking_quality.overall_score));
    assert!(close(result.tracking_quality.lighting, 0.0));
}
