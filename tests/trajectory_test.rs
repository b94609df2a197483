// ABOUTME: Integration tests for ball-flight reconstruction and the detection quality gate
// ABOUTME: Exercises world and pixel coordinates, gate boundaries, and batch reconstruction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use swing_insight::config::TrajectoryConfig;
use swing_insight::models::{
    BallPosition, CoordinateSpace, Detection, DetectionSequence, QualityFailureReason,
    TrajectoryType,
};
use swing_intelligence::{TrajectoryPath, TrajectoryReconstructor};

const GRAVITY: f64 = 9.81;

/// World-space detections of a vacuum flight sampled at `frames`
fn flight(frames: &[u32], speed: f64, angle_deg: f64, fps: f64) -> Vec<Detection> {
    let vx = speed * angle_deg.to_radians().cos();
    let vy = speed * angle_deg.to_radians().sin();
    frames
        .iter()
        .map(|&frame| {
            let t = f64::from(frame - frames[0]) / fps;
            Detection {
                frame_index: frame,
                position: BallPosition {
                    x: vx * t,
                    y: (0.5 * GRAVITY * t).mul_add(-t, vy * t),
                },
                confidence: 0.9,
            }
        })
        .collect()
}

fn frames(count: u32) -> Vec<u32> {
    (0..count).collect()
}

#[test]
fn test_recovers_launch_from_clean_flight() {
    let sequence =
        DetectionSequence::new(flight(&frames(10), 40.0, 20.0, 30.0), 30).with_frame_rate(30.0);

    let trajectory = TrajectoryReconstructor::new().reconstruct(&sequence).unwrap();

    assert!((trajectory.launch_speed_mps - 40.0).abs() < 1e-6);
    assert!((trajectory.launch_angle_deg - 20.0).abs() < 1e-6);
    assert_eq!(trajectory.trajectory_type, TrajectoryType::Optimal);
    assert_eq!(trajectory.detected_frames, 10);
    assert!((trajectory.fit_r_squared - 1.0).abs() < 1e-9);

    let vertical = 40.0 * 20.0_f64.to_radians().sin();
    let expected_height = vertical * vertical / (2.0 * GRAVITY);
    let expected_range = 1600.0 * 40.0_f64.to_radians().sin() / GRAVITY;
    assert!((trajectory.max_height_m - expected_height).abs() < 1e-6);
    assert!((trajectory.range_m - expected_range).abs() < 1e-6);
    assert!((trajectory.flight_time_sec - 2.0 * vertical / GRAVITY).abs() < 1e-6);
}

#[test]
fn test_pixel_coordinates_match_world_fit() {
    let pixels_per_meter = 10.0;
    let image_height = 500.0;
    let detections: Vec<Detection> = flight(&frames(8), 35.0, 15.0, 60.0)
        .into_iter()
        .map(|detection| Detection {
            position: BallPosition {
                x: detection.position.x * pixels_per_meter,
                y: image_height - detection.position.y * pixels_per_meter,
            },
            ..detection
        })
        .collect();
    let sequence = DetectionSequence::new(detections, 40)
        .with_frame_rate(60.0)
        .with_coordinate_space(CoordinateSpace::Pixel {
            pixels_per_meter,
            image_height,
        });

    let trajectory = TrajectoryReconstructor::new().reconstruct(&sequence).unwrap();

    assert!((trajectory.launch_speed_mps - 35.0).abs() < 1e-6);
    assert!((trajectory.launch_angle_deg - 15.0).abs() < 1e-6);
}

#[test]
fn test_missing_frame_rate_uses_default() {
    let sequence = DetectionSequence::new(flight(&frames(6), 30.0, 30.0, 30.0), 20);
    let trajectory = TrajectoryReconstructor::new().reconstruct(&sequence).unwrap();

    assert!((trajectory.launch_angle_deg - 30.0).abs() < 1e-6);
    assert_eq!(trajectory.trajectory_type, TrajectoryType::Good);
}

#[test]
fn test_too_few_detections_is_rejected() {
    let sequence = DetectionSequence::new(flight(&frames(4), 40.0, 20.0, 30.0), 10);
    let failure = TrajectoryReconstructor::new()
        .reconstruct(&sequence)
        .unwrap_err();

    assert_eq!(failure.reason, QualityFailureReason::TooFewDetections);
    assert_eq!(failure.detected_frame_count, 4);
    assert_eq!(failure.total_frames, 10);
    assert!(failure.requires_manual_selection());
}

#[test]
fn test_duplicate_frames_count_once() {
    let mut detections = flight(&frames(4), 40.0, 20.0, 30.0);
    detections.push(detections[3]);
    detections.push(detections[0]);
    let sequence = DetectionSequence::new(detections, 10);

    let failure = TrajectoryReconstructor::new()
        .reconstruct(&sequence)
        .unwrap_err();

    assert_eq!(failure.reason, QualityFailureReason::TooFewDetections);
    assert_eq!(failure.detected_frame_count, 4);
}

#[test]
fn test_low_detection_rate_is_rejected() {
    let sequence = DetectionSequence::new(flight(&frames(6), 40.0, 20.0, 30.0), 100);
    let failure = TrajectoryReconstructor::new()
        .reconstruct(&sequence)
        .unwrap_err();

    assert_eq!(failure.reason, QualityFailureReason::LowDetectionRate);
    assert!((failure.detection_rate - 0.06).abs() < 1e-12);
}

#[test]
fn test_gate_reference_cases() {
    let reconstructor = TrajectoryReconstructor::new();

    let sparse = DetectionSequence::new(flight(&frames(4), 40.0, 20.0, 30.0), 100);
    assert!(reconstructor.reconstruct(&sparse).is_err());

    let dense = DetectionSequence::new(flight(&frames(5), 40.0, 20.0, 30.0), 10);
    assert!(reconstructor.reconstruct(&dense).is_ok());
}

#[test]
fn test_gate_boundaries_are_inclusive() {
    let sequence = DetectionSequence::new(flight(&frames(5), 40.0, 20.0, 30.0), 50);
    assert!(TrajectoryReconstructor::new().reconstruct(&sequence).is_ok());
}

#[test]
fn test_empty_sequence_is_rejected() {
    let sequence = DetectionSequence::new(Vec::new(), 0);
    let failure = TrajectoryReconstructor::new()
        .reconstruct(&sequence)
        .unwrap_err();

    assert_eq!(failure.reason, QualityFailureReason::TooFewDetections);
    assert!(failure.detection_rate.abs() < f64::EPSILON);
}

#[test]
fn test_invalid_pixel_scale_is_degenerate() {
    let sequence = DetectionSequence::new(flight(&frames(8), 40.0, 20.0, 30.0), 20)
        .with_coordinate_space(CoordinateSpace::Pixel {
            pixels_per_meter: 0.0,
            image_height: 480.0,
        });
    let failure = TrajectoryReconstructor::new()
        .reconstruct(&sequence)
        .unwrap_err();

    assert_eq!(failure.reason, QualityFailureReason::DegenerateFit);
}

#[test]
fn test_custom_gate_configuration() {
    let config = TrajectoryConfig {
        min_detected_frames: 3,
        min_detection_rate: 0.0,
        ..TrajectoryConfig::default()
    };
    let sequence = DetectionSequence::new(flight(&frames(4), 40.0, 20.0, 30.0), 400);

    assert!(TrajectoryReconstructor::with_config(config)
        .reconstruct(&sequence)
        .is_ok());
}

#[test]
fn test_batch_preserves_order() {
    let good = DetectionSequence::new(flight(&frames(10), 40.0, 20.0, 30.0), 30);
    let sparse = DetectionSequence::new(flight(&frames(3), 40.0, 20.0, 30.0), 30);
    let outcomes = TrajectoryReconstructor::new().reconstruct_batch(&[good.clone(), sparse, good]);

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_ok());
    assert!(outcomes[1].is_err());
    assert!(outcomes[2].is_ok());
}

#[test]
fn test_launch_angle_bands() {
    let reconstructor = TrajectoryReconstructor::new();
    assert_eq!(
        reconstructor.classify_launch_angle(10.0),
        TrajectoryType::Optimal
    );
    assert_eq!(
        reconstructor.classify_launch_angle(25.0),
        TrajectoryType::Optimal
    );
    assert_eq!(reconstructor.classify_launch_angle(35.0), TrajectoryType::Good);
    assert_eq!(
        reconstructor.classify_launch_angle(35.5),
        TrajectoryType::Suboptimal
    );
    assert_eq!(
        reconstructor.classify_launch_angle(9.9),
        TrajectoryType::Suboptimal
    );
}

#[test]
fn test_display_path_is_independent_of_fit() {
    let path = TrajectoryPath::new(20.0, 400.0, 300.0, 150.0);
    let points = path.sample(3);

    assert_eq!(points.len(), 3);
    assert!((points[1].y - 150.0).abs() < 1e-9);
    assert!((points[2].x - 380.0).abs() < 1e-9);
}
