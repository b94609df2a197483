// ABOUTME: Ball detection input and ball-flight output types
// ABOUTME: Detection sequences, fitted flight trajectories, and the detection-quality failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{meters_to_yards, mps_to_mph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// A 2D position, in pixels or metres depending on the sequence's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallPosition {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// One ball detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Video frame the ball was found in
    pub frame_index: u32,
    /// Detected position
    pub position: BallPosition,
    /// Detector confidence (0-1)
    pub confidence: f64,
}

/// How detection positions are expressed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// Metres, x downrange, y up from the ground
    #[default]
    World,
    /// Image pixels, y growing downwards
    Pixel {
        /// Scale between image and world
        pixels_per_meter: f64,
        /// Image height (pixels), used to flip the y axis
        image_height: f64,
    },
}

/// Detections produced by the ball-detection model for one clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSequence {
    /// Detections in frame order; may be empty
    #[serde(default)]
    pub detections: Vec<Detection>,
    /// Total frames in the clip
    pub total_frames: u32,
    /// Capture frame rate; the configured default is used when absent
    #[serde(default)]
    pub frame_rate_fps: Option<f64>,
    /// Coordinate space of the detection positions
    #[serde(default)]
    pub coordinate_space: CoordinateSpace,
}

impl DetectionSequence {
    /// Create a world-space sequence
    #[must_use]
    pub const fn new(detections: Vec<Detection>, total_frames: u32) -> Self {
        Self {
            detections,
            total_frames,
            frame_rate_fps: None,
            coordinate_space: CoordinateSpace::World,
        }
    }

    /// Set the capture frame rate
    #[must_use]
    pub fn with_frame_rate(mut self, fps: f64) -> Self {
        self.frame_rate_fps = Some(fps);
        self
    }

    /// Set the coordinate space
    #[must_use]
    pub fn with_coordinate_space(mut self, space: CoordinateSpace) -> Self {
        self.coordinate_space = space;
        self
    }

    /// Number of distinct frames with at least one detection
    #[must_use]
    pub fn detected_frames(&self) -> usize {
        self.detections
            .iter()
            .map(|detection| detection.frame_index)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Detected frames divided by total frames; zero for an empty clip
    #[must_use]
    pub fn detection_rate(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)] // Safe: frame counts are far below 2^52
        let rate = self.detected_frames() as f64 / f64::from(self.total_frames);
        rate
    }
}

/// Launch-angle band used for display colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryType {
    /// Launch angle in the optimal band
    Optimal,
    /// Launch angle slightly high
    Good,
    /// Launch angle outside both bands
    Suboptimal,
}

/// Fitted ball flight and launch metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightTrajectory {
    /// Initial ball speed (m/s)
    pub launch_speed_mps: f64,
    /// Vertical launch angle (degrees)
    pub launch_angle_deg: f64,
    /// Apex height (metres)
    pub max_height_m: f64,
    /// Horizontal carry (metres)
    pub range_m: f64,
    /// Time in the air (seconds)
    pub flight_time_sec: f64,
    /// Launch-angle band
    pub trajectory_type: TrajectoryType,
    /// Distinct frames the fit used
    pub detected_frames: usize,
    /// Detection rate of the source clip
    pub detection_rate: f64,
    /// Goodness of the vertical fit (0-1)
    pub fit_r_squared: f64,
}

impl FlightTrajectory {
    /// Launch speed in mph
    #[must_use]
    pub fn launch_speed_mph(&self) -> f64 {
        mps_to_mph(self.launch_speed_mps)
    }

    /// Carry in yards
    #[must_use]
    pub fn range_yards(&self) -> f64 {
        meters_to_yards(self.range_m)
    }
}

/// Why a detection sequence could not be turned into a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityFailureReason {
    /// Fewer detected frames than the fit needs
    TooFewDetections,
    /// Too small a share of the clip contains the ball
    LowDetectionRate,
    /// Detections are arranged so that no unique fit exists
    DegenerateFit,
}

impl QualityFailureReason {
    /// Human-readable explanation
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TooFewDetections => "too few frames contain a ball detection",
            Self::LowDetectionRate => "ball detected in too small a share of the clip",
            Self::DegenerateFit => "detections do not constrain a unique flight path",
        }
    }
}

/// Detections too sparse to fit a trustworthy trajectory
///
/// Callers should offer manual ball selection when they receive this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Error)]
#[error("detection quality too low ({}): {detected_frame_count} of {total_frames} frames", reason.description())]
pub struct DetectionQualityFailure {
    /// Failure cause
    pub reason: QualityFailureReason,
    /// Distinct frames with a detection
    pub detected_frame_count: usize,
    /// Total frames in the clip
    pub total_frames: u32,
    /// Detected frames divided by total frames
    pub detection_rate: f64,
}

impl DetectionQualityFailure {
    /// Always true: the only recovery path is manual ball selection
    #[must_use]
    pub const fn requires_manual_selection(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(frame_index: u32) -> Detection {
        Detection {
            frame_index,
            position: BallPosition { x: 0.0, y: 0.0 },
            confidence: 0.9,
        }
    }

    #[test]
    fn test_detected_frames_counts_distinct_frames() {
        let sequence = DetectionSequence::new(
            vec![detection(1), detection(1), detection(2), detection(7)],
            10,
        );
        assert_eq!(sequence.detected_frames(), 3);
        assert!((sequence.detection_rate() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_detection_rate_of_empty_clip_is_zero() {
        let sequence = DetectionSequence::new(Vec::new(), 0);
        assert!(sequence.detection_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_failure_message_names_reason() {
        let failure = DetectionQualityFailure {
            reason: QualityFailureReason::TooFewDetections,
            detected_frame_count: 4,
            total_frames: 100,
            detection_rate: 0.04,
        };
        let message = failure.to_string();
        assert!(message.contains("too few frames"));
        assert!(message.contains("4 of 100"));
        assert!(failure.requires_manual_selection());
    }

    #[test]
    fn test_pixel_space_deserializes_with_tag() {
        let json = r#"{
            "detections": [],
            "total_frames": 60,
            "coordinate_space": {"kind": "pixel", "pixels_per_meter": 40.0, "image_height": 720.0}
        }"#;
        let sequence: DetectionSequence = serde_json::from_str(json).unwrap();
        assert_eq!(
            sequence.coordinate_space,
            CoordinateSpace::Pixel {
                pixels_per_meter: 40.0,
                image_height: 720.0
            }
        );
    }
}
