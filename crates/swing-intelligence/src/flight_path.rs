// ABOUTME: Display parametrization of a ball flight for playback animation
// ABOUTME: Sine-arc path across a canvas, independent of the fitted launch metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use swing_core::models::BallPosition;

/// Sine-arc flight path in screen coordinates (y grows downwards)
///
/// This is a rendering model only. It shares no state with
/// `FlightTrajectory`; callers pick the canvas and apex height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPath {
    /// Horizontal margin where the ball starts
    pub start_x: f64,
    /// Canvas width; the ball lands at `width - start_x`
    pub width: f64,
    /// Ground line
    pub ground_y: f64,
    /// Apex height above the ground line
    pub max_height: f64,
}

impl TrajectoryPath {
    /// Create a path
    #[must_use]
    pub const fn new(start_x: f64, width: f64, ground_y: f64, max_height: f64) -> Self {
        Self {
            start_x,
            width,
            ground_y,
            max_height,
        }
    }

    /// Position at playback fraction `progress`, clamped to [0,1]
    #[must_use]
    pub fn position_at(&self, progress: f64) -> BallPosition {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        BallPosition {
            x: (2.0_f64.mul_add(-self.start_x, self.width)).mul_add(p, self.start_x),
            y: self.max_height.mul_add(-(p * PI).sin(), self.ground_y),
        }
    }

    /// `count` evenly spaced positions from launch to landing
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<BallPosition> {
        match count {
            0 => Vec::new(),
            1 => vec![self.position_at(0.0)],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| self.position_at(i as f64 / last))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> TrajectoryPath {
        TrajectoryPath::new(20.0, 400.0, 300.0, 150.0)
    }

    #[test]
    fn test_endpoints_sit_on_ground() {
        let start = path().position_at(0.0);
        let end = path().position_at(1.0);

        assert!((start.x - 20.0).abs() < 1e-12);
        assert!((start.y - 300.0).abs() < 1e-12);
        assert!((end.x - 380.0).abs() < 1e-12);
        assert!((end.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_apex_at_midpoint() {
        let apex = path().position_at(0.5);
        assert!((apex.x - 200.0).abs() < 1e-12);
        assert!((apex.y - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(path().position_at(-1.0), path().position_at(0.0));
        assert_eq!(path().position_at(2.0), path().position_at(1.0));
    }

    #[test]
    fn test_sample_count_and_order() {
        let points = path().sample(5);
        assert_eq!(points.len(), 5);
        assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
        assert!(path().sample(0).is_empty());
    }
}
