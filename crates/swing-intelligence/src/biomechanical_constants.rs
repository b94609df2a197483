// ABOUTME: Reference constants for golf swing biomechanics and ball-flight physics
// ABOUTME: Neutral baselines, elite benchmarks, feedback thresholds, and detection quality limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Biomechanical reference values used as configuration defaults.
//!
//! Grouped by the part of the swing they describe. The engines never read
//! these directly; they flow through `IntelligenceConfig` so deployments can
//! override them.

/// Swing plane and club delivery baselines
pub mod swing_plane {
    /// Neutral swing plane angle (degrees) that the linear corrections pivot around
    pub const NEUTRAL_PLANE_ANGLE_DEG: f64 = 65.0;

    /// Club path change per degree of plane deviation
    pub const CLUB_PATH_PER_PLANE_DEG: f64 = 0.1;

    /// Attack angle at the neutral plane (degrees, slightly descending)
    pub const ATTACK_ANGLE_BASELINE_DEG: f64 = -1.5;

    /// Attack angle change per degree of plane deviation
    pub const ATTACK_ANGLE_PER_PLANE_DEG: f64 = -0.1;
}

/// Club path implied by a categorical swing label (degrees, positive = out-to-in)
pub mod label_club_path {
    /// Over-the-top move
    pub const OVER_THE_TOP_DEG: f64 = 3.5;

    /// Inside-out path
    pub const INSIDE_OUT_DEG: f64 = -2.8;

    /// Steep plane
    pub const TOO_STEEP_DEG: f64 = 1.2;

    /// Flat plane
    pub const TOO_FLAT_DEG: f64 = -1.5;

    /// Any other label
    pub const NEUTRAL_DEG: f64 = 0.2;
}

/// Body rotation priors
pub mod rotation {
    /// Hips turn roughly 60% as far as the shoulders
    pub const HIP_TO_SHOULDER_RATIO: f64 = 0.6;

    /// Share of maximum shoulder turn still present at impact
    pub const SHOULDER_AT_IMPACT_FRACTION: f64 = 0.4;

    /// Share of maximum hip turn still present (open) at impact
    pub const HIP_AT_IMPACT_FRACTION: f64 = 0.75;

    /// Lead-arm extension when not measured (0-1)
    pub const DEFAULT_ARM_EXTENSION: f64 = 0.85;
}

/// Wrist hinge
pub mod wrist {
    /// Wrist cock angle at the neutral plane (degrees)
    pub const BASELINE_DEG: f64 = 75.0;

    /// Wrist cock change per degree of plane deviation
    pub const PLANE_SLOPE: f64 = 0.3;
}

/// Spine posture
pub mod spine {
    /// Forward bend at address when not measured (degrees)
    pub const NEUTRAL_ADDRESS_DEG: f64 = 35.0;

    /// Extra bend at the top of the backswing (degrees)
    pub const TOP_DRIFT_DEG: f64 = 2.0;

    /// Address-to-impact drift at which stability reaches zero (degrees)
    pub const STABILITY_TOLERANCE_DEG: f64 = 20.0;
}

/// Timing
pub mod tempo {
    /// Tour-average backswing:downswing ratio
    pub const IDEAL_RATIO: f64 = 3.0;

    /// Share of the video clip occupied by the swing itself
    pub const SWING_FRACTION_OF_VIDEO: f64 = 0.6;

    /// Shortest plausible swing (seconds)
    pub const MIN_SWING_SEC: f64 = 1.0;

    /// Longest plausible swing (seconds)
    pub const MAX_SWING_SEC: f64 = 1.5;

    /// Transition pause when not measured (seconds)
    pub const DEFAULT_PAUSE_AT_TOP_SEC: f64 = 0.05;

    /// Share of body weight moved to the lead side during the downswing
    pub const WEIGHT_TRANSFER_FRACTION: f64 = 0.8;
}

/// Synthesized club-head acceleration curve
pub mod acceleration {
    /// Samples across the normalized swing (inclusive endpoints)
    pub const SAMPLE_COUNT: usize = 61;

    /// Curve gain relative to club-head speed
    pub const GAIN: f64 = 0.8;
}

/// Tracking fallbacks
pub mod tracking {
    /// Motion blur when no overall video-quality score is supplied
    pub const DEFAULT_MOTION_BLUR: f64 = 0.2;

    /// Confidence used when the model reports a non-finite value
    pub const FALLBACK_CONFIDENCE: f64 = 0.5;
}

/// Rule thresholds for improvements and strengths
pub mod feedback_thresholds {
    /// Club speed below this triggers a speed improvement (mph, strict)
    pub const LOW_CLUB_SPEED_MPH: f64 = 85.0;

    /// Plane consistency below this triggers a plane improvement (strict)
    pub const LOW_PLANE_CONSISTENCY: f64 = 0.70;

    /// Tempo ratios below this are rushed
    pub const MIN_TEMPO_RATIO: f64 = 2.5;

    /// Tempo ratios above this are sluggish
    pub const MAX_TEMPO_RATIO: f64 = 4.0;

    /// Club speed above this is a strength (mph)
    pub const STRONG_CLUB_SPEED_MPH: f64 = 105.0;

    /// Plane consistency above this is a strength
    pub const STRONG_PLANE_CONSISTENCY: f64 = 0.85;

    /// Club speed above this earns the score bonus (mph)
    pub const BONUS_CLUB_SPEED_MPH: f64 = 95.0;

    /// Club speed rated as 100% professional level (mph)
    pub const PROFESSIONAL_CLUB_SPEED_MPH: f64 = 115.0;
}

/// Overall score composition
pub mod scoring {
    /// Starting score
    pub const BASE: f64 = 50.0;

    /// Bonus for club speed above the bonus threshold
    pub const SPEED_BONUS: f64 = 15.0;

    /// Weight on plane consistency (0-1)
    pub const PLANE_CONSISTENCY_WEIGHT: f64 = 20.0;

    /// Weight on spine stability (0-1)
    pub const SPINE_STABILITY_WEIGHT: f64 = 10.0;
}

/// Expected gains from fixing each improvement
pub mod improvement_impact {
    /// Carry gain from more club speed (yards)
    pub const CLUB_SPEED_DISTANCE_YDS: f64 = 15.0;

    /// Carry gain from a consistent plane (yards)
    pub const PLANE_DISTANCE_YDS: f64 = 8.0;

    /// Accuracy gain from a consistent plane (percent)
    pub const PLANE_ACCURACY_PCT: f64 = 15.0;

    /// Carry gain from better tempo (yards)
    pub const TEMPO_DISTANCE_YDS: f64 = 5.0;

    /// Accuracy gain from better tempo (percent)
    pub const TEMPO_ACCURACY_PCT: f64 = 20.0;
}

/// Elite reference values
pub mod elite {
    /// PGA Tour average driver club speed (mph)
    pub const CLUB_SPEED_AVERAGE_MPH: f64 = 113.0;

    /// Tour club speed range (mph)
    pub const CLUB_SPEED_RANGE_MPH: [f64; 2] = [105.0, 125.0];

    /// Percentile scale for club speed; caps a single metric's displayed percentile
    pub const CLUB_SPEED_PERCENTILE_SCALE: f64 = 50.0;

    /// Tour average plane consistency (percent)
    pub const PLANE_CONSISTENCY_AVERAGE_PCT: f64 = 92.0;

    /// Tour plane consistency range (percent)
    pub const PLANE_CONSISTENCY_RANGE_PCT: [f64; 2] = [88.0, 96.0];

    /// Percentile scale for plane consistency
    pub const PLANE_CONSISTENCY_PERCENTILE_SCALE: f64 = 75.0;
}

/// Ball-flight physics and detection quality
pub mod ball_flight {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY_MPS2: f64 = 9.81;

    /// Capture frame rate assumed when the clip does not report one
    pub const DEFAULT_FRAME_RATE_FPS: f64 = 30.0;

    /// Fewest detected frames a parabolic fit is trusted on
    pub const MIN_DETECTED_FRAMES: usize = 5;

    /// Smallest share of frames that must contain the ball
    pub const MIN_DETECTION_RATE: f64 = 0.10;

    /// Lower bound of the optimal launch band (degrees)
    pub const OPTIMAL_LAUNCH_MIN_DEG: f64 = 10.0;

    /// Upper bound of the optimal launch band (degrees)
    pub const OPTIMAL_LAUNCH_MAX_DEG: f64 = 25.0;

    /// Upper bound of the good launch band (degrees)
    pub const GOOD_LAUNCH_MAX_DEG: f64 = 35.0;

    /// Floor on a detection's fit weight so low-confidence points still count
    pub const MIN_FIT_WEIGHT: f64 = 0.05;
}
