// ABOUTME: Intelligence configuration for swing analysis and ball-flight reconstruction
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Typed defaults for every engine, overridable through `SWING_*`
//! environment variables.
//!
//! # Module Structure
//!
//! - `biomechanics` - Neutral baselines and priors for the biomechanics deriver
//! - `feedback` - Rule thresholds, score weights, and elite benchmarks
//! - `trajectory` - Detection quality gate and ball-flight physics
//!
//! There is no process-wide instance: callers load a config once and hand it
//! to the engines they construct.

pub mod biomechanics;
pub mod error;
pub mod feedback;
pub mod trajectory;

pub use biomechanics::BiomechanicsConfig;
pub use error::ConfigError;
pub use feedback::{
    BenchmarkReference, EliteBenchmarkConfig, FeedbackConfig, FeedbackThresholds,
    ImprovementImpacts, PriorityOrdering, ScoreWeights,
};
pub use trajectory::TrajectoryConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the biomechanics deriver
    pub biomechanics: BiomechanicsConfig,
    /// Configuration for the feedback engine
    pub feedback: FeedbackConfig,
    /// Configuration for the trajectory reconstructor
    pub trajectory: TrajectoryConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        debug!(
            priority_ordering = %config.feedback.priority_ordering,
            min_detected_frames = config.trajectory.min_detected_frames,
            "Loaded intelligence configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first non-finite value, range, weight, or bound violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_biomechanics()?;
        self.validate_feedback()?;
        self.validate_trajectory()
    }

    /// Every float must be finite; the range checks below are false for NaN
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let bio = &self.biomechanics;
        let thresholds = &self.feedback.thresholds;
        let weights = &self.feedback.scoring;
        let impacts = &self.feedback.impacts;
        let speed = &self.feedback.benchmarks.club_speed;
        let plane = &self.feedback.benchmarks.plane_consistency;
        let traj = &self.trajectory;

        let sections: [(&'static str, &[f64]); 3] = [
            (
                "biomechanics",
                &[
                    bio.neutral_plane_angle_deg,
                    bio.wrist_baseline_deg,
                    bio.wrist_plane_slope,
                    bio.swing_fraction_of_video,
                    bio.min_swing_sec,
                    bio.max_swing_sec,
                    bio.ideal_tempo_ratio,
                    bio.acceleration_gain,
                    bio.hip_to_shoulder_ratio,
                    bio.neutral_spine_angle_deg,
                    bio.spine_tolerance_deg,
                ],
            ),
            (
                "feedback",
                &[
                    thresholds.low_club_speed_mph,
                    thresholds.low_plane_consistency,
                    thresholds.min_tempo_ratio,
                    thresholds.max_tempo_ratio,
                    thresholds.strong_club_speed_mph,
                    thresholds.strong_plane_consistency,
                    thresholds.bonus_club_speed_mph,
                    thresholds.professional_club_speed_mph,
                    weights.base,
                    weights.speed_bonus,
                    weights.plane_consistency,
                    weights.spine_stability,
                    impacts.club_speed_distance_yds,
                    impacts.plane_distance_yds,
                    impacts.plane_accuracy_pct,
                    impacts.tempo_distance_yds,
                    impacts.tempo_accuracy_pct,
                    speed.elite_average,
                    speed.pro_range[0],
                    speed.pro_range[1],
                    speed.percentile_scale,
                    plane.elite_average,
                    plane.pro_range[0],
                    plane.pro_range[1],
                    plane.percentile_scale,
                ],
            ),
            (
                "trajectory",
                &[
                    traj.min_detection_rate,
                    traj.gravity_mps2,
                    traj.default_frame_rate_fps,
                    traj.optimal_launch_min_deg,
                    traj.optimal_launch_max_deg,
                    traj.good_launch_max_deg,
                    traj.min_fit_weight,
                ],
            ),
        ];

        for (section, values) in sections {
            if values.iter().any(|value| !value.is_finite()) {
                return Err(ConfigError::NonFinite(section));
            }
        }

        Ok(())
    }

    fn validate_biomechanics(&self) -> Result<(), ConfigError> {
        let bio = &self.biomechanics;

        if bio.min_swing_sec <= 0.0 || bio.min_swing_sec >= bio.max_swing_sec {
            return Err(ConfigError::InvalidRange(
                "min_swing_sec must be positive and < max_swing_sec",
            ));
        }
        if !(0.0..=1.0).contains(&bio.swing_fraction_of_video) || bio.swing_fraction_of_video == 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "swing_fraction_of_video must be in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&bio.hip_to_shoulder_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "hip_to_shoulder_ratio must be in [0, 1]",
            ));
        }
        if bio.ideal_tempo_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "ideal_tempo_ratio must be positive",
            ));
        }
        if bio.acceleration_samples < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "acceleration_samples must be at least 2",
            ));
        }
        if bio.acceleration_gain < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "acceleration_gain must be non-negative",
            ));
        }
        if bio.spine_tolerance_deg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "spine_tolerance_deg must be positive",
            ));
        }
        if bio.neutral_plane_angle_deg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "neutral_plane_angle_deg must be positive",
            ));
        }

        Ok(())
    }

    fn validate_feedback(&self) -> Result<(), ConfigError> {
        let thresholds = &self.feedback.thresholds;

        if thresholds.min_tempo_ratio >= thresholds.max_tempo_ratio {
            return Err(ConfigError::InvalidRange(
                "min_tempo_ratio must be < max_tempo_ratio",
            ));
        }
        if thresholds.low_club_speed_mph >= thresholds.strong_club_speed_mph {
            return Err(ConfigError::InvalidRange(
                "low_club_speed_mph must be < strong_club_speed_mph",
            ));
        }
        if thresholds.low_plane_consistency >= thresholds.strong_plane_consistency {
            return Err(ConfigError::InvalidRange(
                "low_plane_consistency must be < strong_plane_consistency",
            ));
        }
        for consistency in [
            thresholds.low_plane_consistency,
            thresholds.strong_plane_consistency,
        ] {
            if !(0.0..=1.0).contains(&consistency) {
                return Err(ConfigError::ValueOutOfRange(
                    "plane consistency thresholds must be in [0, 1]",
                ));
            }
        }
        if thresholds.professional_club_speed_mph <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "professional_club_speed_mph must be positive",
            ));
        }

        let weights = &self.feedback.scoring;
        if [
            weights.base,
            weights.speed_bonus,
            weights.plane_consistency,
            weights.spine_stability,
        ]
        .iter()
        .any(|weight| *weight < 0.0)
        {
            return Err(ConfigError::InvalidWeights("score weights must be non-negative"));
        }
        if weights.max_raw_score() > 100.0 {
            return Err(ConfigError::InvalidWeights(
                "score weights must sum to at most 100",
            ));
        }

        let benchmarks = &self.feedback.benchmarks;
        for reference in [&benchmarks.club_speed, &benchmarks.plane_consistency] {
            if reference.elite_average <= 0.0 || reference.percentile_scale <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "benchmark elite_average and percentile_scale must be positive",
                ));
            }
            if reference.pro_range[0] > reference.pro_range[1] {
                return Err(ConfigError::InvalidRange(
                    "benchmark pro_range low must be <= high",
                ));
            }
        }

        Ok(())
    }

    fn validate_trajectory(&self) -> Result<(), ConfigError> {
        let traj = &self.trajectory;

        if traj.min_detected_frames < 3 {
            return Err(ConfigError::ValueOutOfRange(
                "min_detected_frames must be at least 3 for a parabolic fit",
            ));
        }
        if !(0.0..=1.0).contains(&traj.min_detection_rate) {
            return Err(ConfigError::ValueOutOfRange(
                "min_detection_rate must be in [0, 1]",
            ));
        }
        if traj.gravity_mps2 <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("gravity_mps2 must be positive"));
        }
        if traj.default_frame_rate_fps <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_frame_rate_fps must be positive",
            ));
        }
        if !(traj.optimal_launch_min_deg < traj.optimal_launch_max_deg
            && traj.optimal_launch_max_deg < traj.good_launch_max_deg)
        {
            return Err(ConfigError::InvalidRange(
                "launch bands must satisfy optimal_min < optimal_max < good_max",
            ));
        }
        if !(0.0..=1.0).contains(&traj.min_fit_weight) || traj.min_fit_weight == 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_fit_weight must be in (0, 1]",
            ));
        }

        Ok(())
    }

    /// Apply environment variable to config field if present and parseable
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    // Long function: Systematic env var parsing for all engine sections
    #[allow(clippy::too_many_lines)]
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Biomechanics overrides
        Self::apply_env_var(
            "SWING_BIOMECHANICS_NEUTRAL_PLANE_DEG",
            &mut self.biomechanics.neutral_plane_angle_deg,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_WRIST_BASELINE_DEG",
            &mut self.biomechanics.wrist_baseline_deg,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_WRIST_PLANE_SLOPE",
            &mut self.biomechanics.wrist_plane_slope,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_SWING_FRACTION",
            &mut self.biomechanics.swing_fraction_of_video,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_MIN_SWING_SEC",
            &mut self.biomechanics.min_swing_sec,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_MAX_SWING_SEC",
            &mut self.biomechanics.max_swing_sec,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_IDEAL_TEMPO_RATIO",
            &mut self.biomechanics.ideal_tempo_ratio,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_ACCELERATION_SAMPLES",
            &mut self.biomechanics.acceleration_samples,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_ACCELERATION_GAIN",
            &mut self.biomechanics.acceleration_gain,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_HIP_SHOULDER_RATIO",
            &mut self.biomechanics.hip_to_shoulder_ratio,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_NEUTRAL_SPINE_DEG",
            &mut self.biomechanics.neutral_spine_angle_deg,
        )?;
        Self::apply_env_var(
            "SWING_BIOMECHANICS_SPINE_TOLERANCE_DEG",
            &mut self.biomechanics.spine_tolerance_deg,
        )?;

        // Feedback overrides
        Self::apply_env_var(
            "SWING_FEEDBACK_LOW_CLUB_SPEED_MPH",
            &mut self.feedback.thresholds.low_club_speed_mph,
        )?;
        Self::apply_env_var(
            "SWING_FEEDBACK_LOW_PLANE_CONSISTENCY",
            &mut self.feedback.thresholds.low_plane_consistency,
        )?;
        Self::apply_env_var(
            "SWING_FEEDBACK_MIN_TEMPO_RATIO",
            &mut self.feedback.thresholds.min_tempo_ratio,
        )?;
        Self::apply_env_var(
            "SWING_FEEDBACK_MAX_TEMPO_RATIO",
            &mut self.feedback.thresholds.max_tempo_ratio,
        )?;
        Self::apply_env_var(
            "SWING_FEEDBACK_STRONG_CLUB_SPEED_MPH",
            &mut self.feedback.thresholds.strong_club_speed_mph,
        )?;
        Self::apply_env_var(
            "SWING_FEEDBACK_STRONG_PLANE_CONSISTENCY",
            &mut self.feedback.thresholds.strong_plane_consistency,
        )?;
        Self::apply_env_var(
            "SWING_FEEDBACK_BONUS_CLUB_SPEED_MPH",
            &mut self.feedback.thresholds.bonus_club_speed_mph,
        )?;
        Self::apply_env_var(
            "SWING_FEEDBACK_PRIORITY_ORDERING",
            &mut self.feedback.priority_ordering,
        )?;

        // Trajectory overrides
        Self::apply_env_var(
            "SWING_TRAJECTORY_MIN_DETECTED_FRAMES",
            &mut self.trajectory.min_detected_frames,
        )?;
        Self::apply_env_var(
            "SWING_TRAJECTORY_MIN_DETECTION_RATE",
            &mut self.trajectory.min_detection_rate,
        )?;
        Self::apply_env_var("SWING_TRAJECTORY_GRAVITY", &mut self.trajectory.gravity_mps2)?;
        Self::apply_env_var(
            "SWING_TRAJECTORY_DEFAULT_FPS",
            &mut self.trajectory.default_frame_rate_fps,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_score_weights_leave_room_below_100() {
        let weights = ScoreWeights::default();
        assert!((weights.max_raw_score() - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_tempo_band_rejected() {
        let mut config = IntelligenceConfig::default();
        config.feedback.thresholds.min_tempo_ratio = 4.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_oversized_weights_rejected() {
        let mut config = IntelligenceConfig::default();
        config.feedback.scoring.base = 80.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_infinite_benchmark_rejected() {
        let mut config = IntelligenceConfig::default();
        config.feedback.benchmarks.club_speed.pro_range[1] = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite("feedback"))
        ));
    }

    #[test]
    fn test_too_few_required_frames_rejected() {
        let mut config = IntelligenceConfig::default();
        config.trajectory.min_detected_frames = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_priority_ordering_parses_case_insensitively() {
        assert_eq!(
            "Lexical".parse::<PriorityOrdering>(),
            Ok(PriorityOrdering::Lexical)
        );
        assert!("alphabetical".parse::<PriorityOrdering>().is_err());
    }

    #[test]
    fn test_benchmark_percentile_caps_at_100() {
        let reference = EliteBenchmarkConfig::default().club_speed;
        assert!((reference.percentile(113.0) - 50.0).abs() < f64::EPSILON);
        assert!((reference.percentile(500.0) - 100.0).abs() < f64::EPSILON);
    }
}
