// ABOUTME: Feedback engine configuration for swing coaching reports
// ABOUTME: Configures rule thresholds, score weights, elite benchmarks, impacts, and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback Engine Configuration
//!
//! Thresholds for the improvement and strength rules, the weights of the
//! overall score, the elite reference table, and the policy used to order
//! improvements.

use crate::biomechanical_constants::{elite, feedback_thresholds, improvement_impact, scoring};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feedback Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Rule thresholds
    pub thresholds: FeedbackThresholds,
    /// Overall score composition
    pub scoring: ScoreWeights,
    /// Expected gains attached to each improvement
    pub impacts: ImprovementImpacts,
    /// Elite reference table
    pub benchmarks: EliteBenchmarkConfig,
    /// How improvements are ordered in the report
    pub priority_ordering: PriorityOrdering,
}

/// Thresholds for improvement and strength rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackThresholds {
    /// Club speed below this (mph, strict) is an improvement
    pub low_club_speed_mph: f64,
    /// Plane consistency below this (strict) is an improvement
    pub low_plane_consistency: f64,
    /// Tempo ratio below this is an improvement
    pub min_tempo_ratio: f64,
    /// Tempo ratio above this is an improvement
    pub max_tempo_ratio: f64,
    /// Club speed above this (mph) is a strength
    pub strong_club_speed_mph: f64,
    /// Plane consistency above this is a strength
    pub strong_plane_consistency: f64,
    /// Club speed above this (mph) earns the score bonus
    pub bonus_club_speed_mph: f64,
    /// Club speed rated as fully professional (mph)
    pub professional_club_speed_mph: f64,
}

/// Weights of the overall score before the tracking-quality discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Starting score
    pub base: f64,
    /// Bonus for club speed above the bonus threshold
    pub speed_bonus: f64,
    /// Multiplier on plane consistency
    pub plane_consistency: f64,
    /// Multiplier on spine stability
    pub spine_stability: f64,
}

impl ScoreWeights {
    /// Highest raw score these weights can produce
    #[must_use]
    pub fn max_raw_score(&self) -> f64 {
        self.base + self.speed_bonus + self.plane_consistency + self.spine_stability
    }
}

/// Expected gains attached to each improvement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementImpacts {
    /// Club speed: carry gain (yards)
    pub club_speed_distance_yds: f64,
    /// Swing plane: carry gain (yards)
    pub plane_distance_yds: f64,
    /// Swing plane: accuracy gain (percent)
    pub plane_accuracy_pct: f64,
    /// Tempo: carry gain (yards)
    pub tempo_distance_yds: f64,
    /// Tempo: accuracy gain (percent)
    pub tempo_accuracy_pct: f64,
}

/// One row of the elite reference table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReference {
    /// Elite average
    pub elite_average: f64,
    /// Professional range `[low, high]`
    pub pro_range: [f64; 2],
    /// Percentile reached when the player matches the elite average
    pub percentile_scale: f64,
}

impl BenchmarkReference {
    /// Displayed percentile for a player value, capped at 100
    #[must_use]
    pub fn percentile(&self, user_value: f64) -> f64 {
        (user_value / self.elite_average * self.percentile_scale).clamp(0.0, 100.0)
    }
}

/// Elite reference table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EliteBenchmarkConfig {
    /// Club-head speed (mph)
    pub club_speed: BenchmarkReference,
    /// Plane consistency (percent)
    pub plane_consistency: BenchmarkReference,
}

/// Ordering applied to improvement recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrdering {
    /// Critical, high, medium, low
    #[default]
    Severity,
    /// Alphabetical by priority name: critical, high, low, medium
    Lexical,
}

impl PriorityOrdering {
    /// Canonical name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Lexical => "lexical",
        }
    }
}

impl fmt::Display for PriorityOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "severity" => Ok(Self::Severity),
            "lexical" => Ok(Self::Lexical),
            other => Err(format!("unknown priority ordering: {other}")),
        }
    }
}

impl Default for FeedbackThresholds {
    fn default() -> Self {
        Self {
            low_club_speed_mph: feedback_thresholds::LOW_CLUB_SPEED_MPH,
            low_plane_consistency: feedback_thresholds::LOW_PLANE_CONSISTENCY,
            min_tempo_ratio: feedback_thresholds::MIN_TEMPO_RATIO,
            max_tempo_ratio: feedback_thresholds::MAX_TEMPO_RATIO,
            strong_club_speed_mph: feedback_thresholds::STRONG_CLUB_SPEED_MPH,
            strong_plane_consistency: feedback_thresholds::STRONG_PLANE_CONSISTENCY,
            bonus_club_speed_mph: feedback_thresholds::BONUS_CLUB_SPEED_MPH,
            professional_club_speed_mph: feedback_thresholds::PROFESSIONAL_CLUB_SPEED_MPH,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: scoring::BASE,
            speed_bonus: scoring::SPEED_BONUS,
            plane_consistency: scoring::PLANE_CONSISTENCY_WEIGHT,
            spine_stability: scoring::SPINE_STABILITY_WEIGHT,
        }
    }
}

impl Default for ImprovementImpacts {
    fn default() -> Self {
        Self {
            club_speed_distance_yds: improvement_impact::CLUB_SPEED_DISTANCE_YDS,
            plane_distance_yds: improvement_impact::PLANE_DISTANCE_YDS,
            plane_accuracy_pct: improvement_impact::PLANE_ACCURACY_PCT,
            tempo_distance_yds: improvement_impact::TEMPO_DISTANCE_YDS,
            tempo_accuracy_pct: improvement_impact::TEMPO_ACCURACY_PCT,
        }
    }
}

impl Default for EliteBenchmarkConfig {
    fn default() -> Self {
        Self {
            club_speed: BenchmarkReference {
                elite_average: elite::CLUB_SPEED_AVERAGE_MPH,
                pro_range: elite::CLUB_SPEED_RANGE_MPH,
                percentile_scale: elite::CLUB_SPEED_PERCENTILE_SCALE,
            },
            plane_consistency: BenchmarkReference {
                elite_average: elite::PLANE_CONSISTENCY_AVERAGE_PCT,
                pro_range: elite::PLANE_CONSISTENCY_RANGE_PCT,
                percentile_scale: elite::PLANE_CONSISTENCY_PERCENTILE_SCALE,
            },
        }
    }
}
