// ABOUTME: Feedback report types produced from a swing analysis
// ABOUTME: Improvement priorities, strengths, elite benchmarks, and practice recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Coaching report for one analysed swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingFeedback {
    /// Swing identifier carried through from the analysis
    pub swing_id: Option<Uuid>,
    /// Quality-weighted overall score (0-100)
    pub overall_score: f64,
    /// Improvements in priority order
    pub improvements: Vec<ImprovementRecommendation>,
    /// Areas already performing well
    pub strengths: Vec<StrengthArea>,
    /// Comparison against elite reference values
    pub elite_benchmarks: Vec<EliteBenchmark>,
    /// Practice plan; never empty
    pub practice_recommendations: Vec<PracticeRecommendation>,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
}

/// Part of the swing a recommendation or strength refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingArea {
    /// Club-head speed generation
    ClubHeadSpeed,
    /// Swing plane consistency
    SwingPlane,
    /// Backswing/downswing rhythm
    Tempo,
}

impl SwingArea {
    /// Human-readable area name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ClubHeadSpeed => "Club Head Speed",
            Self::SwingPlane => "Swing Plane",
            Self::Tempo => "Tempo",
        }
    }
}

/// Urgency of an improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementPriority {
    /// Must be addressed first
    Critical,
    /// Large expected gain
    High,
    /// Worthwhile gain
    Medium,
    /// Polish
    Low,
}

impl ImprovementPriority {
    /// Display string, also used by the lexical ordering policy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Severity rank; lower sorts first
    #[must_use]
    pub const fn severity_rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Whether recommendations at this priority must carry drills
    #[must_use]
    pub const fn requires_drills(self) -> bool {
        self.severity_rank() <= Self::Medium.severity_rank()
    }
}

impl fmt::Display for ImprovementPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected weakness with a fix and supporting drills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementRecommendation {
    /// Swing area
    pub area: SwingArea,
    /// Urgency
    pub priority: ImprovementPriority,
    /// What is wrong
    pub issue: String,
    /// How to fix it
    pub solution: String,
    /// Practice drills; non-empty for medium priority and above
    pub drills: Vec<String>,
    /// Expected carry gain when fixed (yards)
    pub impact_on_distance_yds: Option<f64>,
    /// Expected accuracy gain when fixed (percent)
    pub impact_on_accuracy_pct: Option<f64>,
}

/// An area already at or near professional level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthArea {
    /// Swing area
    pub area: SwingArea,
    /// Short explanation
    pub description: String,
    /// Professional-level rating (0-100)
    pub professional_level: f64,
}

/// Comparison of one metric against elite reference values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliteBenchmark {
    /// Metric name
    pub metric: String,
    /// Player's value
    pub user_value: f64,
    /// Elite average
    pub elite_average: f64,
    /// Typical professional range `[low, high]`
    pub pro_range: [f64; 2],
    /// Displayed percentile (0-100)
    pub percentile: f64,
    /// Unit of `user_value`
    pub unit: String,
}

/// Practice plan entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeRecommendation {
    /// Short title
    pub title: String,
    /// What to do and why
    pub description: String,
    /// Area this targets; `None` for general practice
    pub focus_area: Option<SwingArea>,
    /// How often to practise
    pub frequency: String,
    /// Session length (minutes)
    pub duration_minutes: u32,
    /// Drills to run
    pub drills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_drill_requirement() {
        assert!(ImprovementPriority::Critical.requires_drills());
        assert!(ImprovementPriority::High.requires_drills());
        assert!(ImprovementPriority::Medium.requires_drills());
        assert!(!ImprovementPriority::Low.requires_drills());
    }

    #[test]
    fn test_priority_serializes_as_display_string() {
        let json = serde_json::to_string(&ImprovementPriority::High).unwrap();
        assert_eq!(json, "\"high\"");
        assert_eq!(ImprovementPriority::Medium.to_string(), "medium");
    }
}
