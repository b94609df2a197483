// ABOUTME: Swing feedback engine producing coaching reports from a biomechanics analysis
// ABOUTME: Ranked improvements, strengths, elite benchmarks, practice plan, and quality-weighted score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Swing feedback engine
//!
//! Every rule is evaluated independently and every match is reported. The
//! overall score is discounted by tracking quality: a well-scored swing
//! filmed badly is reported as proportionally less certain, never hidden.

use crate::config::intelligence::{FeedbackConfig, PriorityOrdering};
use chrono::{DateTime, Utc};
use swing_core::models::{
    EliteBenchmark, ImprovementPriority, ImprovementRecommendation, PracticeRecommendation,
    StrengthArea, SwingAnalysisResult, SwingArea, SwingFeedback,
};
use tracing::debug;

/// Trait for generating swing feedback
pub trait FeedbackGenerator {
    /// Generate feedback stamped with an explicit time
    ///
    /// Identical inputs yield identical reports.
    fn generate_feedback_at(
        &self,
        result: &SwingAnalysisResult,
        generated_at: DateTime<Utc>,
    ) -> SwingFeedback;

    /// Generate feedback stamped with the current time
    fn generate_feedback(&self, result: &SwingAnalysisResult) -> SwingFeedback {
        self.generate_feedback_at(result, Utc::now())
    }
}

/// Rule-based feedback engine
#[derive(Debug, Clone, Default)]
pub struct FeedbackEngine {
    config: FeedbackConfig,
}

/// Result inputs the rules read, with unusable values neutralized
#[derive(Debug, Clone, Copy)]
struct RuleInputs {
    speed_at_impact_mph: f64,
    plane_consistency: f64,
    tempo_ratio: f64,
    spine_stability: f64,
    tracking_score: f64,
}

impl RuleInputs {
    fn from_result(result: &SwingAnalysisResult) -> Self {
        Self {
            speed_at_impact_mph: finite_non_negative(result.club_head_speed.at_impact_mph),
            plane_consistency: unit_interval(result.swing_plane.consistency),
            tempo_ratio: result.tempo.ratio,
            spine_stability: unit_interval(result.body_kinematics.spine_stability),
            tracking_score: unit_interval(result.tracking_quality.overall_score),
        }
    }
}

impl FeedbackEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(config: FeedbackConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// All matching improvement rules, ordered by the configured policy
    #[must_use]
    pub fn detect_improvements(
        &self,
        result: &SwingAnalysisResult,
    ) -> Vec<ImprovementRecommendation> {
        let inputs = RuleInputs::from_result(result);
        let thresholds = &self.config.thresholds;
        let impacts = &self.config.impacts;
        let mut improvements = Vec::new();

        if inputs.speed_at_impact_mph < thresholds.low_club_speed_mph {
            improvements.push(ImprovementRecommendation {
                area: SwingArea::ClubHeadSpeed,
                priority: ImprovementPriority::High,
                issue: format!(
                    "Club head speed of {:.1} mph is below the {:.0} mph target",
                    inputs.speed_at_impact_mph, thresholds.low_club_speed_mph
                ),
                solution: "Build speed through hip-shoulder separation and a fuller wrist hinge"
                    .into(),
                drills: vec![
                    "Overspeed training with a lighter club".into(),
                    "Step-through drill for lower-body sequencing".into(),
                    "Medicine ball rotational throws".into(),
                ],
                impact_on_distance_yds: Some(impacts.club_speed_distance_yds),
                impact_on_accuracy_pct: None,
            });
        }

        if inputs.plane_consistency < thresholds.low_plane_consistency {
            improvements.push(ImprovementRecommendation {
                area: SwingArea::SwingPlane,
                priority: ImprovementPriority::Medium,
                issue: format!(
                    "Swing plane consistency of {:.0}% is below {:.0}%",
                    inputs.plane_consistency * 100.0,
                    thresholds.low_plane_consistency * 100.0
                ),
                solution: "Groove a repeatable plane with alignment-stick feedback".into(),
                drills: vec![
                    "Alignment stick plane drill".into(),
                    "Towel under the trail arm".into(),
                    "Slow-motion mirror swings".into(),
                ],
                impact_on_distance_yds: Some(impacts.plane_distance_yds),
                impact_on_accuracy_pct: Some(impacts.plane_accuracy_pct),
            });
        }

        if let Some(direction) = self.tempo_fault(inputs.tempo_ratio) {
            improvements.push(ImprovementRecommendation {
                area: SwingArea::Tempo,
                priority: ImprovementPriority::Medium,
                issue: format!(
                    "Tempo ratio of {:.1}:1 is {direction}; target {:.1} to {:.1}:1",
                    inputs.tempo_ratio, thresholds.min_tempo_ratio, thresholds.max_tempo_ratio
                ),
                solution: "Swing to a steady 3:1 count with a metronome".into(),
                drills: vec![
                    "Metronome tempo drill".into(),
                    "Pause-at-the-top drill".into(),
                    "Feet-together swings".into(),
                ],
                impact_on_distance_yds: Some(impacts.tempo_distance_yds),
                impact_on_accuracy_pct: Some(impacts.tempo_accuracy_pct),
            });
        }

        for improvement in &improvements {
            debug!(
                area = improvement.area.display_name(),
                priority = %improvement.priority,
                "Improvement rule matched"
            );
        }

        self.order_improvements(&mut improvements);
        improvements
    }

    /// All matching strength rules
    #[must_use]
    pub fn identify_strengths(&self, result: &SwingAnalysisResult) -> Vec<StrengthArea> {
        let inputs = RuleInputs::from_result(result);
        let thresholds = &self.config.thresholds;
        let mut strengths = Vec::new();

        if inputs.speed_at_impact_mph > thresholds.strong_club_speed_mph {
            strengths.push(StrengthArea {
                area: SwingArea::ClubHeadSpeed,
                description: format!(
                    "Club head speed of {:.1} mph is at tour level",
                    inputs.speed_at_impact_mph
                ),
                professional_level: (inputs.speed_at_impact_mph
                    / thresholds.professional_club_speed_mph
                    * 100.0)
                    .min(100.0),
            });
        }

        if inputs.plane_consistency > thresholds.strong_plane_consistency {
            strengths.push(StrengthArea {
                area: SwingArea::SwingPlane,
                description: "Swing plane is highly repeatable".into(),
                professional_level: inputs.plane_consistency * 100.0,
            });
        }

        strengths
    }

    /// Player values against the elite reference table
    #[must_use]
    pub fn elite_benchmarks(&self, result: &SwingAnalysisResult) -> Vec<EliteBenchmark> {
        let inputs = RuleInputs::from_result(result);
        let benchmarks = &self.config.benchmarks;
        let plane_pct = inputs.plane_consistency * 100.0;

        vec![
            EliteBenchmark {
                metric: SwingArea::ClubHeadSpeed.display_name().into(),
                user_value: inputs.speed_at_impact_mph,
                elite_average: benchmarks.club_speed.elite_average,
                pro_range: benchmarks.club_speed.pro_range,
                percentile: benchmarks.club_speed.percentile(inputs.speed_at_impact_mph),
                unit: "mph".into(),
            },
            EliteBenchmark {
                metric: "Swing Plane Consistency".into(),
                user_value: plane_pct,
                elite_average: benchmarks.plane_consistency.elite_average,
                pro_range: benchmarks.plane_consistency.pro_range,
                percentile: benchmarks.plane_consistency.percentile(plane_pct),
                unit: "%".into(),
            },
        ]
    }

    /// Quality-weighted overall score in [0,100]
    #[must_use]
    pub fn overall_score(&self, result: &SwingAnalysisResult) -> f64 {
        let inputs = RuleInputs::from_result(result);
        let weights = &self.config.scoring;
        let bonus_threshold = self.config.thresholds.bonus_club_speed_mph;
        let speed_bonus = if inputs.speed_at_impact_mph > bonus_threshold {
            weights.speed_bonus
        } else {
            0.0
        };

        let raw = weights.spine_stability.mul_add(
            inputs.spine_stability,
            weights
                .plane_consistency
                .mul_add(inputs.plane_consistency, weights.base + speed_bonus),
        );
        let score = raw * inputs.tracking_score;
        if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 100.0)
        }
    }

    /// Practice plan: the daily tempo session, then one session per improvement area
    #[must_use]
    pub fn practice_recommendations(
        &self,
        improvements: &[ImprovementRecommendation],
    ) -> Vec<PracticeRecommendation> {
        let mut plan = vec![PracticeRecommendation {
            title: "Daily Tempo Training".into(),
            description: "Ten minutes of metronome swings to build a repeatable 3:1 rhythm".into(),
            focus_area: None,
            frequency: "Daily".into(),
            duration_minutes: 10,
            drills: vec![
                "Metronome tempo drill".into(),
                "Half swings at a 3:1 count".into(),
            ],
        }];

        for improvement in improvements {
            if plan
                .iter()
                .any(|entry| entry.focus_area == Some(improvement.area))
            {
                continue;
            }
            plan.push(PracticeRecommendation {
                title: format!("{} Focus Session", improvement.area.display_name()),
                description: improvement.solution.clone(),
                focus_area: Some(improvement.area),
                frequency: "3x per week".into(),
                duration_minutes: match improvement.area {
                    SwingArea::ClubHeadSpeed => 20,
                    SwingArea::SwingPlane | SwingArea::Tempo => 15,
                },
                drills: improvement.drills.clone(),
            });
        }

        plan
    }

    fn tempo_fault(&self, tempo_ratio: f64) -> Option<&'static str> {
        let thresholds = &self.config.thresholds;
        if !tempo_ratio.is_finite() {
            return None;
        }
        if tempo_ratio < thresholds.min_tempo_ratio {
            Some("too quick from the top")
        } else if tempo_ratio > thresholds.max_tempo_ratio {
            Some("too slow from the top")
        } else {
            None
        }
    }

    fn order_improvements(&self, improvements: &mut [ImprovementRecommendation]) {
        match self.config.priority_ordering {
            PriorityOrdering::Severity => {
                improvements.sort_by_key(|improvement| improvement.priority.severity_rank());
            }
            PriorityOrdering::Lexical => {
                improvements.sort_by_key(|improvement| improvement.priority.as_str());
            }
        }
    }
}

impl FeedbackGenerator for FeedbackEngine {
    fn generate_feedback_at(
        &self,
        result: &SwingAnalysisResult,
        generated_at: DateTime<Utc>,
    ) -> SwingFeedback {
        let improvements = self.detect_improvements(result);
        let practice_recommendations = self.practice_recommendations(&improvements);
        let feedback = SwingFeedback {
            swing_id: result.swing_id,
            overall_score: self.overall_score(result),
            strengths: self.identify_strengths(result),
            elite_benchmarks: self.elite_benchmarks(result),
            improvements,
            practice_recommendations,
            timestamp: generated_at,
        };

        debug!(
            swing_id = ?feedback.swing_id,
            overall_score = feedback.overall_score,
            improvements = feedback.improvements.len(),
            strengths = feedback.strengths.len(),
            "Generated swing feedback"
        );
        feedback
    }
}

fn unit_interval(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn finite_non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
