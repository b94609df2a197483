// ABOUTME: Output formatting helpers for swing-insight-cli
// ABOUTME: Human-readable swing reports and trajectory summaries on stderr/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use swing_core::constants::units::FEET_PER_METER;
use swing_insight::models::FlightTrajectory;
use swing_insight::SwingReport;

/// Display one swing report
pub fn display_swing_report(report: &SwingReport) {
    let analysis = &report.analysis;
    let feedback = &report.feedback;

    println!("\nSwing Analysis");
    println!("{}", "=".repeat(60));
    if let Some(id) = analysis.swing_id {
        println!("   Swing: {id}");
    }
    println!("   Overall score: {:.1}", feedback.overall_score);
    println!(
        "   Club head speed: {:.1} mph (peak {:.1})",
        analysis.club_head_speed.at_impact_mph, analysis.club_head_speed.peak_mph
    );
    println!(
        "   Tempo: {:.1}:1 ({:.2}s back, {:.2}s down)",
        analysis.tempo.ratio, analysis.tempo.backswing_sec, analysis.tempo.downswing_sec
    );
    println!("   Swing plane: {:.1} deg", analysis.swing_plane.angle_deg);
    println!("   X-factor: {:.1} deg", analysis.body_kinematics.x_factor_deg);
    println!("   Confidence: {:.0}%", analysis.confidence * 100.0);

    if !feedback.improvements.is_empty() {
        println!("\nImprovements:");
        for improvement in &feedback.improvements {
            println!(
                "   [{}] {}: {}",
                improvement.priority.as_str(),
                improvement.area.display_name(),
                improvement.issue
            );
            println!("      {}", improvement.solution);
        }
    }

    if !feedback.strengths.is_empty() {
        println!("\nStrengths:");
        for strength in &feedback.strengths {
            println!(
                "   {} ({:.0}% of pro level): {}",
                strength.area.display_name(),
                strength.professional_level,
                strength.description
            );
        }
    }

    println!("\nElite benchmarks:");
    for benchmark in &feedback.elite_benchmarks {
        println!(
            "   {}: {:.1} {} vs {:.1} elite ({:.0}th percentile)",
            benchmark.metric,
            benchmark.user_value,
            benchmark.unit,
            benchmark.elite_average,
            benchmark.percentile
        );
    }

    println!("\nPractice plan:");
    for session in &feedback.practice_recommendations {
        println!(
            "   {} - {}, {} min",
            session.title, session.frequency, session.duration_minutes
        );
    }
}

/// Display one line per swing in a batch
pub fn display_batch_summary(reports: &[SwingReport]) {
    println!("\nBatch Analysis ({} swings)", reports.len());
    println!("{}", "=".repeat(60));
    for (index, report) in reports.iter().enumerate() {
        let top = report
            .feedback
            .improvements
            .first()
            .map_or("none", |improvement| improvement.area.display_name());
        println!(
            "   #{:<3} score {:>5.1}  speed {:>5.1} mph  top priority: {top}",
            index + 1,
            report.feedback.overall_score,
            report.analysis.club_head_speed.at_impact_mph
        );
    }
}

/// Display a reconstructed ball flight on stderr, keeping stdout for JSON
pub fn display_trajectory(trajectory: &FlightTrajectory) {
    eprintln!(
        "Launch {:.1} mph at {:.1} deg, carry {:.0} yd, apex {:.0} ft, {:.1}s ({:?})",
        trajectory.launch_speed_mph(),
        trajectory.launch_angle_deg,
        trajectory.range_yards(),
        trajectory.max_height_m * FEET_PER_METER,
        trajectory.flight_time_sec,
        trajectory.trajectory_type
    );
}
