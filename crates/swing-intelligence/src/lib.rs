// ABOUTME: Swing intelligence crate root exposing the analysis engines
// ABOUTME: Biomechanics derivation, feedback scoring, and ball-flight reconstruction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swing Intelligence
//!
//! Pure, synchronous engines that turn upstream model output into coaching
//! reports and ball-flight metrics:
//!
//! - [`BiomechanicsDeriver`]: `MeasurementSet` → `SwingAnalysisResult`
//! - [`FeedbackEngine`]: `SwingAnalysisResult` → `SwingFeedback`
//! - [`TrajectoryReconstructor`]: `DetectionSequence` → `FlightTrajectory`
//!   or `DetectionQualityFailure`
//!
//! None of the engines hold mutable state; construct them once and share
//! them freely across threads.

/// Reference constants for swing biomechanics and ball flight
pub mod biomechanical_constants;
/// Derivation of the full biomechanics report from raw measurements
pub mod biomechanics_deriver;
/// Engine configuration with environment overrides
pub mod config;
/// Ranked improvements, strengths, benchmarks, and overall score
pub mod feedback_engine;
/// Display parametrization of a ball flight for playback
pub mod flight_path;
/// Weighted least-squares fitting used by the trajectory fit
pub mod statistical_analysis;
/// Quality-gated ball-flight reconstruction
pub mod trajectory_reconstructor;

pub use biomechanics_deriver::BiomechanicsDeriver;
pub use config::IntelligenceConfig;
pub use feedback_engine::{FeedbackEngine, FeedbackGenerator};
pub use flight_path::TrajectoryPath;
pub use trajectory_reconstructor::TrajectoryReconstructor;
