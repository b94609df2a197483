// ABOUTME: Core data models for swing and ball-flight analysis
// ABOUTME: Re-exports measurement, analysis, feedback, and trajectory value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain, serializable value types exchanged with the pose/ball-detection
//! producers and the presentation layer.
//!
//! ## Design Principles
//!
//! - **Immutable once built**: engines take inputs by reference and return new values
//! - **Serializable**: every model round-trips through JSON for the presentation layer
//! - **Typed lookups**: feature keys and labels are closed enums, not free strings
//!
//! ## Core Models
//!
//! - `MeasurementSet`: pose/motion model output for one swing
//! - `SwingAnalysisResult`: derived biomechanics report
//! - `SwingFeedback`: ranked improvements, strengths, benchmarks, practice plan
//! - `DetectionSequence` / `FlightTrajectory`: ball-tracking input and fitted output

mod analysis;
mod feedback;
mod measurement;
mod trajectory;

pub use analysis::{
    BodyKinematics, ClubHeadSpeedProfile, RotationMetrics, SpineAngles, SwingAnalysisResult,
    SwingPlaneMetrics, TempoMetrics, TrackingQuality,
};
pub use feedback::{
    EliteBenchmark, ImprovementPriority, ImprovementRecommendation, PracticeRecommendation,
    StrengthArea, SwingArea, SwingFeedback,
};
pub use measurement::{
    BiomechanicMeasurement, MeasurementSet, MeasurementSetBuilder, ReliabilityKey,
    SwingClassification,
};
pub use trajectory::{
    BallPosition, CoordinateSpace, Detection, DetectionQualityFailure, DetectionSequence,
    FlightTrajectory, QualityFailureReason, TrajectoryType,
};
