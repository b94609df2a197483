// ABOUTME: Main library entry point for the swing insight analysis tools
// ABOUTME: Wires the swing engines into a service with logging, JSON I/O, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swing Insight
//!
//! Turns the output of an upstream pose/motion model into a biomechanics
//! report, ranked coaching feedback, and elite benchmarks, and reconstructs
//! ball flight from sparse ball detections behind a data-quality gate.
//!
//! ## Crates
//!
//! - `swing_core`: value types, errors, and unit conversions
//! - `swing_intelligence`: the derivation, feedback, and trajectory engines
//! - this crate: the analysis service, JSON I/O, logging, and the CLI
//!
//! ## Example
//!
//! ```rust,no_run
//! use swing_insight::analysis::SwingAnalysisService;
//! use swing_insight::models::MeasurementSet;
//!
//! let measurement = MeasurementSet::builder(92.0, 3.1)
//!     .plane_angle_deg(63.0)
//!     .build();
//! let report = SwingAnalysisService::new().analyze(&measurement);
//! println!("score: {:.1}", report.feedback.overall_score);
//! ```

/// End-to-end analysis service and batch processing
pub mod analysis;

/// Error types and exit-code mapping
pub mod errors;

/// JSON loading and report writing
pub mod io;

/// Structured logging setup
pub mod logging;

/// Data models re-exported from `swing_core`
pub mod models {
    pub use swing_core::models::*;
}

/// Engine configuration re-exported from `swing_intelligence`
pub mod config {
    pub use swing_intelligence::config::intelligence::*;
}

pub use analysis::{SwingAnalysisService, SwingReport};
