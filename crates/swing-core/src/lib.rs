// ABOUTME: Core types and constants for the swing insight platform
// ABOUTME: Foundation crate with error handling, swing/ball-flight models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swing Core
//!
//! Foundation crate providing the shared value types for swing analysis. It
//! holds no behaviour beyond small accessors, so it changes rarely and keeps
//! incremental builds of the engine crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and shared identifiers
//! - **models**: Measurement input, derived analysis, feedback, and ball-flight types

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and service identifiers
pub mod constants;

/// Core data models (`MeasurementSet`, `SwingAnalysisResult`, `SwingFeedback`, detections)
pub mod models;
