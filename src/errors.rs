// ABOUTME: Error types for the swing insight library and CLI
// ABOUTME: Re-exports the unified AppError and maps failures to process exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! The engines are total; only loading inputs, writing reports, and reading
//! configuration can fail. All of those surface as [`AppError`].

pub use swing_core::errors::{AppError, AppResult, ErrorCode};
pub use swing_core::models::{DetectionQualityFailure, QualityFailureReason};
pub use swing_intelligence::config::intelligence::ConfigError;

/// Exit code reported when ball detections fail the quality gate
pub const QUALITY_FAILURE_EXIT_CODE: i32 = 2;

/// Exit code for an error chain
///
/// A detection quality failure anywhere in the chain wins; otherwise the
/// first `AppError` decides, and anything else exits with 1.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    if error
        .chain()
        .any(|cause| cause.downcast_ref::<DetectionQualityFailure>().is_some())
    {
        return QUALITY_FAILURE_EXIT_CODE;
    }
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<AppError>())
        .map_or(1, |app_error| app_error.code.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_uses_app_error_code() {
        let error = anyhow::Error::from(AppError::not_found("swing.json"));
        assert_eq!(exit_code_for(&error), 66);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let error = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&error), 1);
    }

    #[test]
    fn test_quality_failure_exits_with_two() {
        let failure = DetectionQualityFailure {
            reason: QualityFailureReason::TooFewDetections,
            detected_frame_count: 3,
            total_frames: 60,
            detection_rate: 0.05,
        };
        let error = anyhow::Error::from(failure).context("trajectory");
        assert_eq!(exit_code_for(&error), QUALITY_FAILURE_EXIT_CODE);
    }

    #[test]
    fn test_config_error_converts_to_config_invalid() {
        let error: AppError = ConfigError::Parse("Invalid SWING_TRAJECTORY_GRAVITY".into()).into();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }
}
