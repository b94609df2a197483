// ABOUTME: Logging configuration and structured logging setup for the swing insight tools
// ABOUTME: Configures log levels, formatters, and stderr output for analysis runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs always go to stderr so the CLI's stdout stays machine-readable JSON.

use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use swing_core::constants::service_names;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use uuid::Uuid;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for this project's crates (trace, debug, info, warn, error)
    pub level: String,
    /// Filter directives taken from `RUST_LOG`
    pub directives: Option<String>,
    /// Apply `level` to this project's crates even when `directives` are set
    pub force_level: bool,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            directives: None,
            force_level: false,
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::SWING_INSIGHT_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let directives = env::var("RUST_LOG").ok().filter(|value| !value.trim().is_empty());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level: "info".into(),
            directives,
            force_level: false,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::SWING_INSIGHT_CLI.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Force a level onto this project's crates, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self.force_level = true;
        self
    }

    /// Filter directives: `RUST_LOG` untouched when set, else `warn` plus `level` for our crates
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let crate_directives = || {
            ["swing_insight", "swing_intelligence", "swing_core"]
                .iter()
                .map(|target| format!("{target}={}", self.level))
                .collect::<Vec<_>>()
                .join(",")
        };

        match &self.directives {
            Some(directives) if self.force_level => format!("{directives},{}", crate_directives()),
            Some(directives) => directives.clone(),
            None => format!("warn,{}", crate_directives()),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(self.filter_directives())
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.directives = %self.filter_directives(),
            log.format = ?self.format,
            "Swing insight starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Configuration loaded: {config_summary}");
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Analysis-specific structured log events
pub struct AppLogger;

impl AppLogger {
    /// Log a completed swing analysis
    pub fn log_swing_analysis(swing_id: Option<Uuid>, overall_score: f64, duration_ms: u64) {
        info!(
            swing.id = swing_id.map_or_else(|| "unassigned".to_owned(), |id| id.to_string()),
            swing.score = overall_score,
            swing.duration_ms = duration_ms,
            "Swing analysis"
        );
    }

    /// Log a batch analysis run
    pub fn log_batch(swings: usize, duration_ms: u64) {
        info!(
            batch.swings = swings,
            batch.duration_ms = duration_ms,
            "Batch analysis"
        );
    }

    /// Log the outcome of a trajectory reconstruction
    pub fn log_trajectory(success: bool, detected_frames: usize, detection_rate: f64) {
        info!(
            trajectory.success = success,
            trajectory.detected_frames = detected_frames,
            trajectory.detection_rate = detection_rate,
            "Trajectory reconstruction"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logs_as_cli_service() {
        let config = LoggingConfig::default();
        assert_eq!(config.service_name, "swing-insight-cli");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_with_level_overrides() {
        let config = LoggingConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
        assert!(config.force_level);
    }

    #[test]
    fn test_without_rust_log_our_crates_log_at_level() {
        let config = LoggingConfig::default();
        assert_eq!(
            config.filter_directives(),
            "warn,swing_insight=info,swing_intelligence=info,swing_core=info"
        );
    }

    #[test]
    fn test_rust_log_directives_are_kept_verbatim() {
        let config = LoggingConfig {
            directives: Some("swing_intelligence=debug".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.filter_directives(), "swing_intelligence=debug");
    }

    #[test]
    fn test_verbose_level_layers_over_rust_log() {
        let config = LoggingConfig {
            directives: Some("rayon=trace".into()),
            ..LoggingConfig::default()
        }
        .with_level("debug");
        assert_eq!(
            config.filter_directives(),
            "rayon=trace,swing_insight=debug,swing_intelligence=debug,swing_core=debug"
        );
    }
}
