// ABOUTME: Swing insight CLI - analyzes swing measurements and reconstructs ball flights
// ABOUTME: Reads JSON from disk, writes JSON reports to stdout or a file, logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze one swing and print the JSON report
//! swing-insight-cli analyze --input swing.json
//!
//! # Human-readable summary instead of JSON
//! swing-insight-cli analyze --input swing.json --summary
//!
//! # Analyze a JSON array of swings in parallel
//! swing-insight-cli batch --input swings.json --output reports.json
//!
//! # Reconstruct a ball flight (exit code 2 when manual selection is needed)
//! swing-insight-cli trajectory --input detections.json --samples 60
//!
//! # Show the effective configuration after SWING_* overrides
//! swing-insight-cli config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use commands::trajectory::CanvasArgs;
use std::path::PathBuf;
use std::process::ExitCode;
use swing_insight::config::IntelligenceConfig;
use swing_insight::errors::{exit_code_for, AppError};
use swing_insight::logging::{init_from_env, LoggingConfig};
use swing_insight::SwingAnalysisService;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "swing-insight-cli",
    about = "Golf swing feedback and ball-flight reconstruction",
    long_about = "Turns pose/motion model measurements into biomechanics and coaching feedback, and fits ball flights from detections."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a single swing measurement set
    Analyze {
        /// Measurement set JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Write the report here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print a human-readable summary
        #[arg(long)]
        summary: bool,
    },

    /// Analyze a JSON array of measurement sets
    Batch {
        /// JSON file holding an array of measurement sets
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Write the reports here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print one summary line per swing
        #[arg(long)]
        summary: bool,
    },

    /// Reconstruct a ball flight from detections
    Trajectory {
        /// Detection sequence JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Number of display-path points to sample
        #[arg(long, default_value = "30")]
        samples: usize,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Print the effective engine configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug").init()
    } else {
        init_from_env()
    };
    if let Err(error) = logging {
        eprintln!("Logging disabled: {error}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::from(u8::try_from(exit_code_for(&error)).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let config = IntelligenceConfig::load().map_err(AppError::from)?;
    debug!("Engine configuration loaded");
    let service = SwingAnalysisService::with_config(config.clone());

    match command {
        Command::Analyze {
            input,
            output,
            summary,
        } => commands::swing::analyze(&service, &input, output.as_deref(), summary),
        Command::Batch {
            input,
            output,
            summary,
        } => commands::swing::batch(&service, &input, output.as_deref(), summary),
        Command::Trajectory {
            input,
            output,
            samples,
            canvas,
        } => commands::trajectory::reconstruct(
            &service,
            &input,
            output.as_deref(),
            samples,
            &canvas,
        ),
        Command::Config => commands::config::show(&config),
    }
}
