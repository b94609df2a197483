// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants (unit conversions, service names) for swing analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion factors between metric and imperial measurements
pub mod units {
    /// Metres per second in one mile per hour
    pub const MPS_PER_MPH: f64 = 0.447_04;

    /// Yards in one metre
    pub const YARDS_PER_METER: f64 = 1.093_613_3;

    /// Feet in one metre
    pub const FEET_PER_METER: f64 = 3.280_84;

    /// Convert metres per second to miles per hour
    #[must_use]
    pub fn mps_to_mph(mps: f64) -> f64 {
        mps / MPS_PER_MPH
    }

    /// Convert miles per hour to metres per second
    #[must_use]
    pub fn mph_to_mps(mph: f64) -> f64 {
        mph * MPS_PER_MPH
    }

    /// Convert metres to yards
    #[must_use]
    pub fn meters_to_yards(meters: f64) -> f64 {
        meters * YARDS_PER_METER
    }
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the command-line front end
    pub const SWING_INSIGHT_CLI: &str = "swing-insight-cli";
}
