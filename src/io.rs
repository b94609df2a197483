// ABOUTME: JSON file loading and report writing for swing and detection data
// ABOUTME: Reads measurement sets and detection sequences, writes pretty-printed reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use swing_core::models::{DetectionSequence, MeasurementSet};
use tracing::debug;

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file and `InvalidFormat` for malformed JSON
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|error| AppError::from(error).with_context(path.display()))?;
    let value = serde_json::from_str(&contents)
        .map_err(|error| AppError::from(error).with_context(path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "Loaded JSON input");
    Ok(value)
}

/// Load one measurement set
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_measurement(path: &Path) -> AppResult<MeasurementSet> {
    read_json(path)
}

/// Load a JSON array of measurement sets
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_measurements(path: &Path) -> AppResult<Vec<MeasurementSet>> {
    read_json(path)
}

/// Load one ball-detection sequence
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_detections(path: &Path) -> AppResult<DetectionSequence> {
    read_json(path)
}

/// Pretty-printed JSON for a report
///
/// # Errors
///
/// Returns an error if the value cannot be serialized
pub fn to_pretty_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let json = to_pretty_json(value)?;
    fs::write(path, json.as_bytes())?;
    debug!(path = %path.display(), bytes = json.len(), "Wrote JSON report");
    Ok(())
}
