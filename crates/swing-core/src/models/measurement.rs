// ABOUTME: Measurement set produced by the external pose/motion model for one swing
// ABOUTME: Typed reliability keys, swing classification labels, and a builder for callers/tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Normalized swing measurements emitted by the upstream pose/motion model
///
/// The core never validates this beyond clamping: out-of-range or missing
/// values resolve to documented defaults when the analysis is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Caller-assigned swing identifier, propagated into every derived value
    #[serde(default)]
    pub swing_id: Option<Uuid>,
    /// When the swing was recorded
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    /// Club-head speed (mph)
    pub club_head_speed_mph: f64,
    /// Shoulder tilt/turn angle (degrees)
    pub shoulder_tilt_deg: f64,
    /// Swing plane angle (degrees); non-positive or non-finite means "not measured"
    pub plane_angle_deg: f64,
    /// Backswing:downswing duration ratio
    pub tempo_ratio: f64,
    /// Length of the analysed video clip (seconds)
    pub video_duration_sec: f64,
    /// Overall model confidence (0-1)
    pub confidence: f64,
    /// Per-feature reliability scores (0-1) keyed by feature name
    #[serde(default)]
    pub feature_reliability: BTreeMap<String, f64>,
    /// Categorical swing classification emitted by the model
    #[serde(default)]
    pub predicted_label: String,
    /// Optional detailed named measurements, in model order
    #[serde(default)]
    pub detailed_biomechanics: Vec<BiomechanicMeasurement>,
}

/// A single named measurement from the detailed biomechanics list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomechanicMeasurement {
    /// Measurement name as emitted by the model (e.g. `wrist_lag_angle`)
    pub name: String,
    /// Measured value
    pub current_value: f64,
}

impl MeasurementSet {
    /// Start building a measurement set from the required scalar fields
    #[must_use]
    pub fn builder(club_head_speed_mph: f64, tempo_ratio: f64) -> MeasurementSetBuilder {
        MeasurementSetBuilder::new(club_head_speed_mph, tempo_ratio)
    }

    /// Reliability for a known feature, clamped to [0,1], or the key's default
    #[must_use]
    pub fn reliability(&self, key: ReliabilityKey) -> f64 {
        self.reliability_if_present(key)
            .unwrap_or_else(|| key.default_value())
    }

    /// Reliability for a known feature only when the model supplied a usable value
    #[must_use]
    pub fn reliability_if_present(&self, key: ReliabilityKey) -> Option<f64> {
        self.feature_reliability
            .get(key.as_str())
            .copied()
            .filter(|value| value.is_finite())
            .map(|value| value.clamp(0.0, 1.0))
    }

    /// Swing plane angle when it was actually measured
    #[must_use]
    pub fn plane_angle(&self) -> Option<f64> {
        (self.plane_angle_deg.is_finite() && self.plane_angle_deg > 0.0)
            .then_some(self.plane_angle_deg)
    }

    /// Parsed swing classification
    #[must_use]
    pub fn classification(&self) -> SwingClassification {
        SwingClassification::from_label(&self.predicted_label)
    }

    /// First detailed measurement whose name contains any of `needles` (case-insensitive)
    #[must_use]
    pub fn detailed_value(&self, needles: &[&str]) -> Option<f64> {
        self.detailed_biomechanics
            .iter()
            .find(|entry| {
                let name = entry.name.to_lowercase();
                needles.iter().any(|needle| name.contains(needle))
            })
            .map(|entry| entry.current_value)
            .filter(|value| value.is_finite())
    }
}

/// Feature-reliability keys understood by the analysis
///
/// Each key carries its own default so a missing entry can never silently
/// resolve through a misspelled string lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityKey {
    /// How consistently the club head was tracked
    ClubTracking,
    /// How reliably the body pose was detected
    PoseDetection,
    /// Lighting quality of the clip
    Lighting,
    /// Suitability of the camera angle
    CameraAngle,
    /// Overall video quality score; motion blur is its complement
    VideoQuality,
    /// Frame-to-frame swing plane consistency
    SwingPlane,
}

impl ReliabilityKey {
    /// All known keys
    pub const ALL: [Self; 6] = [
        Self::ClubTracking,
        Self::PoseDetection,
        Self::Lighting,
        Self::CameraAngle,
        Self::VideoQuality,
        Self::SwingPlane,
    ];

    /// Map key used by the upstream model
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClubTracking => "club_tracking",
            Self::PoseDetection => "pose_detection",
            Self::Lighting => "lighting",
            Self::CameraAngle => "camera_angle",
            Self::VideoQuality => "video_quality",
            Self::SwingPlane => "swing_plane",
        }
    }

    /// Value used when the model did not supply this key
    #[must_use]
    pub const fn default_value(self) -> f64 {
        match self {
            Self::ClubTracking => 0.8,
            Self::PoseDetection => 0.9,
            Self::Lighting => 0.75,
            Self::CameraAngle => 0.85,
            // Complement of the 0.2 default motion blur
            Self::VideoQuality => 0.8,
            Self::SwingPlane => 0.8,
        }
    }
}

/// Categorical swing classification emitted by the upstream model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingClassification {
    /// Club approaches from outside the target line
    OverTheTop,
    /// Club approaches from inside the target line
    InsideOut,
    /// Swing plane too upright
    TooSteep,
    /// Swing plane too flat
    TooFlat,
    /// Neutral, on-plane swing
    OnPlane,
    /// Label missing or not recognised
    Unknown,
}

impl SwingClassification {
    /// Parse a model label, tolerating case, spaces, and hyphens
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "over_the_top" => Self::OverTheTop,
            "inside_out" => Self::InsideOut,
            "too_steep" => Self::TooSteep,
            "too_flat" => Self::TooFlat,
            "on_plane" | "good" | "neutral" => Self::OnPlane,
            _ => Self::Unknown,
        }
    }

    /// Canonical label string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OverTheTop => "over_the_top",
            Self::InsideOut => "inside_out",
            Self::TooSteep => "too_steep",
            Self::TooFlat => "too_flat",
            Self::OnPlane => "on_plane",
            Self::Unknown => "unknown",
        }
    }
}

/// Builder for `MeasurementSet`
#[derive(Debug, Clone)]
pub struct MeasurementSetBuilder {
    measurement: MeasurementSet,
}

impl MeasurementSetBuilder {
    /// Creates a builder with neutral defaults for every optional signal
    #[must_use]
    pub fn new(club_head_speed_mph: f64, tempo_ratio: f64) -> Self {
        Self {
            measurement: MeasurementSet {
                swing_id: None,
                recorded_at: None,
                club_head_speed_mph,
                shoulder_tilt_deg: 90.0,
                plane_angle_deg: 65.0,
                tempo_ratio,
                video_duration_sec: 2.5,
                confidence: 0.9,
                feature_reliability: BTreeMap::new(),
                predicted_label: String::new(),
                detailed_biomechanics: Vec::new(),
            },
        }
    }

    /// Set the swing identifier
    #[must_use]
    pub fn swing_id(mut self, swing_id: Uuid) -> Self {
        self.measurement.swing_id = Some(swing_id);
        self
    }

    /// Set the recording timestamp
    #[must_use]
    pub fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.measurement.recorded_at = Some(recorded_at);
        self
    }

    /// Set the shoulder tilt (degrees)
    #[must_use]
    pub fn shoulder_tilt_deg(mut self, value: f64) -> Self {
        self.measurement.shoulder_tilt_deg = value;
        self
    }

    /// Set the swing plane angle (degrees)
    #[must_use]
    pub fn plane_angle_deg(mut self, value: f64) -> Self {
        self.measurement.plane_angle_deg = value;
        self
    }

    /// Set the clip duration (seconds)
    #[must_use]
    pub fn video_duration_sec(mut self, value: f64) -> Self {
        self.measurement.video_duration_sec = value;
        self
    }

    /// Set the model confidence
    #[must_use]
    pub fn confidence(mut self, value: f64) -> Self {
        self.measurement.confidence = value;
        self
    }

    /// Set one reliability score
    #[must_use]
    pub fn reliability(mut self, key: ReliabilityKey, value: f64) -> Self {
        self.measurement
            .feature_reliability
            .insert(key.as_str().to_owned(), value);
        self
    }

    /// Set the predicted label
    #[must_use]
    pub fn predicted_label(mut self, label: impl Into<String>) -> Self {
        self.measurement.predicted_label = label.into();
        self
    }

    /// Append a detailed biomechanics entry
    #[must_use]
    pub fn detail(mut self, name: impl Into<String>, current_value: f64) -> Self {
        self.measurement
            .detailed_biomechanics
            .push(BiomechanicMeasurement {
                name: name.into(),
                current_value,
            });
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> MeasurementSet {
        self.measurement
    }
}
