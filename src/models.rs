// ABOUTME: Value objects shared across the wellness intelligence engine
// ABOUTME: User profiles, metric samples, personalized ranges, patterns, and threshold sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Value objects shared across the engine.
//!
//! Everything here is a pure value: constructed fresh per call, never
//! mutated by the engine, never persisted by it. Persistence, if any, is
//! the caller's responsibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Skin type declared in the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    /// Dry skin
    Dry,
    /// Oily skin
    Oily,
    /// Combination skin
    Combination,
    /// Sensitive skin
    Sensitive,
    /// Normal skin
    Normal,
}

/// Medical condition declared in the user's profile.
///
/// Only `Rosacea` and `Eczema` drive adjustment rules today; anything else
/// is carried through as `Other` so caller data is never lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    /// Rosacea diagnosis
    Rosacea,
    /// Eczema diagnosis
    Eczema,
    /// Any other caller-supplied condition tag
    Other(String),
}

/// Per-user profile supplied by the caller, read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque user identifier, pass-through only
    pub user_id: Uuid,
    /// Age in years, drives texture/hydration adjustment rules
    pub age: Option<u32>,
    /// Declared skin type, drives hydration/oiliness/redness adjustments
    pub skin_type: Option<SkinType>,
    /// Declared medical conditions
    pub medical_conditions: Vec<MedicalCondition>,
    /// Lifestyle tag, reserved for future rules
    pub lifestyle: Option<String>,
    /// Preference tags, reserved for future rules
    pub preferences: Vec<String>,
    /// Goal tags, reserved for future rules
    pub goals: Vec<String>,
}

impl UserProfile {
    /// Create an empty profile for the given user.
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Whether the profile declares the given medical condition.
    #[must_use]
    pub fn has_condition(&self, condition: &MedicalCondition) -> bool {
        self.medical_conditions.contains(condition)
    }
}

/// A single timestamped metric reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
    /// The reading, on the metric's 0-100 scale
    pub value: f64,
}

/// Personalized statistical range for one user/metric pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedRange {
    /// Lower bound (25th percentile, profile-adjusted)
    pub min: f64,
    /// Upper bound (75th percentile, profile-adjusted)
    pub max: f64,
    /// Optimal value (median, profile-adjusted, clamped into [min, max])
    pub optimal: f64,
    /// Arithmetic mean of the full history
    pub personal_average: f64,
    /// Population standard deviation of the full history
    pub standard_deviation: f64,
}

/// Category of a detected pattern.
///
/// Only `Temporal` and `Seasonal` are emitted by the current detectors;
/// `Lifestyle` and `Stress` are reserved tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// Hour-of-day or day-of-week recurrence
    Temporal,
    /// Season-of-year recurrence
    Seasonal,
    /// Reserved
    Lifestyle,
    /// Reserved
    Stress,
}

/// A recurring pattern detected in a user's metric history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternInfo {
    /// Pattern category
    pub pattern_type: PatternType,
    /// Italian-language description shown to the user
    pub description: String,
    /// Fixed reliability tag of the emitting detector, not a statistical
    /// measure of the data
    pub confidence: f64,
    /// Whether the pattern carries actionable suggestions
    pub actionable: bool,
    /// One or two short recommendation strings
    pub suggestions: Vec<String>,
}

/// Low/medium/high threshold triple for one range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBands {
    /// Low band boundary (range min)
    pub low: f64,
    /// Medium band boundary (range optimal)
    pub medium: f64,
    /// High band boundary (range max)
    pub high: f64,
}

/// Personalized vs. default threshold comparison for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveThresholds {
    /// Metric name this threshold set applies to
    pub metric: String,
    /// Bands derived from the personalized range
    pub personalized: ThresholdBands,
    /// Bands derived from the metric's default range
    pub default: ThresholdBands,
    /// Elementwise personalized minus default
    pub difference: ThresholdBands,
}
