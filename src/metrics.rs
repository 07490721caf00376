// ABOUTME: Tracked wellness metric kinds with parsing and default range lookup
// ABOUTME: Covers skin scores, the overall score, and the valence/arousal emotion axes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Tracked metric kinds and their default ranges.
//!
//! Metric names arrive from the mobile client as strings; they parse
//! case-insensitively into [`MetricKind`]. Unknown names are not an error
//! at the analysis layer: the default-range lookup falls back to a generic
//! entry so every metric keeps working end to end.
//!
//! All metrics share the 0-100 score scale. The emotion axes (valence,
//! arousal) are normalized onto it by the client before persisting, so one
//! table shape covers skin and emotion alike.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::PersonalizedRange;

/// Raised when a metric name does not match any tracked kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric name: {0}")]
pub struct UnknownMetric(pub String);

/// A wellness metric tracked by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Skin texture score
    Texture,
    /// Skin redness score
    Redness,
    /// Skin hydration score
    Hydration,
    /// Skin oiliness score
    Oiliness,
    /// Overall skin score
    Overall,
    /// Emotional valence, normalized onto the 0-100 scale
    Valence,
    /// Emotional arousal, normalized onto the 0-100 scale
    Arousal,
}

impl MetricKind {
    /// Default range used until a user has enough history of their own.
    #[must_use]
    pub const fn default_range(self) -> PersonalizedRange {
        match self {
            Self::Texture => range(40.0, 60.0, 80.0),
            Self::Redness => range(20.0, 35.0, 50.0),
            Self::Hydration => range(50.0, 70.0, 85.0),
            Self::Oiliness => range(30.0, 50.0, 70.0),
            Self::Overall => range(50.0, 65.0, 80.0),
            Self::Valence => range(40.0, 55.0, 75.0),
            Self::Arousal => range(35.0, 50.0, 65.0),
        }
    }

    /// Italian label used in user-facing text.
    #[must_use]
    pub const fn italian_label(self) -> &'static str {
        match self {
            Self::Texture => "texture",
            Self::Redness => "rossore",
            Self::Hydration => "idratazione",
            Self::Oiliness => "oleosità",
            Self::Overall => "punteggio complessivo",
            Self::Valence => "valence",
            Self::Arousal => "arousal",
        }
    }

    /// Canonical wire name of the metric.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Texture => "texture",
            Self::Redness => "redness",
            Self::Hydration => "hydration",
            Self::Oiliness => "oiliness",
            Self::Overall => "overall",
            Self::Valence => "valence",
            Self::Arousal => "arousal",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "texture" => Ok(Self::Texture),
            "redness" => Ok(Self::Redness),
            "hydration" => Ok(Self::Hydration),
            "oiliness" => Ok(Self::Oiliness),
            "overall" => Ok(Self::Overall),
            "valence" => Ok(Self::Valence),
            "arousal" => Ok(Self::Arousal),
            _ => Err(UnknownMetric(s.to_owned())),
        }
    }
}

/// Fallback range for metric names the platform does not track.
pub const GENERIC_DEFAULT_RANGE: PersonalizedRange = PersonalizedRange {
    min: 30.0,
    max: 70.0,
    optimal: 50.0,
    personal_average: 50.0,
    standard_deviation: 10.0,
};

/// Default range for a metric name, falling back to the generic entry for
/// unknown names.
#[must_use]
pub fn default_range_for(metric: &str) -> PersonalizedRange {
    metric
        .parse::<MetricKind>()
        .map_or(GENERIC_DEFAULT_RANGE, MetricKind::default_range)
}

const fn range(min: f64, optimal: f64, max: f64) -> PersonalizedRange {
    PersonalizedRange {
        min,
        max,
        optimal,
        personal_average: optimal,
        standard_deviation: 10.0,
    }
}
