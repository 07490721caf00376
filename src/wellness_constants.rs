// ABOUTME: Named constants used across the wellness analysis modules
// ABOUTME: History minima, detection thresholds, detector confidences, and score bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Named constants used across the analysis modules.
//!
//! These are the engine's fixed operating points. Runtime-tunable copies
//! live in [`crate::config::PersonalizationConfig`], whose defaults are
//! drawn from here.

/// Minimum history sizes below which analysis falls back to defaults
pub mod history_requirements {
    /// Points needed before a range is personalized instead of defaulted
    pub const MIN_POINTS_FOR_PERSONALIZATION: usize = 3;

    /// Points needed before the personalization score is non-zero
    pub const MIN_POINTS_FOR_SCORE: usize = 5;

    /// Timestamped samples needed before any pattern detector runs
    pub const MIN_SAMPLES_FOR_PATTERNS: usize = 7;
}

/// Pattern detection thresholds and reliability tags
pub mod detection {
    /// Fraction of the overall average an hourly bucket must deviate by
    pub const DAILY_DEVIATION_THRESHOLD: f64 = 0.10;

    /// Fraction of the overall average a weekday bucket must deviate by
    pub const WEEKLY_DEVIATION_THRESHOLD: f64 = 0.15;

    /// Fraction of the overall average a season bucket must deviate by
    pub const SEASONAL_DEVIATION_THRESHOLD: f64 = 0.20;

    /// Fixed reliability tag of the daily detector
    pub const DAILY_CONFIDENCE: f64 = 0.7;

    /// Fixed reliability tag of the weekly detector
    pub const WEEKLY_CONFIDENCE: f64 = 0.6;

    /// Fixed reliability tag of the seasonal detector
    pub const SEASONAL_CONFIDENCE: f64 = 0.5;

    /// Non-empty hour buckets the daily detector needs
    pub const MIN_HOURLY_BUCKETS: usize = 3;

    /// Non-empty weekday buckets the weekly detector needs
    pub const MIN_WEEKDAY_BUCKETS: usize = 3;

    /// Non-empty season buckets the seasonal detector needs.
    /// Two seasons of data are enough; a full year rarely exists yet.
    pub const MIN_SEASON_BUCKETS: usize = 2;
}

/// Bounds of the metric score scale and range-membership tolerance
pub mod range_bounds {
    /// Floor of every metric score
    pub const SCORE_FLOOR: f64 = 0.0;

    /// Ceiling of every metric score
    pub const SCORE_CEILING: f64 = 100.0;

    /// Default tolerance applied on each side of a personalized range,
    /// as a fraction of the range span
    pub const DEFAULT_RANGE_TOLERANCE: f64 = 0.1;
}

/// Personalization score parameters
pub mod scoring {
    /// Largest per-bound deviation from the default range the score
    /// normalizes against
    pub const MAX_POSSIBLE_DIFF: f64 = 50.0;
}

/// Color-by-score lookup bounds used by the daily coach
pub mod score_colors {
    /// Scores below this render red
    pub const LOW_SCORE_CEILING: f64 = 40.0;

    /// Scores below this (and at or above the low ceiling) render amber
    pub const MEDIUM_SCORE_CEILING: f64 = 70.0;

    /// Red hex code for low scores
    pub const LOW_COLOR: &str = "#e74c3c";

    /// Amber hex code for medium scores
    pub const MEDIUM_COLOR: &str = "#f39c12";

    /// Green hex code for high scores
    pub const HIGH_COLOR: &str = "#2ecc71";
}
