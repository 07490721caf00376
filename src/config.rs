// ABOUTME: Configuration-driven parameters for the personalization engine replacing magic numbers
// ABOUTME: Provides type-safe, environment-configurable thresholds for all analysis algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Typed, validated, environment-overridable analysis parameters.
//!
//! Defaults reproduce the constants in [`crate::wellness_constants`].
//! Overrides come from `YACHAI_*` environment variables so deployments can
//! retune the engine without a rebuild.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::wellness_constants::{detection, history_requirements, range_bounds, scoring};

/// Configuration errors raised while loading or validating parameters.
#[derive(Debug, Error)]
pub enum PersonalizationConfigError {
    /// A history minimum is zero or otherwise unusable
    #[error("Invalid history requirement: {0}")]
    InvalidHistoryRequirement(String),

    /// A threshold or confidence is outside its valid interval
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// An environment variable held a value that does not parse
    #[error("Invalid value for {variable}: {value}")]
    InvalidEnvValue {
        /// Variable name that failed to parse
        variable: String,
        /// Raw value found in the environment
        value: String,
    },
}

/// Minimum history sizes per analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequirements {
    /// Points needed before a range is personalized instead of defaulted
    pub min_points_for_personalization: usize,

    /// Points needed before the personalization score is non-zero
    pub min_points_for_score: usize,

    /// Timestamped samples needed before any pattern detector runs
    pub min_samples_for_patterns: usize,
}

/// Pattern detector thresholds, bucket minima and reliability tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionThresholds {
    /// Deviation fraction for the daily detector
    pub daily_deviation: f64,

    /// Deviation fraction for the weekly detector
    pub weekly_deviation: f64,

    /// Deviation fraction for the seasonal detector
    pub seasonal_deviation: f64,

    /// Fixed reliability tag of the daily detector
    pub daily_confidence: f64,

    /// Fixed reliability tag of the weekly detector
    pub weekly_confidence: f64,

    /// Fixed reliability tag of the seasonal detector
    pub seasonal_confidence: f64,

    /// Non-empty hour buckets the daily detector needs
    pub min_hourly_buckets: usize,

    /// Non-empty weekday buckets the weekly detector needs
    pub min_weekday_buckets: usize,

    /// Non-empty season buckets the seasonal detector needs
    pub min_season_buckets: usize,
}

/// Range-membership tolerance and score normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeTolerances {
    /// Tolerance applied on each side of a range, as a fraction of its span
    pub membership_tolerance: f64,

    /// Largest per-bound deviation the personalization score normalizes
    /// against
    pub score_scale: f64,
}

/// Complete parameter set for the personalization engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    /// Minimum history sizes
    pub history: HistoryRequirements,

    /// Pattern detector parameters
    pub detection: DetectionThresholds,

    /// Range tolerance and score normalization
    pub tolerances: RangeTolerances,
}

impl Default for PersonalizationConfig {
    fn default() -> Self {
        Self {
            history: HistoryRequirements {
                min_points_for_personalization:
                    history_requirements::MIN_POINTS_FOR_PERSONALIZATION,
                min_points_for_score: history_requirements::MIN_POINTS_FOR_SCORE,
                min_samples_for_patterns: history_requirements::MIN_SAMPLES_FOR_PATTERNS,
            },
            detection: DetectionThresholds {
                daily_deviation: detection::DAILY_DEVIATION_THRESHOLD,
                weekly_deviation: detection::WEEKLY_DEVIATION_THRESHOLD,
                seasonal_deviation: detection::SEASONAL_DEVIATION_THRESHOLD,
                daily_confidence: detection::DAILY_CONFIDENCE,
                weekly_confidence: detection::WEEKLY_CONFIDENCE,
                seasonal_confidence: detection::SEASONAL_CONFIDENCE,
                min_hourly_buckets: detection::MIN_HOURLY_BUCKETS,
                min_weekday_buckets: detection::MIN_WEEKDAY_BUCKETS,
                min_season_buckets: detection::MIN_SEASON_BUCKETS,
            },
            tolerances: RangeTolerances {
                membership_tolerance: range_bounds::DEFAULT_RANGE_TOLERANCE,
                score_scale: scoring::MAX_POSSIBLE_DIFF,
            },
        }
    }
}

impl PersonalizationConfig {
    /// Load the default configuration with `YACHAI_*` environment
    /// overrides applied, then validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if an override value does not parse or the
    /// resulting configuration fails validation.
    pub fn from_environment() -> Result<Self, PersonalizationConfigError> {
        let mut config = Self::default();

        apply_env(
            "YACHAI_MIN_POINTS_FOR_PERSONALIZATION",
            &mut config.history.min_points_for_personalization,
        )?;
        apply_env(
            "YACHAI_MIN_POINTS_FOR_SCORE",
            &mut config.history.min_points_for_score,
        )?;
        apply_env(
            "YACHAI_MIN_SAMPLES_FOR_PATTERNS",
            &mut config.history.min_samples_for_patterns,
        )?;
        apply_env(
            "YACHAI_DAILY_DEVIATION_THRESHOLD",
            &mut config.detection.daily_deviation,
        )?;
        apply_env(
            "YACHAI_WEEKLY_DEVIATION_THRESHOLD",
            &mut config.detection.weekly_deviation,
        )?;
        apply_env(
            "YACHAI_SEASONAL_DEVIATION_THRESHOLD",
            &mut config.detection.seasonal_deviation,
        )?;
        apply_env(
            "YACHAI_RANGE_TOLERANCE",
            &mut config.tolerances.membership_tolerance,
        )?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every parameter interval.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter outside its valid
    /// interval.
    pub fn validate(&self) -> Result<(), PersonalizationConfigError> {
        if self.history.min_points_for_personalization == 0 {
            return Err(PersonalizationConfigError::InvalidHistoryRequirement(
                "min_points_for_personalization must be at least 1".to_owned(),
            ));
        }
        if self.history.min_points_for_score == 0 {
            return Err(PersonalizationConfigError::InvalidHistoryRequirement(
                "min_points_for_score must be at least 1".to_owned(),
            ));
        }
        if self.history.min_samples_for_patterns == 0 {
            return Err(PersonalizationConfigError::InvalidHistoryRequirement(
                "min_samples_for_patterns must be at least 1".to_owned(),
            ));
        }
        if self.detection.min_hourly_buckets == 0
            || self.detection.min_weekday_buckets == 0
            || self.detection.min_season_buckets == 0
        {
            return Err(PersonalizationConfigError::InvalidHistoryRequirement(
                "bucket minima must be at least 1".to_owned(),
            ));
        }

        for (name, value) in [
            ("daily_deviation", self.detection.daily_deviation),
            ("weekly_deviation", self.detection.weekly_deviation),
            ("seasonal_deviation", self.detection.seasonal_deviation),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(PersonalizationConfigError::InvalidThreshold(format!(
                    "{name} must be within (0, 1), got {value}"
                )));
            }
        }

        for (name, value) in [
            ("daily_confidence", self.detection.daily_confidence),
            ("weekly_confidence", self.detection.weekly_confidence),
            ("seasonal_confidence", self.detection.seasonal_confidence),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(PersonalizationConfigError::InvalidThreshold(format!(
                    "{name} must be within (0, 1], got {value}"
                )));
            }
        }

        if self.tolerances.membership_tolerance < 0.0 {
            return Err(PersonalizationConfigError::InvalidThreshold(format!(
                "membership_tolerance must be non-negative, got {}",
                self.tolerances.membership_tolerance
            )));
        }
        if self.tolerances.score_scale <= 0.0 {
            return Err(PersonalizationConfigError::InvalidThreshold(format!(
                "score_scale must be positive, got {}",
                self.tolerances.score_scale
            )));
        }

        Ok(())
    }
}

fn apply_env<T: FromStr>(
    variable: &str,
    target: &mut T,
) -> Result<(), PersonalizationConfigError> {
    if let Ok(raw) = std::env::var(variable) {
        *target = raw
            .parse()
            .map_err(|_| PersonalizationConfigError::InvalidEnvValue {
                variable: variable.to_owned(),
                value: raw.clone(),
            })?;
        debug!(variable, value = %raw, "applied environment override");
    }
    Ok(())
}
