// ABOUTME: Personalized range computation from metric history with profile adjustment rules
// ABOUTME: Also derives adaptive thresholds, range membership, and the personalization score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Per-user personalized ranges and adaptive thresholds.
//!
//! The engine is stateless between calls: all memory is the history slice
//! the caller passes in. Quartiles use the nearest-rank method (index
//! `floor(n * q)` into the ascending sort, no interpolation).

#![allow(clippy::cast_precision_loss)] // Safe: history lengths are small
#![allow(clippy::cast_possible_truncation)] // Safe: quantile indices bounded by len
#![allow(clippy::cast_sign_loss)] // Safe: quantile products are non-negative

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::PersonalizationConfig;
use crate::metrics::{default_range_for, MetricKind};
use crate::models::{
    AdaptiveThresholds, MedicalCondition, PersonalizedRange, SkinType, ThresholdBands, UserProfile,
};
use crate::wellness_constants::range_bounds::{SCORE_CEILING, SCORE_FLOOR};

/// Deltas applied to the raw quartile bounds for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileAdjustments {
    /// Delta applied to the lower bound
    pub min: f64,
    /// Delta applied to the upper bound
    pub max: f64,
    /// Delta applied to the optimal value
    pub optimal: f64,
}

const fn adjust(min: f64, max: f64, optimal: f64) -> ProfileAdjustments {
    ProfileAdjustments { min, max, optimal }
}

/// Personalization engine: computes per-user ranges, thresholds and scores.
///
/// Holds only immutable configuration; every method is a pure function of
/// its arguments.
#[derive(Debug, Clone, Default)]
pub struct PersonalizationEngine {
    config: PersonalizationConfig,
}

impl PersonalizationEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PersonalizationConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    #[must_use]
    pub const fn with_config(config: PersonalizationConfig) -> Self {
        Self { config }
    }

    /// Compute the personalized range for a user/metric pair.
    ///
    /// Falls back to the metric's default range when the history holds
    /// fewer than the configured minimum of points. Without a profile the
    /// bounds are the raw 25th/50th/75th nearest-rank percentiles; with a
    /// profile the adjustment rule table shifts them, clamping the result
    /// onto the 0-100 score scale and the optimal value into the adjusted
    /// bounds.
    #[must_use]
    pub fn personalized_range(
        &self,
        user_id: Uuid,
        metric: &str,
        history: &[f64],
        profile: Option<&UserProfile>,
    ) -> PersonalizedRange {
        if history.len() < self.config.history.min_points_for_personalization {
            debug!(
                %user_id,
                metric,
                points = history.len(),
                "history too short for personalization, using default range"
            );
            return default_range_for(metric);
        }

        let mut sorted = history.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = nearest_rank(&sorted, 0.25);
        let q2 = nearest_rank(&sorted, 0.5);
        let q3 = nearest_rank(&sorted, 0.75);

        let personal_average = mean(history);
        let standard_deviation = population_std_dev(history, personal_average);

        match profile {
            None => PersonalizedRange {
                min: q1,
                max: q3,
                optimal: q2,
                personal_average,
                standard_deviation,
            },
            Some(profile) => {
                let deltas = Self::profile_adjustments(metric, profile);
                let min = (q1 + deltas.min).max(SCORE_FLOOR);
                let max = (q3 + deltas.max).min(SCORE_CEILING);
                let optimal = (q2 + deltas.optimal).max(min).min(max);
                PersonalizedRange {
                    min,
                    max,
                    optimal,
                    personal_average,
                    standard_deviation,
                }
            }
        }
    }

    /// Adjustment deltas for a metric under the given profile.
    ///
    /// Rules fire in a fixed order and each match REPLACES the whole
    /// delta triple rather than accumulating onto it: a profile matching
    /// several rules for the same metric keeps only the last match. Tests
    /// pin this overwrite behavior.
    #[must_use]
    pub fn profile_adjustments(metric: &str, profile: &UserProfile) -> ProfileAdjustments {
        let mut adjustments = ProfileAdjustments::default();
        let Ok(metric) = metric.parse::<MetricKind>() else {
            return adjustments;
        };

        if let Some(age) = profile.age {
            if age < 25 && metric == MetricKind::Texture {
                adjustments = adjust(5.0, 5.0, 5.0);
            }
            if age < 25 && metric == MetricKind::Hydration {
                adjustments = adjust(5.0, 5.0, 5.0);
            }
            if age > 50 && metric == MetricKind::Texture {
                adjustments = adjust(-5.0, -5.0, -5.0);
            }
        }

        if let Some(skin_type) = profile.skin_type {
            if skin_type == SkinType::Dry && metric == MetricKind::Hydration {
                adjustments = adjust(-10.0, 5.0, -5.0);
            }
            if skin_type == SkinType::Dry && metric == MetricKind::Oiliness {
                adjustments = adjust(-15.0, -5.0, -10.0);
            }
            if skin_type == SkinType::Oily && metric == MetricKind::Oiliness {
                adjustments = adjust(5.0, 15.0, 10.0);
            }
            if skin_type == SkinType::Oily && metric == MetricKind::Hydration {
                adjustments = adjust(5.0, 10.0, 5.0);
            }
            if skin_type == SkinType::Sensitive && metric == MetricKind::Redness {
                adjustments = adjust(5.0, 10.0, 5.0);
            }
        }

        if profile.has_condition(&MedicalCondition::Rosacea) && metric == MetricKind::Redness {
            adjustments = adjust(10.0, 20.0, 15.0);
        }
        if profile.has_condition(&MedicalCondition::Eczema) && metric == MetricKind::Texture {
            adjustments = adjust(-10.0, -5.0, -7.0);
        }
        if profile.has_condition(&MedicalCondition::Eczema) && metric == MetricKind::Redness {
            adjustments = adjust(5.0, 15.0, 10.0);
        }

        adjustments
    }

    /// Compare the personalized range against the metric's default range
    /// as low/medium/high threshold bands.
    #[must_use]
    pub fn adaptive_thresholds(
        &self,
        user_id: Uuid,
        metric: &str,
        history: &[f64],
        profile: Option<&UserProfile>,
    ) -> AdaptiveThresholds {
        let personalized_range = self.personalized_range(user_id, metric, history, profile);
        let default_range = default_range_for(metric);

        let personalized = bands_of(personalized_range);
        let default = bands_of(default_range);
        let difference = ThresholdBands {
            low: personalized.low - default.low,
            medium: personalized.medium - default.medium,
            high: personalized.high - default.high,
        };

        AdaptiveThresholds {
            metric: metric.to_owned(),
            personalized,
            default,
            difference,
        }
    }

    /// Whether a value falls inside the range widened by the configured
    /// tolerance on each side.
    #[must_use]
    pub fn is_in_personalized_range(&self, value: f64, range: &PersonalizedRange) -> bool {
        Self::is_in_range_with_tolerance(value, range, self.config.tolerances.membership_tolerance)
    }

    /// Whether a value falls inside the range widened by the given
    /// tolerance (a fraction of the range span) on each side. Bounds are
    /// inclusive.
    #[must_use]
    pub fn is_in_range_with_tolerance(
        value: f64,
        range: &PersonalizedRange,
        tolerance: f64,
    ) -> bool {
        let span = range.max - range.min;
        let lower = range.min - tolerance * span;
        let upper = range.max + tolerance * span;
        (lower..=upper).contains(&value)
    }

    /// How far the personalized range has moved away from the default
    /// range, normalized into [0, 1].
    ///
    /// Returns 0 until the history holds the configured minimum of points.
    #[must_use]
    pub fn personalization_score(&self, user_id: Uuid, metric: &str, history: &[f64]) -> f64 {
        if history.len() < self.config.history.min_points_for_score {
            debug!(
                %user_id,
                metric,
                points = history.len(),
                "history too short for a personalization score"
            );
            return 0.0;
        }

        let personalized = self.personalized_range(user_id, metric, history, None);
        let default = default_range_for(metric);

        let average_diff = ((personalized.min - default.min).abs()
            + (personalized.max - default.max).abs()
            + (personalized.optimal - default.optimal).abs())
            / 3.0;

        (average_diff / self.config.tolerances.score_scale).max(0.0).min(1.0)
    }
}

const fn bands_of(range: PersonalizedRange) -> ThresholdBands {
    ThresholdBands {
        low: range.min,
        medium: range.optimal,
        high: range.max,
    }
}

fn nearest_rank(sorted: &[f64], quantile: f64) -> f64 {
    sorted[(sorted.len() as f64 * quantile) as usize]
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
