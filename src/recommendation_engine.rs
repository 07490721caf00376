// ABOUTME: Daily coach recommendations composed from personalized ranges and trend messages
// ABOUTME: Carries the wellness suggestion catalog and the color-by-score lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! The daily-coach surface.
//!
//! Pure composition over the personalization engine: for every metric
//! history the caller fetched, compare the latest reading against the
//! personalized range built from the earlier readings, derive a status
//! band and a priority, and attach the trend message plus a catalog
//! suggestion. The caller renders the result; nothing here talks to the
//! backend.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::PersonalizationConfig;
use crate::insights::trend_message;
use crate::metrics::MetricKind;
use crate::personalization::PersonalizationEngine;
use crate::wellness_constants::score_colors;

/// Category of a wellness suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    /// Mind & body practices
    MindBody,
    /// Nutrition habits
    Nutrition,
}

/// Difficulty of a wellness suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionDifficulty {
    /// Easy to adopt
    Facile,
    /// Requires some commitment
    Media,
    /// Demanding practice
    Impegnativa,
}

/// One entry of the wellness suggestion catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessSuggestion {
    /// Title shown to the user
    pub title: String,
    /// Catalog category
    pub category: SuggestionCategory,
    /// Duration in minutes; `None` means a continuous habit
    pub duration_minutes: Option<u32>,
    /// Difficulty tag
    pub difficulty: SuggestionDifficulty,
    /// Italian-language description
    pub description: String,
}

/// The fixed wellness suggestion catalog offered by the coach.
#[must_use]
pub fn wellness_catalog() -> Vec<WellnessSuggestion> {
    vec![
        suggestion(
            "Respirazione consapevole",
            SuggestionCategory::MindBody,
            Some(5),
            "Pratica la respirazione consapevole per ridurre lo stress",
        ),
        suggestion(
            "Camminata all'aperto",
            SuggestionCategory::MindBody,
            Some(15),
            "Una camminata all'aperto per migliorare umore e circolazione",
        ),
        suggestion(
            "Stretching leggero",
            SuggestionCategory::MindBody,
            Some(10),
            "Allungamenti per collo e spalle per sciogliere la tensione",
        ),
        suggestion(
            "Idratazione",
            SuggestionCategory::Nutrition,
            None,
            "Bevi acqua con costanza per una pelle luminosa",
        ),
        suggestion(
            "Pausa tè verde",
            SuggestionCategory::Nutrition,
            Some(5),
            "Una pausa con tè verde per antiossidanti e calma",
        ),
    ]
}

fn suggestion(
    title: &str,
    category: SuggestionCategory,
    duration_minutes: Option<u32>,
    description: &str,
) -> WellnessSuggestion {
    WellnessSuggestion {
        title: title.to_owned(),
        category,
        duration_minutes,
        difficulty: SuggestionDifficulty::Facile,
        description: description.to_owned(),
    }
}

/// Hex color for a 0-100 score, the app's color-by-score lookup.
#[must_use]
pub fn score_color(value: f64) -> &'static str {
    if value < score_colors::LOW_SCORE_CEILING {
        score_colors::LOW_COLOR
    } else if value < score_colors::MEDIUM_SCORE_CEILING {
        score_colors::MEDIUM_COLOR
    } else {
        score_colors::HIGH_COLOR
    }
}

/// Where the latest reading sits relative to the personalized bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    /// Below the personalized minimum
    BelowRange,
    /// Inside the personalized bounds
    InRange,
    /// Above the personalized maximum
    AboveRange,
}

/// Urgency of a coach recommendation. Ordering is by urgency, most urgent
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Reading is outside even the tolerant range
    High,
    /// Reading is in range but under the optimal value
    Medium,
    /// Reading is at or above the optimal value
    Low,
}

/// Metric history fetched by the caller for the daily coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricHistory {
    /// Metric name as stored by the client
    pub metric: String,
    /// Readings in chronological order, the latest last
    pub values: Vec<f64>,
}

/// One card of the daily coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachRecommendation {
    /// Metric the card is about
    pub metric: String,
    /// The latest reading
    pub current_value: f64,
    /// Position relative to the personalized bounds
    pub status: MetricStatus,
    /// Urgency of the card
    pub priority: RecommendationPriority,
    /// Hex color for the reading
    pub color: String,
    /// Italian trend message for the reading
    pub message: String,
    /// Catalog suggestion matched to the metric, when one applies
    pub suggestion: Option<WellnessSuggestion>,
}

/// Assembles the daily coach cards for a user.
#[derive(Debug, Clone, Default)]
pub struct DailyCoach {
    engine: PersonalizationEngine,
}

impl DailyCoach {
    /// Create a coach with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: PersonalizationEngine::new(),
        }
    }

    /// Create a coach with a custom configuration.
    #[must_use]
    pub const fn with_config(config: PersonalizationConfig) -> Self {
        Self {
            engine: PersonalizationEngine::with_config(config),
        }
    }

    /// Build one recommendation card per metric history, most urgent
    /// first. Histories without any reading are skipped.
    #[must_use]
    pub fn daily_recommendations(
        &self,
        user_id: Uuid,
        histories: &[MetricHistory],
    ) -> Vec<CoachRecommendation> {
        let mut recommendations: Vec<CoachRecommendation> = histories
            .iter()
            .filter_map(|history| self.recommendation_for(user_id, history))
            .collect();
        recommendations.sort_by_key(|recommendation| recommendation.priority);
        recommendations
    }

    fn recommendation_for(
        &self,
        user_id: Uuid,
        history: &MetricHistory,
    ) -> Option<CoachRecommendation> {
        let (&current, baseline) = history.values.split_last()?;

        let range = self
            .engine
            .personalized_range(user_id, &history.metric, baseline, None);

        let status = if current < range.min {
            MetricStatus::BelowRange
        } else if current > range.max {
            MetricStatus::AboveRange
        } else {
            MetricStatus::InRange
        };

        let priority = if self.engine.is_in_personalized_range(current, &range) {
            if current < range.optimal {
                RecommendationPriority::Medium
            } else {
                RecommendationPriority::Low
            }
        } else {
            RecommendationPriority::High
        };

        debug!(
            %user_id,
            metric = %history.metric,
            current,
            ?status,
            "assembled daily coach card"
        );

        Some(CoachRecommendation {
            metric: history.metric.clone(),
            current_value: current,
            status,
            priority,
            color: score_color(current).to_owned(),
            message: trend_message(current, &range, baseline),
            suggestion: suggestion_for(&history.metric),
        })
    }
}

/// Catalog suggestion matched to a metric, when one applies.
fn suggestion_for(metric: &str) -> Option<WellnessSuggestion> {
    let kind = metric.parse::<MetricKind>().ok()?;
    let catalog = wellness_catalog();
    let title = match kind {
        MetricKind::Hydration => "Idratazione",
        MetricKind::Arousal => "Respirazione consapevole",
        MetricKind::Valence => "Camminata all'aperto",
        MetricKind::Overall => "Pausa tè verde",
        MetricKind::Redness => "Stretching leggero",
        MetricKind::Texture | MetricKind::Oiliness => return None,
    };
    catalog.into_iter().find(|entry| entry.title == title)
}
