// ABOUTME: Main library entry point for the Yachai wellness intelligence engine
// ABOUTME: Personalized metric ranges, temporal pattern detection, and coaching recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

#![deny(unsafe_code)]

//! # Yachai Intelligence
//!
//! The analysis engine behind the Yachai wellness-coaching platform
//! (mood/emotion tracking, skin analysis, daily coaching). The engine turns
//! a user's historical metric readings into personalized ranges, recurring
//! temporal patterns, adaptive thresholds, and Italian-language coaching
//! messages.
//!
//! Every operation is a deterministic, synchronous computation over the
//! in-memory history supplied by the caller: no I/O, no shared state, no
//! persistence. Histories live in the backing store owned by the
//! surrounding application; this crate only reads the slices it is given.
//!
//! ## Modules
//!
//! - **Models**: value objects shared across the engine (profiles, ranges,
//!   patterns, thresholds)
//! - **Metrics**: the tracked metric kinds and their default ranges
//! - **Personalization**: per-user statistical ranges and adaptive
//!   thresholds
//! - **Pattern detection**: daily, weekly and seasonal recurrences
//! - **Insights**: trend messages shown to the user
//! - **Recommendation engine**: the daily-coach surface and the wellness
//!   suggestion catalog
//! - **Coach context**: the context block handed to the voice agent
//!
//! ## Example
//!
//! ```rust
//! use uuid::Uuid;
//! use yachai_intelligence::PersonalizationEngine;
//!
//! let engine = PersonalizationEngine::new();
//! let history = [62.0, 58.0, 70.0, 65.0, 60.0];
//! let range = engine.personalized_range(Uuid::new_v4(), "hydration", &history, None);
//! assert!(range.min <= range.optimal && range.optimal <= range.max);
//! ```

/// Context block assembly for the voice coaching agent
pub mod coach_context;

/// Typed, validated, environment-overridable analysis parameters
pub mod config;

/// Trend messages and their fixed fallback texts
pub mod insights;

/// Tracked metric kinds and default range lookup
pub mod metrics;

/// Value objects shared across the engine
pub mod models;

/// Daily, weekly and seasonal pattern detectors
pub mod pattern_detection;

/// Personalized ranges, profile adjustments, adaptive thresholds
pub mod personalization;

/// Daily coach recommendations and the wellness suggestion catalog
pub mod recommendation_engine;

/// Named constants used across the analysis modules
pub mod wellness_constants;

pub use coach_context::{CoachContextBuilder, EmotionContext, SkinContext};
pub use config::{PersonalizationConfig, PersonalizationConfigError};
pub use insights::trend_message;
pub use metrics::{default_range_for, MetricKind, UnknownMetric};
pub use models::{
    AdaptiveThresholds, MedicalCondition, MetricSample, PatternInfo, PatternType,
    PersonalizedRange, SkinType, ThresholdBands, UserProfile,
};
pub use pattern_detection::PatternDetector;
pub use personalization::{PersonalizationEngine, ProfileAdjustments};
pub use recommendation_engine::{
    score_color, wellness_catalog, CoachRecommendation, DailyCoach, MetricHistory, MetricStatus,
    RecommendationPriority, SuggestionCategory, SuggestionDifficulty, WellnessSuggestion,
};
