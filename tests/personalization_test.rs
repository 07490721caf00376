// ABOUTME: Unit tests for personalized range computation and profile adjustment rules
// ABOUTME: Pins quartile behavior, default fallbacks, overwrite semantics, and score bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use uuid::Uuid;
use yachai_intelligence::metrics::GENERIC_DEFAULT_RANGE;
use yachai_intelligence::{
    MedicalCondition, MetricKind, PersonalizationEngine, ProfileAdjustments, SkinType, UserProfile,
};

fn engine() -> PersonalizationEngine {
    PersonalizationEngine::new()
}

fn user() -> Uuid {
    Uuid::new_v4()
}

#[test]
fn test_quartiles_independent_of_input_order() {
    let shuffled = [80.0, 10.0, 30.0, 70.0, 20.0, 60.0, 40.0, 50.0];
    let sorted = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];

    let from_shuffled = engine().personalized_range(user(), "hydration", &shuffled, None);
    let from_sorted = engine().personalized_range(user(), "hydration", &sorted, None);

    assert_eq!(from_shuffled, from_sorted);
    assert!((from_shuffled.min - 30.0).abs() < f64::EPSILON);
    assert!((from_shuffled.optimal - 50.0).abs() < f64::EPSILON);
    assert!((from_shuffled.max - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_small_history_returns_default_range() {
    let default = MetricKind::Hydration.default_range();

    for history in [vec![], vec![55.0], vec![55.0, 60.0]] {
        let range = engine().personalized_range(user(), "hydration", &history, None);
        assert_eq!(range, default);
    }
}

#[test]
fn test_unknown_metric_small_history_uses_generic_default() {
    let range = engine().personalized_range(user(), "glow_index", &[42.0, 44.0], None);
    assert_eq!(range, GENERIC_DEFAULT_RANGE);
}

#[test]
fn test_population_standard_deviation() {
    let range = engine().personalized_range(user(), "overall", &[10.0, 20.0, 30.0], None);

    assert!((range.personal_average - 20.0).abs() < f64::EPSILON);
    let expected = (200.0_f64 / 3.0).sqrt();
    assert!((range.standard_deviation - expected).abs() < 1e-12);
}

#[test]
fn test_skin_type_rule_overrides_age_rule_for_same_metric() {
    let mut profile = UserProfile::new(user());
    profile.age = Some(22);
    profile.skin_type = Some(SkinType::Dry);

    let adjustments = PersonalizationEngine::profile_adjustments("hydration", &profile);

    // The dry-skin rule replaces the young-age rule wholesale; the deltas
    // are never summed.
    assert_eq!(
        adjustments,
        ProfileAdjustments {
            min: -10.0,
            max: 5.0,
            optimal: -5.0
        }
    );
}

#[test]
fn test_age_rule_applies_when_no_later_rule_matches() {
    let mut profile = UserProfile::new(user());
    profile.age = Some(22);

    let adjustments = PersonalizationEngine::profile_adjustments("hydration", &profile);

    assert_eq!(
        adjustments,
        ProfileAdjustments {
            min: 5.0,
            max: 5.0,
            optimal: 5.0
        }
    );
}

#[test]
fn test_rosacea_rule_overrides_sensitive_skin_for_redness() {
    let mut profile = UserProfile::new(user());
    profile.skin_type = Some(SkinType::Sensitive);
    profile.medical_conditions = vec![MedicalCondition::Rosacea];

    let adjustments = PersonalizationEngine::profile_adjustments("redness", &profile);

    assert_eq!(
        adjustments,
        ProfileAdjustments {
            min: 10.0,
            max: 20.0,
            optimal: 15.0
        }
    );
}

#[test]
fn test_unknown_metric_has_no_adjustments() {
    let mut profile = UserProfile::new(user());
    profile.age = Some(22);
    profile.skin_type = Some(SkinType::Dry);

    let adjustments = PersonalizationEngine::profile_adjustments("glow_index", &profile);

    assert_eq!(adjustments, ProfileAdjustments::default());
}

#[test]
fn test_adjusted_range_clamped_to_score_scale() {
    let mut profile = UserProfile::new(user());
    profile.age = Some(22);

    // Quartiles 90/97/99; the young-age texture rule pushes every bound up
    // by 5, so max hits the 100 ceiling and optimal is clamped onto it.
    let range = engine().personalized_range(user(), "texture", &[90.0, 97.0, 99.0], Some(&profile));

    assert!((range.min - 95.0).abs() < f64::EPSILON);
    assert!((range.max - 100.0).abs() < f64::EPSILON);
    assert!((range.optimal - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_adjusted_range_clamped_to_score_floor() {
    let mut profile = UserProfile::new(user());
    profile.skin_type = Some(SkinType::Dry);

    // Quartiles 5/10/12; the dry-skin oiliness rule pulls min below zero.
    let range = engine().personalized_range(user(), "oiliness", &[5.0, 10.0, 12.0], Some(&profile));

    assert!(range.min.abs() < f64::EPSILON);
    assert!((range.max - 7.0).abs() < f64::EPSILON);
    assert!(range.optimal >= range.min && range.optimal <= range.max);
}

#[test]
fn test_membership_boundary_with_default_tolerance() {
    let range = yachai_intelligence::PersonalizedRange {
        min: 40.0,
        max: 60.0,
        optimal: 50.0,
        personal_average: 50.0,
        standard_deviation: 5.0,
    };
    let engine = engine();

    assert!(engine.is_in_personalized_range(38.0, &range));
    assert!(!engine.is_in_personalized_range(37.9, &range));
    assert!(engine.is_in_personalized_range(62.0, &range));
    assert!(!engine.is_in_personalized_range(62.1, &range));
}

#[test]
fn test_score_zero_when_personalized_matches_default() {
    // Quartiles 30/50/70 reproduce the generic default range exactly.
    let history = [20.0, 30.0, 50.0, 70.0, 80.0];
    let score = engine().personalization_score(user(), "glow_index", &history);
    assert!(score.abs() < f64::EPSILON);
}

#[test]
fn test_score_clamped_for_extreme_history() {
    let history = [0.0; 10];
    let score = engine().personalization_score(user(), "hydration", &history);
    assert!((score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_score_zero_below_minimum_history() {
    let history = [10.0, 20.0, 30.0, 40.0];
    let score = engine().personalization_score(user(), "hydration", &history);
    assert!(score.abs() < f64::EPSILON);
}

#[test]
fn test_score_always_within_unit_interval() {
    let histories: [&[f64]; 4] = [
        &[55.0; 8],
        &[0.0, 100.0, 0.0, 100.0, 0.0, 100.0],
        &[12.5, 13.0, 11.8, 12.2, 12.9, 13.3, 12.0],
        &[99.0, 98.5, 97.0, 99.5, 98.0],
    ];

    for history in histories {
        for metric in ["texture", "redness", "valence", "glow_index"] {
            let score = engine().personalization_score(user(), metric, history);
            assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
        }
    }
}
