// ABOUTME: Unit tests for metric kind parsing and the default range table
// ABOUTME: Pins case-insensitive parsing, unknown-name fallback, and table invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use yachai_intelligence::metrics::GENERIC_DEFAULT_RANGE;
use yachai_intelligence::{default_range_for, MetricKind};

const ALL_KINDS: [MetricKind; 7] = [
    MetricKind::Texture,
    MetricKind::Redness,
    MetricKind::Hydration,
    MetricKind::Oiliness,
    MetricKind::Overall,
    MetricKind::Valence,
    MetricKind::Arousal,
];

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(
        "Hydration".parse::<MetricKind>().unwrap(),
        MetricKind::Hydration
    );
    assert_eq!(
        "VALENCE".parse::<MetricKind>().unwrap(),
        MetricKind::Valence
    );
}

#[test]
fn test_unknown_name_error_carries_input() {
    let error = "glow_index".parse::<MetricKind>().unwrap_err();
    assert_eq!(error.0, "glow_index");
}

#[test]
fn test_display_round_trips_through_parse() {
    for kind in ALL_KINDS {
        assert_eq!(kind.to_string().parse::<MetricKind>().unwrap(), kind);
    }
}

#[test]
fn test_default_table_invariants() {
    for kind in ALL_KINDS {
        let range = kind.default_range();
        assert!(range.min < range.optimal, "{kind}: min not below optimal");
        assert!(range.optimal < range.max, "{kind}: optimal not below max");
        assert!(
            (range.personal_average - range.optimal).abs() < f64::EPSILON,
            "{kind}: default average should sit on the optimal value"
        );
        assert!((range.standard_deviation - 10.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_hydration_default_row() {
    let range = MetricKind::Hydration.default_range();
    assert!((range.min - 50.0).abs() < f64::EPSILON);
    assert!((range.optimal - 70.0).abs() < f64::EPSILON);
    assert!((range.max - 85.0).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_name_falls_back_to_generic_range() {
    assert_eq!(default_range_for("glow_index"), GENERIC_DEFAULT_RANGE);
    assert!((GENERIC_DEFAULT_RANGE.min - 30.0).abs() < f64::EPSILON);
    assert!((GENERIC_DEFAULT_RANGE.max - 70.0).abs() < f64::EPSILON);
    assert!((GENERIC_DEFAULT_RANGE.optimal - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_known_name_uses_table_row() {
    assert_eq!(
        default_range_for("redness"),
        MetricKind::Redness.default_range()
    );
}
