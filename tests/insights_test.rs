// ABOUTME: Unit tests for trend message generation
// ABOUTME: Pins message templates, rounding, and the first-measurement and no-baseline branches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use yachai_intelligence::insights::{FIRST_MEASUREMENT_MESSAGE, NO_BASELINE_MESSAGE};
use yachai_intelligence::{trend_message, PersonalizedRange};

fn range_with_average(personal_average: f64) -> PersonalizedRange {
    PersonalizedRange {
        min: 40.0,
        max: 60.0,
        optimal: 50.0,
        personal_average,
        standard_deviation: 5.0,
    }
}

#[test]
fn test_empty_history_returns_first_measurement_message() {
    let message = trend_message(55.0, &range_with_average(50.0), &[]);
    assert_eq!(message, FIRST_MEASUREMENT_MESSAGE);
}

#[test]
fn test_upward_trend_message() {
    let message = trend_message(55.0, &range_with_average(50.0), &[1.0, 2.0, 3.0]);
    assert_eq!(message, "↑ 10% sopra la tua media (50)");
}

#[test]
fn test_downward_trend_message() {
    let message = trend_message(45.0, &range_with_average(50.0), &[1.0, 2.0, 3.0]);
    assert_eq!(message, "↓ 10% sotto la tua media (50)");
}

#[test]
fn test_stable_trend_message() {
    let message = trend_message(50.1, &range_with_average(50.0), &[1.0, 2.0, 3.0]);
    assert_eq!(message, "≈ in linea con la tua media (50)");
}

#[test]
fn test_zero_average_returns_no_baseline_message() {
    let message = trend_message(12.0, &range_with_average(0.0), &[0.0, 0.0, 0.0]);
    assert_eq!(message, NO_BASELINE_MESSAGE);
    assert!(!message.contains("inf"));
    assert!(!message.contains("NaN"));
}

#[test]
fn test_average_is_rounded_in_message() {
    // 4.96 over 49.6 is exactly a 10% deviation; the embedded average is
    // rounded to 50.
    let message = trend_message(54.56, &range_with_average(49.6), &[1.0, 2.0]);
    assert_eq!(message, "↑ 10% sopra la tua media (50)");
}
