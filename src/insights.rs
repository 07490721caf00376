// ABOUTME: Trend message generation comparing a reading against the personal average
// ABOUTME: Italian-language templates with explicit first-measurement and no-baseline branches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Trend messages shown next to a fresh reading.
//!
//! The message compares the current value with the user's personal
//! average and reports the rounded percentage deviation. Two branches are
//! explicit rather than emergent: an empty history yields the
//! first-measurement text, and a zero personal average yields the
//! no-baseline text instead of dividing by zero.

#![allow(clippy::float_cmp)] // Safe: exact zero is the no-baseline sentinel

use tracing::debug;

use crate::models::PersonalizedRange;

/// Shown when the history is empty and this is the user's first reading.
pub const FIRST_MEASUREMENT_MESSAGE: &str =
    "Prima misurazione registrata! Continua a monitorare per scoprire i tuoi trend personali.";

/// Shown when the personal average is zero and no deviation can be
/// computed.
pub const NO_BASELINE_MESSAGE: &str =
    "Non ho ancora una media di riferimento per questo valore: continua a registrare le tue misurazioni.";

/// Italian trend message for a reading against the personalized range.
///
/// The history is consulted only to recognize the first-measurement case;
/// the comparison itself uses the range's personal average.
#[must_use]
pub fn trend_message(current: f64, range: &PersonalizedRange, history: &[f64]) -> String {
    if history.is_empty() {
        return FIRST_MEASUREMENT_MESSAGE.to_owned();
    }

    let average = range.personal_average;
    if average == 0.0 {
        debug!(current, "personal average is zero, no baseline for a trend");
        return NO_BASELINE_MESSAGE.to_owned();
    }

    let deviation = ((current - average) / average) * 100.0;
    let rounded = deviation.round();
    let percent = deviation.abs().round();
    let rounded_average = average.round();

    if rounded > 0.0 {
        format!("↑ {percent}% sopra la tua media ({rounded_average})")
    } else if rounded < 0.0 {
        format!("↓ {percent}% sotto la tua media ({rounded_average})")
    } else {
        format!("≈ in linea con la tua media ({rounded_average})")
    }
}
