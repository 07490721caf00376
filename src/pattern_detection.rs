// ABOUTME: Pattern detection over timestamped metric history for recurring highs and lows
// ABOUTME: Detects hour-of-day, day-of-week and seasonal cycles with fixed reliability tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Daily, weekly and seasonal pattern detectors.
//!
//! Each detector buckets the samples by a calendar key, averages each
//! non-empty bucket, and flags buckets whose average deviates from the
//! cross-bucket average by more than its threshold fraction. Peak and low
//! are chosen among the flagged buckets only; when a single bucket is
//! flagged it is reported as both peak and low.

#![allow(clippy::cast_precision_loss)] // Safe: bucket counts are small

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Timelike, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::config::PersonalizationConfig;
use crate::metrics::MetricKind;
use crate::models::{MetricSample, PatternInfo, PatternType};

/// Italian weekday names indexed by days-from-Sunday, the mobile client's
/// day numbering.
const WEEKDAY_NAMES: [&str; 7] = [
    "Domenica",
    "Lunedì",
    "Martedì",
    "Mercoledì",
    "Giovedì",
    "Venerdì",
    "Sabato",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Season {
    Primavera,
    Estate,
    Autunno,
    Inverno,
}

impl Season {
    const fn name(self) -> &'static str {
        match self {
            Self::Primavera => "Primavera",
            Self::Estate => "Estate",
            Self::Autunno => "Autunno",
            Self::Inverno => "Inverno",
        }
    }

    fn of(timestamp: &DateTime<Utc>) -> Self {
        match timestamp.month() {
            3..=5 => Self::Primavera,
            6..=8 => Self::Estate,
            9..=11 => Self::Autunno,
            _ => Self::Inverno,
        }
    }
}

/// Pattern detection engine over timestamped metric samples.
#[derive(Debug, Clone, Default)]
pub struct PatternDetector {
    config: PersonalizationConfig,
}

impl PatternDetector {
    /// Create a detector with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PersonalizationConfig::default(),
        }
    }

    /// Create a detector with a custom configuration.
    #[must_use]
    pub const fn with_config(config: PersonalizationConfig) -> Self {
        Self { config }
    }

    /// Run every detector over the samples, collecting at most one
    /// pattern each. Returns an empty list when the history is too short.
    #[must_use]
    pub fn temporal_patterns(
        &self,
        user_id: Uuid,
        metric: &str,
        samples: &[MetricSample],
    ) -> Vec<PatternInfo> {
        if samples.len() < self.config.history.min_samples_for_patterns {
            debug!(
                %user_id,
                metric,
                samples = samples.len(),
                "history too short for pattern detection"
            );
            return Vec::new();
        }

        let mut patterns = Vec::new();
        if let Some(pattern) = self.daily_pattern(metric, samples) {
            patterns.push(pattern);
        }
        if let Some(pattern) = self.weekly_pattern(metric, samples) {
            patterns.push(pattern);
        }
        if let Some(pattern) = self.seasonal_pattern(metric, samples) {
            patterns.push(pattern);
        }
        patterns
    }

    /// Detect a recurring hour-of-day cycle.
    #[must_use]
    pub fn daily_pattern(&self, metric: &str, samples: &[MetricSample]) -> Option<PatternInfo> {
        if samples.len() < self.config.history.min_samples_for_patterns {
            return None;
        }

        let buckets = bucket_means(samples, |sample| sample.timestamp.hour());
        if buckets.len() < self.config.detection.min_hourly_buckets {
            return None;
        }

        let ((peak_hour, _), (low_hour, _)) =
            significant_extremes(&buckets, self.config.detection.daily_deviation)?;
        let label = metric_label(metric);

        Some(PatternInfo {
            pattern_type: PatternType::Temporal,
            description: format!(
                "I tuoi valori di {label} raggiungono il picco verso le {peak_hour}:00 e calano verso le {low_hour}:00"
            ),
            confidence: self.config.detection.daily_confidence,
            actionable: true,
            suggestions: vec![
                format!("Programma l'analisi alle {peak_hour}:00, quando i tuoi valori sono al meglio"),
                format!("Dedica qualche attenzione in più alla tua routine verso le {low_hour}:00"),
            ],
        })
    }

    /// Detect a recurring day-of-week cycle.
    #[must_use]
    pub fn weekly_pattern(&self, metric: &str, samples: &[MetricSample]) -> Option<PatternInfo> {
        if samples.len() < self.config.history.min_samples_for_patterns {
            return None;
        }

        let buckets = bucket_means(samples, |sample| {
            sample.timestamp.weekday().num_days_from_sunday()
        });
        if buckets.len() < self.config.detection.min_weekday_buckets {
            return None;
        }

        let ((peak_day, _), (low_day, _)) =
            significant_extremes(&buckets, self.config.detection.weekly_deviation)?;
        let peak_name = WEEKDAY_NAMES[peak_day as usize];
        let low_name = WEEKDAY_NAMES[low_day as usize];
        let label = metric_label(metric);

        Some(PatternInfo {
            pattern_type: PatternType::Temporal,
            description: format!(
                "{peak_name} è il tuo giorno migliore per {label}, mentre {low_name} tende a essere il più basso"
            ),
            confidence: self.config.detection.weekly_confidence,
            actionable: true,
            suggestions: vec![
                format!("Sfrutta {peak_name} per le attività più impegnative"),
                format!("Concediti più cura di te {low_name}"),
            ],
        })
    }

    /// Detect a seasonal cycle. Two seasons of data are enough.
    #[must_use]
    pub fn seasonal_pattern(&self, metric: &str, samples: &[MetricSample]) -> Option<PatternInfo> {
        if samples.len() < self.config.history.min_samples_for_patterns {
            return None;
        }

        let buckets = bucket_means(samples, |sample| Season::of(&sample.timestamp));
        if buckets.len() < self.config.detection.min_season_buckets {
            return None;
        }

        let ((peak_season, _), (low_season, _)) =
            significant_extremes(&buckets, self.config.detection.seasonal_deviation)?;
        let label = metric_label(metric);

        Some(PatternInfo {
            pattern_type: PatternType::Seasonal,
            description: format!(
                "In {} i tuoi valori di {label} tendono a salire, mentre in {} calano",
                peak_season.name(),
                low_season.name()
            ),
            confidence: self.config.detection.seasonal_confidence,
            actionable: true,
            suggestions: vec![format!(
                "Prepara la tua routine al cambio di stagione: in {} i valori tendono a calare",
                low_season.name()
            )],
        })
    }
}

/// Average the sample values per bucket key, in deterministic key order.
fn bucket_means<K, F>(samples: &[MetricSample], key_of: F) -> Vec<(K, f64)>
where
    K: Ord + Copy,
    F: Fn(&MetricSample) -> K,
{
    let mut buckets: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for sample in samples {
        buckets.entry(key_of(sample)).or_default().push(sample.value);
    }
    buckets
        .into_iter()
        .map(|(key, values)| (key, values.iter().sum::<f64>() / values.len() as f64))
        .collect()
}

/// Pick the peak and low buckets among those deviating from the
/// cross-bucket average by more than `threshold` times that average.
/// Returns `None` when no bucket is significant. A single significant
/// bucket is returned as both peak and low.
fn significant_extremes<K: Copy>(
    buckets: &[(K, f64)],
    threshold: f64,
) -> Option<((K, f64), (K, f64))> {
    let overall = buckets.iter().map(|(_, mean)| mean).sum::<f64>() / buckets.len() as f64;

    let significant: Vec<(K, f64)> = buckets
        .iter()
        .copied()
        .filter(|(_, mean)| (mean - overall).abs() > threshold * overall)
        .collect();

    let peak = significant
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))?;
    let low = significant
        .iter()
        .copied()
        .min_by(|a, b| a.1.total_cmp(&b.1))?;
    Some((peak, low))
}

fn metric_label(metric: &str) -> String {
    metric
        .parse::<MetricKind>()
        .map_or_else(|_| metric.to_ascii_lowercase(), |kind| kind.italian_label().to_owned())
}
