//! Anomaly detection over daily spending
//!
//! Flags days whose spend deviates abnormally from the distribution of the
//! range's own daily totals. Works on a regular time grid: the daily series
//! is resampled to one entry per calendar day with missing days at zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::metrics::{filled_daily_series, mean, sample_std};
use crate::models::{ExpenseRecord, Money};

/// Severity bucket for a flagged day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// |z| <= 2
    Low,
    /// |z| > 2
    Medium,
    /// |z| > 3
    High,
}

impl Severity {
    /// Bucket a z-score by magnitude
    pub fn from_z_score(z: f64) -> Self {
        let z = z.abs();
        if z > 3.0 {
            Severity::High
        } else if z > 2.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A day flagged as anomalous
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Flagged date
    pub date: NaiveDate,
    /// Total spent that day
    pub amount: Money,
    /// Deviation from the range mean in standard deviations
    pub z_score: f64,
    /// Severity bucket for reporting
    pub severity: Severity,
}

/// Detect anomalous days in `[start, end]`, ordered by date
///
/// `sensitivity` is clamped to 1-10 and scales the z-score threshold to
/// `sensitivity / 5` (0.2 lenient to 2.0 strict). A zero standard
/// deviation (constant series, single day) substitutes 1 so that no
/// division blows up and no constant day is flagged.
pub fn detect_anomalies(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
    sensitivity: u8,
) -> Vec<AnomalyRecord> {
    let series = filled_daily_series(records, start, end);
    if series.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = series.iter().map(|p| p.amount.to_f64()).collect();
    let m = mean(&values);
    let std = match sample_std(&values) {
        s if s > 0.0 => s,
        _ => 1.0,
    };

    let threshold = f64::from(sensitivity.clamp(1, 10)) / 5.0;

    series
        .iter()
        .zip(values.iter())
        .filter_map(|(point, &value)| {
            let z = (value - m) / std;
            if z.abs() > threshold {
                Some(AnomalyRecord {
                    date: point.date,
                    amount: point.amount,
                    z_score: z,
                    severity: Severity::from_z_score(z),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Sort anomalies by |z| descending for display
pub fn sort_by_deviation(anomalies: &mut [AnomalyRecord]) {
    anomalies.sort_by(|a, b| {
        b.z_score
            .abs()
            .partial_cmp(&a.z_score.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
