//! Dashboard snapshot assembly
//!
//! Wires the aggregation, budget, anomaly, and insight routines into one
//! derived view of a date range. The snapshot is a pure function of the
//! record set and the query parameters: identical inputs produce identical
//! output, and nothing here mutates or persists anything.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::anomaly::{detect_anomalies, AnomalyRecord};
use super::budget::{
    burn_rate, classify_behavior, current_week_window, period_over_period_change,
    BehaviorClass, BehaviorThresholds,
};
use super::insights::{generate_insights, Insight, InsightThresholds};
use super::metrics::{
    category_breakdown, cumulative_series, daily_series, day_of_week_profile, mean,
    moving_average, sample_std, total_spend, weekly_series, CategoryShare, SeriesPoint,
    WeekdayStats,
};
use crate::models::{ExpenseRecord, Money};

/// Window for the trailing moving average, in days
const MOVING_AVERAGE_WINDOW: usize = 7;

/// Everything the analytics engine tunes on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weekly spending budget for burn-rate tracking
    pub weekly_budget: Money,
    /// Anomaly detection sensitivity, 1-10
    pub anomaly_sensitivity: u8,
    /// Behavior classification thresholds
    pub behavior: BehaviorThresholds,
    /// Insight generation thresholds
    pub insight: InsightThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weekly_budget: Money::from_units(1000),
            anomaly_sensitivity: 5,
            behavior: BehaviorThresholds::default(),
            insight: InsightThresholds::default(),
        }
    }
}

/// One point of the moving-average trend line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Date the average is aligned to
    pub date: NaiveDate,
    /// Average in whole currency units
    pub value: f64,
}

/// The computed dashboard for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// First day of the range (inclusive)
    pub start: NaiveDate,
    /// Last day of the range (inclusive)
    pub end: NaiveDate,
    /// Reference date used for the current-week window
    pub today: NaiveDate,

    /// Sum of all record totals in range
    pub total_spend: Money,
    /// Number of records in range
    pub record_count: usize,
    /// Number of distinct dates with at least one record
    pub days_with_data: usize,
    /// Mean daily total in whole currency units (over days with data)
    pub avg_daily_spend: f64,
    /// Highest daily total
    pub max_daily_spend: Money,
    /// Lowest daily total (over days with data)
    pub min_daily_spend: Money,

    /// Spend inside the current Monday-started week
    pub week_spend: Money,
    /// Week spend as a percentage of the weekly budget
    pub burn_rate: f64,
    /// Spending behavior classification
    pub behavior: BehaviorClass,

    /// Change versus the preceding window of identical length
    pub spend_change: Money,
    /// Change as a percentage of the preceding window's total
    pub spend_change_pct: f64,

    /// Per-category totals and shares
    pub category_breakdown: Vec<CategoryShare>,
    /// Per-weekday aggregates, Monday first
    pub day_of_week_profile: Vec<WeekdayStats>,
    /// Daily totals for days with records (gaps not filled)
    pub daily_series: Vec<SeriesPoint>,
    /// Trailing 7-day moving average aligned to the daily series
    pub moving_average: Vec<TrendPoint>,
    /// Running sum of the daily series
    pub cumulative_series: Vec<SeriesPoint>,
    /// Totals per Monday-started week
    pub weekly_series: Vec<SeriesPoint>,

    /// Days flagged as anomalous, in date order
    pub anomalies: Vec<AnomalyRecord>,
    /// Generated observations
    pub insights: Vec<Insight>,
}

impl DashboardSnapshot {
    /// Compute the dashboard for `[start, end]`
    ///
    /// `records` is the full record set; the range filter is applied per
    /// metric (the period-over-period comparison reads records before
    /// `start`). A range with no records yields the explicit "no data"
    /// snapshot: every numeric field zero, every sequence empty.
    pub fn compute(
        records: &[ExpenseRecord],
        config: &EngineConfig,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        let daily = daily_series(records, start, end);
        let daily_values: Vec<f64> = daily.iter().map(|p| p.amount.to_f64()).collect();

        let total = total_spend(records, start, end);
        let record_totals: Vec<f64> = records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .map(|r| r.total().to_f64())
            .collect();

        let avg_daily_spend = mean(&daily_values);
        let max_daily_spend = daily.iter().map(|p| p.amount).max().unwrap_or_default();
        let min_daily_spend = daily.iter().map(|p| p.amount).min().unwrap_or_default();

        // Current-week spend, clipped to the queried range
        let (week_start, week_end) = current_week_window(today);
        let clip_start = week_start.max(start);
        let clip_end = week_end.min(end);
        let week_spend = if clip_start <= clip_end {
            total_spend(records, clip_start, clip_end)
        } else {
            Money::zero()
        };

        let burn = burn_rate(week_spend, config.weekly_budget);
        let volatility = sample_std(&record_totals);
        let behavior = classify_behavior(avg_daily_spend, volatility, burn, &config.behavior);

        // Preceding window of identical length
        let prev_end = start - Duration::days(1);
        let prev_start = prev_end - (end - start);
        let prev_total = total_spend(records, prev_start, prev_end);
        let (spend_change, spend_change_pct) = period_over_period_change(total, prev_total);

        let breakdown = category_breakdown(records, start, end);
        let profile = day_of_week_profile(records, start, end);
        let weekly = weekly_series(records, start, end);

        let moving = moving_average(&daily_values, MOVING_AVERAGE_WINDOW);
        let moving_average = daily
            .iter()
            .zip(moving)
            .map(|(point, value)| TrendPoint {
                date: point.date,
                value,
            })
            .collect();

        let cumulative = cumulative_series(&daily);
        let anomalies = detect_anomalies(records, start, end, config.anomaly_sensitivity);

        let insights = generate_insights(
            records,
            start,
            end,
            &profile,
            &breakdown,
            &weekly,
            burn,
            config.weekly_budget,
            week_spend,
            today,
            &config.insight,
        );

        Self {
            start,
            end,
            today,
            total_spend: total,
            record_count: record_totals.len(),
            days_with_data: daily.len(),
            avg_daily_spend,
            max_daily_spend,
            min_daily_spend,
            week_spend,
            burn_rate: burn,
            behavior,
            spend_change,
            spend_change_pct,
            category_breakdown: breakdown,
            day_of_week_profile: profile,
            daily_series: daily,
            moving_average,
            cumulative_series: cumulative,
            weekly_series: weekly,
            anomalies,
            insights,
        }
    }

    /// Whether the range held any records
    pub fn has_data(&self) -> bool {
        self.record_count > 0
    }
}
