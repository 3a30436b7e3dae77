//! Pattern and insight generation
//!
//! Derives short human-readable observations from the aggregates: peak
//! weekdays, weekend-heavy spending, dominant categories, week-over-week
//! trends, and budget alerts. Purely threshold-driven, and every generator
//! is a total function: degenerate input (empty records, a single point,
//! all-zero amounts) produces no insight rather than an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::current_week_window;
use super::metrics::{weekday_index, CategoryShare, SeriesPoint, WeekdayStats};
use crate::models::{ExpenseRecord, Money};

/// Thresholds for insight generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Peak-to-quietest weekday mean ratio that triggers the peak insight
    pub peak_day_ratio: f64,
    /// Weekend/weekday spend ratio that triggers the weekend insight
    pub weekend_ratio: f64,
    /// Category share of total (percent) that counts as dominant
    pub dominant_share_pct: f64,
    /// Absolute week-over-week change (percent) that counts as a trend
    pub trend_change_pct: f64,
    /// Burn rate (percent) that triggers the budget alert
    pub budget_alert_burn: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            peak_day_ratio: 2.0,
            weekend_ratio: 1.5,
            dominant_share_pct: 40.0,
            trend_change_pct: 10.0,
            budget_alert_burn: 100.0,
        }
    }
}

/// Insight categories for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Recurring weekday/weekend patterns
    Pattern,
    /// Category concentration
    Category,
    /// Budget utilization alerts
    Budget,
    /// Week-over-week direction
    Trend,
}

/// A single human-readable observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// What kind of observation this is
    pub kind: InsightKind,
    /// The observation itself
    pub message: String,
    /// Optional follow-up suggestion
    pub suggestion: Option<String>,
}

/// Peak-weekday insight
///
/// Fires when the busiest weekday's mean spend exceeds the quietest's by
/// the configured ratio. Skipped when the quietest mean is zero (no
/// meaningful baseline).
pub fn peak_weekday_insight(
    profile: &[WeekdayStats],
    thresholds: &InsightThresholds,
) -> Option<Insight> {
    let active: Vec<&WeekdayStats> = profile.iter().filter(|s| s.count > 0).collect();
    if active.len() < 2 {
        return None;
    }

    let peak = active
        .iter()
        .max_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(std::cmp::Ordering::Equal))?;
    let quiet = active
        .iter()
        .min_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(std::cmp::Ordering::Equal))?;

    if quiet.mean <= 0.0 {
        return None;
    }

    let ratio = peak.mean / quiet.mean;
    if ratio > thresholds.peak_day_ratio {
        Some(Insight {
            kind: InsightKind::Pattern,
            message: format!(
                "Peak spending on {}s (+{:.0}% over your quietest day)",
                peak.weekday,
                (ratio - 1.0) * 100.0
            ),
            suggestion: None,
        })
    } else {
        None
    }
}

/// Weekend-vs-weekday insight
///
/// Ratio is zero when weekday spend is zero (no baseline), so an
/// all-weekend record set stays silent rather than dividing by zero.
pub fn weekend_ratio_insight(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
    thresholds: &InsightThresholds,
) -> Option<Insight> {
    let mut weekend = Money::zero();
    let mut weekday = Money::zero();

    for record in records.iter().filter(|r| r.date >= start && r.date <= end) {
        if weekday_index(record.date) >= 5 {
            weekend += record.total();
        } else {
            weekday += record.total();
        }
    }

    if weekday.cents() <= 0 {
        return None;
    }

    let ratio = weekend.cents() as f64 / weekday.cents() as f64;
    if ratio > thresholds.weekend_ratio {
        Some(Insight {
            kind: InsightKind::Pattern,
            message: format!("Weekend spending is {:.1}x higher than weekdays", ratio),
            suggestion: None,
        })
    } else {
        None
    }
}

/// Dominant-category insight
pub fn dominant_category_insight(
    breakdown: &[CategoryShare],
    thresholds: &InsightThresholds,
) -> Option<Insight> {
    let largest = breakdown.iter().max_by(|a, b| {
        a.amount.cmp(&b.amount)
    })?;

    if largest.percentage > thresholds.dominant_share_pct {
        Some(Insight {
            kind: InsightKind::Category,
            message: format!(
                "{} accounts for {:.0}% of total spending",
                largest.category,
                largest.percentage
            ),
            suggestion: Some(format!(
                "Consider setting a specific budget for {} or finding alternatives",
                largest.category.name()
            )),
        })
    } else {
        None
    }
}

/// Week-over-week trend insight
///
/// Compares the last two weekly-resampled totals; a non-positive baseline
/// week yields no insight.
pub fn trend_insight(
    weekly: &[SeriesPoint],
    thresholds: &InsightThresholds,
) -> Option<Insight> {
    if weekly.len() < 2 {
        return None;
    }

    let previous = weekly[weekly.len() - 2].amount;
    let latest = weekly[weekly.len() - 1].amount;
    if previous.cents() <= 0 {
        return None;
    }

    let change = (latest.cents() - previous.cents()) as f64 / previous.cents() as f64 * 100.0;
    if change.abs() > thresholds.trend_change_pct {
        Some(Insight {
            kind: InsightKind::Trend,
            message: format!(
                "Weekly spending {} by {:.0}%",
                if change > 0.0 { "increased" } else { "decreased" },
                change.abs()
            ),
            suggestion: Some(
                "Review what caused this change to understand your spending habits".into(),
            ),
        })
    } else {
        None
    }
}

/// Budget alert insight
///
/// Fires when the burn rate passes the alert threshold. While budget
/// remains and the week has days after `today`, suggests the daily limit
/// that keeps the week on budget; once the budget is exhausted the
/// suggestion is to hold off.
pub fn budget_alert_insight(
    burn_rate: f64,
    weekly_budget: Money,
    week_spend: Money,
    today: NaiveDate,
    thresholds: &InsightThresholds,
) -> Option<Insight> {
    if burn_rate <= thresholds.budget_alert_burn || weekly_budget.cents() <= 0 {
        return None;
    }

    let (_, week_end) = current_week_window(today);
    let days_left = (week_end - today).num_days();

    let suggestion = if days_left <= 0 {
        None
    } else {
        let remaining = weekly_budget - week_spend;
        if remaining.is_positive() {
            let daily_limit = Money::from_cents(remaining.cents() / days_left);
            Some(format!(
                "Limit daily spending to {} for the remaining {} days",
                daily_limit, days_left
            ))
        } else {
            Some(format!(
                "Budget exhausted; hold off spending for the remaining {} days",
                days_left
            ))
        }
    };

    Some(Insight {
        kind: InsightKind::Budget,
        message: format!(
            "Budget alert: you've spent {:.0}% of the weekly budget",
            burn_rate
        ),
        suggestion,
    })
}

/// Run every insight generator and collect the results
#[allow(clippy::too_many_arguments)]
pub fn generate_insights(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
    profile: &[WeekdayStats],
    breakdown: &[CategoryShare],
    weekly: &[SeriesPoint],
    burn_rate: f64,
    weekly_budget: Money,
    week_spend: Money,
    today: NaiveDate,
    thresholds: &InsightThresholds,
) -> Vec<Insight> {
    [
        peak_weekday_insight(profile, thresholds),
        weekend_ratio_insight(records, start, end, thresholds),
        dominant_category_insight(breakdown, thresholds),
        trend_insight(weekly, thresholds),
        budget_alert_insight(burn_rate, weekly_budget, week_spend, today, thresholds),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::metrics::{
        category_breakdown, day_of_week_profile, weekly_series,
    };
    use crate::models::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, category: Category, units: i64) -> ExpenseRecord {
        ExpenseRecord::new(d).with_amount(category, Money::from_units(units))
    }

    #[test]
    fn test_degenerate_inputs_yield_no_insights() {
        let thresholds = InsightThresholds::default();
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 31);

        // Empty records
        let insights = generate_insights(
            &[],
            start,
            end,
            &day_of_week_profile(&[], start, end),
            &category_breakdown(&[], start, end),
            &weekly_series(&[], start, end),
            0.0,
            Money::zero(),
            Money::zero(),
            end,
            &thresholds,
        );
        assert!(insights.is_empty());

        // Single all-zero record
        let records = vec![ExpenseRecord::new(start)];
        let insights = generate_insights(
            &records,
            start,
            end,
            &day_of_week_profile(&records, start, end),
            &category_breakdown(&records, start, end),
            &weekly_series(&records, start, end),
            0.0,
            Money::zero(),
            Money::zero(),
            end,
            &thresholds,
        );
        assert!(insights.is_empty());
    }

    #[test]
    fn test_peak_weekday_fires_above_ratio() {
        let thresholds = InsightThresholds::default();
        // Mondays heavy, Tuesdays light, two weeks of data
        let records = vec![
            record(date(2024, 1, 1), Category::Food, 100), // Mon
            record(date(2024, 1, 2), Category::Food, 10),  // Tue
            record(date(2024, 1, 8), Category::Food, 120), // Mon
            record(date(2024, 1, 9), Category::Food, 12),  // Tue
        ];
        let profile = day_of_week_profile(&records, date(2024, 1, 1), date(2024, 1, 14));

        let insight = peak_weekday_insight(&profile, &thresholds).unwrap();
        assert!(insight.message.contains("Monday"));
    }

    #[test]
    fn test_peak_weekday_skips_zero_minimum() {
        let thresholds = InsightThresholds::default();
        let records = vec![
            record(date(2024, 1, 1), Category::Food, 100), // Mon
            ExpenseRecord::new(date(2024, 1, 2)),          // Tue, zero
        ];
        let profile = day_of_week_profile(&records, date(2024, 1, 1), date(2024, 1, 7));

        assert!(peak_weekday_insight(&profile, &thresholds).is_none());
    }

    #[test]
    fn test_weekend_ratio_insight() {
        let thresholds = InsightThresholds::default();
        let records = vec![
            record(date(2024, 1, 1), Category::Food, 10),  // Mon
            record(date(2024, 1, 6), Category::Other, 40), // Sat
        ];

        let insight =
            weekend_ratio_insight(&records, date(2024, 1, 1), date(2024, 1, 7), &thresholds)
                .unwrap();
        assert!(insight.message.contains("4.0x"));

        // All-weekend spending has no weekday baseline
        let weekend_only = vec![record(date(2024, 1, 6), Category::Other, 40)];
        assert!(weekend_ratio_insight(
            &weekend_only,
            date(2024, 1, 1),
            date(2024, 1, 7),
            &thresholds
        )
        .is_none());
    }

    #[test]
    fn test_dominant_category_insight() {
        let thresholds = InsightThresholds::default();
        let records = vec![
            record(date(2024, 1, 1), Category::Food, 90),
            record(date(2024, 1, 2), Category::Transport, 10),
        ];
        let breakdown = category_breakdown(&records, date(2024, 1, 1), date(2024, 1, 7));

        let insight = dominant_category_insight(&breakdown, &thresholds).unwrap();
        assert!(insight.message.contains("Food"));
        assert!(insight.message.contains("90%"));
    }

    #[test]
    fn test_trend_insight_direction() {
        let thresholds = InsightThresholds::default();
        let weekly = vec![
            SeriesPoint {
                date: date(2024, 1, 1),
                amount: Money::from_units(100),
            },
            SeriesPoint {
                date: date(2024, 1, 8),
                amount: Money::from_units(150),
            },
        ];

        let insight = trend_insight(&weekly, &thresholds).unwrap();
        assert!(insight.message.contains("increased by 50%"));

        // Within threshold: silent
        let flat = vec![
            SeriesPoint {
                date: date(2024, 1, 1),
                amount: Money::from_units(100),
            },
            SeriesPoint {
                date: date(2024, 1, 8),
                amount: Money::from_units(105),
            },
        ];
        assert!(trend_insight(&flat, &thresholds).is_none());
    }

    #[test]
    fn test_budget_alert_with_days_remaining() {
        let thresholds = InsightThresholds::default();

        // Wednesday, over the alert threshold but budget remains
        let insight = budget_alert_insight(
            101.0,
            Money::from_units(1000),
            Money::from_units(800),
            date(2024, 1, 3),
            &thresholds,
        )
        .unwrap();
        assert!(insight.message.contains("101%"));
        let suggestion = insight.suggestion.unwrap();
        assert!(suggestion.contains("4 days"));
        assert!(suggestion.contains("₵50.00"));

        // Under the threshold: silent
        assert!(budget_alert_insight(
            80.0,
            Money::from_units(1000),
            Money::from_units(800),
            date(2024, 1, 3),
            &thresholds
        )
        .is_none());
    }
}
