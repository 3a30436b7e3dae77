//! Aggregation and trend metrics
//!
//! Reduces a flat sequence of expense records into range-scoped totals and
//! ordered series. All functions are pure: they never mutate their inputs
//! and identical inputs produce identical outputs.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Category, ExpenseRecord, Money};

/// One point of a date-keyed money series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Date (or week start for weekly series)
    pub date: NaiveDate,
    /// Amount for that date
    pub amount: Money,
}

/// A category's share of total spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category
    pub category: Category,
    /// Total amount spent in the category
    pub amount: Money,
    /// Share of total spending, 0-100 (0 when the total is zero)
    pub percentage: f64,
}

/// Per-weekday aggregate over the records in range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayStats {
    /// Weekday name, Monday first
    pub weekday: String,
    /// Total spent on this weekday
    pub sum: Money,
    /// Number of records on this weekday
    pub count: usize,
    /// Mean record total in whole currency units
    pub mean: f64,
}

/// Weekday names indexed Monday=0..Sunday=6
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Monday-first weekday index for a date (Monday=0..Sunday=6)
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

fn in_range(record: &ExpenseRecord, start: NaiveDate, end: NaiveDate) -> bool {
    record.date >= start && record.date <= end
}

/// Sum of record totals with `start <= date <= end` (inclusive both ends)
pub fn total_spend(records: &[ExpenseRecord], start: NaiveDate, end: NaiveDate) -> Money {
    records
        .iter()
        .filter(|r| in_range(r, start, end))
        .map(|r| r.total())
        .sum()
}

/// Ordered daily totals for dates in range that have at least one record
///
/// Records sharing a date are summed. Dates with no records produce no
/// entry; see [`filled_daily_series`] for the zero-filled variant.
pub fn daily_series(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<SeriesPoint> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in records.iter().filter(|r| in_range(r, start, end)) {
        *by_date.entry(record.date).or_default() += record.total();
    }

    by_date
        .into_iter()
        .map(|(date, amount)| SeriesPoint { date, amount })
        .collect()
}

/// Daily totals resampled to one entry per calendar day across the range
///
/// Missing days are filled with zero. Anomaly detection requires this
/// regular time grid.
pub fn filled_daily_series(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<SeriesPoint> {
    if start > end {
        return Vec::new();
    }

    let sparse: BTreeMap<NaiveDate, Money> = daily_series(records, start, end)
        .into_iter()
        .map(|p| (p.date, p.amount))
        .collect();

    let mut series = Vec::new();
    let mut date = start;
    while date <= end {
        series.push(SeriesPoint {
            date,
            amount: sparse.get(&date).copied().unwrap_or_default(),
        });
        date += Duration::days(1);
    }
    series
}

/// Per-category totals and percentages over the range
///
/// Every category appears, including those with no spending. When the
/// total is zero every percentage is zero.
pub fn category_breakdown(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CategoryShare> {
    let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
    for record in records.iter().filter(|r| in_range(r, start, end)) {
        for category in Category::ALL {
            *totals.entry(category).or_default() += record.amount(category);
        }
    }

    let grand_total: Money = totals.values().copied().sum();

    Category::ALL
        .iter()
        .map(|&category| {
            let amount = totals.get(&category).copied().unwrap_or_default();
            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                amount.cents() as f64 / grand_total.cents() as f64 * 100.0
            };
            CategoryShare {
                category,
                amount,
                percentage,
            }
        })
        .collect()
}

/// Per-weekday sum, record count, and mean record total, Monday=0..Sunday=6
pub fn day_of_week_profile(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WeekdayStats> {
    let mut sums = [Money::zero(); 7];
    let mut counts = [0usize; 7];

    for record in records.iter().filter(|r| in_range(r, start, end)) {
        let idx = weekday_index(record.date);
        sums[idx] += record.total();
        counts[idx] += 1;
    }

    (0..7)
        .map(|idx| WeekdayStats {
            weekday: WEEKDAY_NAMES[idx].to_string(),
            sum: sums[idx],
            count: counts[idx],
            mean: if counts[idx] == 0 {
                0.0
            } else {
                sums[idx].to_f64() / counts[idx] as f64
            },
        })
        .collect()
}

/// Trailing moving average aligned to the input length
///
/// For index `i` the window is `values[max(0, i-window+1) ..= i]`; partial
/// windows at the start average however many points are available, so the
/// output never contains a hole. A window of zero is treated as one.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);

    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let from = (i + 1).saturating_sub(window);
            let slice = &values[from..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Running sum of a daily series
pub fn cumulative_series(daily: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut running = Money::zero();
    daily
        .iter()
        .map(|point| {
            running += point.amount;
            SeriesPoint {
                date: point.date,
                amount: running,
            }
        })
        .collect()
}

/// Totals resampled to the Monday-started week containing each date
pub fn weekly_series(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<SeriesPoint> {
    let mut by_week: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in records.iter().filter(|r| in_range(r, start, end)) {
        let week_start = record.date - Duration::days(weekday_index(record.date) as i64);
        *by_week.entry(week_start).or_default() += record.total();
    }

    by_week
        .into_iter()
        .map(|(date, amount)| SeriesPoint { date, amount })
        .collect()
}

/// Arithmetic mean; zero for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample standard deviation (n-1 denominator); zero when undefined
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, food_cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(d).with_amount(Category::Food, Money::from_cents(food_cents))
    }

    fn sample_records() -> Vec<ExpenseRecord> {
        vec![
            record(date(2024, 1, 1), 5000),
            record(date(2024, 1, 1), 2500), // duplicate date, summed
            record(date(2024, 1, 3), 1000),
            ExpenseRecord::new(date(2024, 1, 5))
                .with_amount(Category::Transport, Money::from_cents(1500))
                .with_amount(Category::Data, Money::from_cents(500)),
        ]
    }

    #[test]
    fn test_total_spend_inclusive_bounds() {
        let records = sample_records();
        let total = total_spend(&records, date(2024, 1, 1), date(2024, 1, 5));
        assert_eq!(total.cents(), 10500);

        // Both endpoints are inclusive
        let edges = total_spend(&records, date(2024, 1, 3), date(2024, 1, 5));
        assert_eq!(edges.cents(), 3000);
    }

    #[test]
    fn test_daily_series_sums_duplicates_and_skips_gaps() {
        let records = sample_records();
        let series = daily_series(&records, date(2024, 1, 1), date(2024, 1, 5));

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, date(2024, 1, 1));
        assert_eq!(series[0].amount.cents(), 7500);
        assert_eq!(series[1].date, date(2024, 1, 3));
        assert_eq!(series[2].date, date(2024, 1, 5));
    }

    #[test]
    fn test_filled_series_covers_every_day() {
        let records = sample_records();
        let series = filled_daily_series(&records, date(2024, 1, 1), date(2024, 1, 5));

        assert_eq!(series.len(), 5);
        assert_eq!(series[1].amount, Money::zero()); // Jan 2 filled
        assert_eq!(series[3].amount, Money::zero()); // Jan 4 filled
    }

    #[test]
    fn test_filled_series_inverted_range_is_empty() {
        let records = sample_records();
        assert!(filled_daily_series(&records, date(2024, 1, 5), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_breakdown_matches_total_and_percentages_sum() {
        let records = sample_records();
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 5);

        let breakdown = category_breakdown(&records, start, end);
        let sum: Money = breakdown.iter().map(|s| s.amount).sum();
        assert_eq!(sum, total_spend(&records, start, end));

        let pct_sum: f64 = breakdown.iter().map(|s| s.percentage).sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_zero_total_gives_zero_percentages() {
        let breakdown = category_breakdown(&[], date(2024, 1, 1), date(2024, 1, 5));
        assert_eq!(breakdown.len(), 4);
        for share in breakdown {
            assert_eq!(share.amount, Money::zero());
            assert_eq!(share.percentage, 0.0);
        }
    }

    #[test]
    fn test_day_of_week_profile() {
        // 2024-01-01 is a Monday
        let records = sample_records();
        let profile = day_of_week_profile(&records, date(2024, 1, 1), date(2024, 1, 7));

        assert_eq!(profile.len(), 7);
        assert_eq!(profile[0].weekday, "Monday");
        assert_eq!(profile[0].count, 2);
        assert_eq!(profile[0].sum.cents(), 7500);
        assert!((profile[0].mean - 37.5).abs() < 1e-9);
        // Wednesday has one record
        assert_eq!(profile[2].count, 1);
        // Sunday has none
        assert_eq!(profile[6].count, 0);
        assert_eq!(profile[6].mean, 0.0);
    }

    #[test]
    fn test_moving_average_preserves_length() {
        let values = [10.0, 20.0, 30.0, 40.0];
        for window in 1..=6 {
            assert_eq!(moving_average(&values, window).len(), values.len());
        }

        let avg = moving_average(&values, 2);
        assert_eq!(avg, vec![10.0, 15.0, 25.0, 35.0]);

        // Partial head windows use the points available
        let avg3 = moving_average(&values, 3);
        assert_eq!(avg3[0], 10.0);
        assert_eq!(avg3[1], 15.0);
        assert_eq!(avg3[2], 20.0);
        assert_eq!(avg3[3], 30.0);
    }

    #[test]
    fn test_cumulative_series() {
        let daily = vec![
            SeriesPoint {
                date: date(2024, 1, 1),
                amount: Money::from_cents(100),
            },
            SeriesPoint {
                date: date(2024, 1, 2),
                amount: Money::from_cents(250),
            },
        ];
        let cumulative = cumulative_series(&daily);
        assert_eq!(cumulative[0].amount.cents(), 100);
        assert_eq!(cumulative[1].amount.cents(), 350);
    }

    #[test]
    fn test_weekly_series_groups_by_monday_week() {
        let records = vec![
            record(date(2024, 1, 1), 100), // Mon, week of Jan 1
            record(date(2024, 1, 7), 200), // Sun, week of Jan 1
            record(date(2024, 1, 8), 400), // Mon, week of Jan 8
        ];
        let weeks = weekly_series(&records, date(2024, 1, 1), date(2024, 1, 14));

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].date, date(2024, 1, 1));
        assert_eq!(weeks[0].amount.cents(), 300);
        assert_eq!(weeks[1].date, date(2024, 1, 8));
        assert_eq!(weeks[1].amount.cents(), 400);
    }

    #[test]
    fn test_stats_helpers() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
        assert_eq!(sample_std(&[5.0]), 0.0);
        assert!((sample_std(&[2.0, 4.0]) - std::f64::consts::SQRT_2).abs() < 1e-9);
    }
}
