//! Budget and burn-rate tracking
//!
//! Relates spend to the declared weekly budget and classifies spending
//! behavior. Classification thresholds are configuration, not constants,
//! so they can be tuned without touching the algorithm.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::metrics::weekday_index;
use crate::models::Money;

/// Thresholds for spending behavior classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorThresholds {
    /// Burn rate above which spending counts as overspending (percent)
    pub overspending_burn: f64,
    /// Burn rate above which spending is near the budget limit (percent)
    pub near_limit_burn: f64,
    /// Volatility as a fraction of average daily spend above which
    /// spending counts as volatile
    pub volatility_ratio: f64,
    /// Average daily spend below which spending counts as frugal
    /// (whole currency units)
    pub frugal_daily: f64,
}

impl Default for BehaviorThresholds {
    fn default() -> Self {
        Self {
            overspending_burn: 120.0,
            near_limit_burn: 90.0,
            volatility_ratio: 0.7,
            frugal_daily: 20.0,
        }
    }
}

/// Spending behavior classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorClass {
    /// Burn rate well past the weekly budget
    Overspending,
    /// Burn rate approaching the weekly budget
    NearLimit,
    /// Day-to-day spend swings wider than the daily average
    Volatile,
    /// Low average daily spend
    Frugal,
    /// None of the above
    Balanced,
}

impl BehaviorClass {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BehaviorClass::Overspending => "Overspending",
            BehaviorClass::NearLimit => "Near Limit",
            BehaviorClass::Volatile => "Volatile",
            BehaviorClass::Frugal => "Frugal",
            BehaviorClass::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for BehaviorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The Monday-started week containing `today`: `[week_start, week_end]`
pub fn current_week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week_start = today - Duration::days(weekday_index(today) as i64);
    (week_start, week_start + Duration::days(6))
}

/// Weekly spend as a percentage of the weekly budget
///
/// A budget of zero (or less) yields 0 rather than an error or infinity,
/// signaling "no budget configured" distinctly from "on budget".
pub fn burn_rate(weekly_spend: Money, weekly_budget: Money) -> f64 {
    if weekly_budget.cents() <= 0 {
        0.0
    } else {
        weekly_spend.cents() as f64 / weekly_budget.cents() as f64 * 100.0
    }
}

/// Spend change versus the preceding window of identical length
///
/// Returns `(delta, delta_percent)`; a non-positive baseline yields a
/// zero percentage ("no baseline"), never a division by zero.
pub fn period_over_period_change(current: Money, previous: Money) -> (Money, f64) {
    let delta = current - previous;
    let delta_pct = if previous.cents() <= 0 {
        0.0
    } else {
        delta.cents() as f64 / previous.cents() as f64 * 100.0
    };
    (delta, delta_pct)
}

/// Classify spending behavior; first matching rule wins
///
/// `avg_daily` and `volatility` are in whole currency units, `burn_rate`
/// in percent.
pub fn classify_behavior(
    avg_daily: f64,
    volatility: f64,
    burn_rate: f64,
    thresholds: &BehaviorThresholds,
) -> BehaviorClass {
    if burn_rate > thresholds.overspending_burn {
        BehaviorClass::Overspending
    } else if burn_rate > thresholds.near_limit_burn {
        BehaviorClass::NearLimit
    } else if volatility > thresholds.volatility_ratio * avg_daily {
        BehaviorClass::Volatile
    } else if avg_daily < thresholds.frugal_daily {
        BehaviorClass::Frugal
    } else {
        BehaviorClass::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_week_window_is_monday_first() {
        // 2024-01-03 is a Wednesday
        let (start, end) = current_week_window(date(2024, 1, 3));
        assert_eq!(start, date(2024, 1, 1));
        assert_eq!(end, date(2024, 1, 7));

        // A Monday starts its own week
        let (start, end) = current_week_window(date(2024, 1, 8));
        assert_eq!(start, date(2024, 1, 8));
        assert_eq!(end, date(2024, 1, 14));
    }

    #[test]
    fn test_burn_rate_guards_zero_budget() {
        assert_eq!(burn_rate(Money::from_units(500), Money::zero()), 0.0);
        assert_eq!(burn_rate(Money::from_units(500), Money::from_cents(-1)), 0.0);
        assert_eq!(burn_rate(Money::zero(), Money::from_units(1000)), 0.0);
        assert!((burn_rate(Money::from_units(1200), Money::from_units(1000)) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_period_over_period_change() {
        let (delta, pct) =
            period_over_period_change(Money::from_units(150), Money::from_units(100));
        assert_eq!(delta, Money::from_units(50));
        assert!((pct - 50.0).abs() < 1e-9);

        // No baseline
        let (delta, pct) = period_over_period_change(Money::from_units(150), Money::zero());
        assert_eq!(delta, Money::from_units(150));
        assert_eq!(pct, 0.0);
    }

    #[test]
    fn test_classify_behavior_precedence() {
        let t = BehaviorThresholds::default();

        assert_eq!(classify_behavior(50.0, 0.0, 121.0, &t), BehaviorClass::Overspending);
        // Exactly 120 is not overspending (strict comparison)
        assert_eq!(classify_behavior(50.0, 0.0, 120.0, &t), BehaviorClass::NearLimit);
        assert_eq!(classify_behavior(50.0, 0.0, 95.0, &t), BehaviorClass::NearLimit);
        assert_eq!(classify_behavior(50.0, 40.0, 50.0, &t), BehaviorClass::Volatile);
        assert_eq!(classify_behavior(10.0, 1.0, 50.0, &t), BehaviorClass::Frugal);
        assert_eq!(classify_behavior(50.0, 1.0, 50.0, &t), BehaviorClass::Balanced);
    }
}
