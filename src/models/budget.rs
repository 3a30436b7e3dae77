//! Budget models
//!
//! Weekly budgets mirror the weekly setup form (money available, budget
//! amount, expected income for a week starting on a given date); daily
//! budgets are a single amount per date. Both tables are append-only: a
//! correction is a new row, and the budget in effect for a period is the
//! most recently appended row matching it.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Money;
use crate::error::{OutlayError, OutlayResult};

/// A weekly budget declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBudget {
    /// First day of the budgeted week
    pub week_start: NaiveDate,
    /// Cash on hand at the start of the week
    pub money_available: Money,
    /// Spending budget for the week
    pub budget_amount: Money,
    /// Income expected during the week
    pub expected_income: Money,
}

impl WeeklyBudget {
    /// Create a new weekly budget
    pub fn new(
        week_start: NaiveDate,
        money_available: Money,
        budget_amount: Money,
        expected_income: Money,
    ) -> Self {
        Self {
            week_start,
            money_available,
            budget_amount,
            expected_income,
        }
    }

    /// Last day of the budgeted week (inclusive)
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Duration::days(6)
    }

    /// Check if a date falls within the budgeted week
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end()
    }

    /// Validate that no amount is negative
    pub fn validate(&self) -> OutlayResult<()> {
        if self.money_available.is_negative()
            || self.budget_amount.is_negative()
            || self.expected_income.is_negative()
        {
            return Err(OutlayError::Validation(
                "Weekly budget amounts must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// A daily budget declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBudget {
    /// Date the budget applies to
    pub date: NaiveDate,
    /// Spending budget for the day
    pub budget_amount: Money,
}

impl DailyBudget {
    /// Create a new daily budget
    pub fn new(date: NaiveDate, budget_amount: Money) -> Self {
        Self {
            date,
            budget_amount,
        }
    }

    /// Validate that the amount is not negative
    pub fn validate(&self) -> OutlayResult<()> {
        if self.budget_amount.is_negative() {
            return Err(OutlayError::Validation(
                "Daily budget amount must not be negative".into(),
            ));
        }
        Ok(())
    }
}
