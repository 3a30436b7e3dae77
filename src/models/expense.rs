//! Expense record model
//!
//! One record per form submission: a date plus an amount per category.
//! Records are immutable once appended and carry no unique key; several
//! records may share a date, and the analytics layer sums them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Money};
use crate::error::{OutlayError, OutlayResult};

/// A single day's expense submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date the expense was incurred
    pub date: NaiveDate,
    /// Amount per category; categories not present read as zero
    #[serde(default)]
    pub amounts: BTreeMap<Category, Money>,
}

impl ExpenseRecord {
    /// Create an empty record for a date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            amounts: BTreeMap::new(),
        }
    }

    /// Builder-style helper to set a category amount
    pub fn with_amount(mut self, category: Category, amount: Money) -> Self {
        self.amounts.insert(category, amount);
        self
    }

    /// Amount recorded for a category (zero if absent)
    pub fn amount(&self, category: Category) -> Money {
        self.amounts.get(&category).copied().unwrap_or_default()
    }

    /// Total across all categories
    ///
    /// Always derived from the record's own amounts, never stored.
    pub fn total(&self) -> Money {
        self.amounts.values().copied().sum()
    }

    /// Validate that no category amount is negative
    pub fn validate(&self) -> OutlayResult<()> {
        for (category, amount) in &self.amounts {
            if amount.is_negative() {
                return Err(OutlayError::Validation(format!(
                    "Negative amount {} for category {}",
                    amount, category
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_total_is_sum_of_amounts() {
        let record = ExpenseRecord::new(date(2024, 1, 1))
            .with_amount(Category::Food, Money::from_cents(5000))
            .with_amount(Category::Transport, Money::from_cents(1500));

        assert_eq!(record.total().cents(), 6500);
    }

    #[test]
    fn test_missing_category_reads_zero() {
        let record =
            ExpenseRecord::new(date(2024, 1, 1)).with_amount(Category::Food, Money::from_cents(100));

        assert_eq!(record.amount(Category::Data), Money::zero());
        assert_eq!(record.amount(Category::Food).cents(), 100);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let record = ExpenseRecord::new(date(2024, 1, 1))
            .with_amount(Category::Other, Money::from_cents(-1));

        assert!(record.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = ExpenseRecord::new(date(2024, 3, 5))
            .with_amount(Category::Data, Money::from_cents(2000));

        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
