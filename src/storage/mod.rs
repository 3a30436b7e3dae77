//! Storage layer for Outlay
//!
//! Provides the append-only record store: JSON tables with atomic writes,
//! one file per table (`daily_expenses`, `weekly_budget`, `daily_budget`).
//! Rows are never updated in place; every save is an append.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::{DailyBudgetLog, WeeklyBudgetLog};
pub use expenses::ExpenseLog;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::OutlayPaths;
use crate::error::OutlayError;

/// Main store coordinator that provides access to all tables
pub struct Store {
    paths: OutlayPaths,
    pub expenses: ExpenseLog,
    pub weekly_budgets: WeeklyBudgetLog,
    pub daily_budgets: DailyBudgetLog,
}

impl Store {
    /// Create a new Store instance
    pub fn new(paths: OutlayPaths) -> Result<Self, OutlayError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseLog::new(paths.expenses_file()),
            weekly_budgets: WeeklyBudgetLog::new(paths.weekly_budget_file()),
            daily_budgets: DailyBudgetLog::new(paths.daily_budget_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &OutlayPaths {
        &self.paths
    }

    /// Load all tables from disk
    pub fn load_all(&self) -> Result<(), OutlayError> {
        self.expenses.load()?;
        self.weekly_budgets.load()?;
        self.daily_budgets.load()?;
        Ok(())
    }

    /// Version of the store's contents
    ///
    /// The tables are append-only, so the total row count increases
    /// monotonically and identifies a data snapshot. Used as part of the
    /// dashboard cache key.
    pub fn data_version(&self) -> Result<u64, OutlayError> {
        Ok((self.expenses.len()?
            + self.weekly_budgets.len()?
            + self.daily_budgets.len()?) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseRecord, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_store_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.data_version().unwrap(), 0);
    }

    #[test]
    fn test_data_version_advances_on_append() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();

        let record = ExpenseRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_amount(Category::Food, Money::from_cents(100));
        store.expenses.append(record).unwrap();

        assert_eq!(store.data_version().unwrap(), 1);
    }
}
