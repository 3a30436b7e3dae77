//! Budget logs for JSON storage
//!
//! Manages the append-only `weekly_budget` and `daily_budget` tables.
//! Later submissions for an overlapping period do not overwrite earlier
//! rows; the budget in effect is the most recently appended matching row
//! (last-write-wins by append order).

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::OutlayError;
use crate::models::{DailyBudget, WeeklyBudget};

use super::file_io::{read_json, write_json_atomic};

/// Serializable weekly budget table structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct WeeklyBudgetTable {
    budgets: Vec<WeeklyBudget>,
}

/// Serializable daily budget table structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct DailyBudgetTable {
    budgets: Vec<DailyBudget>,
}

/// Append-only log of weekly budget declarations
pub struct WeeklyBudgetLog {
    path: PathBuf,
    rows: RwLock<Vec<WeeklyBudget>>,
}

impl WeeklyBudgetLog {
    /// Create a new weekly budget log backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Load rows from disk in stored (append) order
    pub fn load(&self) -> Result<(), OutlayError> {
        let table: WeeklyBudgetTable = read_json(&self.path)?;

        let mut rows = self
            .rows
            .write()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire write lock: {}", e)))?;
        *rows = table.budgets;
        Ok(())
    }

    /// Save the full table to disk
    pub fn save(&self) -> Result<(), OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let table = WeeklyBudgetTable {
            budgets: rows.clone(),
        };
        write_json_atomic(&self.path, &table)
    }

    /// Append a budget row and persist the table
    pub fn append(&self, budget: WeeklyBudget) -> Result<(), OutlayError> {
        budget.validate()?;

        {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| OutlayError::Store(format!("Failed to acquire write lock: {}", e)))?;
            rows.push(budget);
        }

        self.save()
    }

    /// Get all rows in append order
    pub fn all(&self) -> Result<Vec<WeeklyBudget>, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rows.clone())
    }

    /// The budget in effect for the week containing `date`
    ///
    /// Scans in reverse append order so the most recently submitted
    /// matching row wins.
    pub fn effective_for(&self, date: NaiveDate) -> Result<Option<WeeklyBudget>, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rows.iter().rev().find(|b| b.contains(date)).copied())
    }

    /// Number of stored rows
    pub fn len(&self) -> Result<usize, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rows.len())
    }

    /// Check whether the table has no rows
    pub fn is_empty(&self) -> Result<bool, OutlayError> {
        Ok(self.len()? == 0)
    }
}

/// Append-only log of daily budget declarations
pub struct DailyBudgetLog {
    path: PathBuf,
    rows: RwLock<Vec<DailyBudget>>,
}

impl DailyBudgetLog {
    /// Create a new daily budget log backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Load rows from disk in stored (append) order
    pub fn load(&self) -> Result<(), OutlayError> {
        let table: DailyBudgetTable = read_json(&self.path)?;

        let mut rows = self
            .rows
            .write()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire write lock: {}", e)))?;
        *rows = table.budgets;
        Ok(())
    }

    /// Save the full table to disk
    pub fn save(&self) -> Result<(), OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let table = DailyBudgetTable {
            budgets: rows.clone(),
        };
        write_json_atomic(&self.path, &table)
    }

    /// Append a budget row and persist the table
    pub fn append(&self, budget: DailyBudget) -> Result<(), OutlayError> {
        budget.validate()?;

        {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| OutlayError::Store(format!("Failed to acquire write lock: {}", e)))?;
            rows.push(budget);
        }

        self.save()
    }

    /// Get all rows in append order
    pub fn all(&self) -> Result<Vec<DailyBudget>, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rows.clone())
    }

    /// The budget in effect for `date` (most recently appended row wins)
    pub fn effective_for(&self, date: NaiveDate) -> Result<Option<DailyBudget>, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rows.iter().rev().find(|b| b.date == date).copied())
    }

    /// Number of stored rows
    pub fn len(&self) -> Result<usize, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rows.len())
    }

    /// Check whether the table has no rows
    pub fn is_empty(&self) -> Result<bool, OutlayError> {
        Ok(self.len()? == 0)
    }
}
