//! Expense log for JSON storage
//!
//! Manages the append-only `daily_expenses` table. Rows are never updated
//! or deleted; a correction is a new row, and rows for the same date are
//! summed by the analytics layer.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::OutlayError;
use crate::models::ExpenseRecord;

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense table structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseTable {
    expenses: Vec<ExpenseRecord>,
}

/// Append-only log of expense records
pub struct ExpenseLog {
    path: PathBuf,
    rows: RwLock<Vec<ExpenseRecord>>,
}

impl ExpenseLog {
    /// Create a new expense log backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Load expense rows from disk in stored (append) order
    pub fn load(&self) -> Result<(), OutlayError> {
        let table: ExpenseTable = read_json(&self.path)?;

        let mut rows = self
            .rows
            .write()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire write lock: {}", e)))?;

        *rows = table.expenses;
        Ok(())
    }

    /// Save the full table to disk
    pub fn save(&self) -> Result<(), OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let table = ExpenseTable {
            expenses: rows.clone(),
        };
        write_json_atomic(&self.path, &table)
    }

    /// Append a record and persist the table
    pub fn append(&self, record: ExpenseRecord) -> Result<(), OutlayError> {
        record.validate()?;

        {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| OutlayError::Store(format!("Failed to acquire write lock: {}", e)))?;
            rows.push(record);
        }

        self.save()
    }

    /// Get all records in append order
    pub fn all(&self) -> Result<Vec<ExpenseRecord>, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rows.clone())
    }

    /// Get records with `start <= date <= end`, in append order
    pub fn by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExpenseRecord>, OutlayError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| OutlayError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rows
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    /// Number of stored rows
    ///
    /// Because the table is append-only this doubles as its version.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, food_cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(d).with_amount(Category::Food, Money::from_cents(food_cents))
    }

    #[test]
    fn test_append_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("daily_expenses.json");

        let log = ExpenseLog::new(path.clone());
        log.load().unwrap();
        log.append(record(date(2024, 1, 1), 5000)).unwrap();
        log.append(record(date(2024, 1, 2), 1000)).unwrap();

        let reloaded = ExpenseLog::new(path);
        reloaded.load().unwrap();
        let rows = reloaded.all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date(2024, 1, 1));
    }

    #[test]
    fn test_duplicate_dates_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let log = ExpenseLog::new(temp_dir.path().join("daily_expenses.json"));
        log.load().unwrap();

        log.append(record(date(2024, 1, 1), 100)).unwrap();
        log.append(record(date(2024, 1, 1), 200)).unwrap();

        assert_eq!(log.len().unwrap(), 2);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let temp_dir = TempDir::new().unwrap();
        let log = ExpenseLog::new(temp_dir.path().join("daily_expenses.json"));
        log.load().unwrap();

        log.append(record(date(2024, 1, 1), 100)).unwrap();
        log.append(record(date(2024, 1, 5), 200)).unwrap();
        log.append(record(date(2024, 1, 9), 300)).unwrap();

        let rows = log.by_date_range(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_append_rejects_invalid_record() {
        let temp_dir = TempDir::new().unwrap();
        let log = ExpenseLog::new(temp_dir.path().join("daily_expenses.json"));
        log.load().unwrap();

        let bad = ExpenseRecord::new(date(2024, 1, 1))
            .with_amount(Category::Food, Money::from_cents(-100));
        assert!(log.append(bad).is_err());
        assert_eq!(log.len().unwrap(), 0);
    }
}
