//! Dashboard service
//!
//! Bridges the record store and the analytics engine: resolves the
//! effective weekly budget, builds the engine configuration, and memoizes
//! computed snapshots for the configured time-to-live.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, NaiveDate};

use crate::analytics::{DashboardSnapshot, EngineConfig, SnapshotCache, SnapshotKey};
use crate::config::settings::Settings;
use crate::error::OutlayResult;
use crate::models::Money;
use crate::storage::Store;

/// Service producing dashboard snapshots from the store
pub struct DashboardService<'a> {
    store: &'a Store,
    settings: &'a Settings,
    cache: SnapshotCache,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(store: &'a Store, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            cache: SnapshotCache::new(Duration::from_secs(settings.cache_ttl_secs)),
        }
    }

    /// The weekly budget in effect for the week containing `today`
    ///
    /// The most recently appended weekly budget row covering `today` wins;
    /// with no matching row the configured default applies.
    pub fn effective_weekly_budget(&self, today: NaiveDate) -> OutlayResult<Money> {
        Ok(self
            .store
            .weekly_budgets
            .effective_for(today)?
            .map(|b| b.budget_amount)
            .unwrap_or(self.settings.weekly_budget))
    }

    /// Build the engine configuration for a query at `today`
    pub fn engine_config(&self, today: NaiveDate) -> OutlayResult<EngineConfig> {
        Ok(EngineConfig {
            weekly_budget: self.effective_weekly_budget(today)?,
            anomaly_sensitivity: self.settings.anomaly_sensitivity,
            behavior: self.settings.behavior,
            insight: self.settings.insight,
        })
    }

    /// Default dashboard range ending at `today`
    pub fn default_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let days = i64::from(self.settings.default_range_days.max(1));
        (today - ChronoDuration::days(days - 1), today)
    }

    /// Compute (or reuse) the dashboard snapshot for `[start, end]`
    pub fn snapshot(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> OutlayResult<DashboardSnapshot> {
        let key = SnapshotKey {
            data_version: self.store.data_version()?,
            start,
            end,
            today,
            config: self.engine_config(today)?,
        };

        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let records = self.store.expenses.all()?;
        let snapshot = DashboardSnapshot::compute(&records, &key.config, start, end, today);
        self.cache.put(key, snapshot.clone());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::OutlayPaths;
    use crate::models::{Category, ExpenseRecord, WeeklyBudget};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_effective_budget_prefers_stored_row() {
        let (_temp_dir, store) = test_store();
        let settings = Settings::default();

        let monday = date(2024, 1, 1);
        store
            .weekly_budgets
            .append(WeeklyBudget::new(
                monday,
                Money::from_units(500),
                Money::from_units(750),
                Money::zero(),
            ))
            .unwrap();

        let service = DashboardService::new(&store, &settings);
        assert_eq!(
            service.effective_weekly_budget(date(2024, 1, 3)).unwrap(),
            Money::from_units(750)
        );
        // Outside the stored week the configured default applies
        assert_eq!(
            service.effective_weekly_budget(date(2024, 2, 1)).unwrap(),
            settings.weekly_budget
        );
    }

    #[test]
    fn test_snapshot_reads_store() {
        let (_temp_dir, store) = test_store();
        let settings = Settings::default();

        store
            .expenses
            .append(
                ExpenseRecord::new(date(2024, 1, 2))
                    .with_amount(Category::Food, Money::from_units(80)),
            )
            .unwrap();

        let service = DashboardService::new(&store, &settings);
        let snapshot = service
            .snapshot(date(2024, 1, 1), date(2024, 1, 7), date(2024, 1, 7))
            .unwrap();

        assert!(snapshot.has_data());
        assert_eq!(snapshot.total_spend, Money::from_units(80));
    }

    #[test]
    fn test_snapshot_recomputes_after_append() {
        let (_temp_dir, store) = test_store();
        let settings = Settings::default();
        let service = DashboardService::new(&store, &settings);

        let range = (date(2024, 1, 1), date(2024, 1, 7));
        let first = service.snapshot(range.0, range.1, range.1).unwrap();
        assert!(!first.has_data());

        // The append bumps the data version, so the cached empty snapshot
        // must not be served again.
        store
            .expenses
            .append(
                ExpenseRecord::new(date(2024, 1, 2))
                    .with_amount(Category::Food, Money::from_units(25)),
            )
            .unwrap();

        let second = service.snapshot(range.0, range.1, range.1).unwrap();
        assert!(second.has_data());
    }

    #[test]
    fn test_default_range_length() {
        let (_temp_dir, store) = test_store();
        let settings = Settings::default();
        let service = DashboardService::new(&store, &settings);

        let (start, end) = service.default_range(date(2024, 4, 10));
        assert_eq!(end, date(2024, 4, 10));
        assert_eq!((end - start).num_days() + 1, 90);
    }
}
