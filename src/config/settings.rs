//! User settings for Outlay
//!
//! Holds display preferences and the analytics configuration (weekly budget,
//! anomaly sensitivity, classification thresholds). Everything the engine
//! tunes on lives here so thresholds can change without touching the
//! algorithms.

use serde::{Deserialize, Serialize};

use super::paths::OutlayPaths;
use crate::analytics::{BehaviorThresholds, InsightThresholds};
use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

/// User settings for Outlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default dashboard range in days when none is given
    #[serde(default = "default_range_days")]
    pub default_range_days: u32,

    /// Weekly spending budget used for burn-rate tracking
    #[serde(default = "default_weekly_budget")]
    pub weekly_budget: Money,

    /// Anomaly detection sensitivity, 1 (lenient) to 10 (strict)
    #[serde(default = "default_sensitivity")]
    pub anomaly_sensitivity: u8,

    /// How long a computed dashboard stays fresh, in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Spending behavior classification thresholds
    #[serde(default)]
    pub behavior: BehaviorThresholds,

    /// Insight generation thresholds
    #[serde(default)]
    pub insight: InsightThresholds,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₵".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_range_days() -> u32 {
    90
}

fn default_weekly_budget() -> Money {
    Money::from_units(1000)
}

fn default_sensitivity() -> u8 {
    5
}

fn default_cache_ttl() -> u64 {
    300
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_range_days: default_range_days(),
            weekly_budget: default_weekly_budget(),
            anomaly_sensitivity: default_sensitivity(),
            cache_ttl_secs: default_cache_ttl(),
            behavior: BehaviorThresholds::default(),
            insight: InsightThresholds::default(),
        }
    }
}

impl Settings {
    /// Validate settings values
    pub fn validate(&self) -> OutlayResult<()> {
        if !(1..=10).contains(&self.anomaly_sensitivity) {
            return Err(OutlayError::Validation(format!(
                "Anomaly sensitivity must be between 1 and 10, got {}",
                self.anomaly_sensitivity
            )));
        }
        if self.weekly_budget.is_negative() {
            return Err(OutlayError::Validation(
                "Weekly budget must not be negative".into(),
            ));
        }
        if self.default_range_days == 0 {
            return Err(OutlayError::Validation(
                "Default range must cover at least one day".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OutlayPaths) -> OutlayResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OutlayError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| OutlayError::Config(format!("Failed to parse settings file: {}", e)))?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OutlayPaths) -> OutlayResult<()> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OutlayError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| OutlayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
