//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod export;

pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{OutlayError, OutlayResult};

/// Parse a date argument using the configured date format
pub fn parse_date(input: &str, settings: &Settings) -> OutlayResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), &settings.date_format).map_err(|_| {
        OutlayError::Validation(format!(
            "Invalid date '{}' (expected format {})",
            input, settings.date_format
        ))
    })
}
