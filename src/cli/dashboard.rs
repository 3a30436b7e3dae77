//! Dashboard CLI command
//!
//! Computes the analytics snapshot over a date range and renders it for
//! the terminal.

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{OutlayError, OutlayResult};
use crate::reports::SummaryReport;
use crate::services::DashboardService;
use crate::storage::Store;

use super::parse_date;

/// Dashboard arguments
#[derive(Args)]
pub struct DashboardArgs {
    /// Range start date (defaults to the configured range)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Range end date (defaults to today)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Range length in days ending today (overrides the configured range)
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub days: Option<u32>,

    /// Anomaly detection sensitivity override, 1-10
    #[arg(long)]
    pub sensitivity: Option<u8>,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    store: &Store,
    settings: &Settings,
    args: DashboardArgs,
) -> OutlayResult<()> {
    let today = chrono::Local::now().date_naive();

    let mut settings = settings.clone();
    if let Some(sensitivity) = args.sensitivity {
        if !(1..=10).contains(&sensitivity) {
            return Err(OutlayError::Validation(format!(
                "Anomaly sensitivity must be between 1 and 10, got {}",
                sensitivity
            )));
        }
        settings.anomaly_sensitivity = sensitivity;
    }

    let service = DashboardService::new(store, &settings);

    let end = match &args.end {
        Some(s) => parse_date(s, &settings)?,
        None => today,
    };
    let start = match (&args.start, args.days) {
        (Some(s), _) => parse_date(s, &settings)?,
        (None, Some(days)) => end - chrono::Duration::days(i64::from(days.max(1)) - 1),
        (None, None) => service.default_range(end).0,
    };

    if start > end {
        return Err(OutlayError::Validation(format!(
            "Range start {} is after range end {}",
            start, end
        )));
    }

    let snapshot = service.snapshot(start, end, today)?;
    let report = SummaryReport::new(&snapshot, &settings.currency_symbol);
    print!("{}", report.format_terminal());

    Ok(())
}
