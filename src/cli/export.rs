//! Export CLI command
//!
//! Serializes the dashboard summary or the raw expense table to a file or
//! stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{OutlayError, OutlayResult};
use crate::export::{export_dashboard_csv, export_records_csv, export_snapshot_json};
use crate::services::DashboardService;
use crate::storage::Store;

use super::parse_date;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Dashboard summary with daily detail rows (CSV)
    Csv,
    /// Full dashboard snapshot (JSON)
    Json,
    /// Raw expense rows (CSV)
    Records,
}

/// Export arguments
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Range start date (defaults to the configured range)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Range end date (defaults to today)
    #[arg(short, long)]
    pub end: Option<String>,
}

/// Handle the export command
pub fn handle_export_command(
    store: &Store,
    settings: &Settings,
    args: ExportArgs,
) -> OutlayResult<()> {
    let today = chrono::Local::now().date_naive();
    let service = DashboardService::new(store, settings);

    let end = match &args.end {
        Some(s) => parse_date(s, settings)?,
        None => today,
    };
    let start = match &args.start {
        Some(s) => parse_date(s, settings)?,
        None => service.default_range(end).0,
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|e| OutlayError::Export(format!("Failed to create {}: {}", path.display(), e)))?,
        ),
        None => Box::new(io::stdout()),
    };

    match args.format {
        ExportFormat::Csv => {
            let snapshot = service.snapshot(start, end, today)?;
            export_dashboard_csv(&snapshot, &settings.currency_symbol, writer)?;
        }
        ExportFormat::Json => {
            let snapshot = service.snapshot(start, end, today)?;
            export_snapshot_json(&snapshot, writer)?;
        }
        ExportFormat::Records => {
            let records = store.expenses.by_date_range(start, end)?;
            export_records_csv(&records, writer)?;
        }
    }

    if let Some(path) = &args.output {
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}
