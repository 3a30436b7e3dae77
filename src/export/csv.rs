//! CSV export functionality
//!
//! Serializes the dashboard summary with its daily detail rows, and the
//! raw expense table, to spreadsheet-compatible CSV.

use std::io::Write;

use crate::analytics::DashboardSnapshot;
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Category, ExpenseRecord};
use crate::reports::SummaryReport;

fn export_err(e: csv::Error) -> OutlayError {
    OutlayError::Export(e.to_string())
}

/// Export the dashboard summary plus daily detail rows
///
/// Layout: a `Metric,Value` block with the header metrics, a separator
/// row, then one detail row per day with data.
pub fn export_dashboard_csv<W: Write>(
    snapshot: &DashboardSnapshot,
    currency: &str,
    writer: W,
) -> OutlayResult<()> {
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv_writer
        .write_record(["Metric", "Value"])
        .map_err(export_err)?;
    let report = SummaryReport::new(snapshot, currency);
    for (label, value) in report.summary_rows() {
        csv_writer
            .write_record([label.as_str(), value.as_str()])
            .map_err(export_err)?;
    }

    csv_writer.write_record([""; 2]).map_err(export_err)?;

    csv_writer
        .write_record(["Date", "Total", "7-Day Avg", "Cumulative"])
        .map_err(export_err)?;
    for ((daily, trend), cumulative) in snapshot
        .daily_series
        .iter()
        .zip(&snapshot.moving_average)
        .zip(&snapshot.cumulative_series)
    {
        csv_writer
            .write_record([
                daily.date.to_string(),
                format!("{:.2}", daily.amount.to_f64()),
                format!("{:.2}", trend.value),
                format!("{:.2}", cumulative.amount.to_f64()),
            ])
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(|e| OutlayError::Export(e.to_string()))
}

/// Export raw expense records, one row per record
pub fn export_records_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> OutlayResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["expense_date".to_string()];
    header.extend(Category::ALL.iter().map(|c| c.name().to_string()));
    header.push("total".to_string());
    csv_writer.write_record(&header).map_err(export_err)?;

    for record in records {
        let mut row = vec![record.date.to_string()];
        row.extend(
            Category::ALL
                .iter()
                .map(|&c| format!("{:.2}", record.amount(c).to_f64())),
        );
        row.push(format!("{:.2}", record.total().to_f64()));
        csv_writer.write_record(&row).map_err(export_err)?;
    }

    csv_writer.flush().map_err(|e| OutlayError::Export(e.to_string()))
}
