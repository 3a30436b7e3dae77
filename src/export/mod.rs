//! Export module for Outlay
//!
//! Serializes dashboard summaries and raw expense data:
//! - CSV: summary with daily detail rows, and the raw expense table
//! - JSON: the full dashboard snapshot

pub mod csv;
pub mod json;

pub use csv::{export_dashboard_csv, export_records_csv};
pub use json::export_snapshot_json;
