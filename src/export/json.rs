//! JSON export functionality
//!
//! Serializes a full dashboard snapshot for machine-readable consumption.

use std::io::Write;

use crate::analytics::DashboardSnapshot;
use crate::error::{OutlayError, OutlayResult};

/// Export a dashboard snapshot as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(
    snapshot: &DashboardSnapshot,
    writer: W,
) -> OutlayResult<()> {
    serde_json::to_writer_pretty(writer, snapshot)
        .map_err(|e| OutlayError::Export(e.to_string()))
}
