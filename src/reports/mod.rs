//! Reports module for Outlay
//!
//! Turns computed snapshots into terminal output and the summary mapping
//! consumed by the exporters.

pub mod summary;

pub use summary::SummaryReport;
