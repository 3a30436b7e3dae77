//! Business logic layer
//!
//! Services sit between the CLI and the storage/analytics layers.

pub mod dashboard;

pub use dashboard::DashboardService;
