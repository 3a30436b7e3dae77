//! Outlay - Terminal-based personal expense tracking and analytics
//!
//! This library provides the core functionality for the Outlay expense
//! tracker: daily expenses and budgets are appended to a file-backed
//! record store, and a dashboard computes summary statistics, trend
//! series, anomaly flags, and insights over the recorded history.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, budgets, money)
//! - `storage`: Append-only JSON record store
//! - `analytics`: The expense analytics engine
//! - `services`: Business logic layer
//! - `reports`: Terminal report rendering
//! - `export`: CSV and JSON exporters
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay_cli::config::{paths::OutlayPaths, settings::Settings};
//!
//! let paths = OutlayPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::OutlayError;
