//! Configuration module for Outlay
//!
//! This module provides configuration management including:
//! - Platform path resolution for the record store
//! - User settings persistence
//! - Analytics thresholds and preferences

pub mod paths;
pub mod settings;

pub use paths::OutlayPaths;
pub use settings::Settings;
