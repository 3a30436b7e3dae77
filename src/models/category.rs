//! Expense categories
//!
//! Categories are a fixed enumerated set matching the entry form fields.
//! Amounts for categories absent from a record read as zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OutlayError;

/// A spending category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Transport fares and fuel
    Transport,
    /// Food and groceries
    Food,
    /// Mobile data and connectivity
    Data,
    /// Everything else
    Other,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Food,
        Category::Data,
        Category::Other,
    ];

    /// Lowercase name as stored in the record store
    pub fn name(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Food => "food",
            Category::Data => "data",
            Category::Other => "other",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Food => "Food",
            Category::Data => "Data",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = OutlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transport" => Ok(Category::Transport),
            "food" => Ok(Category::Food),
            "data" => Ok(Category::Data),
            "other" => Ok(Category::Other),
            _ => Err(OutlayError::Validation(format!(
                "Unknown category '{}' (expected transport, food, data, or other)",
                s
            ))),
        }
    }
}
