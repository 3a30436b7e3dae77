//! Expense analytics engine
//!
//! Consumes the flat, append-only collection of expense records plus a
//! budget configuration and produces derived metrics, trend series,
//! anomaly flags, and insights for display. The engine is stateless and
//! pure: it never mutates its inputs, and identical inputs produce
//! identical output.
//!
//! - `metrics`: range-scoped totals, breakdowns, and series
//! - `budget`: burn rate, week windows, behavior classification
//! - `anomaly`: z-score anomaly detection over a zero-filled daily grid
//! - `insights`: threshold-driven human-readable observations
//! - `snapshot`: the [`DashboardSnapshot`] aggregate tying it together
//! - `cache`: short-TTL memoization of computed snapshots

pub mod anomaly;
pub mod budget;
pub mod cache;
pub mod insights;
pub mod metrics;
pub mod snapshot;

pub use anomaly::{detect_anomalies, sort_by_deviation, AnomalyRecord, Severity};
pub use budget::{
    burn_rate, classify_behavior, current_week_window, period_over_period_change,
    BehaviorClass, BehaviorThresholds,
};
pub use cache::{SnapshotCache, SnapshotKey};
pub use insights::{generate_insights, Insight, InsightKind, InsightThresholds};
pub use metrics::{
    category_breakdown, cumulative_series, daily_series, day_of_week_profile,
    filled_daily_series, moving_average, total_spend, weekly_series, CategoryShare,
    SeriesPoint, WeekdayStats,
};
pub use snapshot::{DashboardSnapshot, EngineConfig, TrendPoint};
