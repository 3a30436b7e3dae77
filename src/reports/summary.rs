//! Dashboard summary report
//!
//! Renders a computed [`DashboardSnapshot`] for the terminal and produces
//! the label/value summary the exporters serialize.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analytics::{sort_by_deviation, DashboardSnapshot};

/// Row of the category breakdown table
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "%")]
    percentage: String,
}

/// Row of the day-of-week table
#[derive(Tabled)]
struct WeekdayRow {
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Total")]
    sum: String,
    #[tabled(rename = "Records")]
    count: usize,
    #[tabled(rename = "Mean")]
    mean: String,
}

/// Row of the anomaly table
#[derive(Tabled)]
struct AnomalyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Z-Score")]
    z_score: String,
    #[tabled(rename = "Severity")]
    severity: String,
}

/// Terminal-facing summary of a dashboard snapshot
pub struct SummaryReport<'a> {
    snapshot: &'a DashboardSnapshot,
    currency: &'a str,
}

impl<'a> SummaryReport<'a> {
    /// Build a report over a computed snapshot
    pub fn new(snapshot: &'a DashboardSnapshot, currency: &'a str) -> Self {
        Self { snapshot, currency }
    }

    /// Label/value pairs for the header metrics
    ///
    /// Also the `summary` mapping handed to the exporters.
    pub fn summary_rows(&self) -> Vec<(String, String)> {
        let s = self.snapshot;
        vec![
            (
                "Period".into(),
                format!("{} to {}", s.start, s.end),
            ),
            (
                "Total Spend".into(),
                s.total_spend.format_with_symbol(self.currency),
            ),
            (
                "Avg Daily Spend".into(),
                format!("{}{:.2}", self.currency, s.avg_daily_spend),
            ),
            (
                "Max Daily Spend".into(),
                s.max_daily_spend.format_with_symbol(self.currency),
            ),
            (
                "Min Daily Spend".into(),
                s.min_daily_spend.format_with_symbol(self.currency),
            ),
            ("Records".into(), s.record_count.to_string()),
            ("Days With Data".into(), s.days_with_data.to_string()),
            (
                "Weekly Budget Used".into(),
                format!("{:.1}%", s.burn_rate),
            ),
            ("Spending Profile".into(), s.behavior.label().into()),
            (
                "vs Previous Period".into(),
                format!(
                    "{} ({:+.1}%)",
                    s.spend_change.format_with_symbol(self.currency),
                    s.spend_change_pct
                ),
            ),
        ]
    }

    /// Format the full report for terminal display
    pub fn format_terminal(&self) -> String {
        let s = self.snapshot;
        let mut output = String::new();

        output.push_str(&format!("Spending Dashboard: {} to {}\n", s.start, s.end));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if !s.has_data() {
            output.push_str("No expense data found for the selected date range.\n");
            return output;
        }

        for (label, value) in self.summary_rows() {
            output.push_str(&format!("{:<22} {}\n", format!("{}:", label), value));
        }

        // Insights
        if !s.insights.is_empty() {
            output.push_str("\nInsights\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for insight in &s.insights {
                output.push_str(&format!("* {}\n", insight.message));
                if let Some(suggestion) = &insight.suggestion {
                    output.push_str(&format!("  {}\n", suggestion));
                }
            }
        }

        // Category breakdown
        output.push_str("\nCategory Breakdown\n");
        let category_rows: Vec<CategoryRow> = s
            .category_breakdown
            .iter()
            .map(|share| CategoryRow {
                category: share.category.label().into(),
                amount: share.amount.format_with_symbol(self.currency),
                percentage: format!("{:.1}", share.percentage),
            })
            .collect();
        output.push_str(&Table::new(category_rows).with(Style::sharp()).to_string());
        output.push('\n');

        // Day-of-week profile
        output.push_str("\nWeekly Pattern\n");
        let weekday_rows: Vec<WeekdayRow> = s
            .day_of_week_profile
            .iter()
            .map(|stats| WeekdayRow {
                weekday: stats.weekday.clone(),
                sum: stats.sum.format_with_symbol(self.currency),
                count: stats.count,
                mean: format!("{}{:.2}", self.currency, stats.mean),
            })
            .collect();
        output.push_str(&Table::new(weekday_rows).with(Style::sharp()).to_string());
        output.push('\n');

        // Anomalies, largest deviation first
        output.push_str("\nAnomalies\n");
        if s.anomalies.is_empty() {
            output.push_str("No significant anomalies detected.\n");
        } else {
            let mut anomalies = s.anomalies.clone();
            sort_by_deviation(&mut anomalies);
            let anomaly_rows: Vec<AnomalyRow> = anomalies
                .iter()
                .map(|a| AnomalyRow {
                    date: a.date.to_string(),
                    amount: a.amount.format_with_symbol(self.currency),
                    z_score: format!("{:+.2}", a.z_score),
                    severity: a.severity.label().into(),
                })
                .collect();
            output.push_str(&Table::new(anomaly_rows).with(Style::sharp()).to_string());
            output.push('\n');
        }

        output
    }
}
