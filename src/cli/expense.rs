//! Expense CLI commands
//!
//! Implements the daily expense entry form as CLI commands: one record per
//! submission with an amount per category.

use clap::Subcommand;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::error::OutlayResult;
use crate::models::{Category, ExpenseRecord, Money};
use crate::storage::Store;

use super::parse_date;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a day's expenses
    Add {
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Transport amount (e.g. "12.50")
        #[arg(short, long)]
        transport: Option<String>,
        /// Food amount
        #[arg(short, long)]
        food: Option<String>,
        /// Data amount
        #[arg(long)]
        data: Option<String>,
        /// Other amount
        #[arg(short, long)]
        other: Option<String>,
    },

    /// List recorded expenses
    List {
        /// Range start date (defaults to the configured range)
        #[arg(short, long)]
        start: Option<String>,
        /// Range end date (defaults to today)
        #[arg(short, long)]
        end: Option<String>,
    },
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Transport")]
    transport: String,
    #[tabled(rename = "Food")]
    food: String,
    #[tabled(rename = "Data")]
    data: String,
    #[tabled(rename = "Other")]
    other: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &Store,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> OutlayResult<()> {
    match cmd {
        ExpenseCommands::Add {
            date,
            transport,
            food,
            data,
            other,
        } => {
            let today = chrono::Local::now().date_naive();
            let date = match date {
                Some(s) => parse_date(&s, settings)?,
                None => today,
            };

            let mut record = ExpenseRecord::new(date);
            let inputs = [
                (Category::Transport, transport),
                (Category::Food, food),
                (Category::Data, data),
                (Category::Other, other),
            ];
            for (category, input) in inputs {
                if let Some(input) = input {
                    record.amounts.insert(category, Money::parse(&input)?);
                }
            }
            record.validate()?;

            let total = record.total();
            store.expenses.append(record)?;
            println!(
                "Expense saved for {} (total {})",
                date,
                total.format_with_symbol(&settings.currency_symbol)
            );
        }

        ExpenseCommands::List { start, end } => {
            let today = chrono::Local::now().date_naive();
            let end = match end {
                Some(s) => parse_date(&s, settings)?,
                None => today,
            };
            let start = match start {
                Some(s) => parse_date(&s, settings)?,
                None => end - chrono::Duration::days(i64::from(settings.default_range_days) - 1),
            };

            let records = store.expenses.by_date_range(start, end)?;
            if records.is_empty() {
                println!("No expenses recorded between {} and {}.", start, end);
                return Ok(());
            }

            let rows: Vec<ExpenseRow> = records
                .iter()
                .map(|r| ExpenseRow {
                    date: r.date.to_string(),
                    transport: r
                        .amount(Category::Transport)
                        .format_with_symbol(&settings.currency_symbol),
                    food: r
                        .amount(Category::Food)
                        .format_with_symbol(&settings.currency_symbol),
                    data: r
                        .amount(Category::Data)
                        .format_with_symbol(&settings.currency_symbol),
                    other: r
                        .amount(Category::Other)
                        .format_with_symbol(&settings.currency_symbol),
                    total: r.total().format_with_symbol(&settings.currency_symbol),
                })
                .collect();

            println!("{}", Table::new(rows).with(Style::sharp()));
        }
    }

    Ok(())
}
