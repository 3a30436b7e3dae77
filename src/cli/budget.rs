//! Budget CLI commands
//!
//! Implements the weekly and daily budget setup forms. Saves are appends:
//! resubmitting a period adds a new row, and the most recent row wins.

use clap::Subcommand;

use crate::analytics::current_week_window;
use crate::config::settings::Settings;
use crate::error::OutlayResult;
use crate::models::{DailyBudget, Money, WeeklyBudget};
use crate::storage::Store;

use super::parse_date;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Declare a weekly budget
    SetWeekly {
        /// Week start date (defaults to the current week's Monday)
        #[arg(short, long)]
        week_start: Option<String>,
        /// Money available for the week
        #[arg(short, long, default_value = "0")]
        available: String,
        /// Budget for the week
        budget: String,
        /// Expected income for the week
        #[arg(short, long, default_value = "0")]
        income: String,
    },

    /// Declare a daily budget
    SetDaily {
        /// Budget date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Budget amount for the day
        amount: String,
    },

    /// Show the budgets in effect for a date
    Show {
        /// Date to inspect (defaults to today)
        date: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> OutlayResult<()> {
    let today = chrono::Local::now().date_naive();

    match cmd {
        BudgetCommands::SetWeekly {
            week_start,
            available,
            budget,
            income,
        } => {
            let week_start = match week_start {
                Some(s) => parse_date(&s, settings)?,
                None => current_week_window(today).0,
            };

            let row = WeeklyBudget::new(
                week_start,
                Money::parse(&available)?,
                Money::parse(&budget)?,
                Money::parse(&income)?,
            );
            row.validate()?;
            store.weekly_budgets.append(row)?;

            println!(
                "Weekly budget saved: {} for the week of {}",
                row.budget_amount.format_with_symbol(&settings.currency_symbol),
                week_start
            );
        }

        BudgetCommands::SetDaily { date, amount } => {
            let date = match date {
                Some(s) => parse_date(&s, settings)?,
                None => today,
            };

            let row = DailyBudget::new(date, Money::parse(&amount)?);
            row.validate()?;
            store.daily_budgets.append(row)?;

            println!(
                "Daily budget saved: {} for {}",
                row.budget_amount.format_with_symbol(&settings.currency_symbol),
                date
            );
        }

        BudgetCommands::Show { date } => {
            let date = match date {
                Some(s) => parse_date(&s, settings)?,
                None => today,
            };

            match store.weekly_budgets.effective_for(date)? {
                Some(weekly) => println!(
                    "Weekly budget for the week of {}: {} (available {}, expected income {})",
                    weekly.week_start,
                    weekly
                        .budget_amount
                        .format_with_symbol(&settings.currency_symbol),
                    weekly
                        .money_available
                        .format_with_symbol(&settings.currency_symbol),
                    weekly
                        .expected_income
                        .format_with_symbol(&settings.currency_symbol),
                ),
                None => println!(
                    "No weekly budget stored for {}; default is {}",
                    date,
                    settings
                        .weekly_budget
                        .format_with_symbol(&settings.currency_symbol)
                ),
            }

            match store.daily_budgets.effective_for(date)? {
                Some(daily) => println!(
                    "Daily budget for {}: {}",
                    date,
                    daily
                        .budget_amount
                        .format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("No daily budget stored for {}.", date),
            }
        }
    }

    Ok(())
}
