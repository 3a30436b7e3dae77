use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay_cli::cli::{
    handle_budget_command, handle_dashboard_command, handle_expense_command,
    handle_export_command, BudgetCommands, DashboardArgs, ExpenseCommands, ExportArgs,
};
use outlay_cli::config::{paths::OutlayPaths, settings::Settings};
use outlay_cli::storage::Store;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based personal expense tracking and spending analytics",
    long_about = "Outlay records daily expenses and budgets in an append-only \
                  store and computes spending summaries, trends, anomalies, \
                  and insights over the recorded history."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense entry commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget setup commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the spending dashboard
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Export the dashboard or raw data
    Export(ExportArgs),

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Expense(cmd) => {
            let store = open_store(&paths)?;
            handle_expense_command(&store, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            let store = open_store(&paths)?;
            handle_budget_command(&store, &settings, cmd)?;
        }
        Commands::Dashboard(args) => {
            let store = open_store(&paths)?;
            handle_dashboard_command(&store, &settings, args)?;
        }
        Commands::Export(args) => {
            let store = open_store(&paths)?;
            handle_export_command(&store, &settings, args)?;
        }
        Commands::Init => {
            paths.ensure_directories()?;
            if paths.is_initialized() {
                println!("Already initialized at {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized Outlay at {}", paths.base_dir().display());
            }
        }
        Commands::Config => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
            println!("Default range:   {} days", settings.default_range_days);
            println!(
                "Weekly budget:   {}",
                settings
                    .weekly_budget
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("Sensitivity:     {}", settings.anomaly_sensitivity);
        }
    }

    Ok(())
}

fn open_store(paths: &OutlayPaths) -> Result<Store> {
    let store = Store::new(paths.clone())?;
    store.load_all()?;
    Ok(store)
}
