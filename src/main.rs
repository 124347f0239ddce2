use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pressbook_cli::cli::{
    handle_budget_command, handle_config_command, handle_export_command,
    handle_inventory_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ConfigCommands, ExportCommands, InventoryCommands, ReportCommands, TransactionCommands,
};
use pressbook_cli::config::{PressbookPaths, Settings};
use pressbook_cli::store::Store;

#[derive(Parser)]
#[command(
    name = "pressbook",
    version,
    about = "Terminal-based business management for small print & graphics shops",
    long_about = "Pressbook keeps a print shop's books from the terminal: a cash-flow \
                  ledger, job costing with markup pricing, inventory with reorder \
                  alerts, and income/break-even reports with CSV, JSON and YAML export."
)]
struct Cli {
    /// Start from an empty ledger instead of the bundled sample data
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ledger management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Job costing and pricing commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Inventory management commands
    #[command(subcommand, alias = "inv")]
    Inventory(InventoryCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data as CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PressbookPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut store = if cli.empty {
        Store::new()
    } else {
        Store::with_sample_data()
    };

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Inventory(cmd)) => {
            handle_inventory_command(&mut store, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&store, cmd)?;
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        None => {
            // Default view mirrors the app's home screen: the full summary
            handle_report_command(&store, &settings, ReportCommands::Summary)?;
        }
    }

    Ok(())
}
