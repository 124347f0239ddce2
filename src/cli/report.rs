//! Report CLI commands
//!
//! The reports screen in terminal form: income statement, break-even
//! estimate, monthly cash flow, and a combined summary with stock alerts.

use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::PressbookResult;
use crate::reports::{self, BreakevenEstimate, IncomeStatement};
use crate::store::Store;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Revenue, expenses and profit over the whole ledger
    Income,
    /// Break-even revenue from fixed costs and contribution ratio
    Breakeven,
    /// Net cash flow per calendar month, most recent first
    Monthly,
    /// Income statement, break-even and stock alerts in one view
    Summary,
}

/// Handle a report command
pub fn handle_report_command(
    store: &Store,
    settings: &Settings,
    cmd: ReportCommands,
) -> PressbookResult<()> {
    match cmd {
        ReportCommands::Income => {
            let statement = IncomeStatement::from_transactions(store.transactions());
            print!("{}", display::format_income_statement(&statement, settings));
        }
        ReportCommands::Breakeven => {
            let estimate = BreakevenEstimate::new(
                settings.monthly_fixed_costs,
                settings.avg_contribution_ratio,
            );
            print!("{}", display::format_breakeven(&estimate, settings));
        }
        ReportCommands::Monthly => {
            let totals = reports::monthly_totals(store.transactions());
            print!("{}", display::format_monthly_totals(&totals, settings));
        }
        ReportCommands::Summary => {
            let statement = IncomeStatement::from_transactions(store.transactions());
            let estimate = BreakevenEstimate::new(
                settings.monthly_fixed_costs,
                settings.avg_contribution_ratio,
            );
            let low: Vec<_> = store.low_stock().into_iter().cloned().collect();

            print!("{}", display::format_income_statement(&statement, settings));
            println!();
            print!("{}", display::format_breakeven(&estimate, settings));
            println!();
            print!("{}", display::format_low_stock_alerts(&low));
        }
    }

    Ok(())
}
