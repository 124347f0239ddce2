//! Transaction CLI commands
//!
//! Recording and listing ledger entries, plus the current balance.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::{PressbookError, PressbookResult};
use crate::models::Money;
use crate::services::{RecordEntryInput, TransactionService};
use crate::store::Store;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a ledger entry
    Add {
        /// What the money moved for
        description: String,
        /// Amount, e.g. "1200" or "420.50"; negative values are expenses
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Entry date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Record as an expense (negates a positive amount)
        #[arg(short, long)]
        expense: bool,
    },
    /// List ledger entries, newest first
    List {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the current balance
    Balance,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut Store,
    settings: &Settings,
    cmd: TransactionCommands,
) -> PressbookResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            date,
            expense,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| PressbookError::Validation(e.to_string()))?;
            let amount = if expense && amount.is_positive() {
                -amount
            } else {
                amount
            };
            let date = date.map(|d| parse_date(&d)).transpose()?;

            let txn = TransactionService::new(store).record(RecordEntryInput {
                date,
                description,
                amount,
            })?;

            println!("Recorded: {}", display::format_transaction_row(&txn, settings));
        }
        TransactionCommands::List { limit } => {
            let service = TransactionService::new(store);
            let transactions = service.list(limit);
            let balance = service.balance();
            print!(
                "{}",
                display::format_transaction_register(&transactions, balance, settings)
            );
        }
        TransactionCommands::Balance => {
            let balance = store.balance();
            println!(
                "Balance: {}",
                balance.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date argument
fn parse_date(s: &str) -> PressbookResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| PressbookError::Validation(format!("Invalid date '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-09-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert!(parse_date("01/09/2025").unwrap_err().is_validation());
        assert!(parse_date("2025-13-01").unwrap_err().is_validation());
    }

    #[test]
    fn test_add_records_entry() {
        let mut store = Store::new();
        let settings = Settings::default();

        handle_transaction_command(
            &mut store,
            &settings,
            TransactionCommands::Add {
                description: "Vinyl order".into(),
                amount: "350".into(),
                date: Some("2025-09-02".into()),
                expense: true,
            },
        )
        .unwrap();

        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].amount, Money::from_cents(-35000));
    }
}
