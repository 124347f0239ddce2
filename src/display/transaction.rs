//! Transaction display formatting
//!
//! Formats ledger entries as a register view, newest first, with the
//! running balance underneath.

use crate::config::Settings;
use crate::models::{Money, Transaction};

use super::truncate;

/// Format a single ledger entry as a register row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} {:10} {:30} {:>12}",
        txn.id,
        txn.date.format(&settings.date_format),
        truncate(&txn.description, 30),
        txn.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of ledger entries as a register with a balance line
pub fn format_transaction_register(
    transactions: &[Transaction],
    balance: Money,
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:30} {:>12}\n",
        "Id", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(68));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(68));
    output.push('\n');
    output.push_str(&format!(
        "Balance: {}\n",
        balance.format_with_symbol(&settings.currency_symbol)
    ));

    output
}
