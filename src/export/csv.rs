//! CSV Export functionality
//!
//! Exports the transaction ledger and the inventory list as flat CSV tables.

use std::io::Write;

use crate::error::{PressbookError, PressbookResult};
use crate::store::Store;

/// Export all ledger entries to CSV, newest first
///
/// Columns: `id,date,description,amount`, amounts in major units with two
/// decimals.
pub fn export_transactions_csv<W: Write>(store: &Store, writer: W) -> PressbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["id", "date", "description", "amount"])?;

    for txn in store.transactions() {
        csv_writer.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            format!("{:.2}", txn.amount.to_major_units()),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| PressbookError::Export(e.to_string()))?;
    Ok(())
}

/// Export the inventory list to CSV, seed order
pub fn export_inventory_csv<W: Write>(store: &Store, writer: W) -> PressbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["id", "name", "quantity", "unit", "reorder_threshold", "low_stock"])?;

    for item in store.inventory() {
        csv_writer.write_record([
            item.id.as_uuid().to_string(),
            item.name.clone(),
            item.quantity.to_string(),
            item.unit.clone(),
            item.reorder_threshold.to_string(),
            item.is_low_stock().to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| PressbookError::Export(e.to_string()))?;
    Ok(())
}
