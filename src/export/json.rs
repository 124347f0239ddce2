//! JSON Export functionality
//!
//! Exports the ledger and inventory to a single JSON document with schema
//! versioning, mirroring what the share/download screen hands to other tools.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PressbookResult;
use crate::models::{InventoryItem, Transaction};
use crate::store::Store;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure: the ledger plus the inventory snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All ledger entries, newest first
    pub transactions: Vec<Transaction>,

    /// All inventory items
    pub inventory: Vec<InventoryItem>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of ledger entries
    pub transaction_count: usize,

    /// Total number of inventory items
    pub inventory_count: usize,

    /// Number of items at or below their reorder threshold
    pub low_stock_count: usize,

    /// Date of the earliest ledger entry
    pub earliest_transaction: Option<String>,

    /// Date of the latest ledger entry
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from the store
    pub fn from_store(store: &Store) -> Self {
        let transactions = store.transactions().to_vec();
        let inventory = store.inventory().to_vec();

        let earliest_transaction = transactions.iter().map(|t| t.date).min().map(|d| d.to_string());
        let latest_transaction = transactions.iter().map(|t| t.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            inventory_count: inventory.len(),
            low_stock_count: store.low_stock().len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            inventory,
            metadata,
        }
    }
}

/// Write the full export as pretty-printed JSON
pub fn export_full_json<W: Write>(store: &Store, writer: W) -> PressbookResult<()> {
    let export = FullExport::from_store(store);
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}
