//! Export module for Pressbook
//!
//! Serializes the ledger and inventory for consumption outside the app:
//! - CSV: flat transaction/inventory tables (spreadsheet-compatible)
//! - JSON: machine-readable full export with schema versioning
//! - YAML: human-readable rendering of the same export
//!
//! Every export function writes to an injected [`std::io::Write`] sink; the
//! domain layer never knows whether the bytes end up in a file, a pipe, or a
//! test buffer.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_inventory_csv, export_transactions_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
