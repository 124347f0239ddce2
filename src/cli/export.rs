//! Export CLI commands
//!
//! Writes CSV/JSON/YAML exports to a file when `--output` is given, or to
//! stdout otherwise. The export functions themselves only ever see an
//! `io::Write` sink and stay unaware of the destination.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use crate::error::{PressbookError, PressbookResult};
use crate::export;
use crate::store::Store;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the transaction ledger as CSV
    Transactions {
        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the inventory list as CSV
    Inventory {
        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export ledger and inventory as JSON
    Json {
        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export ledger and inventory as YAML
    Yaml {
        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(store: &Store, cmd: ExportCommands) -> PressbookResult<()> {
    match cmd {
        ExportCommands::Transactions { output } => {
            write_to_sink(output, |sink| export::export_transactions_csv(store, sink))
        }
        ExportCommands::Inventory { output } => {
            write_to_sink(output, |sink| export::export_inventory_csv(store, sink))
        }
        ExportCommands::Json { output } => {
            write_to_sink(output, |sink| export::export_full_json(store, sink))
        }
        ExportCommands::Yaml { output } => {
            write_to_sink(output, |sink| export::export_full_yaml(store, sink))
        }
    }
}

/// Run an export against a file sink or stdout
fn write_to_sink<F>(output: Option<PathBuf>, export_fn: F) -> PressbookResult<()>
where
    F: FnOnce(&mut dyn Write) -> PressbookResult<()>,
{
    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .map_err(|e| PressbookError::Export(format!("{}: {}", path.display(), e)))?;
            export_fn(&mut file)?;
            info!(path = %path.display(), "export written");
            eprintln!("Exported to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_fn(&mut handle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        let store = Store::with_sample_data();

        handle_export_command(
            &store,
            ExportCommands::Transactions { output: Some(path.clone()) },
        )
        .unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("id,date,description,amount"));
        assert!(contents.contains("Flyer sale"));
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let store = Store::new();
        let err = handle_export_command(
            &store,
            ExportCommands::Json {
                output: Some(PathBuf::from("/nonexistent-dir/export.json")),
            },
        )
        .unwrap_err();
        assert!(matches!(err, PressbookError::Export(_)));
    }
}
