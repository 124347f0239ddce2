//! YAML Export functionality
//!
//! Human-readable rendering of the full export, with a short header comment.

use std::io::Write;

use crate::error::{PressbookError, PressbookResult};
use crate::export::json::FullExport;
use crate::store::Store;

/// Export the ledger and inventory to YAML format
pub fn export_full_yaml<W: Write>(store: &Store, mut writer: W) -> PressbookResult<()> {
    let export = FullExport::from_store(store);

    writeln!(writer, "# Pressbook Full Export")
        .map_err(|e| PressbookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PressbookError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| PressbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PressbookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let store = Store::with_sample_data();

        let mut yaml_output = Vec::new();
        export_full_yaml(&store, &mut yaml_output).unwrap();
        let yaml_string = String::from_utf8(yaml_output).unwrap();

        assert!(yaml_string.contains("# Pressbook Full Export"));
        assert!(yaml_string.contains("Poster printing"));
        assert!(yaml_string.contains("A3 paper"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let store = Store::with_sample_data();

        let mut yaml_output = Vec::new();
        export_full_yaml(&store, &mut yaml_output).unwrap();
        let yaml_string = String::from_utf8(yaml_output).unwrap();

        let yaml_content: String = yaml_string
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        let imported: FullExport = serde_yaml::from_str(&yaml_content).unwrap();
        assert_eq!(imported.transactions.len(), 4);
        assert_eq!(imported.inventory.len(), 3);
    }
}
