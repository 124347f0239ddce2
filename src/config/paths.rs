//! Path management for Pressbook
//!
//! Resolves where the settings file and default export directory live.
//!
//! ## Path Resolution Order
//!
//! 1. `PRESSBOOK_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/pressbook` on Linux,
//!    the equivalent on macOS/Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{PressbookError, PressbookResult};

/// Manages all paths used by Pressbook
#[derive(Debug, Clone)]
pub struct PressbookPaths {
    /// Base directory for all Pressbook configuration
    base_dir: PathBuf,
}

impl PressbookPaths {
    /// Create a new PressbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> PressbookResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("PRESSBOOK_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PressbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default directory for exported reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> PressbookResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PressbookError::Io(format!("Failed to create config directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| PressbookError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the platform default configuration directory
fn resolve_default_path() -> PressbookResult<PathBuf> {
    ProjectDirs::from("", "", "pressbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PressbookError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PressbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("PRESSBOOK_CONFIG_DIR", custom_path);

        let paths = PressbookPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("PRESSBOOK_CONFIG_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PressbookPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
