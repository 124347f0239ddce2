//! User settings for Pressbook
//!
//! The cost-center numbers that drive pricing and the break-even report live
//! here rather than in the domain store: the shop's monthly fixed-cost base
//! and its average contribution-margin ratio, plus display preferences.

use serde::{Deserialize, Serialize};

use super::paths::PressbookPaths;
use crate::error::{PressbookError, PressbookResult};

/// User settings for Pressbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// The shop's monthly fixed cost base (rent, utilities, salaries),
    /// allocated across priced jobs and used by the break-even report
    #[serde(default = "default_fixed_costs")]
    pub monthly_fixed_costs: f64,

    /// Average contribution-margin ratio across jobs, e.g. 0.4 for 40%
    #[serde(default = "default_contribution_ratio")]
    pub avg_contribution_ratio: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_fixed_costs() -> f64 {
    5000.0
}

fn default_contribution_ratio() -> f64 {
    0.4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            monthly_fixed_costs: default_fixed_costs(),
            avg_contribution_ratio: default_contribution_ratio(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PressbookPaths) -> PressbookResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PressbookError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PressbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Default settings; the caller decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PressbookPaths) -> PressbookResult<()> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PressbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PressbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.monthly_fixed_costs, 5000.0);
        assert_eq!(settings.avg_contribution_ratio, 0.4);
    }

    #[test]
    fn test_load_or_create_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PressbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.monthly_fixed_costs, 5000.0);
        // Nothing persisted yet
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PressbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_fixed_costs = 7200.0;
        settings.currency_symbol = "R$".into();
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.monthly_fixed_costs, 7200.0);
        assert_eq!(reloaded.currency_symbol, "R$");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PressbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "R$"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.avg_contribution_ratio, 0.4);
    }
}
