//! Config CLI commands
//!
//! Shows where the settings file lives and lets the user change the
//! cost-center numbers that drive pricing and the break-even report.

use clap::Subcommand;

use crate::config::{PressbookPaths, Settings};
use crate::error::{PressbookError, PressbookResult};

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Change settings and persist them
    Set {
        /// Monthly fixed cost base (rent, utilities, salaries)
        #[arg(long)]
        fixed_costs: Option<f64>,
        /// Average contribution-margin ratio, e.g. 0.4
        #[arg(long)]
        contribution_ratio: Option<f64>,
        /// Currency symbol used for display
        #[arg(long)]
        currency: Option<String>,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &PressbookPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> PressbookResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Config file:          {}", paths.settings_file().display());
            println!("Export directory:     {}", paths.export_dir().display());
            println!("Currency symbol:      {}", settings.currency_symbol);
            println!("Date format:          {}", settings.date_format);
            println!("Monthly fixed costs:  {:.2}", settings.monthly_fixed_costs);
            println!("Contribution ratio:   {:.2}", settings.avg_contribution_ratio);
        }
        ConfigCommands::Set {
            fixed_costs,
            contribution_ratio,
            currency,
        } => {
            if let Some(fixed_costs) = fixed_costs {
                if fixed_costs < 0.0 {
                    return Err(PressbookError::Validation(
                        "Fixed costs must not be negative".into(),
                    ));
                }
                settings.monthly_fixed_costs = fixed_costs;
            }
            if let Some(ratio) = contribution_ratio {
                settings.avg_contribution_ratio = ratio;
            }
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }

            settings.save(paths)?;
            println!("Settings saved to {}", paths.settings_file().display());
        }
    }

    Ok(())
}
