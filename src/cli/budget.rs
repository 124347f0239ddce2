//! Budget CLI commands
//!
//! Creating, updating, pricing and removing priced jobs. Jobs are addressed
//! by id or by name.

use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::{PressbookError, PressbookResult};
use crate::models::NewBudget;
use crate::services::BudgetService;
use crate::store::Store;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a priced job
    Add {
        /// Job name, e.g. "500 A5 flyers"
        name: String,
        /// Material cost
        #[arg(long, default_value = "0")]
        material: f64,
        /// Ink cost
        #[arg(long, default_value = "0")]
        ink: f64,
        /// Labor hours
        #[arg(long, default_value = "0")]
        hours: f64,
        /// Hourly labor rate
        #[arg(long, default_value = "0")]
        rate: f64,
        /// Fraction of fixed costs carried by this job (0-1)
        #[arg(long, default_value = "0")]
        allocation: f64,
        /// Markup percent over total cost
        #[arg(long, default_value = "0")]
        markup: f64,
    },
    /// List all jobs with computed prices
    List,
    /// Show one job's full cost breakdown
    Show {
        /// Job id or name
        identifier: String,
    },
    /// Update fields of an existing job
    Update {
        /// Job id or name
        identifier: String,
        /// New job name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        material: Option<f64>,
        #[arg(long)]
        ink: Option<f64>,
        #[arg(long)]
        hours: Option<f64>,
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long)]
        allocation: Option<f64>,
        #[arg(long)]
        markup: Option<f64>,
    },
    /// Remove a job
    Remove {
        /// Job id or name
        identifier: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PressbookResult<()> {
    match cmd {
        BudgetCommands::Add {
            name,
            material,
            ink,
            hours,
            rate,
            allocation,
            markup,
        } => {
            let budget = BudgetService::new(store).create(NewBudget {
                name,
                material_cost: material,
                ink_cost: ink,
                labor_hours: hours,
                labor_rate: rate,
                fixed_allocation: allocation,
                markup_percent: markup,
            })?;
            print!("{}", display::format_budget_details(&budget, settings));
        }
        BudgetCommands::List => {
            let budgets = BudgetService::new(store).list();
            print!("{}", display::format_budget_list(&budgets, settings));
        }
        BudgetCommands::Show { identifier } => {
            let budget = find_budget(store, &identifier)?;
            print!("{}", display::format_budget_details(&budget, settings));
        }
        BudgetCommands::Update {
            identifier,
            name,
            material,
            ink,
            hours,
            rate,
            allocation,
            markup,
        } => {
            let mut budget = find_budget(store, &identifier)?;
            if let Some(name) = name {
                budget.name = name;
            }
            if let Some(material) = material {
                budget.material_cost = material;
            }
            if let Some(ink) = ink {
                budget.ink_cost = ink;
            }
            if let Some(hours) = hours {
                budget.labor_hours = hours;
            }
            if let Some(rate) = rate {
                budget.labor_rate = rate;
            }
            if let Some(allocation) = allocation {
                budget.fixed_allocation = allocation;
            }
            if let Some(markup) = markup {
                budget.markup_percent = markup;
            }

            let updated = BudgetService::new(store).update(budget)?;
            print!("{}", display::format_budget_details(&updated, settings));
        }
        BudgetCommands::Remove { identifier } => {
            let budget = find_budget(store, &identifier)?;
            BudgetService::new(store).remove(budget.id)?;
            println!("Removed budget '{}'", budget.name);
        }
    }

    Ok(())
}

fn find_budget(store: &mut Store, identifier: &str) -> PressbookResult<crate::models::BudgetItem> {
    BudgetService::new(store)
        .find(identifier)
        .ok_or_else(|| PressbookError::budget_not_found(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_cmd(name: &str) -> BudgetCommands {
        BudgetCommands::Add {
            name: name.into(),
            material: 120.0,
            ink: 45.0,
            hours: 3.0,
            rate: 25.0,
            allocation: 0.1,
            markup: 40.0,
        }
    }

    #[test]
    fn test_add_then_remove_by_name() {
        let mut store = Store::new();
        let settings = Settings::default();

        handle_budget_command(&mut store, &settings, add_cmd("Flyers")).unwrap();
        assert_eq!(store.budgets().len(), 1);

        handle_budget_command(
            &mut store,
            &settings,
            BudgetCommands::Remove { identifier: "flyers".into() },
        )
        .unwrap();
        assert!(store.budgets().is_empty());
    }

    #[test]
    fn test_update_by_name() {
        let mut store = Store::new();
        let settings = Settings::default();

        handle_budget_command(&mut store, &settings, add_cmd("Flyers")).unwrap();
        handle_budget_command(
            &mut store,
            &settings,
            BudgetCommands::Update {
                identifier: "Flyers".into(),
                name: None,
                material: None,
                ink: None,
                hours: None,
                rate: None,
                allocation: None,
                markup: Some(-10.0),
            },
        )
        .unwrap();

        assert_eq!(store.budgets()[0].markup_percent, -10.0);
    }

    #[test]
    fn test_unknown_identifier() {
        let mut store = Store::new();
        let settings = Settings::default();
        let err = handle_budget_command(
            &mut store,
            &settings,
            BudgetCommands::Show { identifier: "nope".into() },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
