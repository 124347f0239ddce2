//! Budget display formatting
//!
//! Renders priced jobs as cards: name, quoted price, and total cost, with a
//! full cost breakdown in the detail view.

use crate::config::Settings;
use crate::models::BudgetItem;

use super::{format_currency, truncate};

/// Format the budget list with each job's computed price
pub fn format_budget_list(budgets: &[BudgetItem], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets saved yet.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:24} {:>12} {:>12} {:>9}\n",
        "Id", "Name", "Price", "Cost", "Markup"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for budget in budgets {
        let breakdown = budget.price_breakdown(settings.monthly_fixed_costs);
        output.push_str(&format!(
            "{} {:24} {:>12} {:>12} {:>8}%\n",
            budget.id,
            truncate(&budget.name, 24),
            format_currency(breakdown.price, symbol),
            format_currency(breakdown.total_cost, symbol),
            budget.markup_percent,
        ));
    }

    output
}

/// Format a single budget with its full cost breakdown
pub fn format_budget_details(budget: &BudgetItem, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let breakdown = budget.price_breakdown(settings.monthly_fixed_costs);

    let mut output = String::new();
    output.push_str(&format!("Budget:          {}\n", budget.name));
    output.push_str(&format!("Id:              {}\n", budget.id));
    output.push_str(&format!(
        "Material cost:   {}\n",
        format_currency(budget.material_cost, symbol)
    ));
    output.push_str(&format!(
        "Ink cost:        {}\n",
        format_currency(budget.ink_cost, symbol)
    ));
    output.push_str(&format!(
        "Labor:           {} h x {}\n",
        budget.labor_hours,
        format_currency(budget.labor_rate, symbol)
    ));
    output.push_str(&format!(
        "Direct cost:     {}\n",
        format_currency(breakdown.direct_cost, symbol)
    ));
    output.push_str(&format!(
        "Fixed share:     {} ({} of {})\n",
        format_currency(breakdown.fixed_allocated, symbol),
        budget.fixed_allocation,
        format_currency(settings.monthly_fixed_costs, symbol)
    ));
    output.push_str(&format!(
        "Total cost:      {}\n",
        format_currency(breakdown.total_cost, symbol)
    ));
    output.push_str(&format!("Markup:          {}%\n", budget.markup_percent));
    output.push_str(&format!(
        "Price:           {}\n",
        format_currency(breakdown.price, symbol)
    ));

    output
}
