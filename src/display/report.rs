//! Report display formatting
//!
//! Renders the income statement, the break-even estimate and the monthly
//! cash-flow table.

use crate::config::Settings;
use crate::reports::{BreakevenEstimate, IncomeStatement, MonthlyTotal};

use super::format_currency;

/// Format the income statement summary
pub fn format_income_statement(statement: &IncomeStatement, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Income Statement\n");
    output.push_str(&"=".repeat(32));
    output.push('\n');
    output.push_str(&format!(
        "Revenue:      {:>14}\n",
        statement.revenue.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses:     {:>14}\n",
        statement.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Profit/Loss:  {:>14}\n",
        statement.profit.format_with_symbol(symbol)
    ));

    output
}

/// Format the break-even estimate
pub fn format_breakeven(estimate: &BreakevenEstimate, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Break-even (estimated)\n");
    output.push_str(&"=".repeat(32));
    output.push('\n');
    output.push_str(&format!(
        "Fixed costs:          {}\n",
        format_currency(estimate.fixed_costs, symbol)
    ));
    output.push_str(&format!(
        "Contribution ratio:   {:.0}%\n",
        estimate.contribution_ratio * 100.0
    ));

    if estimate.revenue_needed > 0.0 {
        output.push_str(&format!(
            "Revenue needed:       {}\n",
            format_currency(estimate.revenue_needed, symbol)
        ));
    } else {
        output.push_str("Revenue needed:       n/a (non-positive contribution ratio)\n");
    }

    output
}

/// Format the monthly cash-flow table, most recent month first
pub fn format_monthly_totals(totals: &[MonthlyTotal], settings: &Settings) -> String {
    if totals.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format!("{:8} {:>14}\n", "Month", "Net"));
    output.push_str(&"-".repeat(23));
    output.push('\n');

    for total in totals {
        output.push_str(&format!(
            "{:8} {:>14}\n",
            total.month,
            total.net.format_with_symbol(symbol)
        ));
    }

    output
}
