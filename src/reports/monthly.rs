//! Monthly cash-flow totals
//!
//! Groups the ledger by calendar month and nets the signed amounts, most
//! recent month first. Dates are typed, so every entry lands in a real
//! month; malformed date strings never make it past the input boundary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Money, Transaction};

/// Net cash flow for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// Month key, "YYYY-MM"
    pub month: String,
    /// Net signed sum for the month
    pub net: Money,
}

/// Net the ledger per calendar month, most recent month first
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for txn in transactions {
        *totals.entry(txn.month_key()).or_insert_with(Money::zero) += txn.amount;
    }

    // BTreeMap iterates ascending; "YYYY-MM" keys sort chronologically
    totals
        .into_iter()
        .rev()
        .map(|(month, net)| MonthlyTotal { month, net })
        .collect()
}
