//! Seed data
//!
//! The shop starts with a fixed set of stocked materials; the sample ledger
//! mirrors a typical month and backs the demo dataset used by the CLI.

use chrono::NaiveDate;

use crate::models::{InventoryItem, Money, NewTransaction};

/// The fixed inventory every store starts with
pub fn default_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("Ink", 12.0, "liters", 5.0),
        InventoryItem::new("A3 paper", 2000.0, "sheets", 500.0),
        InventoryItem::new("Banner vinyl", 25.0, "meters", 10.0),
    ]
}

/// Sample ledger entries, oldest first
pub fn sample_transactions() -> Vec<NewTransaction> {
    [
        (2025, 9, 1, "Poster printing", 250000),
        (2025, 9, 5, "Paper purchase", -42000),
        (2025, 9, 12, "Outsourced service", -80000),
        (2025, 9, 20, "Flyer sale", 120000),
    ]
    .into_iter()
    .map(|(y, m, d, description, cents)| {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
        NewTransaction::new(date, description, Money::from_cents(cents))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inventory_has_no_low_stock() {
        assert!(default_inventory().iter().all(|i| !i.is_low_stock()));
    }

    #[test]
    fn test_sample_ledger_is_chronological() {
        let sample = sample_transactions();
        assert_eq!(sample.len(), 4);
        assert!(sample.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
