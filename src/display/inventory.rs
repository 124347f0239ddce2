//! Inventory display formatting
//!
//! Stock list with an OK / REORDER flag per item, and the low-stock alert
//! block used by the reports screen.

use crate::models::InventoryItem;

/// Format the inventory list with reorder status
pub fn format_inventory_list(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "No inventory items.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:16} {:>10} {:8} {:>10} {:8}\n",
        "Id", "Name", "Quantity", "Unit", "Threshold", "Status"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for item in items {
        let status = if item.is_low_stock() { "REORDER" } else { "OK" };
        output.push_str(&format!(
            "{} {:16} {:>10} {:8} {:>10} {:8}\n",
            item.id, item.name, item.quantity, item.unit, item.reorder_threshold, status
        ));
    }

    output
}

/// Format the low-stock alert block
pub fn format_low_stock_alerts(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "No items below their reorder threshold.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Low stock:\n");
    for item in items {
        output.push_str(&format!(
            "  {} - {} {} left (threshold {})\n",
            item.name, item.quantity, item.unit, item.reorder_threshold
        ));
    }

    output
}
