//! Inventory CLI commands
//!
//! Stock listing, quantity/threshold adjustments and low-stock alerts.
//! Items are addressed by name; the set of items is fixed at startup.

use clap::Subcommand;

use crate::display;
use crate::error::{PressbookError, PressbookResult};
use crate::services::InventoryService;
use crate::store::Store;

/// Inventory subcommands
#[derive(Subcommand)]
pub enum InventoryCommands {
    /// List all items with their reorder status
    List,
    /// Adjust an item's quantity and/or reorder threshold
    Set {
        /// Item name, e.g. "ink"
        name: String,
        /// New quantity on hand
        #[arg(short, long)]
        quantity: Option<f64>,
        /// New reorder threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Show items at or below their reorder threshold
    LowStock,
}

/// Handle an inventory command
pub fn handle_inventory_command(store: &mut Store, cmd: InventoryCommands) -> PressbookResult<()> {
    match cmd {
        InventoryCommands::List => {
            let items = InventoryService::new(store).list();
            print!("{}", display::format_inventory_list(&items));
        }
        InventoryCommands::Set {
            name,
            quantity,
            threshold,
        } => {
            let mut service = InventoryService::new(store);
            let mut item = service
                .find_by_name(&name)
                .ok_or_else(|| PressbookError::item_not_found(&name))?;

            if let Some(quantity) = quantity {
                item.quantity = quantity;
            }
            if let Some(threshold) = threshold {
                item.reorder_threshold = threshold;
            }

            let updated = service.update(item)?;
            let status = if updated.is_low_stock() { "REORDER" } else { "OK" };
            println!(
                "{}: {} {} (threshold {}) [{}]",
                updated.name, updated.quantity, updated.unit, updated.reorder_threshold, status
            );
        }
        InventoryCommands::LowStock => {
            let low = InventoryService::new(store).low_stock();
            print!("{}", display::format_low_stock_alerts(&low));
        }
    }

    Ok(())
}
