//! Inventory service
//!
//! Inventory rows are fixed at store initialization; this service only
//! adjusts quantities and thresholds in place, and answers the low-stock
//! question for the reports screen.

use tracing::info;

use crate::error::{PressbookError, PressbookResult};
use crate::models::InventoryItem;
use crate::store::Store;

/// Service for stocked materials
pub struct InventoryService<'a> {
    store: &'a mut Store,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Replace an inventory item in full
    pub fn update(&mut self, item: InventoryItem) -> PressbookResult<InventoryItem> {
        if item.name.trim().is_empty() {
            return Err(PressbookError::Validation(
                "Item name must not be empty".into(),
            ));
        }
        if item.quantity < 0.0 || item.reorder_threshold < 0.0 {
            return Err(PressbookError::Validation(
                "Quantity and reorder threshold must not be negative".into(),
            ));
        }

        let id = item.id;
        if !self.store.update_inventory(item) {
            return Err(PressbookError::item_not_found(id.to_string()));
        }

        info!(id = %id, "updated inventory item");
        self.store
            .inventory()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| PressbookError::item_not_found(id.to_string()))
    }

    /// All items in seed order
    pub fn list(&self) -> Vec<InventoryItem> {
        self.store.inventory().to_vec()
    }

    /// Items at or below their reorder threshold
    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.store.low_stock().into_iter().cloned().collect()
    }

    /// Find an item by (case-insensitive) name
    pub fn find_by_name(&self, name: &str) -> Option<InventoryItem> {
        self.store
            .inventory()
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
            .cloned()
    }
}
