//! Inventory model
//!
//! Stock on the shop floor: ink, paper, vinyl. Quantities are fractional
//! (liters, meters), and each item carries a reorder threshold that drives
//! the low-stock alerts on the reports screen.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InventoryItemId;

/// A stocked material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique identifier, assigned by the store
    pub id: InventoryItemId,

    /// Material name, e.g. "A3 paper"
    pub name: String,

    /// Quantity on hand, in `unit`
    pub quantity: f64,

    /// Unit of measure ("liters", "sheets", "meters")
    pub unit: String,

    /// Quantity at or below which the item needs reordering
    pub reorder_threshold: f64,
}

impl InventoryItem {
    /// Create a new inventory item with a fresh id
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        reorder_threshold: f64,
    ) -> Self {
        Self {
            id: InventoryItemId::new(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            reorder_threshold,
        }
    }

    /// Whether the item is at or below its reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_threshold
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.quantity, self.unit)
    }
}
