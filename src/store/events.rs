//! Store change notifications
//!
//! Every successful mutation on the [`Store`](super::Store) emits one event
//! after the collection has been updated. Consumers (screens, caches) register
//! callbacks with [`Store::subscribe`](super::Store::subscribe) instead of
//! watching an ambient global.

use crate::models::{BudgetId, InventoryItemId, TransactionId};

/// A change that happened inside the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A ledger entry was recorded
    TransactionAdded(TransactionId),
    /// A budget was created
    BudgetAdded(BudgetId),
    /// A budget was replaced in place
    BudgetUpdated(BudgetId),
    /// A budget was removed
    BudgetRemoved(BudgetId),
    /// An inventory item was replaced in place
    InventoryUpdated(InventoryItemId),
}

/// Callback invoked for every store event
pub type Subscriber = Box<dyn Fn(&StoreEvent)>;
