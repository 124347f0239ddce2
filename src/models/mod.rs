//! Core data models for Pressbook
//!
//! This module contains the data structures that represent the print-shop
//! domain: ledger transactions, priced jobs (budgets), and inventory.

pub mod budget;
pub mod ids;
pub mod inventory;
pub mod money;
pub mod transaction;

pub use budget::{BudgetItem, BudgetValidationError, NewBudget, PriceBreakdown};
pub use ids::{BudgetId, InventoryItemId, TransactionId};
pub use inventory::InventoryItem;
pub use money::Money;
pub use transaction::{NewTransaction, Transaction};
