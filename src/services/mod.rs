//! Service layer for Pressbook
//!
//! The service layer is the validation boundary in front of the store: it
//! rejects empty fields, zero amounts and out-of-range costing inputs, and
//! surfaces "not found" on updates the store would silently ignore. The store
//! itself stays trusting.

pub mod budget;
pub mod inventory;
pub mod transaction;

pub use budget::BudgetService;
pub use inventory::InventoryService;
pub use transaction::{RecordEntryInput, TransactionService};
