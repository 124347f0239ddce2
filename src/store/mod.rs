//! In-memory domain store
//!
//! The store exclusively owns the three domain collections: the cash-flow
//! ledger, the priced jobs (budgets), and the inventory. All mutation goes
//! through its methods so id uniqueness and ordering are preserved; reads
//! hand out slices.
//!
//! The store is a trusting cache, not a validating database: range checks on
//! numeric fields live in the service layer, and updates or removals that
//! reference an unknown id are silent no-ops reported through the `bool`
//! return value.

pub mod events;
pub mod seed;

pub use events::{StoreEvent, Subscriber};

use tracing::debug;

use crate::models::{
    BudgetId, BudgetItem, InventoryItem, Money, NewBudget, NewTransaction, Transaction,
};

/// Owner of all business state for the process lifetime
pub struct Store {
    /// Ledger entries, newest first
    transactions: Vec<Transaction>,
    /// Priced jobs, insertion order
    budgets: Vec<BudgetItem>,
    /// Stocked materials, seed order
    inventory: Vec<InventoryItem>,
    subscribers: Vec<Subscriber>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store with the fixed inventory seed and an empty ledger
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Vec::new(),
            inventory: seed::default_inventory(),
            subscribers: Vec::new(),
        }
    }

    /// Create a store pre-loaded with the sample ledger, for demo runs
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        for tx in seed::sample_transactions() {
            store.add_transaction(tx);
        }
        store
    }

    /// Register a callback invoked after every mutation
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self, event: StoreEvent) {
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
    }

    // --- ledger ---

    /// Record a new ledger entry; the store assigns the id.
    ///
    /// Entries are prepended, so [`transactions`](Self::transactions)
    /// iterates newest first.
    pub fn add_transaction(&mut self, new: NewTransaction) -> &Transaction {
        let txn = new.into_transaction();
        debug!(id = %txn.id, amount = txn.amount.cents(), "ledger entry recorded");
        self.transactions.insert(0, txn);
        self.notify(StoreEvent::TransactionAdded(self.transactions[0].id));
        &self.transactions[0]
    }

    /// Ledger entries, most recently recorded first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Net signed sum over the whole ledger
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    // --- budgets ---

    /// Create a budget; the store assigns the id
    pub fn add_budget(&mut self, new: NewBudget) -> &BudgetItem {
        let budget = new.into_budget();
        let id = budget.id;
        debug!(id = %id, name = %budget.name, "budget created");
        self.budgets.push(budget);
        self.notify(StoreEvent::BudgetAdded(id));
        &self.budgets[self.budgets.len() - 1]
    }

    /// Replace the budget whose id matches `budget.id`.
    ///
    /// Returns `false` (and changes nothing) when no budget has that id.
    pub fn update_budget(&mut self, budget: BudgetItem) -> bool {
        match self.budgets.iter_mut().find(|b| b.id == budget.id) {
            Some(slot) => {
                let id = budget.id;
                *slot = budget;
                self.notify(StoreEvent::BudgetUpdated(id));
                true
            }
            None => {
                debug!(id = %budget.id, "update for unknown budget ignored");
                false
            }
        }
    }

    /// Remove a budget by id; removing an unknown id is a no-op
    pub fn remove_budget(&mut self, id: BudgetId) -> bool {
        match self.budgets.iter().position(|b| b.id == id) {
            Some(index) => {
                self.budgets.remove(index);
                self.notify(StoreEvent::BudgetRemoved(id));
                true
            }
            None => {
                debug!(id = %id, "remove for unknown budget ignored");
                false
            }
        }
    }

    /// All budgets in insertion order
    pub fn budgets(&self) -> &[BudgetItem] {
        &self.budgets
    }

    /// Look up a budget by id
    pub fn budget(&self, id: BudgetId) -> Option<&BudgetItem> {
        self.budgets.iter().find(|b| b.id == id)
    }

    // --- inventory ---

    /// Replace the inventory item whose id matches `item.id`.
    ///
    /// Inventory rows are fixed at initialization; only in-place updates are
    /// supported. Returns `false` when no item has that id.
    pub fn update_inventory(&mut self, item: InventoryItem) -> bool {
        match self.inventory.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                let id = item.id;
                *slot = item;
                self.notify(StoreEvent::InventoryUpdated(id));
                true
            }
            None => {
                debug!(id = %item.id, "update for unknown inventory item ignored");
                false
            }
        }
    }

    /// All inventory items in seed order
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// Items at or below their reorder threshold, in seed order
    pub fn low_stock(&self) -> Vec<&InventoryItem> {
        self.inventory.iter().filter(|i| i.is_low_stock()).collect()
    }
}
