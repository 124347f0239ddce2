//! Budget service
//!
//! Full CRUD over priced jobs, plus name lookup for the CLI. Costing fields
//! are validated here before the store sees them; the quoted price itself is
//! computed by [`BudgetItem::price_breakdown`].

use tracing::info;

use crate::error::{PressbookError, PressbookResult};
use crate::models::{BudgetId, BudgetItem, NewBudget};
use crate::store::Store;

/// Service for priced jobs
pub struct BudgetService<'a> {
    store: &'a mut Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Create a budget after validating its costing fields
    pub fn create(&mut self, input: NewBudget) -> PressbookResult<BudgetItem> {
        input
            .validate()
            .map_err(|e| PressbookError::Validation(e.to_string()))?;

        let budget = self.store.add_budget(input).clone();
        info!(id = %budget.id, name = %budget.name, "created budget");
        Ok(budget)
    }

    /// Replace an existing budget in full
    pub fn update(&mut self, budget: BudgetItem) -> PressbookResult<BudgetItem> {
        budget
            .validate()
            .map_err(|e| PressbookError::Validation(e.to_string()))?;

        let id = budget.id;
        if !self.store.update_budget(budget) {
            return Err(PressbookError::budget_not_found(id.to_string()));
        }

        info!(id = %id, "updated budget");
        self.store
            .budget(id)
            .cloned()
            .ok_or_else(|| PressbookError::budget_not_found(id.to_string()))
    }

    /// Remove a budget by id
    pub fn remove(&mut self, id: BudgetId) -> PressbookResult<()> {
        if !self.store.remove_budget(id) {
            return Err(PressbookError::budget_not_found(id.to_string()));
        }
        info!(id = %id, "removed budget");
        Ok(())
    }

    /// All budgets in insertion order
    pub fn list(&self) -> Vec<BudgetItem> {
        self.store.budgets().to_vec()
    }

    /// Find a budget by id string or (case-insensitive) name
    pub fn find(&self, identifier: &str) -> Option<BudgetItem> {
        if let Ok(id) = identifier.parse::<BudgetId>() {
            if let Some(budget) = self.store.budget(id) {
                return Some(budget.clone());
            }
        }
        self.store
            .budgets()
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(identifier))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner_input() -> NewBudget {
        NewBudget {
            name: "Banner 2x1m".into(),
            material_cost: 80.0,
            ink_cost: 30.0,
            labor_hours: 1.5,
            labor_rate: 40.0,
            fixed_allocation: 0.02,
            markup_percent: 60.0,
        }
    }

    #[test]
    fn test_create_and_find_by_name() {
        let mut store = Store::new();
        let mut service = BudgetService::new(&mut store);

        let created = service.create(banner_input()).unwrap();
        let found = service.find("banner 2x1m").unwrap();
        assert_eq!(created.id, found.id);
    }

    #[test]
    fn test_create_rejects_bad_allocation() {
        let mut store = Store::new();
        let mut bad = banner_input();
        bad.fixed_allocation = 2.0;

        let err = BudgetService::new(&mut store).create(bad).unwrap_err();
        assert!(err.is_validation());
        assert!(store.budgets().is_empty());
    }

    #[test]
    fn test_update_roundtrip() {
        let mut store = Store::new();
        let mut service = BudgetService::new(&mut store);

        let mut budget = service.create(banner_input()).unwrap();
        budget.markup_percent = 25.0;
        let updated = service.update(budget).unwrap();
        assert_eq!(updated.markup_percent, 25.0);
    }

    #[test]
    fn test_update_unknown_id_reports_not_found() {
        let mut store = Store::new();
        let mut service = BudgetService::new(&mut store);
        service.create(banner_input()).unwrap();

        let mut stray = service.find("Banner 2x1m").unwrap();
        stray.id = BudgetId::new();
        let err = service.update(stray).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove() {
        let mut store = Store::new();
        let mut service = BudgetService::new(&mut store);

        let id = service.create(banner_input()).unwrap().id;
        service.remove(id).unwrap();
        assert!(service.remove(id).unwrap_err().is_not_found());
        assert!(service.list().is_empty());
    }
}
