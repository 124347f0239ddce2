//! Budget model
//!
//! A budget is a priced print job: direct costs (material, ink, labor), a
//! share of the shop's fixed costs, and a markup that turns cost into a
//! quoted price.
//!
//! Costing math is carried out in f64. Hours, rates and allocation fractions
//! are not whole-cent quantities, and the price formula must hold without
//! rounding; amounts are only rounded when displayed or recorded as ledger
//! entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;

/// A priced print job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier, assigned by the store
    pub id: BudgetId,

    /// Job name, e.g. "500 A5 flyers"
    pub name: String,

    /// Material cost (paper, vinyl, ...)
    pub material_cost: f64,

    /// Ink cost
    pub ink_cost: f64,

    /// Labor hours for the job
    pub labor_hours: f64,

    /// Hourly labor rate
    pub labor_rate: f64,

    /// Fraction of the shop's fixed costs carried by this job, in [0, 1]
    pub fixed_allocation: f64,

    /// Markup over total cost, in percent; may be negative down to -100
    pub markup_percent: f64,
}

/// Cost and price breakdown for a budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// material + ink + labor
    pub direct_cost: f64,
    /// Share of the shop's fixed costs
    pub fixed_allocated: f64,
    /// direct + fixed
    pub total_cost: f64,
    /// Quoted price after markup
    pub price: f64,
}

impl BudgetItem {
    /// Compute the cost roll-up and quoted price for this job.
    ///
    /// `total_fixed_costs` is the shop's monthly fixed cost base (rent,
    /// utilities, salaries), of which this job carries `fixed_allocation`.
    ///
    /// The price is not clamped: a negative markup legally quotes below
    /// cost (loss-leader pricing), so callers must not assume
    /// `price >= total_cost`.
    pub fn price_breakdown(&self, total_fixed_costs: f64) -> PriceBreakdown {
        let direct_cost = self.material_cost + self.ink_cost + self.labor_hours * self.labor_rate;
        let fixed_allocated = total_fixed_costs * self.fixed_allocation;
        let total_cost = direct_cost + fixed_allocated;
        let price = total_cost * (1.0 + self.markup_percent / 100.0);

        PriceBreakdown {
            direct_cost,
            fixed_allocated,
            total_cost,
            price,
        }
    }

    /// Validate the costing fields
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        validate_costing(
            &self.name,
            [self.material_cost, self.ink_cost, self.labor_hours, self.labor_rate],
            self.fixed_allocation,
            self.markup_percent,
        )
    }
}

fn validate_costing(
    name: &str,
    nonnegative_fields: [f64; 4],
    fixed_allocation: f64,
    markup_percent: f64,
) -> Result<(), BudgetValidationError> {
    if name.trim().is_empty() {
        return Err(BudgetValidationError::EmptyName);
    }
    if nonnegative_fields.iter().any(|v| *v < 0.0) {
        return Err(BudgetValidationError::NegativeCost);
    }
    if !(0.0..=1.0).contains(&fixed_allocation) {
        return Err(BudgetValidationError::AllocationOutOfRange(fixed_allocation));
    }
    if markup_percent < -100.0 {
        return Err(BudgetValidationError::MarkupTooLow(markup_percent));
    }
    Ok(())
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Input for creating a budget; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub name: String,
    pub material_cost: f64,
    pub ink_cost: f64,
    pub labor_hours: f64,
    pub labor_rate: f64,
    pub fixed_allocation: f64,
    pub markup_percent: f64,
}

impl NewBudget {
    /// Validate the costing fields before the record exists
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        validate_costing(
            &self.name,
            [self.material_cost, self.ink_cost, self.labor_hours, self.labor_rate],
            self.fixed_allocation,
            self.markup_percent,
        )
    }

    /// Turn the input into a full record with a fresh id
    pub(crate) fn into_budget(self) -> BudgetItem {
        BudgetItem {
            id: BudgetId::new(),
            name: self.name,
            material_cost: self.material_cost,
            ink_cost: self.ink_cost,
            labor_hours: self.labor_hours,
            labor_rate: self.labor_rate,
            fixed_allocation: self.fixed_allocation,
            markup_percent: self.markup_percent,
        }
    }
}

/// Validation errors for budget costing fields
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    EmptyName,
    NegativeCost,
    AllocationOutOfRange(f64),
    MarkupTooLow(f64),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name must not be empty"),
            Self::NegativeCost => write!(f, "Costs, hours and rates must not be negative"),
            Self::AllocationOutOfRange(v) => {
                write!(f, "Fixed-cost allocation must be between 0 and 1, got {}", v)
            }
            Self::MarkupTooLow(v) => {
                write!(f, "Markup must not be below -100%, got {}%", v)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
