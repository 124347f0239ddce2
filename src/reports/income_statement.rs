//! Income statement
//!
//! The DRE-style summary: revenue is the sum of positive ledger amounts,
//! expenses the magnitude of the negative ones, profit the difference (which
//! equals the raw signed sum of the whole ledger).

use serde::Serialize;

use crate::models::{Money, Transaction};

/// Revenue / expenses / profit over a set of ledger entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeStatement {
    /// Sum of positive amounts
    pub revenue: Money,
    /// Sum of negative amounts, reported as a positive magnitude
    pub expenses: Money,
    /// revenue - expenses
    pub profit: Money,
}

impl IncomeStatement {
    /// Aggregate a set of ledger entries.
    ///
    /// A zero-amount entry (which the service boundary rejects, but the
    /// store does not) contributes to neither bucket.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut revenue = Money::zero();
        let mut expenses = Money::zero();

        for txn in transactions {
            if txn.amount.is_positive() {
                revenue += txn.amount;
            } else if txn.amount.is_negative() {
                expenses += txn.amount.abs();
            }
        }

        Self {
            revenue,
            expenses,
            profit: revenue - expenses,
        }
    }
}
