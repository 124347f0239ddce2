//! Transaction model
//!
//! A ledger entry in the shop's cash flow. Amounts are signed: positive for
//! income (sales, printing jobs), negative for expenses (supplies, outsourced
//! services). Entries are immutable once recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// A recorded cash-flow entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: TransactionId,

    /// Calendar date of the entry
    pub date: NaiveDate,

    /// What the money moved for
    pub description: String,

    /// Signed amount (positive = income, negative = expense)
    pub amount: Money,
}

impl Transaction {
    /// Check if this entry is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this entry is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// The calendar month this entry falls in, as "YYYY-MM"
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Input for recording a new transaction
///
/// The id is assigned by the store, not the caller, so two entries recorded
/// back to back can never collide.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
}

impl NewTransaction {
    /// Create a new transaction input
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Turn the input into a full record with a fresh id
    pub(crate) fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            date: self.date,
            description: self.description,
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(amount: i64) -> Transaction {
        NewTransaction::new(
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            "Poster printing",
            Money::from_cents(amount),
        )
        .into_transaction()
    }

    #[test]
    fn test_income_expense() {
        assert!(entry(250000).is_income());
        assert!(!entry(250000).is_expense());
        assert!(entry(-42000).is_expense());
        assert!(!entry(-42000).is_income());
    }

    #[test]
    fn test_month_key() {
        assert_eq!(entry(100).month_key(), "2025-09");
    }

    #[test]
    fn test_fresh_ids() {
        assert_ne!(entry(100).id, entry(100).id);
    }

    #[test]
    fn test_display() {
        let txn = entry(-42000);
        assert_eq!(format!("{}", txn), "2025-09-01 Poster printing -$420.00");
    }

    #[test]
    fn test_serialization() {
        let txn = entry(250000);
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.description, deserialized.description);
    }
}
