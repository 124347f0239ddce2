//! Transaction service
//!
//! Validates ledger input before it reaches the store: zero amounts and blank
//! descriptions never get recorded. Recorded entries are immutable, so this
//! service has no update or delete path.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{PressbookError, PressbookResult};
use crate::models::{Money, NewTransaction, Transaction};
use crate::store::Store;

/// Input for recording a ledger entry
#[derive(Debug, Clone)]
pub struct RecordEntryInput {
    /// Entry date; defaults to today when not given
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: Money,
}

/// Service for the cash-flow ledger
pub struct TransactionService<'a> {
    store: &'a mut Store,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Record a new ledger entry
    pub fn record(&mut self, input: RecordEntryInput) -> PressbookResult<Transaction> {
        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(PressbookError::Validation(
                "Description must not be empty".into(),
            ));
        }
        if input.amount.is_zero() {
            return Err(PressbookError::Validation(
                "Amount must not be zero".into(),
            ));
        }

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let txn = self
            .store
            .add_transaction(NewTransaction::new(date, description, input.amount))
            .clone();

        info!(id = %txn.id, %date, amount = %txn.amount, "recorded ledger entry");
        Ok(txn)
    }

    /// Ledger entries, newest first, optionally limited
    pub fn list(&self, limit: Option<usize>) -> Vec<Transaction> {
        let txns = self.store.transactions();
        let take = limit.unwrap_or(txns.len());
        txns.iter().take(take).cloned().collect()
    }

    /// Net signed sum over the whole ledger
    pub fn balance(&self) -> Money {
        self.store.balance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input(amount: i64) -> RecordEntryInput {
        RecordEntryInput {
            date: NaiveDate::from_ymd_opt(2025, 9, 1),
            description: "Poster printing".into(),
            amount: Money::from_cents(amount),
        }
    }

    #[test]
    fn test_record_entry() {
        let mut store = Store::new();
        let txn = TransactionService::new(&mut store).record(input(250000)).unwrap();
        assert_eq!(txn.description, "Poster printing");
        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_zero_amount_is_rejected_at_the_boundary() {
        let mut store = Store::new();
        let err = TransactionService::new(&mut store).record(input(0)).unwrap_err();
        assert!(err.is_validation());
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let mut store = Store::new();
        let mut bad = input(1000);
        bad.description = "   ".into();
        let err = TransactionService::new(&mut store).record(bad).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_description_is_trimmed() {
        let mut store = Store::new();
        let mut padded = input(1000);
        padded.description = "  Flyer sale  ".into();
        let txn = TransactionService::new(&mut store).record(padded).unwrap();
        assert_eq!(txn.description, "Flyer sale");
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let mut store = Store::new();
        let mut undated = input(1000);
        undated.date = None;
        let txn = TransactionService::new(&mut store).record(undated).unwrap();
        assert_eq!(txn.date, Local::now().date_naive());
    }

    #[test]
    fn test_list_limit() {
        let mut store = Store::with_sample_data();
        let service = TransactionService::new(&mut store);
        assert_eq!(service.list(Some(2)).len(), 2);
        assert_eq!(service.list(None).len(), 4);
    }
}
