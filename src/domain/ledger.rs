use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Cents, Filter, NewTransaction, Transaction, TransactionId, TransactionKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,

    #[error("amount must not be negative (got {0} cents)")]
    NegativeAmount(Cents),

    #[error("amount of {0} cents would overflow the ledger totals")]
    AmountTooLarge(Cents),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("transaction not found: {0}")]
    NotFound(TransactionId),
}

/// Compute the balance from a list of transactions.
/// Balance = sum of credits - sum of debits
///
/// Cannot overflow for entries admitted by `Ledger::add`: both sums are kept
/// within `Cents` there, so every partial difference is too.
fn compute_balance(entries: &[Transaction]) -> Cents {
    entries
        .iter()
        .fold(0, |balance, entry| balance + entry.signed_amount())
}

/// Credit and debit sums alongside the resulting balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub credits: Cents,
    pub debits: Cents,
    pub balance: Cents,
}

fn compute_totals(entries: &[Transaction]) -> Totals {
    let (credits, debits) = entries
        .iter()
        .fold((0, 0), |(credits, debits), entry| match entry.kind {
            TransactionKind::Credit => (credits + entry.amount, debits),
            TransactionKind::Debit => (credits, debits + entry.amount),
        });

    Totals {
        credits,
        debits,
        balance: credits - debits,
    }
}

/// In-memory list of transactions plus the active view filter.
///
/// Entries keep insertion order. Nothing here is cached: the balance and the
/// filtered view are derived from `entries` on every call.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<Transaction>,
    active_filter: Filter,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active_filter: Filter::All,
            next_id: 1,
        }
    }

    /// Validate and append a new transaction, returning the stored copy.
    ///
    /// On rejection the ledger is left untouched.
    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction, LedgerError> {
        let description = new.description.trim();
        if description.is_empty() {
            tracing::warn!("rejected transaction with empty description");
            return Err(ValidationError::EmptyDescription.into());
        }
        if new.amount < 0 {
            tracing::warn!(amount = new.amount, "rejected transaction with negative amount");
            return Err(ValidationError::NegativeAmount(new.amount).into());
        }

        let totals = self.totals();
        let running = match new.kind {
            TransactionKind::Credit => totals.credits,
            TransactionKind::Debit => totals.debits,
        };
        if running.checked_add(new.amount).is_none() {
            tracing::warn!(amount = new.amount, "rejected transaction that overflows totals");
            return Err(ValidationError::AmountTooLarge(new.amount).into());
        }

        let transaction = Transaction {
            id: self.allocate_id(),
            description: description.to_string(),
            amount: new.amount,
            kind: new.kind,
            date: new.date,
        };
        tracing::debug!(
            id = %transaction.id,
            kind = %transaction.kind,
            amount = transaction.amount,
            "added transaction"
        );

        self.entries.push(transaction.clone());
        Ok(transaction)
    }

    /// Remove the entry with the given id. Survivors keep their relative order.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            tracing::debug!(%id, "remove skipped, no such transaction");
            return Err(LedgerError::NotFound(id));
        };

        let removed = self.entries.remove(index);
        tracing::debug!(%id, "removed transaction");
        Ok(removed)
    }

    pub fn balance(&self) -> Cents {
        compute_balance(&self.entries)
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.entries)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!(%filter, "filter changed");
        self.active_filter = filter;
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// Entries matching the active filter, in insertion order.
    /// The returned list is a copy; changing it does not touch the ledger.
    pub fn filtered_view(&self) -> Vec<Transaction> {
        self.entries
            .iter()
            .filter(|entry| self.active_filter.matches(entry.kind))
            .cloned()
            .collect()
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Ids are never handed out twice, even after the entry is removed.
    fn allocate_id(&mut self) -> TransactionId {
        let id = TransactionId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
