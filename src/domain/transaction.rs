use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cents;

/// Identifier assigned by the ledger from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in, added to the balance
    Credit,
    /// Money going out, subtracted from the balance
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "credit" => Some(TransactionKind::Credit),
            "debit" => Some(TransactionKind::Debit),
            _ => None,
        }
    }

    /// Apply this kind's sign to an unsigned amount.
    pub fn signed(&self, amount: Cents) -> Cents {
        match self {
            TransactionKind::Credit => amount,
            TransactionKind::Debit => -amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which transactions the filtered view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Credit,
    Debit,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Credit => "credit",
            Filter::Debit => "debit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Filter::All),
            "credit" => Some(Filter::Credit),
            "debit" => Some(Filter::Debit),
            _ => None,
        }
    }

    pub fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            Filter::All => true,
            Filter::Credit => kind == TransactionKind::Credit,
            Filter::Debit => kind == TransactionKind::Debit,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The validated input of `Ledger::add`, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub description: String,
    /// Amount in cents (magnitude only, never negative)
    pub amount: Cents,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        description: impl Into<String>,
        amount: Cents,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            date,
        }
    }

    pub fn credit(description: impl Into<String>, amount: Cents, date: NaiveDate) -> Self {
        Self::new(description, amount, TransactionKind::Credit, date)
    }

    pub fn debit(description: impl Into<String>, amount: Cents, date: NaiveDate) -> Self {
        Self::new(description, amount, TransactionKind::Debit, date)
    }
}

/// A single recorded money movement.
/// Transactions are immutable once created; corrections are a delete and a new add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    /// Amount in cents (always non-negative, sign comes from `kind`)
    pub amount: Cents,
    pub kind: TransactionKind,
    /// When the transaction happened, as entered. Display only.
    pub date: NaiveDate,
}

impl Transaction {
    /// Amount with the sign implied by `kind`.
    pub fn signed_amount(&self) -> Cents {
        self.kind.signed(self.amount)
    }
}
