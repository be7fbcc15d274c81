use chrono::NaiveDate;

use crate::domain::{Ledger, NewTransaction, Transaction, TransactionKind, parse_amount};

use super::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw entry fields as the user typed them.
///
/// The form owns parsing from strings; the ledger only ever sees a
/// fully-typed `NewTransaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub date: String,
}

impl EntryForm {
    /// A blank form: no description or amount, kind `credit`, dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Credit.as_str().to_string(),
            date: today.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parse the raw fields into a transaction ready for the ledger.
    pub fn parse(&self) -> Result<NewTransaction, AppError> {
        if self.description.trim().is_empty() {
            return Err(AppError::Validation("description is required".to_string()));
        }
        if self.amount.trim().is_empty() {
            return Err(AppError::Validation("amount is required".to_string()));
        }

        let amount = parse_amount(&self.amount)?;
        let kind = TransactionKind::from_str(&self.kind).ok_or_else(|| {
            AppError::Validation(format!(
                "unknown type '{}', expected credit or debit",
                self.kind
            ))
        })?;
        let date = parse_date(&self.date)?;

        Ok(NewTransaction::new(
            self.description.clone(),
            amount,
            kind,
            date,
        ))
    }

    /// Parse and add to `ledger`. On success the description and amount are
    /// cleared and the date goes back to `today`; the selected kind is kept.
    /// On failure the form keeps what was typed.
    pub fn submit(
        &mut self,
        ledger: &mut Ledger,
        today: NaiveDate,
    ) -> Result<Transaction, AppError> {
        let new = self.parse()?;
        let transaction = ledger.add(new)?;

        self.description.clear();
        self.amount.clear();
        self.date = today.format(DATE_FORMAT).to_string();

        Ok(transaction)
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        AppError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", input))
    })
}
