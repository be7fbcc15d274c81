use thiserror::Error;

use crate::domain::{LedgerError, ParseAmountError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
