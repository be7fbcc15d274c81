// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use tally::cli::{Session, Settings};
use tally::{Ledger, NewTransaction, Transaction};

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn fixed_today() -> NaiveDate {
    parse_date("2024-06-01")
}

/// Session writing into a buffer, with "today" pinned to 2024-06-01
pub fn test_session() -> Session<Vec<u8>> {
    Session::with_clock(Settings::default(), Vec::new(), fixed_today)
}

/// Feed a script to a fresh session and return everything it printed
pub fn run_script(script: &str) -> Result<(String, Ledger)> {
    let mut session = test_session();
    session.run(script.as_bytes(), false)?;
    let ledger = session.ledger().clone();
    let output = String::from_utf8(session.into_output())?;
    Ok((output, ledger))
}

/// Test fixture: the salary / groceries ledger used across scenarios
pub struct StandardEntries {
    pub salary: Transaction,
    pub groceries: Transaction,
}

impl StandardEntries {
    pub fn create(ledger: &mut Ledger) -> Result<Self> {
        let salary = ledger.add(NewTransaction::credit(
            "Salary",
            100000,
            parse_date("2024-01-01"),
        ))?;
        let groceries = ledger.add(NewTransaction::debit(
            "Groceries",
            15000,
            parse_date("2024-01-02"),
        ))?;
        Ok(Self { salary, groceries })
    }
}
