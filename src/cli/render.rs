use std::io::Write;

use anyhow::Result;

use crate::domain::{Totals, Transaction, format_amount, format_cents, format_signed};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

pub const EMPTY_VIEW: &str = "No transactions yet";

pub fn write_transactions<W: Write>(
    out: &mut W,
    transactions: &[Transaction],
    format: OutputFormat,
    currency: &str,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, transactions, currency),
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(transactions)?)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, transactions),
    }
}

fn write_table<W: Write>(out: &mut W, transactions: &[Transaction], currency: &str) -> Result<()> {
    if transactions.is_empty() {
        writeln!(out, "{}", EMPTY_VIEW)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<6} {:<10}  {:<24} {:>14}",
        "ID", "DATE", "DESCRIPTION", "AMOUNT"
    )?;
    writeln!(out, "{}", "-".repeat(57))?;
    for tx in transactions {
        writeln!(
            out,
            "{:<6} {:<10}  {:<24} {:>14}",
            tx.id,
            tx.date.format("%Y-%m-%d"),
            truncate(&tx.description, 24),
            format_signed(tx.amount, tx.kind, currency)
        )?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, transactions: &[Transaction]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(out);

    csv_writer.write_record(["id", "date", "description", "kind", "amount"])?;
    for tx in transactions {
        csv_writer.write_record(&[
            tx.id.to_string(),
            tx.date.format("%Y-%m-%d").to_string(),
            tx.description.clone(),
            tx.kind.to_string(),
            format_cents(tx.amount),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_balance<W: Write>(out: &mut W, totals: &Totals, currency: &str) -> Result<()> {
    writeln!(
        out,
        "Current Balance: {}",
        format_amount(totals.balance, currency)
    )?;
    writeln!(out, "  Credits: {}", format_amount(totals.credits, currency))?;
    writeln!(out, "  Debits:  {}", format_amount(totals.debits, currency))?;
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{TransactionId, TransactionKind};

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction {
                id: TransactionId::new(1),
                description: "Salary".into(),
                amount: 100000,
                kind: TransactionKind::Credit,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
            Transaction {
                id: TransactionId::new(2),
                description: "Groceries, weekly".into(),
                amount: 15050,
                kind: TransactionKind::Debit,
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            },
        ]
    }

    fn render(transactions: &[Transaction], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_transactions(&mut out, transactions, format, "Rs").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_str("xml"), None);
    }

    #[test]
    fn test_table_empty() {
        assert_eq!(render(&[], OutputFormat::Table), "No transactions yet\n");
    }

    #[test]
    fn test_table_rows() {
        let table = render(&sample(), OutputFormat::Table);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("1 "));
        assert!(lines[2].contains("2024-01-01"));
        assert!(lines[2].ends_with("+Rs 1000.00"));
        assert!(lines[3].contains("Groceries, weekly"));
        assert!(lines[3].ends_with("-Rs 150.50"));
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = render(&sample(), OutputFormat::Csv);
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "id,date,description,kind,amount");
        assert_eq!(lines[1], "1,2024-01-01,Salary,credit,1000.00");
        assert_eq!(lines[2], "2,2024-01-02,\"Groceries, weekly\",debit,150.50");
    }

    #[test]
    fn test_json() {
        let json = render(&sample(), OutputFormat::Json);
        let parsed: Vec<Transaction> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_balance_lines() {
        let mut out = Vec::new();
        let totals = Totals {
            credits: 100000,
            debits: 15000,
            balance: 85000,
        };
        write_balance(&mut out, &totals, "Rs").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Current Balance: Rs 850.00\n"));
        assert!(text.contains("Credits: Rs 1000.00"));
        assert!(text.contains("Debits:  Rs 150.00"));
    }

    #[test]
    fn test_truncate_long_description() {
        assert_eq!(truncate("short", 24), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }
}
