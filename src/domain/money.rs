use thiserror::Error;

use super::TransactionKind;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a human-readable decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Format cents with a currency label, e.g. "Rs 12.34" or "Rs -12.34".
pub fn format_amount(cents: Cents, currency: &str) -> String {
    format!("{} {}", currency, format_cents(cents))
}

/// Format a transaction amount with the sign implied by its kind,
/// e.g. "+Rs 12.34" for a credit and "-Rs 12.34" for a debit.
pub fn format_signed(cents: Cents, kind: TransactionKind, currency: &str) -> String {
    let sign = match kind {
        TransactionKind::Credit => '+',
        TransactionKind::Debit => '-',
    };
    format!("{}{} {}", sign, currency, format_cents(cents))
}

/// Parse a user-entered decimal string into non-negative cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// More than two decimal places is only accepted when the extra digits are
/// zeros; otherwise the input is rejected rather than rounded.
pub fn parse_amount(input: &str) -> Result<Cents, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    if input.starts_with('-') {
        return Err(ParseAmountError::Negative);
    }
    let input = input.strip_prefix('+').unwrap_or(input);

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseAmountError::InvalidFormat);
    }
    if !units_str.chars().all(|c| c.is_ascii_digit())
        || !decimal_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseAmountError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseAmountError::Overflow)?
    };

    if decimal_str.len() > 2 && decimal_str[2..].chars().any(|c| c != '0') {
        return Err(ParseAmountError::TooManyDecimals);
    }

    // Pad to 2 digits
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => decimal_str[..1].parse::<i64>().unwrap_or(0) * 10,
        _ => decimal_str[..2].parse().unwrap_or(0),
    };

    units
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(decimal_cents))
        .ok_or(ParseAmountError::Overflow)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("amount is required")]
    Empty,

    #[error("amount must not be negative")]
    Negative,

    #[error("invalid money format")]
    InvalidFormat,

    #[error("amount has more than two decimal places")]
    TooManyDecimals,

    #[error("amount is too large")]
    Overflow,
}
