//! Row normalization
//!
//! Converts one raw tabular row into a validated [`Transaction`] or a
//! [`SkipReason`]. Normalization is pure and stateless: the outcome depends
//! only on the row and its position in the source.
//!
//! Rules are applied in order, the first failing rule decides the skip reason:
//!
//! 1. row 0 is the header
//! 2. fewer than 8 fields is a malformed row
//! 3. quantity (field 3) must parse as an integer and be > 0
//! 4. unit price (field 5) must parse as a decimal and be > 0
//! 5. invoice date (field 4) must match `M/D/YYYY h:mm`
//!
//! The line total is always computed, never read from input.

use crate::core::summary::RunSummary;
use crate::types::transaction::columns;
use crate::types::{RawRow, SkipReason, Transaction, MIN_FIELDS};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

/// chrono pattern for the invoice date column
///
/// Month, day and hour accept one or two digits. The layout is further
/// restricted to a four-digit year, a single space and a two-digit minute.
pub const INVOICE_DATE_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Normalize a raw row into a transaction
///
/// # Arguments
///
/// * `row` - The raw row as tokenized by the CSV reader
/// * `row_index` - 0-based position of the row in the source, used to skip the header
///
/// # Returns
///
/// * `Ok(Transaction)` if every field is valid
/// * `Err(SkipReason)` describing the first rule the row violates
pub fn normalize(row: &RawRow, row_index: usize) -> Result<Transaction, SkipReason> {
    if row_index == 0 {
        return Err(SkipReason::Header);
    }

    if row.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields { found: row.len() });
    }

    let quantity = parse_quantity(&row[columns::QUANTITY])?;
    if quantity <= 0 {
        return Err(SkipReason::NonPositiveQuantity { quantity });
    }

    let unit_price = parse_unit_price(&row[columns::UNIT_PRICE])?;
    if unit_price <= Decimal::ZERO {
        return Err(SkipReason::NonPositiveUnitPrice { price: unit_price });
    }

    let invoice_timestamp = parse_invoice_date(&row[columns::INVOICE_DATE])?;

    let line_total = Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or(SkipReason::LineTotalOverflow {
            quantity,
            price: unit_price,
        })?;

    Ok(Transaction {
        invoice_id: row[columns::INVOICE_ID].to_string(),
        stock_code: row[columns::STOCK_CODE].to_string(),
        description: row[columns::DESCRIPTION].to_string(),
        quantity,
        invoice_timestamp,
        unit_price,
        customer_id: row[columns::CUSTOMER_ID].to_string(),
        country: row[columns::COUNTRY].to_string(),
        line_total,
    })
}

/// Normalize a row, reporting the outcome to the diagnostics sink
///
/// Parse failures are logged at warn level with the row index, expected
/// rejections (header, short rows, returns, free items) at debug level.
/// Every outcome is counted in `summary`.
pub fn normalize_traced(
    row: &RawRow,
    row_index: usize,
    summary: &mut RunSummary,
) -> Option<Transaction> {
    summary.rows_read += 1;

    match normalize(row, row_index) {
        Ok(transaction) => {
            summary.accepted += 1;
            Some(transaction)
        }
        Err(reason) => {
            if reason.is_parse_failure() {
                warn!(row = row_index, "Skipping row: {}", reason);
            } else {
                debug!(row = row_index, "Skipping row: {}", reason);
            }
            summary.record_skip(&reason);
            None
        }
    }
}

/// Parse the quantity column as a signed integer
pub fn parse_quantity(text: &str) -> Result<i64, SkipReason> {
    text.parse::<i64>()
        .map_err(|e| SkipReason::InvalidQuantity {
            value: text.to_string(),
            message: e.to_string(),
        })
}

/// Parse the unit price column as a decimal
///
/// Plain decimal notation is tried first, then scientific notation (`1.5e2`).
pub fn parse_unit_price(text: &str) -> Result<Decimal, SkipReason> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| SkipReason::InvalidUnitPrice {
            value: text.to_string(),
        })
}

/// Parse the invoice date column using the fixed `M/D/YYYY h:mm` layout
///
/// No alternate formats are inferred: a different separator, a two-digit
/// year or a missing time of day rejects the value.
pub fn parse_invoice_date(text: &str) -> Result<NaiveDateTime, SkipReason> {
    let invalid = |message: String| SkipReason::InvalidDate {
        value: text.to_string(),
        message,
    };

    let timestamp = NaiveDateTime::parse_from_str(text, INVOICE_DATE_FORMAT)
        .map_err(|e| invalid(e.to_string()))?;

    // chrono is lenient on widths and whitespace
    if !matches_date_layout(text) {
        return Err(invalid(
            "expected a four-digit year, a single space and a two-digit minute".to_string(),
        ));
    }

    Ok(timestamp)
}

fn matches_date_layout(text: &str) -> bool {
    let Some((date, time)) = text.split_once(' ') else {
        return false;
    };
    let Some((hour, minute)) = time.split_once(':') else {
        return false;
    };
    let year = date.rsplit('/').next().unwrap_or_default();

    is_digits(year, 4, 4) && is_digits(hour, 1, 2) && is_digits(minute, 2, 2)
}

fn is_digits(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}
