//! Transaction-related types for the sales analytics pipeline
//!
//! This module defines the raw tabular row as read from the source file and
//! the validated `Transaction` produced by the row normalizer.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Raw tabular record
///
/// An ordered sequence of text fields exactly as tokenized by the CSV reader.
/// No semantic meaning is attached until the row is normalized.
pub type RawRow = csv::StringRecord;

/// Minimum number of fields a row must carry to be normalized
pub const MIN_FIELDS: usize = 8;

/// Positional column indices of the invoice log
pub mod columns {
    pub const INVOICE_ID: usize = 0;
    pub const STOCK_CODE: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const QUANTITY: usize = 3;
    pub const INVOICE_DATE: usize = 4;
    pub const UNIT_PRICE: usize = 5;
    pub const CUSTOMER_ID: usize = 6;
    pub const COUNTRY: usize = 7;
}

/// Validated retail line item
///
/// Constructed only by successful normalization. Quantity and unit price are
/// always strictly positive and `line_total` always equals
/// `quantity * unit_price`. Outside the crate fields are read-only through
/// the accessors below.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Invoice identifier (opaque, not validated)
    pub(crate) invoice_id: String,

    /// Stock code of the sold item
    pub(crate) stock_code: String,

    /// Product description, used as the product grouping key
    pub(crate) description: String,

    /// Units sold (always > 0)
    pub(crate) quantity: i64,

    /// Invoice date and time
    pub(crate) invoice_timestamp: NaiveDateTime,

    /// Price per unit (always > 0)
    pub(crate) unit_price: Decimal,

    /// Customer identifier, empty when the sale has no known customer
    pub(crate) customer_id: String,

    /// Country of the customer
    pub(crate) country: String,

    /// Derived `quantity * unit_price`
    pub(crate) line_total: Decimal,
}

impl Transaction {
    pub fn invoice_id(&self) -> &str {
        &self.invoice_id
    }

    pub fn stock_code(&self) -> &str {
        &self.stock_code
    }

    /// Product grouping key
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn invoice_timestamp(&self) -> NaiveDateTime {
        self.invoice_timestamp
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Customer identifier, empty for anonymous sales
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// `quantity * unit_price`, computed once at normalization
    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    /// Whether the transaction is attributed to a customer
    pub fn has_customer(&self) -> bool {
        !self.customer_id.is_empty()
    }
}
