//! Error types for the sales analytics pipeline
//!
//! Two categories exist:
//!
//! - [`AnalyticsError`]: fatal errors. The source cannot be opened or fully read
//!   as tabular data, or the report cannot be written. These abort the run and
//!   no report is produced.
//! - [`SkipReason`]: row-level rejections. The row is dropped from the
//!   transaction stream, a diagnostic is emitted and processing continues.
//!
//! The aggregator has no failure modes of its own.

use rust_decimal::Decimal;
use thiserror::Error;

/// Fatal error for a processing run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while opening, reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The input could not be read as tabular data
    #[error("CSV read error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the read error
        message: String,
    },

    /// The report could not be written
    #[error("Failed to write report: {message}")]
    Output {
        /// Description of the write failure
        message: String,
    },

    /// The parallel runtime failed (runtime construction, task panic)
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for AnalyticsError {
    fn from(error: std::io::Error) -> Self {
        AnalyticsError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalyticsError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AnalyticsError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for AnalyticsError {
    fn from(error: csv_async::Error) -> Self {
        AnalyticsError::Csv {
            line: None,
            message: error.to_string(),
        }
    }
}

impl AnalyticsError {
    /// Build the error for a file that could not be opened
    ///
    /// A missing file maps to `FileNotFound`, anything else to `Io`.
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            AnalyticsError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            AnalyticsError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create an Output error
    pub fn output(message: impl std::fmt::Display) -> Self {
        AnalyticsError::Output {
            message: message.to_string(),
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl std::fmt::Display) -> Self {
        AnalyticsError::Runtime {
            message: message.to_string(),
        }
    }
}

/// Reason a raw row did not become a transaction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Row 0 carries the column names
    #[error("header row")]
    Header,

    /// Row is structurally too short to hold every column
    #[error("malformed row: expected at least 8 fields, found {found}")]
    TooFewFields {
        /// Number of fields present
        found: usize,
    },

    /// Quantity field is not an integer
    #[error("invalid quantity '{value}': {message}")]
    InvalidQuantity {
        /// The offending text
        value: String,
        /// Parser message
        message: String,
    },

    /// Zero or negative quantity (return or cancellation)
    #[error("non-positive quantity {quantity}")]
    NonPositiveQuantity {
        /// Parsed quantity
        quantity: i64,
    },

    /// Unit price field is not a decimal number
    #[error("invalid unit price '{value}'")]
    InvalidUnitPrice {
        /// The offending text
        value: String,
    },

    /// Zero or negative unit price (free or invalid line item)
    #[error("non-positive unit price {price}")]
    NonPositiveUnitPrice {
        /// Parsed price
        price: Decimal,
    },

    /// Invoice date does not match `M/D/YYYY h:mm`
    #[error("invalid invoice date '{value}': {message}")]
    InvalidDate {
        /// The offending text
        value: String,
        /// Parser message
        message: String,
    },

    /// `quantity * unit_price` does not fit a decimal
    #[error("line total overflow for quantity {quantity} at price {price}")]
    LineTotalOverflow {
        /// Parsed quantity
        quantity: i64,
        /// Parsed price
        price: Decimal,
    },
}

impl SkipReason {
    /// Whether this rejection comes from text that failed to parse
    ///
    /// Parse failures are reported as warnings. Header rows, short rows,
    /// returns and free items are expected in the data and only traced.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            SkipReason::InvalidQuantity { .. }
                | SkipReason::InvalidUnitPrice { .. }
                | SkipReason::InvalidDate { .. }
                | SkipReason::LineTotalOverflow { .. }
        )
    }
}
