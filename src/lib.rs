//! Sales Analytics Library
//! # Overview
//!
//! This library summarizes an invoice-level retail sales log read from CSV:
//! transaction count, total revenue, revenue by country, the best-selling
//! product by unit volume and the highest-spending customer.
//!
//! # Architecture
//!
//! The pipeline is two components composed in sequence:
//!
//! ```text
//! raw rows → Row Normalizer → Transactions → Aggregator (fold) → Report
//! ```
//!
//! - [`types`] - Core data types (Transaction, Report, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::normalizer`] - Raw row validation and type coercion
//!   - [`core::aggregator`] - Order-independent fold into the report
//!   - [`core::summary`] - Row counters for diagnostics
//! - [`io`] - CSV readers and report output
//! - [`strategy`] - Sync and parallel-batch processing pipelines
//!
//! # Row Filtering
//!
//! A row is dropped (and reported to diagnostics) when it is the header, has
//! fewer than 8 fields, has a quantity or unit price that does not parse or
//! is not strictly positive, or has an invoice date not in `M/D/YYYY h:mm`.
//! Row-level problems never abort a run; only failing to open or read the
//! input does.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{aggregate, normalize, RunSummary, SalesAccumulator};
pub use io::write_report;
pub use types::{AnalyticsError, RawRow, Report, SkipReason, TopEntry, Transaction};
