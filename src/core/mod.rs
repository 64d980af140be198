//! Core business logic module
//!
//! This module contains the analysis pipeline components:
//! - `normalizer` - Row Normalizer: raw row to validated transaction or skip reason
//! - `aggregator` - Aggregator: fold of transactions into the summary report
//! - `summary` - Row counters reported to diagnostics

pub mod aggregator;
pub mod normalizer;
pub mod summary;

pub use aggregator::{aggregate, SalesAccumulator};
pub use normalizer::{normalize, normalize_traced, parse_invoice_date};
pub use summary::RunSummary;
