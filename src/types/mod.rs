//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Raw rows and validated transactions
//! - `report`: The summary report produced by aggregation
//! - `error`: Fatal errors and row skip reasons

pub mod error;
pub mod report;
pub mod transaction;

pub use error::{AnalyticsError, SkipReason};
pub use report::{Report, TopEntry};
pub use transaction::{RawRow, Transaction, MIN_FIELDS};
