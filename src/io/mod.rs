//! I/O module
//!
//! Handles reading the invoice log and writing the report.
//!
//! # Components
//!
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `report_format` - Human-readable report output

pub mod async_reader;
pub mod report_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use report_format::{format_money, write_report};
pub use sync_reader::SyncReader;
