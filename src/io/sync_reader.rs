//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over raw rows of the invoice log, each paired
//! with its 0-based position in the source.
//!
//! # Design
//!
//! The header is NOT consumed by the CSV layer: row 0 is yielded like any
//! other row and the normalizer decides that it is the header. Records may
//! have any number of fields; the field count is checked during
//! normalization, not here.
//!
//! ```no_run
//! use sales_analytics::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::open(Path::new("data.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok((index, row)) => println!("row {}: {} fields", index, row.len()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()`
//! - A record that cannot be read as CSV (bad quoting, invalid UTF-8) is
//!   yielded as an `Err`; callers treat it as fatal

use crate::types::{AnalyticsError, RawRow};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV reader
///
/// Yields `(row_index, RawRow)` pairs with constant memory per row.
#[derive(Debug)]
pub struct SyncReader<R = File> {
    reader: csv::Reader<R>,
    row_index: usize,
}

impl SyncReader<File> {
    /// Open a CSV file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(AnalyticsError)` if the file is missing or unreadable
    pub fn open(path: &Path) -> Result<Self, AnalyticsError> {
        let file = File::open(path).map_err(|e| AnalyticsError::open_failed(path, e))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SyncReader<R> {
    /// Wrap any reader
    ///
    /// The CSV reader is configured to:
    /// - Keep fields exactly as tokenized (no trimming)
    /// - Allow flexible field counts
    /// - Yield the header row as data
    pub fn from_reader(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(reader);

        Self {
            reader,
            row_index: 0,
        }
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<(usize, RawRow), AnalyticsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = RawRow::new();

        match self.reader.read_record(&mut record) {
            Ok(true) => {
                let index = self.row_index;
                self.row_index += 1;
                Some(Ok((index, record)))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
