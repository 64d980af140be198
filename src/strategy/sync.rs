//! Synchronous processing strategy
//!
//! Single-threaded pipeline: rows are read in order, normalized one at a time
//! and folded into a [`SalesAccumulator`]. The report is written only after the
//! whole input has been read, so a fatal read error leaves the output untouched.

use crate::core::{normalize_traced, RunSummary, SalesAccumulator};
use crate::io::report_format::write_report;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::AnalyticsError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// ```no_run
/// use sales_analytics::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("data.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<RunSummary, AnalyticsError> {
        let reader = SyncReader::open(input_path)?;

        let mut accumulator = SalesAccumulator::new();
        let mut summary = RunSummary::default();

        for result in reader {
            let (row_index, row) = result?;
            if let Some(transaction) = normalize_traced(&row, row_index, &mut summary) {
                accumulator.add(&transaction);
            }
        }

        summary.log();
        write_report(&accumulator.finish(), output)?;

        Ok(summary)
    }
}
