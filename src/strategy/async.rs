//! Asynchronous batch processing strategy
//!
//! Partitioned pipeline over a tokio multi-threaded runtime. Normalization is
//! stateless and aggregation is a commutative reduction, so batches can be
//! processed independently and merged in any order.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading, global row indices)
//!     ├── one task per batch: normalize + fold into a partial SalesAccumulator
//!     └── merge of all partials, then finish() into the Report
//! ```
//!
//! Top product and top customer are selected only after the full merge, so the
//! report is byte-identical to the synchronous strategy.

use crate::core::{normalize_traced, RunSummary, SalesAccumulator};
use crate::io::async_reader::{AsyncReader, RowBatch};
use crate::io::report_format::write_report;
use crate::strategy::ProcessingStrategy;
use crate::types::AnalyticsError;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Configuration for batch processing
///
/// Both values are always at least 1; build it with [`BatchConfig::new`] or
/// [`Default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    batch_size: usize,
    max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches, default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }

    /// Number of rows per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Maximum number of batches processing concurrently
    pub fn max_concurrent_batches(&self) -> usize {
        self.max_concurrent_batches
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    async fn run(&self, input_path: &Path) -> Result<(SalesAccumulator, RunSummary), AnalyticsError> {
        let file = tokio::fs::File::open(input_path)
            .await
            .map_err(|e| AnalyticsError::open_failed(input_path, e))?;

        // Wrap tokio file in a compatibility layer for csv-async
        let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
        let mut reader = AsyncReader::new(compat_file);

        let permits = Arc::new(Semaphore::new(self.config.max_concurrent_batches));
        let mut tasks = Vec::new();

        loop {
            let batch = reader.read_batch(self.config.batch_size).await?;
            if batch.is_empty() {
                break;
            }

            let permit = Arc::clone(&permits)
                .acquire_owned()
                .await
                .map_err(AnalyticsError::runtime)?;

            debug!(batch = tasks.len(), rows = batch.len(), "Dispatching batch");
            tasks.push(tokio::spawn(async move {
                let partial = process_batch(batch);
                drop(permit);
                partial
            }));
        }

        let partials = futures::future::try_join_all(tasks)
            .await
            .map_err(AnalyticsError::runtime)?;

        Ok(partials.into_iter().fold(
            (SalesAccumulator::default(), RunSummary::default()),
            |(accumulator, summary), (partial, partial_summary)| {
                (accumulator.merge(partial), summary.merge(partial_summary))
            },
        ))
    }
}

/// Normalize one batch and fold it into a partial accumulator
fn process_batch(batch: RowBatch) -> (SalesAccumulator, RunSummary) {
    let mut accumulator = SalesAccumulator::new();
    let mut summary = RunSummary::default();

    for (row_index, row) in &batch {
        if let Some(transaction) = normalize_traced(row, *row_index, &mut summary) {
            accumulator.add(&transaction);
        }
    }

    (accumulator, summary)
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<RunSummary, AnalyticsError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| AnalyticsError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

        let (accumulator, summary) = runtime.block_on(self.run(input_path))?;

        summary.log();
        write_report(&accumulator.finish(), output)?;

        Ok(summary)
    }
}
