//! Processing strategy module
//!
//! This module defines the Strategy pattern for the complete analysis pipeline,
//! covering reading, normalization, aggregation and report output. Different
//! implementations (synchronous, asynchronous batch) are selected at runtime
//! and must produce byte-identical reports for the same input.

use crate::cli::StrategyType;
use crate::core::RunSummary;
use crate::types::AnalyticsError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete analysis pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Analyze the invoice log at `input_path` and write the report to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` with row counters once the report has been written
    /// * `Err(AnalyticsError)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - The input cannot be fully read as CSV
    /// - The report cannot be written
    ///
    /// On error nothing is written to `output`. Rows that fail normalization
    /// are reported to diagnostics and never cause an error.
    fn process(&self, input_path: &Path, output: &mut dyn Write)
        -> Result<RunSummary, AnalyticsError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional batch configuration (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
