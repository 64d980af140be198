use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Summarize a retail sales transaction log
#[derive(Parser, Debug)]
#[command(name = "sales-analytics")]
#[command(about = "Summarize revenue, top products and top customers from a sales log", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing invoice line items
    #[arg(
        value_name = "INPUT",
        default_value = "data.csv",
        help = "Path to the input CSV file"
    )]
    pub input_file: PathBuf,

    /// Processing strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for single-threaded or 'async' for parallel batches"
    )]
    pub strategy: StrategyType,

    /// Number of rows per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of rows per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent batches (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of batches processing concurrently (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Diagnostics verbosity on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostics level: error, warn, info, debug or trace"
    )]
    pub log_level: LogLevel,
}

/// Available processing strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Diagnostics verbosity
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size()),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches()),
            )
        } else {
            BatchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_input_file() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("data.csv"));
        assert_eq!(parsed.log_level, LogLevel::Warn);
    }

    #[rstest]
    #[case::default_strategy(&["program", "sales.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "sales.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "sales.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::error("error", LevelFilter::ERROR)]
    #[case::info("info", LevelFilter::INFO)]
    #[case::trace("trace", LevelFilter::TRACE)]
    fn test_log_level_parsing(#[case] level: &str, #[case] expected: LevelFilter) {
        let parsed = CliArgs::try_parse_from(["program", "--log-level", level]).unwrap();
        assert_eq!(LevelFilter::from(parsed.log_level), expected);
    }

    #[rstest]
    #[case::all_defaults(&["program", "sales.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "sales.csv"], 2000, num_cpus::get())]
    #[case::custom_max_concurrent(&["program", "--max-concurrent", "8", "sales.csv"], 1000, 8)]
    #[case::zero_batch_size(&["program", "--batch-size", "0", "sales.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_batch_config();

        assert_eq!(config.batch_size(), expected_batch_size);
        assert_eq!(config.max_concurrent_batches(), expected_max_concurrent);
    }

    #[rstest]
    #[case::invalid_strategy(&["program", "--strategy", "parallel", "sales.csv"])]
    #[case::invalid_log_level(&["program", "--log-level", "loud", "sales.csv"])]
    #[case::non_numeric_batch(&["program", "--batch-size", "many", "sales.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
