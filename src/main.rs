//! Sales Analytics CLI
//!
//! Reads an invoice-level sales log and prints a summary report.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- sales.csv
//! cargo run -- --strategy async --batch-size 5000 sales.csv
//! cargo run -- --log-level info sales.csv 2> diagnostics.log
//! ```
//!
//! The report goes to stdout. Diagnostics (skipped rows, run statistics)
//! go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input file missing or unreadable, report not writable)

use sales_analytics::cli;
use sales_analytics::strategy;
use std::io::stderr;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let args = cli::parse_args();

    setup_logging(args.log_level.into());

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the report
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
