//! Benchmark suite for comparing processing strategies
//!
//! This benchmark compares the performance of synchronous and asynchronous
//! processing strategies using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Benchmark Input
//!
//! Sales logs are generated into temporary files at three sizes
//! (100, 10,000 and 200,000 rows) with a mix of valid sales, returns,
//! free items and malformed rows.

use sales_analytics::cli::StrategyType;
use sales_analytics::strategy::{create_strategy, BatchConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const SIZES: &[usize] = &[100, 10_000, 200_000];

const COUNTRIES: &[&str] = &["United Kingdom", "France", "Germany", "EIRE", "Spain"];

fn main() {
    divan::main();
}

fn generate_sales_log(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country"
    )
    .expect("Failed to write header");

    for i in 0..rows {
        let quantity: i64 = match i % 20 {
            0 => -1,
            _ => (i % 12) as i64 + 1,
        };
        let price = if i % 33 == 0 { "0" } else { "2.55" };
        let customer = if i % 7 == 0 {
            String::new()
        } else {
            (12000 + i % 500).to_string()
        };
        writeln!(
            file,
            "{},{},PRODUCT {},{},{}/{}/2011 {}:{:02},{},{},{}",
            536000 + i,
            85000 + i % 300,
            i % 300,
            quantity,
            i % 12 + 1,
            i % 28 + 1,
            i % 24,
            i % 60,
            price,
            customer,
            COUNTRIES[i % COUNTRIES.len()]
        )
        .expect("Failed to write row");
    }

    file.flush().expect("Failed to flush temp file");
    file
}

#[divan::bench(args = SIZES)]
fn sync_strategy(bencher: divan::Bencher, rows: usize) {
    let input = generate_sales_log(rows);
    let strategy = create_strategy(StrategyType::Sync, None);

    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .process(input.path(), &mut output)
            .expect("Processing failed");
    });
}

#[divan::bench(args = SIZES)]
fn async_strategy(bencher: divan::Bencher, rows: usize) {
    let input = generate_sales_log(rows);
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));

    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .process(input.path(), &mut output)
            .expect("Processing failed");
    });
}
