//! End-to-end integration tests
//!
//! These tests validate the complete analysis pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Runs the full pipeline (read, normalize, aggregate, write)
//! 3. Compares the report with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios
//! - Returns, cancellations and free items
//! - Malformed rows (bad numbers, bad dates, short rows)
//! - Sales without a customer id
//! - Several countries and quoted fields
//! - Empty input (header only)
//!
//! Each test is run twice: once with the synchronous strategy and once with the async strategy.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sales_analytics::cli::StrategyType;
    use sales_analytics::strategy::{create_strategy, BatchConfig};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture through the selected strategy and compare with expected.txt
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        // Small batches so the async strategy really merges partials
        let strategy = create_strategy(strategy_type.clone(), Some(BatchConfig::new(2, 2)));

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process sales log: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures with both processing strategies
    #[rstest]
    #[case("happy_path")]
    #[case("returns_and_free_items")]
    #[case("malformed_rows")]
    #[case("anonymous_customers")]
    #[case("multiple_countries")]
    #[case("header_only")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }

    #[rstest]
    fn test_missing_input_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let strategy = create_strategy(strategy, None);
        let mut output = Vec::new();

        let result = strategy.process(Path::new("tests/fixtures/does_not_exist.csv"), &mut output);

        let error = result.unwrap_err();
        assert!(error.to_string().contains("File not found"));
        assert!(output.is_empty());
    }
}
