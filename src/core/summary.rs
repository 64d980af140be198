//! Row-level run statistics
//!
//! Counts how many rows were read, accepted and skipped per category.
//! The summary is diagnostic output only; it never appears in the report body.

use crate::types::SkipReason;
use tracing::info;

/// Row counters for one processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows handed to the normalizer (header included)
    pub rows_read: u64,
    /// Rows that became transactions
    pub accepted: u64,
    /// Header rows
    pub headers: u64,
    /// Rows with fewer than 8 fields
    pub malformed: u64,
    /// Rows with zero or negative quantity
    pub returns: u64,
    /// Rows with zero or negative unit price
    pub non_positive_prices: u64,
    /// Rows whose quantity, price or date failed to parse
    pub parse_failures: u64,
}

impl RunSummary {
    /// Count a skipped row under its category
    pub fn record_skip(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::Header => self.headers += 1,
            SkipReason::TooFewFields { .. } => self.malformed += 1,
            SkipReason::NonPositiveQuantity { .. } => self.returns += 1,
            SkipReason::NonPositiveUnitPrice { .. } => self.non_positive_prices += 1,
            SkipReason::InvalidQuantity { .. }
            | SkipReason::InvalidUnitPrice { .. }
            | SkipReason::InvalidDate { .. }
            | SkipReason::LineTotalOverflow { .. } => self.parse_failures += 1,
        }
    }

    /// Total number of rows that did not become transactions
    pub fn skipped(&self) -> u64 {
        self.rows_read - self.accepted
    }

    /// Combine the counters of two partial runs
    pub fn merge(self, other: RunSummary) -> RunSummary {
        RunSummary {
            rows_read: self.rows_read + other.rows_read,
            accepted: self.accepted + other.accepted,
            headers: self.headers + other.headers,
            malformed: self.malformed + other.malformed,
            returns: self.returns + other.returns,
            non_positive_prices: self.non_positive_prices + other.non_positive_prices,
            parse_failures: self.parse_failures + other.parse_failures,
        }
    }

    /// Emit the counters as a single info event
    pub fn log(&self) {
        info!(
            rows_read = self.rows_read,
            accepted = self.accepted,
            skipped = self.skipped(),
            headers = self.headers,
            malformed = self.malformed,
            returns = self.returns,
            non_positive_prices = self.non_positive_prices,
            parse_failures = self.parse_failures,
            "Finished reading input"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_record_skip_categories() {
        let mut summary = RunSummary::default();
        summary.record_skip(&SkipReason::Header);
        summary.record_skip(&SkipReason::TooFewFields { found: 1 });
        summary.record_skip(&SkipReason::NonPositiveQuantity { quantity: -3 });
        summary.record_skip(&SkipReason::NonPositiveUnitPrice {
            price: Decimal::ZERO,
        });
        summary.record_skip(&SkipReason::InvalidUnitPrice {
            value: "x".to_string(),
        });

        assert_eq!(summary.headers, 1);
        assert_eq!(summary.malformed, 1);
        assert_eq!(summary.returns, 1);
        assert_eq!(summary.non_positive_prices, 1);
        assert_eq!(summary.parse_failures, 1);
    }

    #[test]
    fn test_merge_adds_counters() {
        let left = RunSummary {
            rows_read: 5,
            accepted: 3,
            headers: 1,
            returns: 1,
            parse_failures: 0,
            ..Default::default()
        };
        let right = RunSummary {
            rows_read: 4,
            accepted: 2,
            parse_failures: 2,
            ..Default::default()
        };

        let merged = left.merge(right);
        assert_eq!(merged.rows_read, 9);
        assert_eq!(merged.accepted, 5);
        assert_eq!(merged.skipped(), 4);
        assert_eq!(merged.parse_failures, 2);
    }
}
