//! Report output
//!
//! Renders a [`Report`] as human-readable text. Pure with respect to the
//! report: the same report always produces the same bytes.
//!
//! ```text
//! Total transactions: 2
//! Total revenue: $12.50
//!
//! Revenue by country:
//! - US: $12.50
//!
//! Top product: Widget (5 units sold)
//!
//! Top customer: C1 (spent $7.50)
//! ```

use crate::types::{AnalyticsError, Report};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

/// Format a monetary amount with a `$` prefix and 2 decimal places
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Write the report to `output`
///
/// Only countries with positive revenue are listed, in ascending name order.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(AnalyticsError::Output)` if a write error occurred
pub fn write_report(report: &Report, output: &mut dyn Write) -> Result<(), AnalyticsError> {
    render(report, output).map_err(AnalyticsError::output)
}

fn render(report: &Report, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output, "Total transactions: {}", report.transaction_count)?;
    writeln!(output, "Total revenue: {}", format_money(report.total_revenue))?;

    writeln!(output)?;
    writeln!(output, "Revenue by country:")?;
    for (country, revenue) in report.countries_with_revenue() {
        writeln!(output, "- {}: {}", country, format_money(revenue))?;
    }

    writeln!(output)?;
    match &report.top_product {
        Some(top) => writeln!(
            output,
            "Top product: {} ({} units sold)",
            top.key, top.value
        )?,
        None => writeln!(output, "No product sales data")?,
    }

    writeln!(output)?;
    match &report.top_customer {
        Some(top) => writeln!(
            output,
            "Top customer: {} (spent {})",
            top.key,
            format_money(top.value)
        )?,
        None => writeln!(output, "No customer data")?,
    }

    output.flush()
}
