//! Summary report produced by the aggregator

use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// A winning entry of a grouped reduction (top product, top customer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopEntry<V> {
    /// Grouping key (product description or customer id)
    pub key: String,
    /// Accumulated value for that key
    pub value: V,
}

/// Final summary of a run
///
/// Built once by folding over all accepted transactions and handed to the
/// report writer as read-only output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    /// Number of transactions that reached the aggregator
    pub transaction_count: u64,

    /// Sum of all line totals
    pub total_revenue: Decimal,

    /// Revenue per country, keyed by country name
    pub revenue_by_country: BTreeMap<String, Decimal>,

    /// Units sold per product description
    pub quantity_by_product: BTreeMap<String, i64>,

    /// Spending per non-empty customer id
    pub spending_by_customer: BTreeMap<String, Decimal>,

    /// Product with the strictly highest unit volume, `None` when there is no data
    pub top_product: Option<TopEntry<i64>>,

    /// Customer with the strictly highest spending, `None` when there is no data
    pub top_customer: Option<TopEntry<Decimal>>,

    /// Whether any total was capped at the maximum representable value
    pub saturated: bool,
}

impl Report {
    /// Countries with positive revenue, in ascending name order
    pub fn countries_with_revenue(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.revenue_by_country
            .iter()
            .filter(|(_, revenue)| **revenue > Decimal::ZERO)
            .map(|(country, revenue)| (country.as_str(), *revenue))
    }
}
