//! Transaction aggregation
//!
//! Folds validated transactions into a [`Report`]. Every operation is a sum
//! or a max-search, so the result does not depend on input order and partial
//! accumulators built over disjoint slices of the input can be merged.
//!
//! ```text
//! Report = finish(fold(add, SalesAccumulator::default(), transactions))
//! ```
//!
//! Top product and top customer are computed only in [`SalesAccumulator::finish`],
//! after every partial has been merged.
//!
//! Sums that would leave the representable range are capped at the maximum
//! and the report is flagged as saturated; aggregation never fails.

use crate::types::{Report, TopEntry, Transaction};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::warn;

/// Running totals over a set of transactions
///
/// `SalesAccumulator::default()` is the identity of [`SalesAccumulator::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesAccumulator {
    transaction_count: u64,
    total_revenue: Decimal,
    revenue_by_country: BTreeMap<String, Decimal>,
    quantity_by_product: BTreeMap<String, i64>,
    spending_by_customer: BTreeMap<String, Decimal>,
    saturated: bool,
}

impl SalesAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one transaction to the running totals
    ///
    /// Transactions without a customer id count towards revenue and product
    /// volume but get no entry in the customer spending map.
    pub fn add(&mut self, transaction: &Transaction) {
        let line_total = transaction.line_total();
        let saturated = &mut self.saturated;

        self.transaction_count += 1;
        add_capped(&mut self.total_revenue, line_total, saturated);

        add_capped(
            self.revenue_by_country
                .entry(transaction.country().to_string())
                .or_insert(Decimal::ZERO),
            line_total,
            saturated,
        );

        add_capped(
            self.quantity_by_product
                .entry(transaction.description().to_string())
                .or_insert(0),
            transaction.quantity(),
            saturated,
        );

        if transaction.has_customer() {
            add_capped(
                self.spending_by_customer
                    .entry(transaction.customer_id().to_string())
                    .or_insert(Decimal::ZERO),
                line_total,
                saturated,
            );
        }
    }

    /// Combine two accumulators by key-wise summation
    pub fn merge(mut self, other: SalesAccumulator) -> SalesAccumulator {
        let saturated = &mut self.saturated;
        *saturated |= other.saturated;

        self.transaction_count += other.transaction_count;
        add_capped(&mut self.total_revenue, other.total_revenue, saturated);

        for (country, revenue) in other.revenue_by_country {
            add_capped(
                self.revenue_by_country
                    .entry(country)
                    .or_insert(Decimal::ZERO),
                revenue,
                saturated,
            );
        }
        for (product, quantity) in other.quantity_by_product {
            add_capped(
                self.quantity_by_product.entry(product).or_insert(0),
                quantity,
                saturated,
            );
        }
        for (customer, spending) in other.spending_by_customer {
            add_capped(
                self.spending_by_customer
                    .entry(customer)
                    .or_insert(Decimal::ZERO),
                spending,
                saturated,
            );
        }

        self
    }

    /// Number of transactions added so far
    pub fn transaction_count(&self) -> u64 {
        self.transaction_count
    }

    /// Close the fold and select the top product and top customer
    pub fn finish(self) -> Report {
        let top_product = top_entry(&self.quantity_by_product, 0);
        let top_customer = top_entry(&self.spending_by_customer, Decimal::ZERO);

        if self.saturated {
            warn!("Totals exceeded the representable range and were capped at the maximum");
        }

        Report {
            transaction_count: self.transaction_count,
            total_revenue: self.total_revenue,
            revenue_by_country: self.revenue_by_country,
            quantity_by_product: self.quantity_by_product,
            spending_by_customer: self.spending_by_customer,
            top_product,
            top_customer,
            saturated: self.saturated,
        }
    }
}

impl<'a> Extend<&'a Transaction> for SalesAccumulator {
    fn extend<I: IntoIterator<Item = &'a Transaction>>(&mut self, iter: I) {
        for transaction in iter {
            self.add(transaction);
        }
    }
}

/// Amounts that can be summed without panicking
///
/// Every summed value is strictly positive, so an overflow is always upward
/// and capping at the maximum keeps the sum independent of input order.
trait CappedSum: Copy {
    const CAP: Self;
    fn checked_sum(self, other: Self) -> Option<Self>;
}

impl CappedSum for Decimal {
    const CAP: Self = Decimal::MAX;
    fn checked_sum(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }
}

impl CappedSum for i64 {
    const CAP: Self = i64::MAX;
    fn checked_sum(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }
}

fn add_capped<V: CappedSum>(total: &mut V, amount: V, saturated: &mut bool) {
    *total = total.checked_sum(amount).unwrap_or_else(|| {
        *saturated = true;
        V::CAP
    });
}

/// Aggregate a sequence of transactions into a report in a single pass
pub fn aggregate<'a, I>(transactions: I) -> Report
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut accumulator = SalesAccumulator::new();
    accumulator.extend(transactions);
    accumulator.finish()
}

/// Entry with the strictly greatest value above `floor`
///
/// Keys are scanned in ascending order and only a strictly greater value
/// replaces the current winner, so ties go to the smallest key.
fn top_entry<V>(values: &BTreeMap<String, V>, floor: V) -> Option<TopEntry<V>>
where
    V: Copy + PartialOrd,
{
    let mut best: Option<(&String, V)> = None;
    let mut max = floor;

    for (key, value) in values {
        if *value > max {
            max = *value;
            best = Some((key, *value));
        }
    }

    best.map(|(key, value)| TopEntry {
        key: key.clone(),
        value,
    })
}
