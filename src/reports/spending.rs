//! Spending breakdowns for charts
//!
//! Per-category totals feed the bar and pie views; per-day totals feed the
//! time-series view.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionKind};

/// Total amount per category for transactions of the given kind
///
/// Order-independent: permuting the input yields the same totals.
pub fn category_totals(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> HashMap<String, Money> {
    let mut totals: HashMap<String, Money> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(txn.category.clone()).or_default() += txn.amount;
    }
    totals
}

/// Total amount per calendar day, ascending by date
pub fn daily_totals(transactions: &[Transaction], kind: TransactionKind) -> Vec<(NaiveDate, Money)> {
    let mut by_day: HashMap<NaiveDate, Money> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.kind == kind) {
        *by_day.entry(txn.date.date_naive()).or_default() += txn.amount;
    }

    let mut series: Vec<_> = by_day.into_iter().collect();
    series.sort_by_key(|(day, _)| *day);
    series
}
