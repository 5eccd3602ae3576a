//! Monthly income/expense summary

use chrono::Datelike;

use crate::models::{Money, Transaction, TransactionKind};

/// Income, expenses and balance for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlySummary {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

/// Summarize the transactions falling in the given calendar month
///
/// `month` is 1-based. Transactions outside the month are ignored; the
/// balance is income minus expenses and may be negative.
pub fn monthly_summary(transactions: &[Transaction], month: u32, year: i32) -> MonthlySummary {
    let mut income = Money::zero();
    let mut expenses = Money::zero();

    for txn in transactions {
        if txn.date.month() != month || txn.date.year() != year {
            continue;
        }
        match txn.kind {
            TransactionKind::Income => income += txn.amount,
            TransactionKind::Expense => expenses += txn.amount,
        }
    }

    MonthlySummary {
        income,
        expenses,
        balance: income - expenses,
    }
}
