//! Transaction model
//!
//! A transaction records a single income or expense. The amount is always
//! positive; direction is carried by the kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TemplateId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the service
    pub id: TransactionId,

    /// What the transaction was for
    pub description: String,

    /// Amount, always positive (direction lives on `kind`)
    pub amount: Money,

    /// Income or expense
    pub kind: TransactionKind,

    /// Category name (denormalized; matches budgets by string equality)
    pub category: String,

    /// When the transaction occurred
    pub date: DateTime<Utc>,

    /// The recurring template that generated this transaction, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
}

/// Input for creating a new transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    /// Defaults to the creation time when omitted
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub template_id: Option<TemplateId>,
}

/// Fields that may be changed on an existing transaction
///
/// Absent fields are preserved; the id can never be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl TransactionPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.kind.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    /// Apply the present fields onto an existing transaction
    pub fn apply(&self, txn: &mut Transaction) {
        if let Some(description) = &self.description {
            txn.description = description.clone();
        }
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        if let Some(category) = &self.category {
            txn.category = category.clone();
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
    }
}
