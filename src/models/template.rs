//! Recurring transaction template model
//!
//! A template describes a transaction that repeats on a schedule. Applying a
//! template materializes one transaction and advances `next_date`; nothing
//! advances automatically with the passage of time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TemplateId;
use super::money::Money;
use super::transaction::TransactionKind;

/// How often a template repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(other.to_string()),
        }
    }
}

/// A recurring transaction template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier, assigned by the service
    pub id: TemplateId,

    /// Description copied onto generated transactions
    pub description: String,

    /// Amount copied onto generated transactions, always positive
    pub amount: Money,

    /// Income or expense
    pub kind: TransactionKind,

    /// Category copied onto generated transactions
    pub category: String,

    /// Repeat schedule
    pub frequency: Frequency,

    /// First occurrence date
    pub start_date: NaiveDate,

    /// Next occurrence; advanced only when the template is applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<NaiveDate>,

    /// Inactive templates are skipped by the processor
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a new template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub next_date: Option<NaiveDate>,
    /// Defaults to active when omitted
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Fields that may be changed on an existing template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatePatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub frequency: Option<Frequency>,
    pub start_date: Option<NaiveDate>,
    pub next_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

impl TemplatePatch {
    /// Apply the present fields onto an existing template
    pub fn apply(&self, template: &mut Template) {
        if let Some(description) = &self.description {
            template.description = description.clone();
        }
        if let Some(amount) = self.amount {
            template.amount = amount;
        }
        if let Some(kind) = self.kind {
            template.kind = kind;
        }
        if let Some(category) = &self.category {
            template.category = category.clone();
        }
        if let Some(frequency) = self.frequency {
            template.frequency = frequency;
        }
        if let Some(start_date) = self.start_date {
            template.start_date = start_date;
        }
        if let Some(next_date) = self.next_date {
            template.next_date = Some(next_date);
        }
        if let Some(is_active) = self.is_active {
            template.is_active = is_active;
        }
    }
}
