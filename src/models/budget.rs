//! Budget model
//!
//! A budget caps spending for one category. The `spent` field is
//! denormalized: it is recomputed from transactions on every load and the
//! stored value may be stale in between.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Budgeting period granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// The only supported period today
    #[default]
    Monthly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

/// A spending cap for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier, assigned by the service
    pub id: BudgetId,

    /// Category name; at most one live budget per category
    pub category: String,

    /// The periodic cap, never negative
    pub allocated: Money,

    /// Derived spend total; stale between recomputations
    #[serde(default)]
    pub spent: Money,

    /// Period granularity
    #[serde(default)]
    pub period: BudgetPeriod,
}

/// Input for creating a new budget
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub allocated: Money,
}

impl NewBudget {
    /// Validate the draft before insertion
    pub fn validate(&self) -> Result<(), String> {
        if self.category.trim().is_empty() {
            return Err("Budget category cannot be empty".to_string());
        }
        if self.allocated.is_negative() || self.allocated.is_zero() {
            return Err("Budget allocated amount must be positive".to_string());
        }
        Ok(())
    }
}

/// Fields that may be changed on an existing budget
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub allocated: Option<Money>,
    pub spent: Option<Money>,
}

impl BudgetPatch {
    /// Validate the present fields before merging
    pub fn validate(&self) -> Result<(), String> {
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err("Budget category cannot be empty".to_string());
            }
        }
        if let Some(allocated) = self.allocated {
            if allocated.is_negative() {
                return Err("Budget allocated amount cannot be negative".to_string());
            }
        }
        Ok(())
    }

    /// Apply the present fields onto an existing budget
    pub fn apply(&self, budget: &mut Budget) {
        if let Some(category) = &self.category {
            budget.category = category.clone();
        }
        if let Some(allocated) = self.allocated {
            budget.allocated = allocated;
        }
        if let Some(spent) = self.spent {
            budget.spent = spent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget_validation() {
        let ok = NewBudget {
            category: "Food & Dining".to_string(),
            allocated: Money::from_units(500),
        };
        assert!(ok.validate().is_ok());

        let empty_category = NewBudget {
            category: " ".to_string(),
            allocated: Money::from_units(500),
        };
        assert!(empty_category.validate().is_err());

        let zero_allocated = NewBudget {
            category: "Food & Dining".to_string(),
            allocated: Money::zero(),
        };
        assert!(zero_allocated.validate().is_err());
    }

    #[test]
    fn test_patch_rejects_negative_allocated() {
        let patch = BudgetPatch {
            allocated: Some(Money::from_cents(-1)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_patch_merge_preserves_absent_fields() {
        let mut budget = Budget {
            id: BudgetId::from_raw(1),
            category: "Utilities".to_string(),
            allocated: Money::from_units(200),
            spent: Money::from_units(50),
            period: BudgetPeriod::Monthly,
        };
        let patch = BudgetPatch {
            allocated: Some(Money::from_units(250)),
            ..Default::default()
        };
        patch.apply(&mut budget);
        assert_eq!(budget.allocated, Money::from_units(250));
        assert_eq!(budget.category, "Utilities");
        assert_eq!(budget.spent, Money::from_units(50));
    }
}
