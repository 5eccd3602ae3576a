//! Savings goal model
//!
//! A single goal per store. `current` only moves through explicit add/set
//! operations; it is never derived from transactions.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// The singleton savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Display name for the goal
    pub name: String,

    /// Amount saved so far
    pub current: Money,

    /// Target amount
    pub target: Money,
}

impl Default for SavingsGoal {
    fn default() -> Self {
        Self {
            name: "Savings Goal".to_string(),
            current: Money::zero(),
            target: Money::zero(),
        }
    }
}
