//! Fixture data for seeding a store
//!
//! Stands in for a real backing service: one ordered sequence of records per
//! entity type, consumed once at construction. The embedded set mirrors the
//! dashboard's demo data.

use serde::{Deserialize, Serialize};

use crate::error::DashResult;
use crate::models::{Budget, SavingsGoal, Template, Transaction};

/// Seed records for every entity type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub templates: Vec<Template>,

    #[serde(default)]
    pub savings_goal: SavingsGoal,
}

impl Fixtures {
    /// The demo data set compiled into the crate
    pub fn embedded() -> DashResult<Self> {
        Self::from_json(include_str!("seed.json"))
    }

    /// Parse fixtures from a JSON document
    pub fn from_json(json: &str) -> DashResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
