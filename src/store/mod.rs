//! In-memory entity store
//!
//! One `Store` owns every collection the services operate on. There is no
//! disk persistence: data starts from fixtures (or empty) and lives for the
//! lifetime of the store. Each collection sits behind its own `RwLock`, and
//! every mutation runs to completion under a single write guard, so id
//! assignment stays race-free even on a multi-threaded runtime.
//!
//! Stores are explicit handles, not ambient state: construct one at
//! application start and pass it to the services. Tests build isolated
//! instances freely.

pub mod fixtures;

use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

use crate::config::Settings;
use crate::error::DashResult;
use crate::models::{Budget, SavingsGoal, Template, Transaction};

pub use fixtures::Fixtures;

/// Owner of all in-memory collections
#[derive(Debug)]
pub struct Store {
    settings: Settings,
    pub(crate) transactions: RwLock<Vec<Transaction>>,
    pub(crate) budgets: RwLock<Vec<Budget>>,
    pub(crate) templates: RwLock<Vec<Template>>,
    pub(crate) savings_goal: RwLock<SavingsGoal>,
    // High-water marks so an id is never reissued after its record is
    // deleted. Only touched while the matching collection's write lock is
    // held.
    transaction_ids: AtomicU32,
    budget_ids: AtomicU32,
    template_ids: AtomicU32,
}

/// Advance a high-water counter past the ids currently in use
fn next_id(counter: &AtomicU32, max_existing: u32) -> u32 {
    let next = counter.load(Ordering::Relaxed).max(max_existing) + 1;
    counter.store(next, Ordering::Relaxed);
    next
}

impl Store {
    /// Create an empty store
    pub fn new(settings: Settings) -> Self {
        Self::with_fixtures(settings, Fixtures::default())
    }

    /// Create a store seeded from the given fixtures
    pub fn with_fixtures(settings: Settings, fixtures: Fixtures) -> Self {
        Self {
            settings,
            transaction_ids: AtomicU32::new(0),
            budget_ids: AtomicU32::new(0),
            template_ids: AtomicU32::new(0),
            transactions: RwLock::new(fixtures.transactions),
            budgets: RwLock::new(fixtures.budgets),
            templates: RwLock::new(fixtures.templates),
            savings_goal: RwLock::new(fixtures.savings_goal),
        }
    }

    /// Create a store seeded from the embedded demo data
    pub fn with_embedded_fixtures(settings: Settings) -> DashResult<Self> {
        Ok(Self::with_fixtures(settings, Fixtures::embedded()?))
    }

    /// The settings this store was constructed with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Next transaction id; call with the transaction write lock held
    pub(crate) fn next_transaction_id(&self, records: &[Transaction]) -> u32 {
        let max = records.iter().map(|t| t.id.raw()).max().unwrap_or(0);
        next_id(&self.transaction_ids, max)
    }

    /// Next budget id; call with the budget write lock held
    pub(crate) fn next_budget_id(&self, records: &[Budget]) -> u32 {
        let max = records.iter().map(|b| b.id.raw()).max().unwrap_or(0);
        next_id(&self.budget_ids, max)
    }

    /// Next template id; call with the template write lock held
    pub(crate) fn next_template_id(&self, records: &[Template]) -> u32 {
        let max = records.iter().map(|t| t.id.raw()).max().unwrap_or(0);
        next_id(&self.template_ids, max)
    }
}
