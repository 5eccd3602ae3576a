//! Savings goal service
//!
//! The goal is a singleton: no ids, no collection. Target and current move
//! only through the explicit operations here, never derived from
//! transactions.

use tracing::debug;

use crate::config::OpKind;
use crate::error::{DashError, DashResult};
use crate::models::{Money, SavingsGoal};
use crate::store::Store;

/// Service for the savings goal
pub struct SavingsService<'a> {
    store: &'a Store,
}

impl<'a> SavingsService<'a> {
    /// Create a new savings service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get the current goal
    pub async fn get_goal(&self) -> SavingsGoal {
        self.store.settings().pause(OpKind::GetAll).await;

        self.store.savings_goal.read().await.clone()
    }

    /// Set a new target amount
    pub async fn update_goal(&self, target: Money) -> DashResult<SavingsGoal> {
        self.store.settings().pause(OpKind::Update).await;

        if target.is_negative() {
            return Err(DashError::Validation(
                "Savings target cannot be negative".into(),
            ));
        }

        let mut goal = self.store.savings_goal.write().await;
        goal.target = target;
        debug!(%target, "updated savings target");
        Ok(goal.clone())
    }

    /// Set the saved amount directly
    pub async fn update_current(&self, current: Money) -> DashResult<SavingsGoal> {
        self.store.settings().pause(OpKind::Update).await;

        if current.is_negative() {
            return Err(DashError::Validation(
                "Saved amount cannot be negative".into(),
            ));
        }

        let mut goal = self.store.savings_goal.write().await;
        goal.current = current;
        debug!(%current, "set savings amount");
        Ok(goal.clone())
    }

    /// Add to the saved amount
    pub async fn add_to_savings(&self, amount: Money) -> DashResult<SavingsGoal> {
        self.store.settings().pause(OpKind::Update).await;

        let mut goal = self.store.savings_goal.write().await;
        goal.current += amount;
        debug!(%amount, total = %goal.current, "added to savings");
        Ok(goal.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn test_store() -> Store {
        Store::new(Settings::zero_latency())
    }

    #[tokio::test]
    async fn test_target_and_current_round_trip() {
        let store = test_store();
        let service = SavingsService::new(&store);

        service.update_goal(Money::from_units(10000)).await.unwrap();
        service.update_current(Money::from_units(2500)).await.unwrap();

        let goal = service.get_goal().await;
        assert_eq!(goal.target, Money::from_units(10000));
        assert_eq!(goal.current, Money::from_units(2500));
    }

    #[tokio::test]
    async fn test_add_accumulates() {
        let store = test_store();
        let service = SavingsService::new(&store);

        service.add_to_savings(Money::from_units(100)).await.unwrap();
        let goal = service.add_to_savings(Money::from_units(50)).await.unwrap();
        assert_eq!(goal.current, Money::from_units(150));
    }

    #[tokio::test]
    async fn test_negative_values_rejected() {
        let store = test_store();
        let service = SavingsService::new(&store);

        assert!(service.update_goal(Money::from_cents(-1)).await.is_err());
        assert!(service.update_current(Money::from_cents(-1)).await.is_err());
    }
}
