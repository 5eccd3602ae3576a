//! Budget service
//!
//! CRUD operations over the budget collection. At most one live budget may
//! exist per category; the stored `spent` field is derived data and is forced
//! to zero on create.

use tracing::debug;

use crate::config::OpKind;
use crate::error::{DashError, DashResult};
use crate::models::{Budget, BudgetId, BudgetPatch, BudgetPeriod, Money, NewBudget};
use crate::store::Store;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List every budget in insertion order
    pub async fn get_all(&self) -> Vec<Budget> {
        self.store.settings().pause(OpKind::GetAll).await;

        self.store.budgets.read().await.clone()
    }

    /// Get a budget by id
    pub async fn get(&self, id: BudgetId) -> DashResult<Budget> {
        self.store.settings().pause(OpKind::Get).await;

        let budgets = self.store.budgets.read().await;
        budgets
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| DashError::budget_not_found(id.raw()))
    }

    /// Create a new budget
    ///
    /// Fails with [`DashError::Duplicate`] when a budget already exists for
    /// the category.
    pub async fn create(&self, input: NewBudget) -> DashResult<Budget> {
        self.store.settings().pause(OpKind::Create).await;

        input.validate().map_err(DashError::Validation)?;
        let category = input.category.trim().to_string();

        let mut budgets = self.store.budgets.write().await;
        if budgets.iter().any(|b| b.category == category) {
            return Err(DashError::Duplicate {
                entity_type: "Budget",
                identifier: category,
            });
        }

        let new_id = self.store.next_budget_id(&budgets);
        let budget = Budget {
            id: BudgetId::from_raw(new_id),
            category,
            allocated: input.allocated,
            spent: Money::zero(),
            period: BudgetPeriod::Monthly,
        };

        budgets.push(budget.clone());
        debug!(id = %budget.id, category = %budget.category, "created budget");
        Ok(budget)
    }

    /// Merge a patch onto an existing budget
    pub async fn update(&self, id: BudgetId, patch: BudgetPatch) -> DashResult<Budget> {
        self.store.settings().pause(OpKind::Update).await;

        if !id.is_valid() {
            return Err(DashError::Validation("Invalid budget id".into()));
        }
        patch.validate().map_err(DashError::Validation)?;

        let mut budgets = self.store.budgets.write().await;
        let budget = budgets
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| DashError::budget_not_found(id.raw()))?;

        patch.apply(budget);
        debug!(id = %budget.id, "updated budget");
        Ok(budget.clone())
    }

    /// Remove a budget
    pub async fn delete(&self, id: BudgetId) -> DashResult<()> {
        self.store.settings().pause(OpKind::Delete).await;

        let mut budgets = self.store.budgets.write().await;
        let index = budgets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| DashError::budget_not_found(id.raw()))?;

        budgets.remove(index);
        debug!(%id, "deleted budget");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn test_store() -> Store {
        Store::new(Settings::zero_latency())
    }

    fn draft(category: &str, allocated: i64) -> NewBudget {
        NewBudget {
            category: category.to_string(),
            allocated: Money::from_units(allocated),
        }
    }

    #[tokio::test]
    async fn test_create_zeroes_spent_and_forces_monthly() {
        let store = test_store();
        let service = BudgetService::new(&store);

        let budget = service.create(draft("Food & Dining", 500)).await.unwrap();
        assert_eq!(budget.id, BudgetId::from_raw(1));
        assert!(budget.spent.is_zero());
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }

    #[tokio::test]
    async fn test_duplicate_category_rejected() {
        let store = test_store();
        let service = BudgetService::new(&store);

        service.create(draft("Food & Dining", 500)).await.unwrap();
        let err = service.create(draft("Food & Dining", 300)).await.unwrap_err();
        assert!(matches!(err, DashError::Duplicate { .. }));

        // the collection is unchanged
        assert_eq!(service.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_category_free_again_after_delete() {
        let store = test_store();
        let service = BudgetService::new(&store);

        let first = service.create(draft("Utilities", 250)).await.unwrap();
        service.delete(first.id).await.unwrap();

        let second = service.create(draft("Utilities", 300)).await.unwrap();
        assert_eq!(second.id, BudgetId::from_raw(2));
    }

    #[tokio::test]
    async fn test_update_validates_id_and_allocated() {
        let store = test_store();
        let service = BudgetService::new(&store);
        let budget = service.create(draft("Utilities", 250)).await.unwrap();

        let err = service
            .update(BudgetId::from_raw(0), BudgetPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DashError::Validation(_)));

        let err = service
            .update(
                budget.id,
                BudgetPatch {
                    allocated: Some(Money::from_cents(-100)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DashError::Validation(_)));

        let updated = service
            .update(
                budget.id,
                BudgetPatch {
                    allocated: Some(Money::zero()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.allocated.is_zero());
    }

    #[tokio::test]
    async fn test_get_all_preserves_insertion_order() {
        let store = test_store();
        let service = BudgetService::new(&store);

        service.create(draft("Housing", 1400)).await.unwrap();
        service.create(draft("Entertainment", 150)).await.unwrap();
        service.create(draft("Healthcare", 100)).await.unwrap();

        let categories: Vec<_> = service
            .get_all()
            .await
            .into_iter()
            .map(|b| b.category)
            .collect();
        assert_eq!(categories, ["Housing", "Entertainment", "Healthcare"]);
    }
}
