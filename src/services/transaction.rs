//! Transaction service
//!
//! CRUD operations over the transaction collection. Ids are assigned
//! max-plus-one under the collection's write lock, so they are strictly
//! increasing and never reused, even after deletes.

use chrono::Utc;
use tracing::debug;

use crate::config::OpKind;
use crate::error::{DashError, DashResult};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionPatch};
use crate::store::Store;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a Store,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List every transaction, newest date first
    pub async fn get_all(&self) -> Vec<Transaction> {
        self.store.settings().pause(OpKind::GetAll).await;

        let transactions = self.store.transactions.read().await;
        let mut copies = transactions.clone();
        copies.sort_by(|a, b| b.date.cmp(&a.date));
        copies
    }

    /// Get a transaction by id
    pub async fn get(&self, id: TransactionId) -> DashResult<Transaction> {
        self.store.settings().pause(OpKind::Get).await;

        let transactions = self.store.transactions.read().await;
        transactions
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DashError::transaction_not_found(id.raw()))
    }

    /// Create a new transaction
    pub async fn create(&self, input: NewTransaction) -> DashResult<Transaction> {
        self.store.settings().pause(OpKind::Create).await;

        let description = input.description.trim();
        if description.is_empty() {
            return Err(DashError::Validation(
                "Transaction description cannot be empty".into(),
            ));
        }
        if !input.amount.is_positive() {
            return Err(DashError::Validation(
                "Transaction amount must be positive".into(),
            ));
        }

        let mut transactions = self.store.transactions.write().await;
        let new_id = self.store.next_transaction_id(&transactions);

        let txn = Transaction {
            id: TransactionId::from_raw(new_id),
            description: description.to_string(),
            amount: input.amount,
            kind: input.kind,
            category: input.category,
            date: input.date.unwrap_or_else(Utc::now),
            template_id: input.template_id,
        };

        transactions.push(txn.clone());
        debug!(id = %txn.id, kind = %txn.kind, "created transaction");
        Ok(txn)
    }

    /// Merge a patch onto an existing transaction
    pub async fn update(
        &self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> DashResult<Transaction> {
        self.store.settings().pause(OpKind::Update).await;

        let mut transactions = self.store.transactions.write().await;
        let txn = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DashError::transaction_not_found(id.raw()))?;

        patch.apply(txn);
        debug!(id = %txn.id, "updated transaction");
        Ok(txn.clone())
    }

    /// Remove a transaction
    pub async fn delete(&self, id: TransactionId) -> DashResult<()> {
        self.store.settings().pause(OpKind::Delete).await;

        let mut transactions = self.store.transactions.write().await;
        let index = transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DashError::transaction_not_found(id.raw()))?;

        transactions.remove(index);
        debug!(%id, "deleted transaction");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Money, TransactionKind};
    use chrono::TimeZone;

    fn test_store() -> Store {
        Store::new(Settings::zero_latency())
    }

    fn draft(description: &str, amount: i64) -> NewTransaction {
        NewTransaction {
            description: description.to_string(),
            amount: Money::from_units(amount),
            kind: TransactionKind::Expense,
            category: "Food & Dining".to_string(),
            date: None,
            template_id: None,
        }
    }

    #[tokio::test]
    async fn test_ids_strictly_increase_and_never_repeat() {
        let store = test_store();
        let service = TransactionService::new(&store);

        let first = service.create(draft("Coffee", 4)).await.unwrap();
        assert_eq!(first.id, TransactionId::from_raw(1));

        service.delete(first.id).await.unwrap();

        let second = service.create(draft("Lunch", 12)).await.unwrap();
        assert_eq!(second.id, TransactionId::from_raw(2));
    }

    #[tokio::test]
    async fn test_get_all_sorted_newest_first() {
        let store = test_store();
        let service = TransactionService::new(&store);

        for day in [5, 1, 20] {
            let month = if day == 1 { 3 } else { 1 };
            let mut d = draft("Item", 10);
            d.date = Some(Utc.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap());
            service.create(d).await.unwrap();
        }

        let all = service.get_all().await;
        let dates: Vec<_> = all.iter().map(|t| t.date.date_naive().to_string()).collect();
        assert_eq!(dates, ["2024-03-01", "2024-01-20", "2024-01-05"]);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let store = test_store();
        let service = TransactionService::new(&store);

        let err = service.create(draft("  ", 10)).await.unwrap_err();
        assert!(matches!(err, DashError::Validation(_)));

        let err = service.create(draft("Refund", 0)).await.unwrap_err();
        assert!(matches!(err, DashError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_defaults_date_to_now() {
        let store = test_store();
        let service = TransactionService::new(&store);

        let before = Utc::now();
        let txn = service.create(draft("Coffee", 4)).await.unwrap();
        assert!(txn.date >= before && txn.date <= Utc::now());
    }

    #[tokio::test]
    async fn test_empty_patch_is_idempotent() {
        let store = test_store();
        let service = TransactionService::new(&store);

        let txn = service.create(draft("Coffee", 4)).await.unwrap();
        let updated = service
            .update(txn.id, TransactionPatch::default())
            .await
            .unwrap();
        assert_eq!(updated, txn);
    }

    #[tokio::test]
    async fn test_missing_id_surfaces_not_found() {
        let store = test_store();
        let service = TransactionService::new(&store);

        let missing = TransactionId::from_raw(99);
        assert!(service.get(missing).await.unwrap_err().is_not_found());
        assert!(service
            .update(missing, TransactionPatch::default())
            .await
            .unwrap_err()
            .is_not_found());
        assert!(service.delete(missing).await.unwrap_err().is_not_found());
    }
}
