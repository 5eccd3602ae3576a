//! Budget status and spent recomputation
//!
//! The stored `spent` on a budget is never trusted: `attach_spent` overwrites
//! it from the loaded transactions before any status is computed. Spent is
//! the lifetime sum for the category, not scoped to the current month.

use crate::models::{Budget, Money, SavingsGoal, Transaction, TransactionKind};

/// How a budget is tracking against its cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    OnTrack,
    Near,
    Over,
}

/// Derived status for one budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    /// Percent of the cap consumed, capped at 100
    pub percentage: f64,
    /// Headroom left, clamped at zero
    pub remaining: Money,
    pub tier: StatusTier,
}

/// Compute spent-vs-allocated status for a budget
///
/// A zero allocation reports 0% rather than dividing by zero.
pub fn budget_status(budget: &Budget) -> BudgetStatus {
    let percentage = if budget.allocated.is_zero() {
        0.0
    } else {
        let raw = budget.spent.cents() as f64 / budget.allocated.cents() as f64 * 100.0;
        raw.min(100.0)
    };

    let tier = if percentage >= 100.0 {
        StatusTier::Over
    } else if percentage >= 80.0 {
        StatusTier::Near
    } else {
        StatusTier::OnTrack
    };

    BudgetStatus {
        percentage,
        remaining: (budget.allocated - budget.spent).max_zero(),
        tier,
    }
}

/// Recompute `spent` on each budget from the loaded transactions
///
/// Sums expense transactions whose category matches the budget's, across all
/// transactions supplied. Deterministic and order-independent.
pub fn attach_spent(mut budgets: Vec<Budget>, transactions: &[Transaction]) -> Vec<Budget> {
    for budget in &mut budgets {
        budget.spent = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense && t.category == budget.category)
            .map(|t| t.amount)
            .sum();
    }
    budgets
}

/// Percent of the savings target reached, capped at 100
pub fn savings_progress(goal: &SavingsGoal) -> f64 {
    if goal.target.is_zero() {
        return 0.0;
    }
    (goal.current.cents() as f64 / goal.target.cents() as f64 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, BudgetPeriod, TransactionId};
    use chrono::{TimeZone, Utc};

    fn budget(category: &str, allocated: i64, spent: i64) -> Budget {
        Budget {
            id: BudgetId::from_raw(1),
            category: category.to_string(),
            allocated: Money::from_units(allocated),
            spent: Money::from_units(spent),
            period: BudgetPeriod::Monthly,
        }
    }

    fn expense(category: &str, amount: i64, month: u32) -> Transaction {
        Transaction {
            id: TransactionId::from_raw(1),
            description: "Sample".to_string(),
            amount: Money::from_units(amount),
            kind: TransactionKind::Expense,
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(2024, month, 10, 9, 0, 0).unwrap(),
            template_id: None,
        }
    }

    #[test]
    fn test_status_tiers() {
        assert_eq!(budget_status(&budget("A", 100, 50)).tier, StatusTier::OnTrack);
        assert_eq!(budget_status(&budget("A", 100, 80)).tier, StatusTier::Near);
        assert_eq!(budget_status(&budget("A", 100, 100)).tier, StatusTier::Over);
        assert_eq!(budget_status(&budget("A", 100, 140)).tier, StatusTier::Over);
    }

    #[test]
    fn test_percentage_caps_at_hundred_and_remaining_clamps() {
        let status = budget_status(&budget("A", 100, 140));
        assert_eq!(status.percentage, 100.0);
        assert_eq!(status.remaining, Money::zero());

        let status = budget_status(&budget("A", 200, 50));
        assert_eq!(status.percentage, 25.0);
        assert_eq!(status.remaining, Money::from_units(150));
    }

    #[test]
    fn test_zero_allocation_guarded() {
        let status = budget_status(&budget("A", 0, 0));
        assert_eq!(status.percentage, 0.0);
        assert_eq!(status.remaining, Money::zero());
        assert_eq!(status.tier, StatusTier::OnTrack);
    }

    #[test]
    fn test_attach_spent_is_lifetime_not_monthly() {
        let budgets = vec![budget("Food & Dining", 500, 0), budget("Utilities", 250, 99)];
        let transactions = vec![
            expense("Food & Dining", 80, 6),
            expense("Food & Dining", 45, 5),
            expense("Utilities", 90, 6),
        ];

        let budgets = attach_spent(budgets, &transactions);
        assert_eq!(budgets[0].spent, Money::from_units(125));
        assert_eq!(budgets[1].spent, Money::from_units(90));
    }

    #[test]
    fn test_attach_spent_order_independent() {
        let mut transactions = vec![
            expense("Food & Dining", 80, 6),
            expense("Utilities", 90, 6),
            expense("Food & Dining", 45, 5),
        ];
        let forward = attach_spent(vec![budget("Food & Dining", 500, 0)], &transactions);
        transactions.reverse();
        let backward = attach_spent(vec![budget("Food & Dining", 500, 0)], &transactions);
        assert_eq!(forward[0].spent, backward[0].spent);
    }

    #[test]
    fn test_savings_progress() {
        let goal = SavingsGoal {
            name: "Fund".to_string(),
            current: Money::from_units(2500),
            target: Money::from_units(10000),
        };
        assert_eq!(savings_progress(&goal), 25.0);

        let empty = SavingsGoal::default();
        assert_eq!(savings_progress(&empty), 0.0);
    }
}
