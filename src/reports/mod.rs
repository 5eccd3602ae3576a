//! Derived aggregates for the dashboard views
//!
//! Pure, stateless functions over already-fetched records. Nothing here is
//! persisted; views recompute on every load.

pub mod budget_overview;
pub mod spending;
pub mod summary;

pub use budget_overview::{attach_spent, budget_status, savings_progress, BudgetStatus, StatusTier};
pub use spending::{category_totals, daily_totals};
pub use summary::{monthly_summary, MonthlySummary};
