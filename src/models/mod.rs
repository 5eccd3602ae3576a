//! Core data models for moneydash
//!
//! Plain records with service-assigned integer ids. Draft (`New*`) and patch
//! (`*Patch`) types make the settable surface of each entity explicit.

pub mod budget;
pub mod ids;
pub mod money;
pub mod savings;
pub mod template;
pub mod transaction;

pub use budget::{Budget, BudgetPatch, BudgetPeriod, NewBudget};
pub use ids::{BudgetId, TemplateId, TransactionId};
pub use money::Money;
pub use savings::SavingsGoal;
pub use template::{Frequency, NewTemplate, Template, TemplatePatch};
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
