//! Service layer for moneydash
//!
//! One service per entity type, each borrowing the shared store. Every
//! operation is asynchronous: the simulated-backend contract means callers
//! must treat calls as suspending, even though mutations themselves run
//! synchronously under a write lock.

pub mod budget;
pub mod savings;
pub mod template;
pub mod transaction;

pub use budget::BudgetService;
pub use savings::SavingsService;
pub use template::TemplateService;
pub use transaction::TransactionService;
