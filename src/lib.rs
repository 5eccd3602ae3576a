//! moneydash - in-memory personal finance dashboard core
//!
//! This library provides the service layer behind a personal-finance
//! dashboard: transactions, category budgets, recurring transaction
//! templates, and a savings goal, all held in memory and seeded from fixture
//! data. There is no real persistence or network protocol; the simulated
//! backend keeps every operation asynchronous so consumers are written
//! against a suspending contract.
//!
//! # Architecture
//!
//! - `config`: latency settings for the simulated backend
//! - `error`: custom error types
//! - `models`: core data models (transactions, budgets, templates, savings)
//! - `store`: in-memory collections and fixture seeding
//! - `services`: per-entity CRUD plus the template processor
//! - `reports`: pure derived aggregates for the dashboard views
//!
//! # Example
//!
//! ```rust,ignore
//! use moneydash::config::Settings;
//! use moneydash::services::TransactionService;
//! use moneydash::store::Store;
//!
//! let store = Store::with_embedded_fixtures(Settings::default())?;
//! let transactions = TransactionService::new(&store).get_all().await;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{DashError, DashResult};
