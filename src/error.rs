//! Custom error types for moneydash
//!
//! This module defines the error hierarchy for the dashboard core using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for moneydash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Validation errors for caller-supplied data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: u32 },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Template frequency outside the recognized set
    #[error("Unsupported frequency: {0}")]
    UnsupportedFrequency(String),

    /// Fixture data could not be parsed
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl DashError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(id: u32) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            id,
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(id: u32) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            id,
        }
    }

    /// Create a "not found" error for templates
    pub fn template_not_found(id: u32) -> Self {
        Self::NotFound {
            entity_type: "Template",
            id,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::Fixture(err.to_string())
    }
}

/// Result type alias for moneydash operations
pub type DashResult<T> = Result<T, DashError>;
