//! Settings for the dashboard core
//!
//! The only tunable today is the latency mode: the simulated backend delays
//! every call the way a remote API would, and the service contract keeps
//! every operation asynchronous. Embedders (and tests) can switch the
//! artificial suspension off without changing any call site.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Latency mode for service operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Latency {
    /// Per-operation delays matching the simulated backend
    #[default]
    Simulated,
    /// No artificial suspension (tests, embedded use)
    Zero,
}

/// The kind of service operation, used to pick the simulated delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    GetAll,
    Get,
    Create,
    Update,
    Delete,
    Process,
    Filter,
}

impl OpKind {
    /// Simulated delay for this operation kind
    pub fn delay(&self) -> Duration {
        let millis = match self {
            OpKind::GetAll => 300,
            OpKind::Get => 200,
            OpKind::Create => 400,
            OpKind::Update => 350,
            OpKind::Delete => 250,
            OpKind::Process => 300,
            OpKind::Filter => 200,
        };
        Duration::from_millis(millis)
    }
}

/// Settings for a [`Store`](crate::store::Store) instance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Latency mode applied to every service operation
    #[serde(default)]
    pub latency: Latency,
}

impl Settings {
    /// Settings with simulated latency (the default)
    pub fn simulated() -> Self {
        Self {
            latency: Latency::Simulated,
        }
    }

    /// Settings with no artificial latency
    pub fn zero_latency() -> Self {
        Self {
            latency: Latency::Zero,
        }
    }

    /// Suspend for the simulated delay of `op`, if latency is enabled
    pub async fn pause(&self, op: OpKind) {
        if self.latency == Latency::Simulated {
            tokio::time::sleep(op.delay()).await;
        }
    }
}
