//! Scenario management: named configurations for side-by-side comparison.

mod config;
mod store;

pub use config::{Configuration, ScenarioUpdate, WorkloadSelection, WorkloadUpdate};
pub use store::{SCENARIOS_KEY, ScenarioStore};

use thiserror::Error;

use crate::pricing::PricingError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("no saved scenarios under {key:?}")]
    NotSaved { key: &'static str },

    #[error("unsupported scenario schema version {version}")]
    UnsupportedVersion { version: u32 },

    #[error("saved scenario list is empty")]
    Empty,

    #[error("invalid scenario record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

pub type ScenarioResult<T> = std::result::Result<T, ScenarioError>;
