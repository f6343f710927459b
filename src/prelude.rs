//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use fabric_cost::prelude::*;
//! ```

// Pricing
pub use crate::pricing::{PricingError, PricingResult, PricingTable, WorkloadDefinition};

// Engine
pub use crate::engine::{CostBreakdown, WorkloadCost, compute_cost};

// Scenarios
pub use crate::scenario::{
    Configuration, ScenarioStore, ScenarioUpdate, WorkloadSelection, WorkloadUpdate,
};

// Storage
pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

// Preferences
pub use crate::preferences::{PreferencesContext, UiPreferences};

// Export
pub use crate::export::CostSnapshot;
