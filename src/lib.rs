//! # fabric-cost
//!
//! Cost-estimation core for Microsoft Fabric capacity planning.
//!
//! One pricing table, one cost engine, one scenario store. Every calculator
//! surface (full, compact, widescreen, multi-step, comparison) prices
//! through the same [`compute_cost`] function; the crate has no opinion
//! about how the numbers are rendered.
//!
//! ## Quick Start
//!
//! ```rust
//! use fabric_cost::{PricingTable, ScenarioStore, ScenarioUpdate, WorkloadUpdate};
//!
//! fn main() -> Result<(), fabric_cost::PricingError> {
//!     let table = PricingTable::default();
//!     let mut store = ScenarioStore::new();
//!
//!     let id = store.scenarios()[0].id;
//!     store.update(
//!         id,
//!         ScenarioUpdate::new()
//!             .capacity_tier("F4")
//!             .region("europe")
//!             .workload("powerBI", WorkloadUpdate::new().enabled(true).usage(50.0)),
//!     );
//!
//!     let breakdown = table.compute(store.get(id).expect("store is never empty"))?;
//!     println!("${:.2}/month", breakdown.total_cost);
//!     Ok(())
//! }
//! ```
//!
//! ## Saving scenarios
//!
//! ```rust,no_run
//! use fabric_cost::{JsonFileStore, PricingTable, ScenarioStore};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let kv = JsonFileStore::default_location();
//! let table = PricingTable::default();
//!
//! let mut store = ScenarioStore::new();
//! if let Err(err) = store.restore(&kv, &table).await {
//!     tracing::debug!(%err, "starting with a fresh scenario list");
//! }
//! store.add();
//! store.persist(&kv).await?;
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod embed;
pub mod engine;
pub mod export;
pub mod preferences;
pub mod prelude;
pub mod pricing;
pub mod scenario;
pub mod storage;

// Re-exports for convenience
pub use embed::{EmbedShell, initial_configuration};
pub use engine::{CostBreakdown, WorkloadCost, compute_cost};
pub use export::{CostSnapshot, SnapshotWorkload};
pub use preferences::{PREFERENCES_KEY, PreferencesContext, UiPreferences};
pub use pricing::{
    DEFAULT_CAPACITY_TIER, DEFAULT_REGION, PricingError, PricingResult, PricingTable,
    PricingTableBuilder, RateTier, RegionInfo, WorkloadDefinition,
};
pub use scenario::{
    Configuration, SCENARIOS_KEY, ScenarioError, ScenarioResult, ScenarioStore, ScenarioUpdate,
    WorkloadSelection, WorkloadUpdate,
};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
