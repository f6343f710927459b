//! Plain-data cost snapshots for export and report generators.
//!
//! The core hands generators a fully-priced record; rendering it into a PDF,
//! a download, or a clipboard payload — and naming the file — is theirs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{WorkloadCost, compute_cost};
use crate::pricing::{PricingResult, PricingTable};
use crate::scenario::Configuration;

/// One workload line in a snapshot.
///
/// `name` carries the workload id, matching the field name in the JSON
/// documents the original calculator exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotWorkload {
    pub name: String,
    pub cost: f64,
    pub usage: f64,
}

impl From<WorkloadCost> for SnapshotWorkload {
    fn from(w: WorkloadCost) -> Self {
        Self {
            name: w.workload,
            cost: w.cost,
            usage: w.usage,
        }
    }
}

/// A priced, timestamped configuration ready for an export generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSnapshot {
    pub capacity: String,
    pub region: String,
    pub capacity_cost: f64,
    pub workloads: Vec<SnapshotWorkload>,
    pub total_cost: f64,
    pub timestamp: DateTime<Utc>,
}

impl CostSnapshot {
    /// Price the configuration and stamp the result.
    pub fn capture(table: &PricingTable, config: &Configuration) -> PricingResult<Self> {
        Self::capture_at(table, config, Utc::now())
    }

    /// [`capture`](Self::capture) with an explicit timestamp.
    pub fn capture_at(
        table: &PricingTable,
        config: &Configuration,
        timestamp: DateTime<Utc>,
    ) -> PricingResult<Self> {
        let breakdown = compute_cost(table, config)?;
        Ok(Self {
            capacity: config.capacity_tier.clone(),
            region: config.region.clone(),
            capacity_cost: breakdown.capacity_cost,
            workloads: breakdown
                .workload_costs
                .into_iter()
                .map(SnapshotWorkload::from)
                .collect(),
            total_cost: breakdown.total_cost,
            timestamp,
        })
    }
}
