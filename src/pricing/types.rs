use serde::{Deserialize, Serialize};

/// A billing region and its uniform price multiplier.
///
/// The multiplier applies to the capacity price and to every workload cost
/// alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub id: String,
    pub label: String,
    pub multiplier: f64,
}

impl RegionInfo {
    pub fn new(id: impl Into<String>, label: impl Into<String>, multiplier: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            multiplier,
        }
    }
}

/// One row of a workload's published volume-rate schedule.
///
/// Display metadata only; the engine always bills at the workload's base
/// rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub range: String,
    pub rate: f64,
}

impl RateTier {
    pub fn new(range: impl Into<String>, rate: f64) -> Self {
        Self {
            range: range.into(),
            rate,
        }
    }
}

/// A usage-billed add-on service layered atop a capacity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadDefinition {
    pub id: String,
    pub name: String,
    /// USD per unit of usage, before the region multiplier.
    pub base_rate: f64,
    /// Unit label, e.g. "per pipeline run".
    pub unit: String,
    pub description: String,
    #[serde(default)]
    pub rate_tiers: Vec<RateTier>,
}

impl WorkloadDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_rate: f64,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_rate,
            unit: unit.into(),
            description: description.into(),
            rate_tiers: Vec::new(),
        }
    }

    pub fn with_rate_tiers(mut self, tiers: Vec<RateTier>) -> Self {
        self.rate_tiers = tiers;
        self
    }
}
