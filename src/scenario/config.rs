//! Configuration model: one named estimate (capacity + region + workloads).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::pricing::{DEFAULT_CAPACITY_TIER, DEFAULT_REGION};

/// Clamp a usage quantity to a finite non-negative number.
pub(crate) fn clamp_usage(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Per-workload toggle and usage quantity.
///
/// A disabled selection contributes nothing regardless of its stored usage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkloadSelection {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "deserialize_usage")]
    pub usage: f64,
}

impl WorkloadSelection {
    pub fn new(enabled: bool, usage: f64) -> Self {
        Self {
            enabled,
            usage: clamp_usage(usage),
        }
    }

    pub fn enabled(usage: f64) -> Self {
        Self::new(true, usage)
    }
}

// Records written by the UI may carry negative or non-numeric usage values;
// both coerce to zero instead of failing the whole document.
fn deserialize_usage<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().map(clamp_usage).unwrap_or(0.0))
}

/// A named, saved estimate: capacity tier, region, and workload selections.
///
/// Wire form is camelCase with the tier under `"capacity"`, matching the
/// records the original web calculator produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub id: u64,
    pub name: String,
    #[serde(rename = "capacity")]
    pub capacity_tier: String,
    pub region: String,
    #[serde(default)]
    pub workloads: BTreeMap<String, WorkloadSelection>,
}

impl Configuration {
    /// A fresh configuration with default tier and region and no workloads.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: format!("Scenario {id}"),
            capacity_tier: DEFAULT_CAPACITY_TIER.to_string(),
            region: DEFAULT_REGION.to_string(),
            workloads: BTreeMap::new(),
        }
    }

    pub fn workload_selection(&self, workload: &str) -> Option<&WorkloadSelection> {
        self.workloads.get(workload)
    }

    /// Insert or replace one workload selection, clamping usage.
    pub fn set_workload(&mut self, workload: impl Into<String>, enabled: bool, usage: f64) {
        self.workloads
            .insert(workload.into(), WorkloadSelection::new(enabled, usage));
    }

    pub(crate) fn apply(&mut self, update: ScenarioUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(tier) = update.capacity_tier {
            self.capacity_tier = tier;
        }
        if let Some(region) = update.region {
            self.region = region;
        }
        if let Some((workload, fields)) = update.workload {
            let selection = self.workloads.entry(workload).or_default();
            if let Some(enabled) = fields.enabled {
                selection.enabled = enabled;
            }
            if let Some(usage) = fields.usage {
                selection.usage = clamp_usage(usage);
            }
        }
    }
}

/// Partial update applied to one configuration in place.
#[derive(Debug, Clone, Default)]
pub struct ScenarioUpdate {
    name: Option<String>,
    capacity_tier: Option<String>,
    region: Option<String>,
    workload: Option<(String, WorkloadUpdate)>,
}

impl ScenarioUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn capacity_tier(mut self, tier: impl Into<String>) -> Self {
        self.capacity_tier = Some(tier.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Merge enabled/usage into a single workload's selection.
    pub fn workload(mut self, workload: impl Into<String>, fields: WorkloadUpdate) -> Self {
        self.workload = Some((workload.into(), fields));
        self
    }
}

/// Fields of one workload selection to merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadUpdate {
    enabled: Option<bool>,
    usage: Option<f64>,
}

impl WorkloadUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn usage(mut self, usage: f64) -> Self {
        self.usage = Some(usage);
        self
    }
}
