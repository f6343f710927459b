//! The scenario store: an ordered list of configurations that is never empty.

use serde::{Deserialize, Serialize};

use super::config::{Configuration, ScenarioUpdate};
use super::{ScenarioError, ScenarioResult};
use crate::pricing::PricingTable;
use crate::storage::KeyValueStore;

/// Fixed key the scenario list persists under.
pub const SCENARIOS_KEY: &str = "fabric-scenarios";

const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ScenarioEnvelope {
    version: u32,
    scenarios: Vec<Configuration>,
}

// Decoded ahead of the full envelope so a future schema change still reports
// a version mismatch instead of a parse error.
#[derive(Debug, Deserialize)]
struct EnvelopeProbe {
    #[serde(default)]
    version: u32,
}

/// Ordered list of named configurations with stable, never-reused ids.
///
/// The comparison surface requires at least one scenario at all times, so
/// the store is created holding one default configuration and
/// [`remove`](Self::remove) refuses to delete the last entry.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    scenarios: Vec<Configuration>,
    next_id: u64,
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self {
            scenarios: vec![Configuration::new(1)],
            next_id: 2,
        }
    }

    pub fn scenarios(&self) -> &[Configuration] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Configuration> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a fresh configuration with default tier and region.
    pub fn add(&mut self) -> &Configuration {
        let config = Configuration::new(self.allocate_id());
        self.scenarios.push(config);
        &self.scenarios[self.scenarios.len() - 1]
    }

    /// Copy an existing configuration under a fresh id with a "(Copy)" name
    /// suffix. No-op (`None`) when the id is unknown.
    pub fn duplicate(&mut self, id: u64) -> Option<&Configuration> {
        let mut copy = self.get(id)?.clone();
        copy.id = self.allocate_id();
        copy.name.push_str(" (Copy)");
        self.scenarios.push(copy);
        Some(&self.scenarios[self.scenarios.len() - 1])
    }

    /// Remove a configuration, refusing to empty the list.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.scenarios.len() <= 1 {
            return false;
        }
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        self.scenarios.len() < before
    }

    /// Merge partial fields into one configuration. No-op (false) when the
    /// id is unknown.
    pub fn update(&mut self, id: u64, update: ScenarioUpdate) -> bool {
        match self.scenarios.iter_mut().find(|s| s.id == id) {
            Some(config) => {
                config.apply(update);
                true
            }
            None => false,
        }
    }

    /// Write the scenario list to the store under [`SCENARIOS_KEY`], wrapped
    /// in a versioned envelope.
    pub async fn persist(&self, store: &dyn KeyValueStore) -> ScenarioResult<()> {
        let envelope = ScenarioEnvelope {
            version: ENVELOPE_VERSION,
            scenarios: self.scenarios.clone(),
        };
        store.put(SCENARIOS_KEY, serde_json::to_value(&envelope)?).await?;
        Ok(())
    }

    /// Replace the scenario list with the persisted one.
    ///
    /// A missing record, malformed JSON, an unsupported envelope version, an
    /// empty list, or a scenario referencing an unknown capacity tier all
    /// return an error and leave the in-memory list exactly as it was.
    pub async fn restore(
        &mut self,
        store: &dyn KeyValueStore,
        table: &PricingTable,
    ) -> ScenarioResult<()> {
        let Some(raw) = store.get(SCENARIOS_KEY).await? else {
            return Err(ScenarioError::NotSaved { key: SCENARIOS_KEY });
        };

        let probe: EnvelopeProbe = serde_json::from_value(raw.clone())?;
        if probe.version != ENVELOPE_VERSION {
            tracing::warn!(version = probe.version, "rejecting saved scenarios");
            return Err(ScenarioError::UnsupportedVersion {
                version: probe.version,
            });
        }

        let envelope: ScenarioEnvelope = serde_json::from_value(raw)?;
        if envelope.scenarios.is_empty() {
            return Err(ScenarioError::Empty);
        }
        for scenario in &envelope.scenarios {
            table.validate(scenario)?;
        }

        let max_id = envelope.scenarios.iter().map(|s| s.id).max().unwrap_or(0);
        self.next_id = max_id + 1;
        self.scenarios = envelope.scenarios;
        Ok(())
    }
}
