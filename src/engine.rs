//! The cost engine: pure computation from a configuration to a breakdown.
//!
//! Every calculator surface (full, compact, widescreen, multi-step,
//! comparison) prices through [`compute_cost`]; none re-derives the formula.
//! The engine returns exact f64 sums; currency formatting belongs to the
//! presentation layer.

use serde::{Deserialize, Serialize};

use crate::pricing::{PricingResult, PricingTable};
use crate::scenario::Configuration;

/// Cost contribution of one enabled workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadCost {
    pub workload: String,
    pub cost: f64,
    pub usage: f64,
}

/// Derived monthly cost of a configuration. Never stored; recompute on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub capacity_cost: f64,
    pub workload_costs: Vec<WorkloadCost>,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Sum of the workload contributions alone.
    pub fn workload_total(&self) -> f64 {
        self.workload_costs.iter().map(|w| w.cost).sum()
    }
}

/// Price a configuration against a table.
///
/// The region multiplier applies uniformly to the capacity price and every
/// workload. Disabled or zero-usage selections are skipped; a selection
/// whose workload id is not in the table keeps its line item at cost zero.
/// An unknown capacity tier is the only error.
pub fn compute_cost(table: &PricingTable, config: &Configuration) -> PricingResult<CostBreakdown> {
    let multiplier = table.region_multiplier(&config.region);
    let capacity_cost = table.capacity_price(&config.capacity_tier)? * multiplier;

    let mut workload_costs = Vec::new();
    for (id, selection) in &config.workloads {
        if !selection.enabled || selection.usage <= 0.0 {
            continue;
        }
        let cost = match table.workload(id) {
            Some(def) => def.base_rate * selection.usage * multiplier,
            None => {
                tracing::debug!(workload = %id, "unknown workload priced at zero");
                0.0
            }
        };
        workload_costs.push(WorkloadCost {
            workload: id.clone(),
            cost,
            usage: selection.usage,
        });
    }

    let total_cost = capacity_cost + workload_costs.iter().map(|w| w.cost).sum::<f64>();
    Ok(CostBreakdown {
        capacity_cost,
        workload_costs,
        total_cost,
    })
}

impl PricingTable {
    /// Convenience wrapper over [`compute_cost`].
    pub fn compute(&self, config: &Configuration) -> PricingResult<CostBreakdown> {
        compute_cost(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingError;

    const EPS: f64 = 1e-9;

    fn table() -> PricingTable {
        PricingTable::default()
    }

    #[test]
    fn test_capacity_only_cost() {
        let config = Configuration::new(1);
        let breakdown = compute_cost(&table(), &config).unwrap();

        assert!((breakdown.capacity_cost - 263.0).abs() < EPS);
        assert!(breakdown.workload_costs.is_empty());
        assert!((breakdown.total_cost - breakdown.capacity_cost).abs() < EPS);
    }

    #[test]
    fn test_data_factory_scenario() {
        // F2 in us-east with 100 pipeline runs at 0.50.
        let mut config = Configuration::new(1);
        config.set_workload("dataFactory", true, 100.0);

        let breakdown = compute_cost(&table(), &config).unwrap();
        assert!((breakdown.capacity_cost - 263.0).abs() < EPS);
        assert!((breakdown.workload_costs[0].cost - 50.0).abs() < EPS);
        assert!((breakdown.total_cost - 313.0).abs() < EPS);
    }

    #[test]
    fn test_europe_multiplier_applies_to_everything() {
        // F4 in europe: capacity 526 * 1.1, powerBI 50 * 10, synapse 50 * 2.
        let mut config = Configuration::new(1);
        config.capacity_tier = "F4".to_string();
        config.region = "europe".to_string();
        config.set_workload("powerBI", true, 50.0);
        config.set_workload("synapse", true, 50.0);

        let breakdown = compute_cost(&table(), &config).unwrap();
        assert!((breakdown.capacity_cost - 578.6).abs() < EPS);

        let power_bi = breakdown
            .workload_costs
            .iter()
            .find(|w| w.workload == "powerBI")
            .unwrap();
        let synapse = breakdown
            .workload_costs
            .iter()
            .find(|w| w.workload == "synapse")
            .unwrap();
        assert!((power_bi.cost - 550.0).abs() < EPS);
        assert!((synapse.cost - 110.0).abs() < EPS);
        assert!((breakdown.total_cost - 1238.6).abs() < EPS);
    }

    #[test]
    fn test_unknown_tier_errors() {
        let mut config = Configuration::new(1);
        config.capacity_tier = "F9999".to_string();
        let err = compute_cost(&table(), &config).unwrap_err();
        assert_eq!(err, PricingError::unknown_tier("F9999"));
    }

    #[test]
    fn test_disabled_workload_equals_removed() {
        let mut with_disabled = Configuration::new(1);
        with_disabled.set_workload("powerBI", false, 500.0);
        with_disabled.set_workload("dataFactory", true, 10.0);

        let mut without = Configuration::new(1);
        without.set_workload("dataFactory", true, 10.0);

        let t = table();
        let a = compute_cost(&t, &with_disabled).unwrap();
        let b = compute_cost(&t, &without).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_workload_contributes_zero_line_item() {
        let mut config = Configuration::new(1);
        config.set_workload("copilot", true, 1000.0);

        let breakdown = compute_cost(&table(), &config).unwrap();
        assert_eq!(breakdown.workload_costs.len(), 1);
        assert_eq!(breakdown.workload_costs[0].workload, "copilot");
        assert_eq!(breakdown.workload_costs[0].cost, 0.0);
        assert!((breakdown.total_cost - breakdown.capacity_cost).abs() < EPS);
    }

    #[test]
    fn test_unknown_region_falls_back_to_base_pricing() {
        let mut config = Configuration::new(1);
        config.region = "antarctica".to_string();
        config.set_workload("synapse", true, 10.0);

        let breakdown = compute_cost(&table(), &config).unwrap();
        assert!((breakdown.capacity_cost - 263.0).abs() < EPS);
        assert!((breakdown.total_cost - 283.0).abs() < EPS);
    }

    #[test]
    fn test_total_never_below_capacity_cost() {
        let t = table();
        let mut config = Configuration::new(1);
        for def in t.workload_definitions() {
            config.set_workload(def.id.clone(), true, 17.0);
        }
        config.set_workload("mystery", true, 9.0);

        for region in ["us-east", "us-west", "europe", "asia", "nowhere"] {
            config.region = region.to_string();
            let breakdown = t.compute(&config).unwrap();
            assert!(breakdown.total_cost >= breakdown.capacity_cost);
            assert!(breakdown.workload_costs.iter().all(|w| w.cost >= 0.0));
        }
    }

    #[test]
    fn test_compute_is_referentially_transparent() {
        let mut config = Configuration::new(1);
        config.region = "asia".to_string();
        config.set_workload("dataActivator", true, 123.0);

        let t = table();
        let first = compute_cost(&t, &config).unwrap();
        let second = compute_cost(&t, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_prices_identically() {
        let mut store = crate::scenario::ScenarioStore::new();
        store.update(
            1,
            crate::scenario::ScenarioUpdate::new()
                .capacity_tier("F16")
                .region("asia")
                .workload(
                    "realTimeAnalytics",
                    crate::scenario::WorkloadUpdate::new().enabled(true).usage(33.0),
                ),
        );
        let copy_id = store.duplicate(1).unwrap().id;

        let t = table();
        let original = t.compute(store.get(1).unwrap()).unwrap();
        let copy = t.compute(store.get(copy_id).unwrap()).unwrap();
        assert_eq!(original, copy);
    }
}
