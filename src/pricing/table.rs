//! The pricing table and its builder.

use std::collections::HashMap;

use super::types::{RateTier, RegionInfo, WorkloadDefinition};
use super::{PricingError, PricingResult};
use crate::scenario::Configuration;

/// Immutable lookup table for capacity prices, region multipliers, and
/// workload rates.
///
/// [`PricingTable::default`] carries the published Fabric rates. Embedders
/// with negotiated pricing can assemble their own via [`PricingTable::builder`].
#[derive(Debug, Clone)]
pub struct PricingTable {
    capacity: HashMap<String, f64>,
    capacity_features: HashMap<String, Vec<String>>,
    regions: Vec<RegionInfo>,
    workloads: Vec<WorkloadDefinition>,
}

impl PricingTable {
    pub fn builder() -> PricingTableBuilder {
        PricingTableBuilder::new()
    }

    /// Fixed monthly price of a capacity tier in the base region.
    ///
    /// Unknown tiers are the one hard error in the system; callers should
    /// offer tiers from [`capacity_tiers`](Self::capacity_tiers) rather than
    /// free text.
    pub fn capacity_price(&self, tier: &str) -> PricingResult<f64> {
        self.capacity
            .get(tier)
            .copied()
            .ok_or_else(|| PricingError::unknown_tier(tier))
    }

    /// Marketing feature bullets for a tier, if published.
    pub fn capacity_features(&self, tier: &str) -> &[String] {
        self.capacity_features
            .get(tier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All tiers with their base-region prices, cheapest first.
    pub fn capacity_tiers(&self) -> Vec<(String, f64)> {
        let mut tiers: Vec<(String, f64)> =
            self.capacity.iter().map(|(t, p)| (t.clone(), *p)).collect();
        tiers.sort_by(|a, b| a.1.total_cmp(&b.1));
        tiers
    }

    pub fn regions(&self) -> &[RegionInfo] {
        &self.regions
    }

    /// Price multiplier for a region id.
    ///
    /// Unrecognized ids resolve to 1.0 so configurations carried over from
    /// older records keep computing.
    pub fn region_multiplier(&self, region: &str) -> f64 {
        match self.regions.iter().find(|r| r.id == region) {
            Some(r) => r.multiplier,
            None => {
                tracing::debug!(region, "unrecognized region, using 1.0 multiplier");
                1.0
            }
        }
    }

    pub fn workload(&self, id: &str) -> Option<&WorkloadDefinition> {
        self.workloads.iter().find(|w| w.id == id)
    }

    pub fn workload_definitions(&self) -> &[WorkloadDefinition] {
        &self.workloads
    }

    /// Boundary check for configurations arriving from outside the UI's
    /// enumerated controls (persisted records, embed query strings).
    ///
    /// Only an unknown capacity tier rejects; unknown regions and workload
    /// ids degrade at compute time instead.
    pub fn validate(&self, config: &Configuration) -> PricingResult<()> {
        self.capacity_price(&config.capacity_tier).map(|_| ())
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        PricingTableBuilder::new().with_defaults().build()
    }
}

/// Builder for [`PricingTable`].
#[derive(Debug, Default)]
pub struct PricingTableBuilder {
    capacity: HashMap<String, f64>,
    capacity_features: HashMap<String, Vec<String>>,
    regions: Vec<RegionInfo>,
    workloads: Vec<WorkloadDefinition>,
}

impl PricingTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, tier: impl Into<String>, monthly_price: f64) -> Self {
        self.capacity.insert(tier.into(), monthly_price);
        self
    }

    pub fn capacity_features(
        mut self,
        tier: impl Into<String>,
        features: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.capacity_features
            .insert(tier.into(), features.into_iter().map(Into::into).collect());
        self
    }

    pub fn region(mut self, region: RegionInfo) -> Self {
        self.regions.retain(|r| r.id != region.id);
        self.regions.push(region);
        self
    }

    pub fn workload(mut self, workload: WorkloadDefinition) -> Self {
        self.workloads.retain(|w| w.id != workload.id);
        self.workloads.push(workload);
        self
    }

    /// Load the published Fabric rates.
    pub fn with_defaults(self) -> Self {
        self.capacity("F2", 263.0)
            .capacity("F4", 526.0)
            .capacity("F8", 1052.0)
            .capacity("F16", 2104.0)
            .capacity("F32", 4208.0)
            .capacity("F64", 8416.0)
            .capacity("F128", 16832.0)
            .capacity("F256", 33664.0)
            .capacity("F512", 67328.0)
            .capacity_features(
                "F2",
                [
                    "2 Capacity Units",
                    "Basic workloads",
                    "Standard support",
                    "Regional availability",
                ],
            )
            .capacity_features(
                "F4",
                [
                    "4 Capacity Units",
                    "Enhanced performance",
                    "Advanced analytics",
                    "Multi-region support",
                ],
            )
            .capacity_features(
                "F8",
                [
                    "8 Capacity Units",
                    "High-performance computing",
                    "Real-time analytics",
                    "Premium support",
                ],
            )
            .capacity_features(
                "F16",
                [
                    "16 Capacity Units",
                    "Enterprise-grade performance",
                    "Advanced security features",
                    "Dedicated support",
                ],
            )
            .capacity_features(
                "F32",
                [
                    "32 Capacity Units",
                    "Maximum performance",
                    "Custom configurations",
                    "24/7 premium support",
                ],
            )
            .capacity_features(
                "F64",
                [
                    "64 Capacity Units",
                    "Ultra-high performance",
                    "Enterprise features",
                    "Dedicated account manager",
                ],
            )
            .region(RegionInfo::new("us-east", "US East", 1.0))
            .region(RegionInfo::new("us-west", "US West", 1.0))
            .region(RegionInfo::new("europe", "Europe", 1.1))
            .region(RegionInfo::new("asia", "Asia Pacific", 1.2))
            .workload(
                WorkloadDefinition::new(
                    "dataFactory",
                    "Data Factory",
                    0.50,
                    "per pipeline run",
                    "ETL/ELT data integration and transformation pipelines",
                )
                .with_rate_tiers(vec![
                    RateTier::new("0-1,000 runs", 0.50),
                    RateTier::new("1,001-10,000 runs", 0.45),
                    RateTier::new("10,001+ runs", 0.40),
                ]),
            )
            .workload(
                WorkloadDefinition::new(
                    "synapse",
                    "Synapse Analytics",
                    2.00,
                    "per compute hour",
                    "Data warehousing and big data analytics platform",
                )
                .with_rate_tiers(vec![
                    RateTier::new("0-100 hours", 2.00),
                    RateTier::new("101-500 hours", 1.80),
                    RateTier::new("501+ hours", 1.60),
                ]),
            )
            .workload(
                WorkloadDefinition::new(
                    "powerBI",
                    "Power BI Premium",
                    10.00,
                    "per user per month",
                    "Advanced business intelligence and reporting capabilities",
                )
                .with_rate_tiers(vec![
                    RateTier::new("1-100 users", 10.00),
                    RateTier::new("101-500 users", 9.00),
                    RateTier::new("501+ users", 8.00),
                ]),
            )
            .workload(
                WorkloadDefinition::new(
                    "dataActivator",
                    "Data Activator",
                    0.10,
                    "per 1,000 events",
                    "Real-time data monitoring and automated alerting",
                )
                .with_rate_tiers(vec![
                    RateTier::new("0-1M events", 0.10),
                    RateTier::new("1M-10M events", 0.08),
                    RateTier::new("10M+ events", 0.06),
                ]),
            )
            .workload(
                WorkloadDefinition::new(
                    "realTimeAnalytics",
                    "Real-Time Analytics",
                    1.50,
                    "per processing hour",
                    "Stream processing and real-time data analytics",
                )
                .with_rate_tiers(vec![
                    RateTier::new("0-100 hours", 1.50),
                    RateTier::new("101-500 hours", 1.35),
                    RateTier::new("501+ hours", 1.20),
                ]),
            )
    }

    pub fn build(self) -> PricingTable {
        PricingTable {
            capacity: self.capacity,
            capacity_features: self.capacity_features,
            regions: self.regions,
            workloads: self.workloads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_capacity_prices() {
        let table = PricingTable::default();
        assert_eq!(table.capacity_price("F2").unwrap(), 263.0);
        assert_eq!(table.capacity_price("F512").unwrap(), 67328.0);
    }

    #[test]
    fn test_unknown_tier_is_hard_error() {
        let table = PricingTable::default();
        let err = table.capacity_price("F1024").unwrap_err();
        assert_eq!(err, PricingError::unknown_tier("F1024"));
    }

    #[test]
    fn test_tier_prices_strictly_increase() {
        let tiers = PricingTable::default().capacity_tiers();
        assert_eq!(tiers.len(), 9);
        assert_eq!(tiers[0].0, "F2");
        for pair in tiers.windows(2) {
            assert!(pair[0].1 < pair[1].1, "{:?} >= {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_region_multiplier_defaults_to_one() {
        let table = PricingTable::default();
        assert_eq!(table.region_multiplier("europe"), 1.1);
        assert_eq!(table.region_multiplier("asia"), 1.2);
        assert_eq!(table.region_multiplier("mars"), 1.0);
    }

    #[test]
    fn test_unknown_workload_is_absent_not_error() {
        let table = PricingTable::default();
        assert!(table.workload("dataFactory").is_some());
        assert!(table.workload("copilot").is_none());
    }

    #[test]
    fn test_workload_definitions_keep_catalog_order() {
        let table = PricingTable::default();
        let ids: Vec<&str> = table
            .workload_definitions()
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(
            ids,
            [
                "dataFactory",
                "synapse",
                "powerBI",
                "dataActivator",
                "realTimeAnalytics"
            ]
        );
    }

    #[test]
    fn test_custom_table() {
        let table = PricingTable::builder()
            .capacity("S1", 100.0)
            .region(RegionInfo::new("eu-central", "EU Central", 1.05))
            .workload(WorkloadDefinition::new(
                "etl", "ETL", 0.25, "per run", "pipelines",
            ))
            .build();

        assert_eq!(table.capacity_price("S1").unwrap(), 100.0);
        assert_eq!(table.region_multiplier("eu-central"), 1.05);
        assert!(table.capacity_price("F2").is_err());
    }

    #[test]
    fn test_capacity_features_lookup() {
        let table = PricingTable::default();
        assert_eq!(table.capacity_features("F2").len(), 4);
        assert!(table.capacity_features("F512").is_empty());
    }
}
