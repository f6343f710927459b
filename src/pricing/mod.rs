//! Pricing lookup data: capacity tiers, regions, and workload definitions.
//!
//! The table is immutable once built. Capacity lookups fail hard on unknown
//! tiers; region and workload lookups degrade to a zero-effect default so a
//! stale configuration never breaks cost display.

mod table;
mod types;

pub use table::{PricingTable, PricingTableBuilder};
pub use types::{RateTier, RegionInfo, WorkloadDefinition};

use thiserror::Error;

/// Default capacity tier for new configurations.
pub const DEFAULT_CAPACITY_TIER: &str = "F2";

/// Default region for new configurations.
pub const DEFAULT_REGION: &str = "us-east";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("unknown capacity tier: {tier}")]
    UnknownTier { tier: String },
}

impl PricingError {
    pub fn unknown_tier(tier: impl Into<String>) -> Self {
        Self::UnknownTier { tier: tier.into() }
    }
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::unknown_tier("F1024");
        assert!(err.to_string().contains("F1024"));
    }
}
