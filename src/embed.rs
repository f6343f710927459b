//! Embed-shell boundary: seeding the calculator from a query string.
//!
//! Embeddable shells host the same engine; the only thing they hand the core
//! is an optional starting configuration parsed from the embed URL's
//! `capacity`, `region`, and `workloads` parameters.

use std::collections::BTreeMap;

use crate::pricing::{PricingResult, PricingTable};
use crate::scenario::{Configuration, WorkloadSelection};

/// Which hosting shell is embedding the calculator.
///
/// The core computes identically under every shell; the variant only routes
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedShell {
    Compact,
    Widescreen,
    MultiStep,
    Full,
}

impl EmbedShell {
    /// Resolve the shell from the embed path segment. A missing segment
    /// falls back to the multi-step shell; an unrecognized one is rejected.
    pub fn parse(segment: Option<&str>) -> Option<Self> {
        match segment {
            None => Some(Self::MultiStep),
            Some("compact") => Some(Self::Compact),
            Some("widescreen") => Some(Self::Widescreen),
            Some("multi-step") => Some(Self::MultiStep),
            Some("full") => Some(Self::Full),
            Some(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Widescreen => "widescreen",
            Self::MultiStep => "multi-step",
            Self::Full => "full",
        }
    }
}

/// Build the starting configuration encoded in an embed query string.
///
/// Returns `Ok(None)` when no `capacity` parameter is present (the shell
/// starts from defaults). An unknown capacity tier rejects the whole query;
/// a missing region keeps the default and a malformed `workloads` JSON
/// payload degrades to no selections. Usage values pass through the usual
/// non-negative clamp on deserialization.
pub fn initial_configuration(
    query: &str,
    table: &PricingTable,
) -> PricingResult<Option<Configuration>> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut capacity = None;
    let mut region = None;
    let mut workloads_raw = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "capacity" => capacity = Some(value.into_owned()),
            "region" => region = Some(value.into_owned()),
            "workloads" => workloads_raw = Some(value.into_owned()),
            _ => {}
        }
    }

    let Some(capacity) = capacity else {
        return Ok(None);
    };
    table.capacity_price(&capacity)?;

    let mut config = Configuration::new(1);
    config.capacity_tier = capacity;
    if let Some(region) = region {
        config.region = region;
    }
    if let Some(raw) = workloads_raw {
        match serde_json::from_str::<BTreeMap<String, WorkloadSelection>>(&raw) {
            Ok(workloads) => config.workloads = workloads,
            Err(err) => {
                tracing::warn!(%err, "malformed workloads parameter, ignoring");
            }
        }
    }
    Ok(Some(config))
}
