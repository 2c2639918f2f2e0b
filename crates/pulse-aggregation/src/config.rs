//! Per-series aggregator configuration.

use serde::{Deserialize, Serialize};

use crate::value::DomainRestriction;

/// Which aggregation cycle an aggregate belongs to.
///
/// The pipeline stamps each aggregator with a cycle kind at construction or
/// recycle time; the tag is carried unchanged into every aggregate the
/// instance produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AggregationCycleKind {
    /// The pipeline's regular wall-clock cycle.
    #[default]
    Default,
    /// The accelerated live-view cycle.
    Realtime,
    /// A caller-managed cycle.
    Custom,
}

/// Configuration fixed at aggregator construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// `true` for lifetime counters: the accumulated state is never reset
    /// between cycles, only the cycle metadata changes.
    pub lifetime_counter: bool,
    /// The numeric domain tracked values must fall within.
    pub domain: DomainRestriction,
}

impl SeriesConfig {
    /// A resettable measurement series over the unsigned 32-bit domain.
    #[must_use]
    pub const fn measurement() -> Self {
        Self {
            lifetime_counter: false,
            domain: DomainRestriction::UInt32Range,
        }
    }

    /// A monotonically accruing lifetime counter over the unsigned 32-bit
    /// domain.
    #[must_use]
    pub const fn counter() -> Self {
        Self {
            lifetime_counter: true,
            domain: DomainRestriction::UInt32Range,
        }
    }
}
