//! Named data series.

/// Placeholder name used in aggregates when the aggregator has no live
/// series binding.
pub const UNBOUND_SERIES_NAME: &str = "null";

/// A named data series an aggregator can be bound to.
///
/// The series is owned by the registry that created it; aggregators hold a
/// [`std::sync::Weak`] handle and look the name up only while composing an
/// aggregate. A series may be dropped while aggregators still reference it —
/// those aggregators fall back to [`UNBOUND_SERIES_NAME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSeries {
    name: String,
}

impl MetricSeries {
    /// Create a series with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The series display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
