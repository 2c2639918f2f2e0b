//! The series aggregator object and its lifecycle.
//!
//! One aggregator owns one accumulator. Producer threads call
//! [`track`](UInt32SeriesAggregator::track) concurrently; once per
//! aggregation cycle the pipeline calls
//! [`create_aggregate`](UInt32SeriesAggregator::create_aggregate),
//! concurrently with ongoing tracking. Measurement instances are then
//! [`reset`](UInt32SeriesAggregator::reset) or recycled into a pool via
//! [`try_recycle`](UInt32SeriesAggregator::try_recycle); lifetime counters
//! keep accruing across cycles by design.

use std::sync::{Arc, Weak};
use std::time::SystemTime;

use pulse_errors::{AggregatorError, ValidationError};
use tracing::{debug, trace};

use crate::accumulator::LockedAccumulator;
use crate::config::{AggregationCycleKind, SeriesConfig};
use crate::record::{self, AggregateRecord};
use crate::series::{MetricSeries, UNBOUND_SERIES_NAME};
use crate::value::{self, DomainRestriction, MetricValue};

/// Online statistics aggregator over the unsigned 32-bit value domain.
///
/// See the [module docs](self) for the lifecycle; see
/// [`crate::accumulator`] for the concurrency discipline.
#[derive(Debug)]
pub struct UInt32SeriesAggregator {
    accumulator: LockedAccumulator,
    config: SeriesConfig,
    data_series: Option<Weak<MetricSeries>>,
    cycle_kind: AggregationCycleKind,
}

impl UInt32SeriesAggregator {
    /// Create an aggregator for the given configuration, optionally bound to
    /// a data series.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::IncompatibleDomain`] when the
    /// configuration does not request the unsigned 32-bit domain this
    /// aggregator type implements.
    pub fn new(
        config: SeriesConfig,
        data_series: Option<Weak<MetricSeries>>,
        cycle_kind: AggregationCycleKind,
    ) -> Result<Self, AggregatorError> {
        if config.domain != DomainRestriction::UInt32Range {
            return Err(AggregatorError::IncompatibleDomain {
                supported: "unsigned 32-bit",
                requested: format!("{:?}", config.domain),
            });
        }
        debug!(
            lifetime_counter = config.lifetime_counter,
            ?cycle_kind,
            "series aggregator created"
        );
        Ok(Self {
            accumulator: LockedAccumulator::new(),
            config,
            data_series,
            cycle_kind,
        })
    }

    /// Validate a value and fold it into the running aggregate.
    ///
    /// An absent input ([`MetricValue::Absent`], or `None` through the
    /// `Option` conversion) tracks nothing and succeeds. A rejected value
    /// leaves the accumulator completely unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] naming the rejected value when the
    /// input fails domain validation.
    pub fn track(&self, value: impl Into<MetricValue>) -> Result<(), ValidationError> {
        if let Some(v) = value::coerce(value.into(), self.config.domain)? {
            self.accumulator.fold(v);
        }
        Ok(())
    }

    /// Compose an aggregate from a consistent snapshot of the current state.
    ///
    /// Never mutates the accumulator; may be called repeatedly and
    /// concurrently with ongoing `track` calls. The timestamp is the
    /// caller's — this core never reads a clock.
    #[must_use]
    pub fn create_aggregate(&self, timestamp: SystemTime) -> AggregateRecord {
        let state = self.accumulator.snapshot();
        AggregateRecord {
            series_name: self.series_name(),
            count: state.count,
            sum: state.sum,
            max: state.max,
            min: state.min,
            std_dev: state.std_dev(),
            timestamp,
            period_ms: record::period_millis(timestamp),
            cycle_kind: self.cycle_kind,
        }
    }

    /// Zero the accumulated state for a new cycle.
    ///
    /// For lifetime counters this is a documented no-op: the accumulator
    /// keeps accruing across cycles, and only recycling touches the cycle
    /// metadata.
    pub fn reset(&self) {
        if self.config.lifetime_counter {
            trace!("reset ignored for lifetime counter");
            return;
        }
        self.accumulator.reset();
    }

    /// Reinitialize this instance for reuse with a new cycle kind and series
    /// binding.
    ///
    /// Returns `false`, mutating nothing, for a lifetime counter — clearing
    /// its state would change the series' fundamental semantics. The
    /// exclusive borrow is the "no concurrent trackers during recycle"
    /// precondition, enforced statically: the binding and cycle-kind fields
    /// are not covered by the fold's critical section.
    pub fn try_recycle(
        &mut self,
        cycle_kind: AggregationCycleKind,
        data_series: Option<Weak<MetricSeries>>,
    ) -> bool {
        if self.config.lifetime_counter {
            return false;
        }
        self.accumulator.reset();
        self.cycle_kind = cycle_kind;
        self.data_series = data_series;
        debug!(?cycle_kind, "series aggregator recycled");
        true
    }

    /// The bound data series, if the binding is still alive.
    #[must_use]
    pub fn data_series(&self) -> Option<Arc<MetricSeries>> {
        self.data_series.as_ref().and_then(Weak::upgrade)
    }

    /// The cycle kind stamped on produced aggregates.
    #[must_use]
    pub const fn cycle_kind(&self) -> AggregationCycleKind {
        self.cycle_kind
    }

    /// Whether this instance is a never-reset lifetime counter.
    #[must_use]
    pub const fn is_lifetime_counter(&self) -> bool {
        self.config.lifetime_counter
    }

    fn series_name(&self) -> String {
        self.data_series().map_or_else(
            || UNBOUND_SERIES_NAME.to_owned(),
            |series| series.name().to_owned(),
        )
    }
}
