//! Prelude for pulse-aggregation.
//!
//! Re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```
//! use pulse_aggregation::prelude::*;
//!
//! let aggregator = UInt32SeriesAggregator::new(
//!     SeriesConfig::measurement(),
//!     None,
//!     AggregationCycleKind::Default,
//! );
//! assert!(aggregator.is_ok());
//! ```

pub use crate::accumulator::{AccumulatorState, LockedAccumulator};
pub use crate::aggregator::UInt32SeriesAggregator;
pub use crate::config::{AggregationCycleKind, SeriesConfig};
pub use crate::record::AggregateRecord;
pub use crate::series::{MetricSeries, UNBOUND_SERIES_NAME};
pub use crate::value::{DomainRestriction, MetricValue};

pub use pulse_errors::{AggregatorError, ValidationError};
