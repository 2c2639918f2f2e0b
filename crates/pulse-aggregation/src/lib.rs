//! # pulse-aggregation
//!
//! Concurrent online numeric series aggregation for Pulse Metrics.
//!
//! This crate implements the summarization core of the telemetry pipeline: a
//! stream of observed values is folded, one value at a time, into a compact
//! running aggregate (count, sum, min, max, standard deviation) over an
//! aggregation cycle. Individual samples are never retained.
//!
//! ## Guarantees
//!
//! - **Lock discipline**: every per-value fold and every snapshot runs inside
//!   one fine-grained critical section over the whole accumulator, so a
//!   concurrent reader observes each tracked value all-or-nothing, never a
//!   torn combination of fields
//! - **Validation never partially applies**: a rejected value leaves the
//!   accumulator bit-for-bit unchanged and surfaces the offending value to
//!   the caller
//! - **No clock reads**: the caller supplies the timestamp for every
//!   aggregate it cuts
//!
//! ## Architecture
//!
//! - [`value`] - the closed input set and domain coercion/validation
//! - [`accumulator`] - the online statistics fold and its critical section
//! - [`config`] - per-series configuration and cycle kinds
//! - [`series`] - the named data series an aggregator can be bound to
//! - [`aggregator`] - the aggregator object and its lifecycle
//! - [`record`] - the finalized aggregate value object
//!
//! ## Usage
//!
//! ```
//! use std::time::SystemTime;
//!
//! use pulse_aggregation::prelude::*;
//!
//! let aggregator = UInt32SeriesAggregator::new(
//!     SeriesConfig::measurement(),
//!     None,
//!     AggregationCycleKind::Custom,
//! )?;
//!
//! aggregator.track(42u32)?;
//! aggregator.track(19u32)?;
//! assert!(aggregator.track(-1i32).is_err());
//!
//! let record = aggregator.create_aggregate(SystemTime::now());
//! assert_eq!(record.count, 2);
//! assert!((record.sum - 61.0).abs() < f64::EPSILON);
//! assert!((record.std_dev - 11.5).abs() < 1e-9);
//! # Ok::<(), pulse_errors::AggregatorError>(())
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod accumulator;
pub mod aggregator;
pub mod config;
pub mod record;
pub mod series;
pub mod value;

pub mod prelude;

pub use accumulator::{AccumulatorState, LockedAccumulator};
pub use aggregator::UInt32SeriesAggregator;
pub use config::{AggregationCycleKind, SeriesConfig};
pub use record::AggregateRecord;
pub use series::{MetricSeries, UNBOUND_SERIES_NAME};
pub use value::{DomainRestriction, MetricValue};
