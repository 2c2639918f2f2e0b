//! Centralized error types for Pulse Metrics
//!
//! This crate provides the error handling system shared by the aggregation
//! crates: value-validation failures raised on the producer hot path, and
//! construction/configuration errors raised when an aggregator is set up.
//!
//! # Architecture
//!
//! - [`validation`]: per-value validation failures; these are local to a
//!   single `track` call and always name the rejected value
//! - [`aggregation`]: aggregator lifecycle and configuration errors
//!
//! # Example
//!
//! ```
//! use pulse_errors::prelude::*;
//!
//! fn reject_fraction(value: f64) -> Result<f64> {
//!     if value.fract() != 0.0 {
//!         return Err(ValidationError::NotIntegral {
//!             value: value.to_string(),
//!         }
//!         .into());
//!     }
//!     Ok(value)
//! }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregation;
pub mod prelude;
pub mod validation;

pub use aggregation::AggregatorError;
pub use validation::ValidationError;

/// A specialized `Result` type for aggregator lifecycle operations.
pub type Result<T> = std::result::Result<T, AggregatorError>;
