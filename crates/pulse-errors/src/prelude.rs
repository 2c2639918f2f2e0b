//! Prelude for pulse-errors.
//!
//! Re-exports the error types and the `Result` alias for convenient
//! importing.
//!
//! # Example
//!
//! ```
//! use pulse_errors::prelude::*;
//!
//! let err = ValidationError::EmptyText;
//! assert!(err.rejected_value().is_none());
//! ```

pub use crate::Result;
pub use crate::aggregation::AggregatorError;
pub use crate::validation::ValidationError;
