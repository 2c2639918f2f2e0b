//! Aggregator lifecycle and configuration error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while constructing or operating a series aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregatorError {
    /// The supplied series configuration requests a value domain this
    /// aggregator type cannot honor.
    #[error("aggregator requires the {supported} domain, configuration requested {requested}")]
    IncompatibleDomain {
        /// Domain the aggregator implements.
        supported: &'static str,
        /// Domain the configuration asked for.
        requested: String,
    },

    /// A tracked value failed domain validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_pass_through() {
        let inner = ValidationError::EmptyText;
        let err = AggregatorError::from(inner.clone());
        assert_eq!(err, AggregatorError::Validation(inner));
    }

    #[test]
    fn incompatible_domain_names_both_domains() {
        let err = AggregatorError::IncompatibleDomain {
            supported: "unsigned 32-bit",
            requested: "Unrestricted".to_owned(),
        };
        let message = err.to_string();
        assert!(message.contains("unsigned 32-bit"));
        assert!(message.contains("Unrestricted"));
    }
}
