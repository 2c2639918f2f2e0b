//! Value validation error types.
//!
//! A validation failure is local to the `track` call that raised it: the
//! accumulator state is left completely unchanged, and the error carries the
//! rejected value (stringified) for diagnostics.

use thiserror::Error;

/// Reasons a tracked value can be rejected by the series domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Negative input rejected by an unsigned value domain.
    #[error("negative value {value} is not valid for the unsigned 32-bit domain")]
    Negative {
        /// The rejected value.
        value: String,
    },

    /// Fractional input whose deviation from a whole number exceeds the
    /// rounding tolerance.
    #[error("value {value} is not a whole number within rounding tolerance")]
    NotIntegral {
        /// The rejected value.
        value: String,
    },

    /// Input outside the permitted numeric range after rounding.
    #[error("value {value} is outside the unsigned 32-bit range [0, 4294967295]")]
    OutOfRange {
        /// The rejected value.
        value: String,
    },

    /// `NaN` or infinite input.
    #[error("value {value} is not a finite number")]
    NotFinite {
        /// The rejected value.
        value: String,
    },

    /// Text input that is not a plain, optionally signed base-10 integer.
    #[error("text input '{value}' is not a plain base-10 integer")]
    UnparseableText {
        /// The rejected input text.
        value: String,
    },

    /// Empty (or whitespace-only) text input.
    #[error("empty text input cannot be tracked as a value")]
    EmptyText,

    /// A representation the value domain never accepts, regardless of the
    /// value it holds.
    #[error("values of type {type_name} are not supported: {value}")]
    UnsupportedType {
        /// Name of the rejected representation.
        type_name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl ValidationError {
    /// The rejected value as text, when the variant carries one.
    #[must_use]
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            Self::Negative { value }
            | Self::NotIntegral { value }
            | Self::OutOfRange { value }
            | Self::NotFinite { value }
            | Self::UnparseableText { value }
            | Self::UnsupportedType { value, .. } => Some(value),
            Self::EmptyText => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ValidationError::Negative {
            value: "-11".to_owned(),
        };
        assert!(err.to_string().contains("-11"));

        let err = ValidationError::UnsupportedType {
            type_name: "bool",
            value: "true".to_owned(),
        };
        assert!(err.to_string().contains("bool"));
        assert!(err.to_string().contains("true"));
    }

    #[test]
    fn rejected_value_accessor() {
        let err = ValidationError::OutOfRange {
            value: "4294967296".to_owned(),
        };
        assert_eq!(err.rejected_value(), Some("4294967296"));
        assert_eq!(ValidationError::EmptyText.rejected_value(), None);
    }
}
