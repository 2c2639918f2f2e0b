//! Value coercion and validation.
//!
//! Producers hand the pipeline values in a handful of representations:
//! integers of every width, both float precisions, or decimal text. This
//! module defines that closed set as [`MetricValue`] and coerces each member
//! through one validation pipeline into an in-domain `f64` — or a
//! [`ValidationError`] naming the offending value. Nothing is ever silently
//! truncated or wrapped.
//!
//! Representations the pipeline never accepts (`bool`, `char`) are members
//! of the set that always fail validation; pointer-sized integers have no
//! representation here at all.

use pulse_errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Largest deviation from a whole number that still rounds cleanly.
///
/// `100.0000001` rounds to `100`; `50.01` and `13.5` are rejected.
const ROUNDING_TOLERANCE: f64 = 1e-6;

/// Upper bound of the unsigned 32-bit domain, exactly representable as `f64`.
const U32_MAX_F64: f64 = u32::MAX as f64;

/// The numeric domain a tracked value must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainRestriction {
    /// Any finite real value is accepted.
    Unrestricted,
    /// Values must be whole numbers in `[0, 2^32 - 1]`.
    UInt32Range,
}

/// The closed set of input representations a `track` call accepts.
///
/// Each numeric primitive, `&str`/`String`, `bool`, `char`, and
/// `Option<T>` (mapping `None` to [`MetricValue::Absent`]) convert via
/// `From`/`Into`, so call sites can write `aggregator.track(42u32)`.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Single-precision float.
    F32(f32),
    /// Double-precision float.
    F64(f64),
    /// Decimal text, parsed as an optionally signed base-10 integer.
    Text(String),
    /// Boolean input; always rejected by validation.
    Bool(bool),
    /// Character input; always rejected by validation.
    Char(char),
    /// No value at all; tracking it is a no-op, not an error.
    Absent,
}

macro_rules! impl_from_primitive {
    ($($variant:ident: $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for MetricValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    I8: i8,
    I16: i16,
    I32: i32,
    I64: i64,
    U8: u8,
    U16: u16,
    U32: u32,
    U64: u64,
    F32: f32,
    F64: f64,
    Bool: bool,
    Char: char,
);

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<MetricValue>> From<Option<T>> for MetricValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Coerce an input into an in-domain `f64`.
///
/// Returns `Ok(None)` for [`MetricValue::Absent`] (tracking nothing is a
/// no-op) and `Ok(Some(v))` for an accepted value. Under
/// [`DomainRestriction::UInt32Range`] the result is a whole number in
/// `[0, 2^32 - 1]`.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending value when the input
/// falls outside the domain rules.
pub fn coerce(
    value: MetricValue,
    domain: DomainRestriction,
) -> Result<Option<f64>, ValidationError> {
    match value {
        MetricValue::Absent => Ok(None),
        MetricValue::I8(v) => coerce_signed(i64::from(v), domain).map(Some),
        MetricValue::I16(v) => coerce_signed(i64::from(v), domain).map(Some),
        MetricValue::I32(v) => coerce_signed(i64::from(v), domain).map(Some),
        MetricValue::I64(v) => coerce_signed(v, domain).map(Some),
        MetricValue::U8(v) => coerce_unsigned(u64::from(v), domain).map(Some),
        MetricValue::U16(v) => coerce_unsigned(u64::from(v), domain).map(Some),
        MetricValue::U32(v) => coerce_unsigned(u64::from(v), domain).map(Some),
        MetricValue::U64(v) => coerce_unsigned(v, domain).map(Some),
        MetricValue::F32(v) => coerce_float(f64::from(v), domain).map(Some),
        MetricValue::F64(v) => coerce_float(v, domain).map(Some),
        MetricValue::Text(raw) => coerce_text(&raw, domain).map(Some),
        MetricValue::Bool(v) => Err(ValidationError::UnsupportedType {
            type_name: "bool",
            value: v.to_string(),
        }),
        MetricValue::Char(v) => Err(ValidationError::UnsupportedType {
            type_name: "char",
            value: v.to_string(),
        }),
    }
}

/// The sign of a signed integer is known before any range comparison, so
/// negatives are rejected outright.
fn coerce_signed(value: i64, domain: DomainRestriction) -> Result<f64, ValidationError> {
    match domain {
        DomainRestriction::Unrestricted => Ok(value as f64),
        DomainRestriction::UInt32Range => {
            if value < 0 {
                return Err(ValidationError::Negative {
                    value: value.to_string(),
                });
            }
            if value > i64::from(u32::MAX) {
                return Err(ValidationError::OutOfRange {
                    value: value.to_string(),
                });
            }
            Ok(value as f64)
        }
    }
}

fn coerce_unsigned(value: u64, domain: DomainRestriction) -> Result<f64, ValidationError> {
    match domain {
        DomainRestriction::Unrestricted => Ok(value as f64),
        DomainRestriction::UInt32Range => {
            if value > u64::from(u32::MAX) {
                return Err(ValidationError::OutOfRange {
                    value: value.to_string(),
                });
            }
            Ok(value as f64)
        }
    }
}

/// Floats round to the nearest whole number only when within
/// [`ROUNDING_TOLERANCE`] of it; larger fractional parts are rejected rather
/// than truncated. Non-finite inputs are rejected under either domain — the
/// accumulator must never absorb a `NaN` or infinity.
fn coerce_float(value: f64, domain: DomainRestriction) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            value: value.to_string(),
        });
    }
    if domain == DomainRestriction::Unrestricted {
        return Ok(value);
    }

    let rounded = value.round();
    if (value - rounded).abs() > ROUNDING_TOLERANCE {
        return Err(ValidationError::NotIntegral {
            value: value.to_string(),
        });
    }
    if rounded < 0.0 {
        return Err(ValidationError::Negative {
            value: value.to_string(),
        });
    }
    if rounded > U32_MAX_F64 {
        return Err(ValidationError::OutOfRange {
            value: value.to_string(),
        });
    }
    // A tiny negative like -0.0000001 rounds to -0.0; fold it into +0.0.
    Ok(rounded.abs())
}

/// Text accepts surrounding whitespace and one leading `+`/`-`; anything with
/// a decimal point, exponent marker, or other non-digit characters is
/// rejected.
fn coerce_text(raw: &str, domain: DomainRestriction) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let Ok(parsed) = trimmed.parse::<i64>() else {
        return Err(ValidationError::UnparseableText {
            value: raw.to_owned(),
        });
    };
    coerce_signed(parsed, domain)
}
