//! The finalized aggregate value object.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AggregationCycleKind;

/// A point-in-time-consistent summary of one aggregation cycle.
///
/// Produced by
/// [`UInt32SeriesAggregator::create_aggregate`](crate::UInt32SeriesAggregator::create_aggregate)
/// and consumed immediately by the pipeline; it has no further lifecycle.
/// An empty cycle yields `count = 0` and zeros everywhere else — never `NaN`
/// or infinities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Display name of the bound series, or the unbound placeholder.
    pub series_name: String,
    /// Number of values tracked during the cycle.
    pub count: u64,
    /// Sum of tracked values.
    pub sum: f64,
    /// Largest tracked value, or `0` when empty.
    pub max: f64,
    /// Smallest tracked value, or `0` when empty.
    pub min: f64,
    /// Population standard deviation of tracked values.
    pub std_dev: f64,
    /// Caller-supplied end-of-cycle timestamp; never self-observed.
    pub timestamp: SystemTime,
    /// Milliseconds from the Unix epoch to `timestamp`, as plain base-10
    /// text with no grouping separators.
    pub period_ms: String,
    /// The aggregation cycle this record belongs to.
    pub cycle_kind: AggregationCycleKind,
}

/// Format the period field: whole milliseconds from the Unix epoch to the
/// given timestamp, base-10, no grouping. Timestamps before the epoch clamp
/// to `0`.
#[must_use]
pub fn period_millis(timestamp: SystemTime) -> String {
    match timestamp.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis().to_string(),
        Err(backwards) => {
            debug!(
                behind_by_ms = backwards.duration().as_millis(),
                "pre-epoch timestamp, clamping period to zero"
            );
            "0".to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn period_is_invariant_decimal_text() {
        let ts = SystemTime::UNIX_EPOCH + Duration::from_millis(1_506_384_060_000);
        assert_eq!(period_millis(ts), "1506384060000");
    }

    #[test]
    fn period_truncates_sub_millisecond_precision() {
        let ts = SystemTime::UNIX_EPOCH + Duration::from_micros(1_500);
        assert_eq!(period_millis(ts), "1");
    }

    #[test]
    fn pre_epoch_timestamps_clamp_to_zero() {
        let ts = SystemTime::UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(period_millis(ts), "0");
    }

    #[test]
    fn record_round_trips_through_serde() {
        let record = AggregateRecord {
            series_name: "Cows Sold".to_owned(),
            count: 2,
            sum: 61.0,
            max: 42.0,
            min: 19.0,
            std_dev: 11.5,
            timestamp: SystemTime::UNIX_EPOCH,
            period_ms: "0".to_owned(),
            cycle_kind: AggregationCycleKind::Custom,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AggregateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
