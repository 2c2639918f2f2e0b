//! Online statistics accumulation.
//!
//! [`AccumulatorState`] is the five-field running state of the single-pass
//! fold; [`LockedAccumulator`] is that state behind one fine-grained mutex.
//! The lock is the point of the design: the five fields mutate together as
//! one logical transition per tracked value, so a concurrent snapshot reader
//! observes each value's effect all-or-nothing. Five independent atomics
//! could not give that guarantee — a reader could see `count` incremented
//! with `sum` still stale.
//!
//! The variance estimator is the naive running-sum-of-squares formula,
//! `Q/n - mean^2`. It loses precision when values are large relative to the
//! count; that is a documented, accepted limitation of the aggregate
//! contract, and regression tests pin its exact outputs. Do not swap in
//! Welford's algorithm without rebaselining downstream consumers.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Point-in-time state of the online statistics fold.
///
/// The empty state is all zeros — `min`/`max` are `0`, not `±inf` — so a
/// never-tracked aggregator produces an all-zero aggregate rather than
/// sentinel values. Once `count >= 1`, `min <= max` holds and both lie
/// within the domain applied at track time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccumulatorState {
    /// Number of values folded in.
    pub count: u64,
    /// Running sum of values.
    pub sum: f64,
    /// Running sum of squared values, used to derive variance.
    pub sum_of_squares: f64,
    /// Smallest value observed, or `0` when empty.
    pub min: f64,
    /// Largest value observed, or `0` when empty.
    pub max: f64,
}

impl AccumulatorState {
    /// The degenerate empty state.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_of_squares: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }

    /// Whether any values have been folded in.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean, or `0` when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "counts stay far below 2^53")]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// Population variance via the naive sum-of-squares formula, clamped at
    /// zero so floating-point cancellation can never yield a negative result.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "counts stay far below 2^53")]
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        (self.sum_of_squares / self.count as f64 - mean * mean).max(0.0)
    }

    /// Population standard deviation, or `0` when empty.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// The accumulator state behind a single mutual-exclusion section.
///
/// Many producer threads call [`fold`](Self::fold) concurrently; one
/// consumer calls [`snapshot`](Self::snapshot) per aggregation cycle,
/// concurrently with ongoing folds. All three operations are short,
/// non-blocking-in-spirit critical sections: no allocation, no syscalls, no
/// external waits while holding the lock.
#[derive(Debug, Default)]
pub struct LockedAccumulator {
    state: Mutex<AccumulatorState>,
}

impl LockedAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(AccumulatorState::empty()),
        }
    }

    /// Fold one in-domain value into the state as a single atomic
    /// transition.
    pub fn fold(&self, value: f64) {
        let mut state = self.state.lock();
        if state.count == 0 {
            state.min = value;
            state.max = value;
        } else {
            state.min = state.min.min(value);
            state.max = state.max.max(value);
        }
        state.count = state.count.saturating_add(1);
        state.sum += value;
        state.sum_of_squares += value * value;
    }

    /// Read a consistent copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> AccumulatorState {
        *self.state.lock()
    }

    /// Zero the state for a new aggregation cycle.
    pub fn reset(&self) {
        *self.state.lock() = AccumulatorState::empty();
    }
}
