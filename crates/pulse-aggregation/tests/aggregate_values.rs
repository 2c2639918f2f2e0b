//! Regression tests for aggregate numeric outputs.
//!
//! The expected values here are pinned baselines: the naive sum-of-squares
//! variance estimator is part of the aggregate contract, including its known
//! precision loss at large magnitudes. A numerically stable algorithm would
//! produce *different* numbers and fail these tests by design.

use std::time::{Duration, SystemTime};

use pulse_aggregation::prelude::*;

const END_TS_MS: u64 = 1_506_358_860_000;

fn end_timestamp() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_millis(END_TS_MS)
}

fn new_measurement() -> UInt32SeriesAggregator {
    match UInt32SeriesAggregator::new(
        SeriesConfig::measurement(),
        None,
        AggregationCycleKind::Custom,
    ) {
        Ok(agg) => agg,
        Err(err) => panic!("measurement config must construct: {err}"),
    }
}

fn track_all(agg: &UInt32SeriesAggregator, values: &[f64]) {
    for &v in values {
        assert!(agg.track(v).is_ok(), "value {v} must be accepted");
    }
}

#[expect(clippy::too_many_arguments, reason = "mirrors the aggregate field list")]
fn validate_aggregate(
    record: &AggregateRecord,
    name: &str,
    count: u64,
    sum: f64,
    max: f64,
    min: f64,
    std_dev: f64,
    std_dev_tolerance: f64,
) {
    assert_eq!(record.series_name, name);
    assert_eq!(record.count, count);
    assert!(
        (record.sum - sum).abs() < f64::EPSILON,
        "sum: got {}, want {sum}",
        record.sum
    );
    assert!(
        (record.max - max).abs() < f64::EPSILON,
        "max: got {}, want {max}",
        record.max
    );
    assert!(
        (record.min - min).abs() < f64::EPSILON,
        "min: got {}, want {min}",
        record.min
    );
    assert!(
        (record.std_dev - std_dev).abs() < std_dev_tolerance,
        "std_dev: got {}, want {std_dev}",
        record.std_dev
    );
    assert_eq!(record.period_ms, END_TS_MS.to_string());
    assert_eq!(record.timestamp, end_timestamp());
}

#[test]
fn empty_aggregator_yields_all_zeros() {
    let agg = new_measurement();
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(&record, "null", 0, 0.0, 0.0, 0.0, 0.0, f64::EPSILON);
}

#[test]
fn zero_is_tracked_as_a_value() {
    let agg = new_measurement();
    track_all(&agg, &[0.0]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(&record, "null", 1, 0.0, 0.0, 0.0, 0.0, f64::EPSILON);
}

#[test]
fn rejected_values_leave_the_aggregate_empty() {
    let agg = new_measurement();

    assert!(agg.track(-1i32).is_err());
    assert!(agg.track(i32::MIN).is_err());
    assert!(agg.track(i64::MIN).is_err());

    assert!(agg.track(0.1).is_err());
    assert!(agg.track(0.9).is_err());
    assert!(agg.track(50.01f32).is_err());
    assert!(agg.track(50.99).is_err());

    assert!(agg.track(i64::from(u32::MAX) + 1).is_err());

    assert!(agg.track(f64::NAN).is_err());
    assert!(agg.track(f64::INFINITY).is_err());
    assert!(agg.track(f64::NEG_INFINITY).is_err());
    assert!(agg.track(f64::MAX).is_err());

    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(&record, "null", 0, 0.0, 0.0, 0.0, 0.0, f64::EPSILON);
}

#[test]
fn single_value_has_zero_deviation() {
    let agg = new_measurement();
    track_all(&agg, &[42.0]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(&record, "null", 1, 42.0, 42.0, 42.0, 0.0, f64::EPSILON);
}

#[test]
fn two_values_baseline() {
    let agg = new_measurement();
    track_all(&agg, &[42.0, 19.0]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(&record, "null", 2, 61.0, 42.0, 19.0, 11.5, 1e-12);
}

#[test]
fn three_values_baseline() {
    let agg = new_measurement();
    track_all(&agg, &[1_800_000.0, 0.0, 4_200_000.0]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(
        &record,
        "null",
        3,
        6_000_000.0,
        4_200_000.0,
        0.0,
        1_720_465.053_408_53,
        1e-6,
    );
}

#[test]
fn values_within_tolerance_round_and_accumulate() {
    let agg = new_measurement();

    track_all(&agg, &[1.0]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(&record, "null", 1, 1.0, 1.0, 1.0, 0.0, f64::EPSILON);

    track_all(&agg, &[-0.000_000_1, 0.000_000_01]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(
        &record,
        "null",
        3,
        1.0,
        1.0,
        0.0,
        0.471_404_520_791_032,
        1e-12,
    );

    track_all(&agg, &[100.000_000_1, 99.999_999_9]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(
        &record,
        "null",
        5,
        201.0,
        100.0,
        0.0,
        48.827_860_899_285_8,
        1e-10,
    );

    let i32_max = f64::from(i32::MAX);
    track_all(&agg, &[i32_max - 0.000_000_1, i32_max + 0.000_000_1]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(
        &record,
        "null",
        7,
        4_294_967_495.0,
        i32_max,
        0.0,
        970_134_205.051_638,
        1e-3,
    );

    let u32_max = f64::from(u32::MAX);
    track_all(&agg, &[u32_max - 0.000_000_1, u32_max + 0.000_000_1]);
    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(
        &record,
        "null",
        9,
        12_884_902_085.0,
        u32_max,
        0.0,
        1_753_413_037.501_5,
        1e-3,
    );
}

#[test]
fn large_magnitudes_reproduce_the_known_precision_loss() {
    let agg = new_measurement();
    track_all(
        &agg,
        &[
            f64::from(u32::MAX) - 10_000.0,
            f64::from(u32::MAX) - 1_000.0,
            f64::from(u32::MAX) - 100.0,
            f64::from(u32::MAX),
        ],
    );

    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(
        &record,
        "null",
        4,
        17_179_858_080.0,
        f64::from(u32::MAX),
        f64::from(u32::MAX) - 10_000.0,
        4_189.434_329_357_6,
        1e-5,
    );

    // The numerically stable answer is 4189.49579305195; the naive formula's
    // drifted output is the pinned contract, so make sure the two stay apart.
    assert!((record.std_dev - 4_189.495_793_051_95).abs() > 1e-2);
}

#[test]
fn many_repeated_small_values_baseline() {
    let agg = new_measurement();
    for _ in 0..1_000 {
        for v in 0u32..=100 {
            assert!(agg.track(v).is_ok());
        }
    }

    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(
        &record,
        "null",
        101_000,
        5_050_000.0,
        100.0,
        0.0,
        29.154_759_474_226_5,
        1e-10,
    );
}

#[test]
fn mixed_representations_accumulate_together() {
    let agg = new_measurement();

    assert!(agg.track(2u8).is_ok());
    assert!(agg.track(4u16).is_ok());
    assert!(agg.track(6u32).is_ok());
    assert!(agg.track(8u64).is_ok());
    assert!(agg.track(10.0f64).is_ok());
    assert!(agg.track("12").is_ok());
    assert!(agg.track("  +14 ").is_ok());

    assert!(agg.track(-1i8).is_err());
    assert!(agg.track("-11").is_err());
    assert!(agg.track("13.5").is_err());
    assert!(agg.track(true).is_err());
    assert!(agg.track('x').is_err());

    let record = agg.create_aggregate(end_timestamp());
    validate_aggregate(&record, "null", 7, 56.0, 14.0, 2.0, 4.0, 1e-12);
}
