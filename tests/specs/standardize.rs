//! Schedule standardization scenarios at a fixed seed.

use envgen_cron::{standardize_schedule, CronjobError};

const SEED: u32 = 42;

#[test]
fn single_pseudo_random_minute() {
    assert_eq!(
        standardize_schedule("M * * * *", SEED).unwrap(),
        "42 * * * *"
    );
}

#[test]
fn staggered_five_minute_interval() {
    assert_eq!(
        standardize_schedule("M/5 * * * *", SEED).unwrap(),
        "2,7,12,17,22,27,32,37,42,47,52,57 * * * *"
    );
}

#[test]
fn pseudo_random_hour_in_ascending_range() {
    // 42 mod (4 - 2) = 0, so the hour lands on the range start
    assert_eq!(
        standardize_schedule("M H(2-4) * * *", SEED).unwrap(),
        "42 2 * * *"
    );
}

#[test]
fn pseudo_random_hour_in_overnight_range() {
    // span 4 hours (22,23,0,1), 42 mod 4 = 2, 22 + 2 wraps to 0
    assert_eq!(
        standardize_schedule("M H(22-2) * * *", SEED).unwrap(),
        "42 0 * * *"
    );
}

#[test]
fn concrete_schedules_pass_through_for_any_seed() {
    for seed in [0, SEED, 7_777, u32::MAX] {
        assert_eq!(
            standardize_schedule("0,15,30,45 * * * *", seed).unwrap(),
            "0,15,30,45 * * * *"
        );
    }
}

#[test]
fn standardization_is_reproducible() {
    for seed in 0..512 {
        assert_eq!(
            standardize_schedule("M/7 H(21-3) * * FRI", seed).unwrap(),
            standardize_schedule("M/7 H(21-3) * * FRI", seed).unwrap()
        );
    }
}

#[test]
fn invalid_grammar_is_reported_against_the_input() {
    let err = standardize_schedule("M * * * NOTADAY", SEED).unwrap_err();
    assert!(matches!(
        err,
        CronjobError::InvalidGrammar { ref schedule, .. } if schedule == "M * * * NOTADAY"
    ));
    assert!(err.to_string().contains("M * * * NOTADAY"));
}
