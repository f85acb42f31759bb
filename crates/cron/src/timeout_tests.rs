// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn job_with_timeout(timeout: &str) -> CronjobDef {
    let mut job = CronjobDef::new("backup", "mariadb", "0 1 * * *", "backup.sh");
    job.timeout = timeout.to_string();
    job
}

#[test]
fn empty_timeout_gets_the_default() {
    let mut job = job_with_timeout("");
    validate_timeout(&mut job).unwrap();
    assert_eq!(job.timeout, DEFAULT_TIMEOUT);
}

#[yare::parameterized(
    minutes = { "30m" },
    hours = { "4h" },
    combined = { "1h30m" },
    bare_seconds = { "3600" },
    exactly_a_day = { "24h" },
    a_day_in_minutes = { "1440m" },
)]
fn valid_timeouts_pass_unchanged(timeout: &str) {
    let mut job = job_with_timeout(timeout);
    validate_timeout(&mut job).unwrap();
    assert_eq!(job.timeout, timeout);
}

#[test]
fn unparsable_timeout_names_the_job() {
    let mut job = job_with_timeout("4x");
    assert!(matches!(
        validate_timeout(&mut job),
        Err(CronjobError::InvalidTimeout { name, timeout, .. })
            if name == "backup" && timeout == "4x"
    ));
}

#[yare::parameterized(
    hours = { "25h" },
    combined = { "24h1m" },
    days = { "2d" },
)]
fn timeout_over_a_day_fails(timeout: &str) {
    let mut job = job_with_timeout(timeout);
    assert!(matches!(
        validate_timeout(&mut job),
        Err(CronjobError::TimeoutTooLong { name, .. }) if name == "backup"
    ));
}

#[yare::parameterized(
    seconds = { "30s", 30 },
    minutes = { "5m", 300 },
    hours = { "1h", 3_600 },
    days = { "1d", 86_400 },
    combined = { "1h30m", 5_400 },
    spaced = { " 1h 30m ", 5_400 },
    bare_number = { "60", 60 },
    zero = { "0s", 0 },
)]
fn parse_duration_components(input: &str, secs: u64) {
    assert_eq!(parse_duration(input).unwrap(), Duration::from_secs(secs));
}

#[test]
fn parse_duration_milliseconds() {
    assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
}

#[yare::parameterized(
    empty = { "" },
    whitespace = { "   " },
    unknown_suffix = { "5fortnights" },
    suffix_only = { "h" },
)]
fn parse_duration_rejects(input: &str) {
    assert!(parse_duration(input).is_err());
}

#[test]
fn trailing_bare_component_is_seconds() {
    assert_eq!(parse_duration("1h30").unwrap(), Duration::from_secs(3630));
}
