//! End-to-end cronjob validation scenarios.

use envgen_cron::{validate_cronjob, CronjobDef, CronjobError};

#[test]
fn quarter_hourly_job_runs_in_pod() {
    let mut job = CronjobDef::new("cache", "cli", "0,15,30,45 * * * *", "drush cr");
    validate_cronjob(&mut job).unwrap();
    assert_eq!(job.schedule, "0,15,30,45 * * * *");
    assert_eq!(job.in_pod, Some(true));
}

#[test]
fn six_hourly_job_runs_as_native_job() {
    let mut job = CronjobDef::new("sync", "cli", "0 0,6,12,18 * * *", "sync.sh");
    validate_cronjob(&mut job).unwrap();
    assert_eq!(job.in_pod, Some(false));
}

#[test]
fn missing_timeout_defaults_to_four_hours() {
    let mut job = CronjobDef::new("report", "cli", "0 4 * * *", "report.sh");
    validate_cronjob(&mut job).unwrap();
    assert_eq!(job.timeout, "4h");
}

#[test]
fn timeout_over_a_day_is_rejected() {
    let mut job = CronjobDef::new("export", "cli", "0 4 * * *", "export.sh");
    job.timeout = "25h".to_string();
    assert!(matches!(
        validate_cronjob(&mut job),
        Err(CronjobError::TimeoutTooLong { name, timeout })
            if name == "export" && timeout == "25h"
    ));
}

#[test]
fn pinned_execution_mode_is_never_overridden() {
    // Daily job that would be native on frequency grounds
    let mut job = CronjobDef::new("warm", "cli", "0 3 * * *", "warm.sh");
    job.in_pod = Some(true);
    validate_cronjob(&mut job).unwrap();
    assert_eq!(job.in_pod, Some(true));
}

#[test]
fn randomized_schedules_rebuild_identically() {
    let template = CronjobDef::new("cron", "cli", "M H(1-4) * * *", "drush cron");
    let mut first = template.clone();
    let mut second = template.clone();
    validate_cronjob(&mut first).unwrap();
    validate_cronjob(&mut second).unwrap();
    assert_eq!(first.schedule, second.schedule);

    let hour: u32 = first.schedule.split(' ').nth(1).unwrap().parse().unwrap();
    assert!((1..=4).contains(&hour));
}

#[test]
fn validation_failures_name_the_offending_input() {
    let mut job = CronjobDef::new("broken", "cli", "once a day", "x.sh");
    let err = validate_cronjob(&mut job).unwrap_err();
    assert!(err.to_string().contains("once a day"));
}
