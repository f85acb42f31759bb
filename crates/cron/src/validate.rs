// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cronjob validation pipeline.

use crate::decide::decide_execution_mode;
use crate::error::CronjobError;
use crate::job::CronjobDef;
use crate::schedule::standardize_schedule;
use crate::timeout::validate_timeout;

/// Derive the schedule substitution seed from a job's command text.
///
/// The same command always hashes to the same seed, so rebuilds reproduce
/// byte-identical schedules, while distinct jobs spread across the clock.
pub fn command_seed(command: &str) -> u32 {
    crc32fast::hash(command.as_bytes())
}

/// Validate one cronjob definition in place.
///
/// Rewrites `schedule` to its concrete form, decides `in_pod` when unset,
/// and defaults or bounds `timeout`. The first failing step aborts the
/// sequence; earlier mutations are not rolled back, so a failed definition
/// must be discarded by the caller.
pub fn validate_cronjob(job: &mut CronjobDef) -> Result<(), CronjobError> {
    let seed = command_seed(&job.command);
    job.schedule = standardize_schedule(&job.schedule, seed)?;
    decide_execution_mode(job)?;
    validate_timeout(job)?;
    tracing::debug!(
        name = %job.name,
        service = %job.service,
        schedule = %job.schedule,
        in_pod = ?job.in_pod,
        timeout = %job.timeout,
        "cronjob validated"
    );
    Ok(())
}

/// Validate a slice of cronjob definitions, stopping at the first failure.
///
/// Whether one bad job aborts the whole build or is skipped is the caller's
/// policy; this helper implements the abort flavor.
pub fn validate_cronjobs(jobs: &mut [CronjobDef]) -> Result<(), CronjobError> {
    for job in jobs.iter_mut() {
        validate_cronjob(job)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
