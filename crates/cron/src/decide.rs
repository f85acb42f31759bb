// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution-mode decision for cron-triggered tasks.

use crate::error::CronjobError;
use crate::job::CronjobDef;
use crate::metric::median_interval;
use std::fmt;

/// Schedules whose median fire interval is at most this many minutes run
/// in-pod.
pub const IN_POD_CEILING_MINUTES: f64 = 30.0;

/// The two strategies a cron-triggered task can run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Run inside a long-lived, kept-warm pod
    InPod,
    /// Run as a discrete, natively scheduled job per fire
    NativeJob,
}

impl ExecutionMode {
    /// Pick a mode from a median fire interval in minutes.
    ///
    /// Jobs firing more often than roughly every half hour are frequent
    /// enough to justify a warm pod over per-fire job-creation overhead;
    /// sparser jobs are better modeled as discrete, auditable job runs.
    pub fn from_interval(minutes: f64) -> Self {
        if minutes <= IN_POD_CEILING_MINUTES {
            ExecutionMode::InPod
        } else {
            ExecutionMode::NativeJob
        }
    }

    pub fn in_pod(self) -> bool {
        matches!(self, ExecutionMode::InPod)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::InPod => write!(f, "in-pod"),
            ExecutionMode::NativeJob => write!(f, "native-job"),
        }
    }
}

/// Decide and record the execution mode for a job.
///
/// A pre-set `in_pod` flag wins unconditionally and skips the interval
/// computation entirely. Must only run after the schedule has been
/// standardized — the interval math assumes fully concrete minute and hour
/// fields, and any error it produces propagates unchanged.
pub fn decide_execution_mode(job: &mut CronjobDef) -> Result<(), CronjobError> {
    if let Some(pinned) = job.in_pod {
        tracing::debug!(name = %job.name, in_pod = pinned, "execution mode pinned by caller");
        return Ok(());
    }
    let interval = median_interval(&job.schedule)?;
    let mode = ExecutionMode::from_interval(interval);
    tracing::debug!(
        name = %job.name,
        interval_minutes = interval,
        mode = %mode,
        "decided execution mode"
    );
    job.in_pod = Some(mode.in_pod());
    Ok(())
}

#[cfg(test)]
#[path = "decide_tests.rs"]
mod tests;
