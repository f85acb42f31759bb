// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for cronjob validation.

use thiserror::Error;

/// Errors that can occur while validating a cronjob definition.
///
/// Every variant carries the offending input (schedule string, field token,
/// or job name) so build logs stay diagnosable. All errors are terminal for
/// the job being validated; the computation is pure, so a retry would fail
/// identically.
#[derive(Debug, Error)]
pub enum CronjobError {
    #[error("schedule '{schedule}' must have exactly 5 fields, got {count}")]
    MalformedSchedule { schedule: String, count: usize },

    #[error("cannot convert step in '{token}' to a number")]
    BadStep { token: String },

    #[error("step in '{token}' must be greater than zero")]
    ZeroStep { token: String },

    #[error("cannot convert range bounds in '{token}' to numbers")]
    BadRange { token: String },

    #[error("schedule '{schedule}' is invalid")]
    InvalidGrammar {
        schedule: String,
        #[source]
        source: cron::error::Error,
    },

    #[error("{field} field is empty")]
    EmptyField { field: &'static str },

    #[error("invalid range '{token}' in {field} field")]
    InvalidRange { field: &'static str, token: String },

    #[error("schedule '{schedule}' has no occurrences")]
    NoOccurrences { schedule: String },

    #[error("cannot convert timeout '{timeout}' for cronjob '{name}': {reason}")]
    InvalidTimeout {
        name: String,
        timeout: String,
        reason: String,
    },

    #[error("timeout '{timeout}' for cronjob '{name}' cannot exceed 24 hours")]
    TimeoutTooLong { name: String, timeout: String },
}
