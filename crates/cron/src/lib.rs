// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! envgen-cron: cron schedule normalization and execution-mode decisions
//!
//! Turns user-supplied, possibly pseudo-random schedule strings into
//! concrete cron expressions and decides whether each cron-triggered task
//! runs inside a long-lived pod or as a discrete native job. Pure and
//! synchronous: every result is a function of the inputs alone, so the
//! manifest generator can validate any number of jobs in parallel.

pub mod decide;
pub mod error;
pub mod field;
pub mod job;
pub mod metric;
pub mod schedule;
pub mod timeout;
pub mod token;
pub mod validate;

pub use decide::{decide_execution_mode, ExecutionMode, IN_POD_CEILING_MINUTES};
pub use error::CronjobError;
pub use field::{normalize_field, CronField};
pub use job::CronjobDef;
pub use metric::median_interval;
pub use schedule::standardize_schedule;
pub use timeout::{parse_duration, validate_timeout, DEFAULT_TIMEOUT, MAX_TIMEOUT};
pub use token::{
    classify_hour, classify_minute, substitute_hour, substitute_minute, HourToken, MinuteToken,
};
pub use validate::{command_seed, validate_cronjob, validate_cronjobs};
