// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule standardization: token substitution plus grammar validation.

use crate::error::CronjobError;
use crate::token::{substitute_hour, substitute_minute};
use std::str::FromStr;

/// Rewrite a possibly pseudo-random 5-field schedule into a concrete,
/// standards-compliant cron expression.
///
/// Minute and hour tokens are resolved with `seed`; day, month, and weekday
/// pass through untouched (they are never randomized). The rejoined
/// expression is then parsed with the standard cron grammar, so a successful
/// return is always a schedule the execution layer will accept. Grammar
/// failures report the original, pre-substitution string for traceability.
pub fn standardize_schedule(schedule: &str, seed: u32) -> Result<String, CronjobError> {
    let fields: Vec<&str> = schedule.split_whitespace().collect();
    let &[minute, hour, day, month, weekday] = fields.as_slice() else {
        return Err(CronjobError::MalformedSchedule {
            schedule: schedule.to_string(),
            count: fields.len(),
        });
    };
    let minute = substitute_minute(minute, seed)?;
    let hour = substitute_hour(hour, seed)?;
    let standardized = format!("{} {} {} {} {}", minute, hour, day, month, weekday);

    // The cron grammar wants a leading seconds field
    cron::Schedule::from_str(&format!("0 {}", standardized)).map_err(|source| {
        CronjobError::InvalidGrammar {
            schedule: schedule.to_string(),
            source,
        }
    })?;

    tracing::debug!(from = %schedule, to = %standardized, "standardized cron schedule");
    Ok(standardized)
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
