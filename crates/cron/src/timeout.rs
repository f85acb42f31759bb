// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cronjob timeout validation.

use crate::error::CronjobError;
use crate::job::CronjobDef;
use std::time::Duration;

/// Timeout applied when a cronjob does not declare one.
pub const DEFAULT_TIMEOUT: &str = "4h";

/// Hard ceiling on a cronjob's maximum run duration.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Check a job's timeout string in place, defaulting it when absent.
///
/// An unparsable timeout and one exceeding [`MAX_TIMEOUT`] are both fatal,
/// naming the job. No minimum is enforced.
pub fn validate_timeout(job: &mut CronjobDef) -> Result<(), CronjobError> {
    if job.timeout.is_empty() {
        job.timeout = DEFAULT_TIMEOUT.to_string();
        return Ok(());
    }
    let parsed = parse_duration(&job.timeout).map_err(|reason| CronjobError::InvalidTimeout {
        name: job.name.clone(),
        timeout: job.timeout.clone(),
        reason,
    })?;
    if parsed > MAX_TIMEOUT {
        return Err(CronjobError::TimeoutTooLong {
            name: job.name.clone(),
            timeout: job.timeout.clone(),
        });
    }
    Ok(())
}

/// Parse a duration string like "30s", "5m", "1h30m" into a [`Duration`].
///
/// A bare number is seconds. Components accumulate, so "1h30m" and "90m"
/// agree.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let mut total_ms: u64 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        // Numeric prefix of this component
        let num_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (num_str, tail) = rest.split_at(num_end);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("invalid number in duration: {}", s))?;

        // Suffix runs until the next digit
        let suffix_end = tail
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(tail.len());
        let (suffix, next) = tail.split_at(suffix_end);

        let component_ms = match suffix.trim() {
            "ms" | "millis" | "millisecond" | "milliseconds" => num,
            "" | "s" | "sec" | "secs" | "second" | "seconds" => num.saturating_mul(1_000),
            "m" | "min" | "mins" | "minute" | "minutes" => num.saturating_mul(60_000),
            "h" | "hr" | "hrs" | "hour" | "hours" => num.saturating_mul(3_600_000),
            "d" | "day" | "days" => num.saturating_mul(86_400_000),
            other => return Err(format!("unknown duration suffix: {}", other)),
        };
        total_ms = total_ms.saturating_add(component_ms);
        rest = next;
    }

    Ok(Duration::from_millis(total_ms))
}

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod tests;
