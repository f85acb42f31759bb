// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of concrete cron fields into bounded integer sets.
//!
//! Used only to measure fire frequency; the canonical schedule string is
//! never re-serialized from these sets.

use crate::error::CronjobError;
use std::collections::BTreeSet;

/// Which schedule field a set of values belongs to, with its value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CronField {
    Minute,
    Hour,
}

impl CronField {
    /// Largest value the field admits (`0..=max`).
    pub fn max(self) -> u32 {
        match self {
            CronField::Minute => 59,
            CronField::Hour => 23,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
        }
    }
}

/// Largest step accepted in `*/step` and `a-b/step` elements.
const MAX_STEP: u32 = 60;

/// Expand one concrete cron field into the set of values it selects.
///
/// Accepts a comma-separated combination of `*`, `*/step`, a bare value,
/// `a-b`, and `a-b/step`. Anything violating bounds, ordering, or numeric
/// parseability is fatal, naming the offending element; so is an empty
/// field (which is not the same thing as `*`).
pub fn normalize_field(field: &str, kind: CronField) -> Result<BTreeSet<u32>, CronjobError> {
    if field.is_empty() {
        return Err(CronjobError::EmptyField { field: kind.name() });
    }
    let max = kind.max();
    let mut values = BTreeSet::new();
    for element in field.split(',') {
        let (range_part, step) = match element.split_once('/') {
            Some((range_part, step_str)) => {
                let step: u32 = step_str.parse().map_err(|_| invalid(kind, element))?;
                if step == 0 || step > MAX_STEP {
                    return Err(invalid(kind, element));
                }
                (range_part, Some(step))
            }
            None => (element, None),
        };
        let (lo, hi) = if range_part == "*" {
            (0, max)
        } else if let Some((lo_str, hi_str)) = range_part.split_once('-') {
            let lo: u32 = lo_str.parse().map_err(|_| invalid(kind, element))?;
            let hi: u32 = hi_str.parse().map_err(|_| invalid(kind, element))?;
            if lo > hi || hi > max {
                return Err(invalid(kind, element));
            }
            (lo, hi)
        } else {
            // A step only combines with `*` or a range
            if step.is_some() {
                return Err(invalid(kind, element));
            }
            let v: u32 = range_part.parse().map_err(|_| invalid(kind, element))?;
            if v > max {
                return Err(invalid(kind, element));
            }
            (v, v)
        };
        values.extend((lo..=hi).step_by(step.unwrap_or(1) as usize));
    }
    Ok(values)
}

fn invalid(kind: CronField, token: &str) -> CronjobError {
    CronjobError::InvalidRange {
        field: kind.name(),
        token: token.to_string(),
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
