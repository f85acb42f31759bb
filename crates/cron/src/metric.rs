// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule flattening and fire-interval measurement.

use crate::error::CronjobError;
use crate::field::{normalize_field, CronField};
use std::collections::BTreeSet;

const MINUTES_PER_DAY: u32 = 1440;

/// Median distance, in minutes, between a schedule's daily fire times.
///
/// The minute and hour fields are cross-multiplied into minutes-since-midnight
/// occurrences (day, month, and weekday never influence the measure — only
/// intraday density matters). Consecutive distances plus the circular
/// wraparound from the last fire of the day to the first fire of the next are
/// collected, and the median taken. The median, rather than the mean or
/// minimum, keeps a cluster of close-together fires from dominating the
/// typical spacing.
pub fn median_interval(schedule: &str) -> Result<f64, CronjobError> {
    let fields: Vec<&str> = schedule.split_whitespace().collect();
    let &[minute, hour, _, _, _] = fields.as_slice() else {
        return Err(CronjobError::MalformedSchedule {
            schedule: schedule.to_string(),
            count: fields.len(),
        });
    };
    let minutes = normalize_field(minute, CronField::Minute)?;
    let hours = normalize_field(hour, CronField::Hour)?;
    let occurrences = flatten(&minutes, &hours);
    interval_median(&occurrences).ok_or_else(|| CronjobError::NoOccurrences {
        schedule: schedule.to_string(),
    })
}

/// Every (hour, minute) pair the schedule fires at, as minutes since midnight.
pub fn flatten(minutes: &BTreeSet<u32>, hours: &BTreeSet<u32>) -> BTreeSet<u32> {
    let mut occurrences = BTreeSet::new();
    for &hour in hours {
        for &minute in minutes {
            occurrences.insert(hour * 60 + minute);
        }
    }
    occurrences
}

/// Median of the consecutive distances in an ascending occurrence set,
/// including the overnight wraparound. `None` for an empty set.
///
/// A single daily fire degenerates to the occurrence's own value.
fn interval_median(occurrences: &BTreeSet<u32>) -> Option<f64> {
    let sorted: Vec<u32> = occurrences.iter().copied().collect();
    match sorted.as_slice() {
        [] => None,
        &[only] => Some(f64::from(only)),
        &[first, .., last] => {
            let mut distances: Vec<u32> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
            distances.push(first + MINUTES_PER_DAY - last);
            distances.sort_unstable();
            let n = distances.len();
            Some(if n % 2 == 1 {
                f64::from(distances[n / 2])
            } else {
                f64::from(distances[n / 2 - 1] + distances[n / 2]) / 2.0
            })
        }
    }
}

#[cfg(test)]
#[path = "metric_tests.rs"]
mod tests;
