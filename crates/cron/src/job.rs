// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cronjob definition as declared in project configuration.

use serde::{Deserialize, Serialize};

/// A cron-triggered task declared on a service in the project configuration.
///
/// Constructed by the configuration loader, then passed once through
/// [`validate_cronjob`](crate::validate_cronjob), which rewrites `schedule`,
/// `in_pod`, and `timeout` into their canonical forms. After validation the
/// definition is consumed by the manifest templating layer and never mutated
/// again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CronjobDef {
    /// Cronjob name (injected from map key)
    #[serde(skip)]
    pub name: String,
    /// Service the job runs against
    #[serde(default)]
    pub service: String,
    /// 5-field cron schedule; may contain pseudo-random tokens before
    /// validation, only standard cron syntax after
    pub schedule: String,
    /// Shell command the job executes
    pub command: String,
    /// Execution strategy. `None` means "let the frequency metric decide";
    /// `Some(_)` is pinned by the caller and never overridden.
    #[serde(default, rename = "inPod")]
    pub in_pod: Option<bool>,
    /// Maximum run duration (e.g. "4h"). Empty means "use the default".
    #[serde(default)]
    pub timeout: String,
}

impl CronjobDef {
    /// Create a definition with an undecided execution mode and default timeout.
    pub fn new(name: &str, service: &str, schedule: &str, command: &str) -> Self {
        CronjobDef {
            name: name.to_string(),
            service: service.to_string(),
            schedule: schedule.to_string(),
            command: command.to_string(),
            in_pod: None,
            timeout: String::new(),
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
