// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pseudo-random schedule token substitution.
//!
//! Minute and hour fields may carry non-standard tokens (`M`, `H`, `M/step`,
//! `H(a-b)`, ...) that stand for "a value of the platform's choosing". This
//! module resolves them into concrete cron syntax using a caller-supplied
//! seed, so every tenant's jobs land on different wall-clock minutes while
//! rebuilds stay byte-identical.

use crate::error::CronjobError;

const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_DAY: u32 = 24;

/// Classification of a minute field, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinuteToken {
    /// `M` (or the legacy `H` alias): one seeded minute
    Alias,
    /// `M/step`, `H/step`, or `*/step`: a seeded, staggered step list
    Stepped(u32),
    /// Anything else, passed through for the grammar validator to judge
    Literal,
}

/// Classification of an hour field, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourToken {
    /// `H`: one seeded hour
    Alias,
    /// `H(a-b)`: one seeded hour inside an inclusive, possibly circular range
    Ranged(u32, u32),
    /// `H/step` or `*/step`: a seeded, staggered step list
    Stepped(u32),
    /// Anything else, passed through for the grammar validator to judge
    Literal,
}

/// Classify a minute field.
///
/// A stepped alias whose step parses but falls outside the minute domain is
/// treated as a literal: the grammar validator rejects it later with the
/// full schedule in the message. A step that is not a number at all is fatal
/// here, as is a zero step (the stagger offset is `seed % step`).
pub fn classify_minute(field: &str) -> Result<MinuteToken, CronjobError> {
    if field == "M" || field == "H" {
        return Ok(MinuteToken::Alias);
    }
    if let Some((base, step_str)) = field.split_once('/') {
        match base {
            "M" | "H" => {
                let step = parse_step(field, step_str)?;
                if step < MINUTES_PER_HOUR {
                    return Ok(MinuteToken::Stepped(step));
                }
                return Ok(MinuteToken::Literal);
            }
            "*" => {
                // `*/junk` may still be meaningful to the grammar; only a
                // clean in-domain step is staggered
                if let Ok(step) = step_str.parse::<u32>() {
                    if step > 0 && step < MINUTES_PER_HOUR {
                        return Ok(MinuteToken::Stepped(step));
                    }
                }
                return Ok(MinuteToken::Literal);
            }
            _ => {}
        }
    }
    Ok(MinuteToken::Literal)
}

/// Classify an hour field. Same fall-through rules as [`classify_minute`],
/// with the `H(a-b)` ranged form tried before the stepped forms.
pub fn classify_hour(field: &str) -> Result<HourToken, CronjobError> {
    if field == "H" {
        return Ok(HourToken::Alias);
    }
    if let Some(inner) = field.strip_prefix("H(").and_then(|rest| rest.strip_suffix(')')) {
        let Some((lo_str, hi_str)) = inner.split_once('-') else {
            return Ok(HourToken::Literal);
        };
        let (lo, hi) = match (lo_str.parse::<u32>(), hi_str.parse::<u32>()) {
            (Ok(lo), Ok(hi)) => (lo, hi),
            _ => {
                return Err(CronjobError::BadRange {
                    token: field.to_string(),
                })
            }
        };
        if lo >= HOURS_PER_DAY || hi >= HOURS_PER_DAY {
            return Ok(HourToken::Literal);
        }
        return Ok(HourToken::Ranged(lo, hi));
    }
    if let Some((base, step_str)) = field.split_once('/') {
        match base {
            "H" => {
                let step = parse_step(field, step_str)?;
                if step < HOURS_PER_DAY {
                    return Ok(HourToken::Stepped(step));
                }
                return Ok(HourToken::Literal);
            }
            "*" => {
                if let Ok(step) = step_str.parse::<u32>() {
                    if step > 0 && step < HOURS_PER_DAY {
                        return Ok(HourToken::Stepped(step));
                    }
                }
                return Ok(HourToken::Literal);
            }
            _ => {}
        }
    }
    Ok(HourToken::Literal)
}

/// Resolve a minute field into concrete cron syntax.
pub fn substitute_minute(field: &str, seed: u32) -> Result<String, CronjobError> {
    Ok(match classify_minute(field)? {
        MinuteToken::Alias => (seed % MINUTES_PER_HOUR).to_string(),
        MinuteToken::Stepped(step) => stagger_list(seed, step, MINUTES_PER_HOUR),
        MinuteToken::Literal => field.to_string(),
    })
}

/// Resolve an hour field into concrete cron syntax.
pub fn substitute_hour(field: &str, seed: u32) -> Result<String, CronjobError> {
    Ok(match classify_hour(field)? {
        HourToken::Alias => (seed % HOURS_PER_DAY).to_string(),
        HourToken::Ranged(lo, hi) => ranged_hour(seed, lo, hi).to_string(),
        HourToken::Stepped(step) => stagger_list(seed, step, HOURS_PER_DAY),
        HourToken::Literal => field.to_string(),
    })
}

/// Pick one hour inside the inclusive range `[lo, hi]`.
///
/// The range is circular over the 24-hour day: `H(22-2)` spans
/// 22, 23, 0, 1, 2.
fn ranged_hour(seed: u32, lo: u32, hi: u32) -> u32 {
    if lo < hi {
        lo + seed % (hi - lo)
    } else if lo > hi {
        let span = HOURS_PER_DAY - lo + hi;
        (lo + seed % span) % HOURS_PER_DAY
    } else {
        lo
    }
}

/// Comma-joined ascending list starting at `seed % step`, incrementing by
/// `step`, while below `domain`.
fn stagger_list(seed: u32, step: u32, domain: u32) -> String {
    let start = seed % step;
    (start..domain)
        .step_by(step as usize)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_step(token: &str, step_str: &str) -> Result<u32, CronjobError> {
    let step: u32 = step_str.parse().map_err(|_| CronjobError::BadStep {
        token: token.to_string(),
    })?;
    if step == 0 {
        return Err(CronjobError::ZeroStep {
            token: token.to_string(),
        });
    }
    Ok(step)
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
