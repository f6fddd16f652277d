//! Campaign deadline resolution.
//!
//! The escrow accepts whatever deadline it is constructed with, so the
//! deployer picks one here, once, before deployment:
//!
//! 1. an absolute `DATE` strictly later than `now + MIN_DEADLINE`;
//! 2. otherwise `now + SECONDS_FROM_NOW` if that offset exceeds `MIN_DEADLINE`;
//! 3. otherwise `now + DEFAULT_LEAD` (one week).

use serde::Serialize;

/// Minimum lead time, in seconds, a requested deadline must exceed.
pub const MIN_DEADLINE: u64 = 60;

/// Fallback lead time: one week.
pub const DEFAULT_LEAD: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineSource {
    Date,
    SecondsFromNow,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDeadline {
    pub timestamp: u64,
    pub source: DeadlineSource,
}

/// Pick the deadline for a campaign deployed at ledger time `now`.
pub fn resolve_deadline(now: u64, date: Option<u64>, seconds_from_now: Option<u64>) -> ResolvedDeadline {
    if let Some(date) = date {
        if date > now.saturating_add(MIN_DEADLINE) {
            return ResolvedDeadline {
                timestamp: date,
                source: DeadlineSource::Date,
            };
        }
    }

    if let Some(seconds) = seconds_from_now {
        if seconds > MIN_DEADLINE {
            return ResolvedDeadline {
                timestamp: now.saturating_add(seconds),
                source: DeadlineSource::SecondsFromNow,
            };
        }
    }

    ResolvedDeadline {
        timestamp: now.saturating_add(DEFAULT_LEAD),
        source: DeadlineSource::Default,
    }
}
