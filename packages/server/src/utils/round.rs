use chrono::{DateTime, Utc};

use crate::models::round::RoundStatus;

/// Derive a round's status from its time window.
///
/// `live` iff `start <= now < end`, `completed` iff `now >= end`, `draft`
/// before the window opens. Pure and idempotent; applied on every read so a
/// displayed status can never drift from the clock.
pub fn derive_status(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> RoundStatus {
    if now >= end {
        RoundStatus::Completed
    } else if now >= start {
        RoundStatus::Live
    } else {
        RoundStatus::Draft
    }
}
