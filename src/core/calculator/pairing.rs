//! Turns one day's swipes into IN/OUT sessions.

use crate::core::policy::Policy;
use crate::errors::AppResult;
use crate::models::{Direction, SwipeEvent, SwipePair};
use crate::utils::date::civil_date;
use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pairing {
    pub pairs: Vec<SwipePair>,
    /// Whole-second sum of every pair.
    pub exact_seconds: i64,
    /// Set when the chronologically last swipe is an IN.
    pub open_since: Option<DateTime<Utc>>,
}

impl Pairing {
    pub fn is_currently_working(&self) -> bool {
        self.open_since.is_some()
    }

    /// Total rounded once to the nearest minute, in seconds.
    pub fn rounded_seconds(&self) -> i64 {
        round_to_minute(self.exact_seconds)
    }
}

/// Round a second count to the nearest minute; half a minute rounds up.
pub fn round_to_minute(secs: i64) -> i64 {
    (secs + 30).div_euclid(60) * 60
}

pub fn build_pairs<T: TimeZone>(
    events: &[SwipeEvent],
    now: &DateTime<T>,
    policy: &Policy,
) -> AppResult<Pairing> {
    if events.is_empty() {
        return Ok(Pairing::default());
    }

    // -----------------------------
    // Sort events chronologically; at the same instant OUT comes before IN
    // -----------------------------
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| (e.timestamp, e.direction.is_in()));

    let mut pairs = Vec::new();

    // -----------------------------
    // Missing IN before the first OUT
    // -----------------------------
    if let Some(first) = sorted.first()
        && first.direction.is_out()
    {
        let estimated_in = first.timestamp - policy.missing_in_estimate;
        tracing::warn!(
            first_out = %first.timestamp,
            estimated_in = %estimated_in,
            "day starts with an OUT, estimating the missing IN"
        );
        pairs.push(SwipePair::new(estimated_in, first.timestamp, true)?);
    }

    // -----------------------------
    // Build Pairs
    // -----------------------------
    let mut open: Option<DateTime<Utc>> = None;

    for ev in &sorted {
        match ev.direction {
            Direction::In => {
                if let Some(lost) = open.replace(ev.timestamp) {
                    tracing::debug!(superseded = %lost, by = %ev.timestamp, "consecutive IN");
                }
            }
            // without an open IN: the first OUT (already estimated) or a stray OUT
            Direction::Out => {
                if let Some(start) = open.take() {
                    pairs.push(SwipePair::new(start, ev.timestamp, false)?);
                }
            }
        }
    }

    // -----------------------------
    // Session still open at the end of the list
    // -----------------------------
    if let Some(start) = open {
        let tz = &policy.tz;
        let end = if civil_date(&start, tz) == civil_date(now, tz) {
            now.with_timezone(&Utc)
        } else {
            tracing::warn!(
                open_in = %start,
                "IN never closed on a past day, counting it as zero"
            );
            start
        };
        pairs.push(SwipePair::new(start, end, false)?);
    }

    let exact_seconds = pairs.iter().map(|p| p.duration_seconds).sum();

    let open_since = sorted
        .last()
        .filter(|ev| ev.direction.is_in())
        .map(|ev| ev.timestamp);

    Ok(Pairing {
        pairs,
        exact_seconds,
        open_since,
    })
}
