use super::direction::Direction;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Swipe record exactly as the attendance API returns it.
///
/// `punchDateTime` is UTC without an offset (`2025-03-03T03:30:00`);
/// RFC 3339 strings with an explicit offset are accepted too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawSwipe {
    pub punch_date_time: String,
    pub in_out_indicator: i64,
}

impl RawSwipe {
    pub fn new(punch_date_time: impl Into<String>, direction: Direction) -> Self {
        Self {
            punch_date_time: punch_date_time.into(),
            in_out_indicator: direction.indicator(),
        }
    }
}

/// A single validated punch.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SwipeEvent {
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
}

impl SwipeEvent {
    pub fn new(timestamp: DateTime<Utc>, direction: Direction) -> Self {
        Self {
            timestamp,
            direction,
        }
    }
}

impl TryFrom<&RawSwipe> for SwipeEvent {
    type Error = AppError;

    fn try_from(raw: &RawSwipe) -> AppResult<Self> {
        let direction = Direction::from_indicator(raw.in_out_indicator).ok_or_else(|| {
            AppError::InvalidSwipe(format!(
                "unknown inOutIndicator {} at {}",
                raw.in_out_indicator, raw.punch_date_time
            ))
        })?;

        Ok(Self {
            timestamp: parse_punch_timestamp(&raw.punch_date_time)?,
            direction,
        })
    }
}

/// Parse an upstream punch timestamp. Offset-less values are UTC.
pub fn parse_punch_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(AppError::InvalidTime(s.to_string()))
}

/// Outcome of normalizing a batch of raw records: the valid events plus the
/// number of malformed records that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedSwipes {
    pub events: Vec<SwipeEvent>,
    pub dropped: usize,
}

/// Best-effort conversion: malformed records are logged and skipped.
pub fn parse_raw_swipes(raw: &[RawSwipe]) -> ParsedSwipes {
    let mut parsed = ParsedSwipes::default();

    for r in raw {
        match SwipeEvent::try_from(r) {
            Ok(ev) => parsed.events.push(ev),
            Err(e) => {
                tracing::warn!(record = ?r, error = %e, "dropping malformed swipe");
                parsed.dropped += 1;
            }
        }
    }

    parsed
}
