//! Time utilities: parsing HH:MM and "8h30m" durations, instant parsing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveTime};
use chrono_tz::Tz;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t.trim(), "%H:%M"))
        .ok()
}

/// Parse `8h`, `7h30m`, `45m`, `1h15m30s` or a bare number of hours (`7.5`).
pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let raw = s.trim().to_lowercase();
    let invalid = || AppError::InvalidDuration(s.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }

    if let Ok(hours) = raw.parse::<f64>() {
        if !hours.is_finite() || hours < 0.0 {
            return Err(invalid());
        }
        // `as` saturates, try_seconds rejects what chrono cannot hold
        let secs = (hours * 3600.0).round() as i64;
        return Duration::try_seconds(secs).ok_or_else(invalid);
    }

    let mut total = 0i64;
    let mut digits = String::new();
    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' | 's' => {
                let n: i64 = digits.parse().map_err(|_| invalid())?;
                digits.clear();
                let unit = match c {
                    'h' => 3600,
                    'm' => 60,
                    _ => 1,
                };
                total = n
                    .checked_mul(unit)
                    .and_then(|secs| total.checked_add(secs))
                    .ok_or_else(invalid)?;
            }
            ' ' => {}
            _ => return Err(invalid()),
        }
    }

    // trailing digits without a unit
    if !digits.is_empty() {
        return Err(invalid());
    }

    Duration::try_seconds(total).ok_or_else(invalid)
}

/// Parse an RFC 3339 instant and view it in the reporting zone.
pub fn parse_instant(s: &str, tz: &Tz) -> AppResult<DateTime<Tz>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(tz))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / 3600.0
}
