use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::errors::{AppError, AppResult};

/// Civil day of an instant in the reporting zone. Never uses the host zone.
pub fn civil_date<T: TimeZone>(instant: &DateTime<T>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Mon–Fri days in `[start, end]`, counted by walking the calendar.
pub fn weekdays_in_range(start: NaiveDate, end: NaiveDate) -> i64 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as i64
}

/// Monday..Sunday week containing `d`.
pub fn week_range(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = d.weekday().num_days_from_monday() as i64;
    let start = d - Duration::days(offset);
    (start, start + Duration::days(6))
}

/// First and last day of the month containing `d`.
pub fn month_range(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = d.with_day(1).unwrap_or(d);
    let next_month = if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)
    };
    let end = next_month.and_then(|n| n.pred_opt()).unwrap_or(d);
    (start, end)
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// `START:END` → inclusive bounds.
pub fn parse_range(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| AppError::InvalidPeriod(s.to_string()))?;
    Ok((parse_date(start)?, parse_date(end)?))
}
