//! Collaborators the engine reads from. Only their output shape matters
//! to the calculation; transport lives behind these traits.

pub mod cache;
pub mod file;

use crate::models::{AttendanceStatus, PeriodTotal, RawSwipe};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("no data for {0}")]
    NotFound(String),

    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Attendance data for one worker.
pub trait SwipeSource {
    /// Raw punches of the civil day `date`.
    fn fetch_swipes(&self, date: NaiveDate) -> Result<Vec<RawSwipe>, SourceError>;

    /// Finalized total for `[start, end]`.
    fn fetch_period_total(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodTotal, SourceError>;

    /// Present/holiday/leave/other day counts for `[start, end]`.
    fn fetch_attendance_status(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AttendanceStatus, SourceError>;
}

impl<S: SwipeSource + ?Sized> SwipeSource for &S {
    fn fetch_swipes(&self, date: NaiveDate) -> Result<Vec<RawSwipe>, SourceError> {
        (**self).fetch_swipes(date)
    }

    fn fetch_period_total(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodTotal, SourceError> {
        (**self).fetch_period_total(start, end)
    }

    fn fetch_attendance_status(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AttendanceStatus, SourceError> {
        (**self).fetch_attendance_status(start, end)
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Tz>;
}

/// Wall clock viewed in a fixed zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    pub tz: Tz,
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub at: DateTime<Tz>,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.at
    }
}
