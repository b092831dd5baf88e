use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    Month,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Day => "day",
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
        }
    }
}

/// Inclusive calendar window a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub kind: PeriodKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn day(d: NaiveDate) -> Self {
        Self {
            kind: PeriodKind::Day,
            start: d,
            end: d,
        }
    }

    /// Monday to Sunday week containing `d`.
    pub fn week_of(d: NaiveDate) -> Self {
        let (start, end) = date::week_range(d);
        Self {
            kind: PeriodKind::Week,
            start,
            end,
        }
    }

    /// Calendar month containing `d`.
    pub fn month_of(d: NaiveDate) -> Self {
        let (start, end) = date::month_range(d);
        Self {
            kind: PeriodKind::Month,
            start,
            end,
        }
    }

    /// The window of `kind` containing `d`.
    pub fn containing(kind: PeriodKind, d: NaiveDate) -> Self {
        match kind {
            PeriodKind::Day => Self::day(d),
            PeriodKind::Week => Self::week_of(d),
            PeriodKind::Month => Self::month_of(d),
        }
    }

    /// Explicit bounds, as sent by a caller that picked its own range.
    pub fn range(kind: PeriodKind, start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidPeriod(format!("{start} is after {end}")));
        }
        if kind == PeriodKind::Day && start != end {
            return Err(AppError::InvalidPeriod(format!(
                "a day period cannot span {start}..{end}"
            )));
        }
        Ok(Self { kind, start, end })
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    pub fn weekdays(&self) -> i64 {
        date::weekdays_in_range(self.start, self.end)
    }
}

/// Upstream aggregate of finalized work for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotal {
    pub total_minutes: i64,
}

/// Day counts by attendance status. Half days are `0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceStatus {
    #[serde(rename = "P", default)]
    pub present_days: f64,
    #[serde(rename = "H", default)]
    pub holiday_days: f64,
    #[serde(rename = "L", default)]
    pub leave_days: f64,
    #[serde(rename = "O", default)]
    pub other_days: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusMode {
    Incomplete,
    Complete,
    Excess,
}

/// Upstream data that could not be obtained. The matching figures fall
/// back to zero and the issue travels with the stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum DataIssue {
    PeriodTotalUnavailable(String),
    AttendanceStatusUnavailable(String),
    LiveDayUnavailable(String),
}

/// Required versus actual time for a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStats {
    pub kind: PeriodKind,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Requirement before holiday/leave deductions.
    pub base_required_seconds: i64,
    pub required_seconds: i64,
    pub actual_seconds: i64,
    /// Part of `actual_seconds` that comes from today's live swipes.
    pub live_seconds: i64,
    pub current_date_in_range: bool,
    pub shortfall_seconds: i64,
    pub excess_seconds: i64,
    pub completion_ratio: f64,
    pub status_mode: StatusMode,
    pub issues: Vec<DataIssue>,
}

impl PeriodStats {
    pub fn is_complete(&self) -> bool {
        self.actual_seconds >= self.required_seconds
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
