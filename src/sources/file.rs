//! Punch data read from a local JSON file.

use super::{SourceError, SwipeSource};
use crate::errors::AppResult;
use crate::models::swipe::parse_punch_timestamp;
use crate::models::{AttendanceStatus, PeriodTotal, RawSwipe};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchFile {
    #[serde(default)]
    pub swipes: Vec<RawSwipe>,
    #[serde(default)]
    pub period_totals: Vec<PeriodTotalEntry>,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotalEntry {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(flatten)]
    pub status: AttendanceStatus,
}

pub struct JsonFileSource {
    data: PunchFile,
    tz: Tz,
}

impl JsonFileSource {
    pub fn new(data: PunchFile, tz: Tz) -> Self {
        Self { data, tz }
    }

    pub fn open(path: &Path, tz: Tz) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let data: PunchFile = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            swipes = data.swipes.len(),
            "punch file loaded"
        );
        Ok(Self::new(data, tz))
    }
}

impl SwipeSource for JsonFileSource {
    fn fetch_swipes(&self, date: NaiveDate) -> Result<Vec<RawSwipe>, SourceError> {
        let day_prefix = date.format("%Y-%m-%d").to_string();

        let swipes = self
            .data
            .swipes
            .iter()
            .filter(|r| match parse_punch_timestamp(&r.punch_date_time) {
                Ok(ts) => ts.with_timezone(&self.tz).date_naive() == date,
                // keep unreadable records of that day so the engine can count them
                Err(_) => r.punch_date_time.trim().starts_with(&day_prefix),
            })
            .cloned()
            .collect();

        Ok(swipes)
    }

    fn fetch_period_total(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodTotal, SourceError> {
        self.data
            .period_totals
            .iter()
            .find(|e| e.start == start && e.end == end)
            .map(|e| PeriodTotal {
                total_minutes: e.total_minutes,
            })
            .ok_or_else(|| SourceError::NotFound(format!("period total {start}..{end}")))
    }

    fn fetch_attendance_status(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AttendanceStatus, SourceError> {
        self.data
            .attendance
            .iter()
            .find(|e| e.start == start && e.end == end)
            .map(|e| e.status)
            .ok_or_else(|| SourceError::NotFound(format!("attendance status {start}..{end}")))
    }
}
