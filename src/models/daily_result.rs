use super::swipe_pair::SwipePair;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Worked time for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyResult {
    pub date: NaiveDate,
    pub sessions: Vec<SwipePair>,
    /// Whole-second sum of every session, before rounding.
    pub exact_seconds: i64,
    /// `exact_seconds` rounded once to the nearest minute, in seconds.
    pub total_actual_seconds: i64,
    pub is_currently_working: bool,
    pub open_session_start: Option<DateTime<Utc>>,
    pub total_swipes: usize,
    pub dropped_swipes: usize,
}

impl DailyResult {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sessions: Vec::new(),
            exact_seconds: 0,
            total_actual_seconds: 0,
            is_currently_working: false,
            open_session_start: None,
            total_swipes: 0,
            dropped_swipes: 0,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.total_actual_seconds / 60
    }

    pub fn has_estimated_sessions(&self) -> bool {
        self.sessions.iter().any(|s| s.estimated)
    }
}
