use crate::core::calculator::aggregate::{self, PeriodActuals};
use crate::core::calculator::{pairing, projection};
use crate::core::policy::Policy;
use crate::errors::AppResult;
use crate::models::swipe::parse_raw_swipes;
use crate::models::{
    AchievementProjection, AttendanceStatus, DailyResult, Period, PeriodStats, RawSwipe,
    SwipeEvent,
};
use crate::sources::SourceError;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Entry points of the accounting engine. Every call is pure: the same
/// inputs always give the same output.
pub struct Core;

impl Core {
    /// Pair one day's swipes and total them.
    pub fn compute_daily(
        swipes: &[SwipeEvent],
        date: NaiveDate,
        now: &DateTime<Tz>,
        policy: &Policy,
    ) -> AppResult<DailyResult> {
        let pairing = pairing::build_pairs(swipes, now, policy)?;

        tracing::debug!(
            %date,
            swipes = swipes.len(),
            sessions = pairing.pairs.len(),
            exact_seconds = pairing.exact_seconds,
            "daily result computed"
        );

        Ok(DailyResult {
            date,
            total_actual_seconds: pairing.rounded_seconds(),
            exact_seconds: pairing.exact_seconds,
            is_currently_working: pairing.is_currently_working(),
            open_session_start: pairing.open_since,
            sessions: pairing.pairs,
            total_swipes: swipes.len(),
            dropped_swipes: 0,
        })
    }

    /// Same as [`Core::compute_daily`], starting from upstream records.
    /// Malformed records are dropped and counted, never fatal.
    pub fn compute_daily_raw(
        raw: &[RawSwipe],
        date: NaiveDate,
        now: &DateTime<Tz>,
        policy: &Policy,
    ) -> AppResult<DailyResult> {
        let parsed = parse_raw_swipes(raw);
        let mut daily = Self::compute_daily(&parsed.events, date, now, policy)?;
        daily.total_swipes = raw.len();
        daily.dropped_swipes = parsed.dropped;
        Ok(daily)
    }

    pub fn compute_enhanced_period(
        actuals: &PeriodActuals,
        period: &Period,
        attendance: &Result<AttendanceStatus, SourceError>,
        now: &DateTime<Tz>,
        policy: &Policy,
    ) -> AppResult<PeriodStats> {
        aggregate::compute_period_stats(actuals, period, attendance, now, policy)
    }

    pub fn project_achievement(
        actual_seconds: i64,
        required_seconds: i64,
        is_currently_working: bool,
        last_in: Option<DateTime<Utc>>,
        now: &DateTime<Tz>,
    ) -> AchievementProjection {
        projection::project(
            actual_seconds,
            required_seconds,
            is_currently_working,
            last_in,
            now,
        )
    }
}
