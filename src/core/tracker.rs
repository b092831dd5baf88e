//! Fetches what a report needs from the collaborators and runs the engine.

use crate::core::calculator::aggregate::PeriodActuals;
use crate::core::logic::Core;
use crate::core::policy::Policy;
use crate::errors::AppResult;
use crate::models::{AchievementProjection, DailyResult, Period, PeriodKind, PeriodStats};
use crate::sources::{Clock, SwipeSource};
use crate::utils::date::civil_date;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub period: Period,
    pub stats: PeriodStats,
    /// The reported day, or today's live day inside a week/month.
    pub daily: Option<DailyResult>,
    /// Only for a day report of today.
    pub projection: Option<AchievementProjection>,
    pub generated_at: DateTime<Tz>,
}

pub struct Tracker<S, C> {
    source: S,
    clock: C,
    policy: Policy,
}

impl<S: SwipeSource, C: Clock> Tracker<S, C> {
    pub fn new(source: S, clock: C, policy: Policy) -> Self {
        Self {
            source,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.policy.tz)
    }

    pub fn today(&self) -> NaiveDate {
        civil_date(&self.now(), &self.policy.tz)
    }

    fn daily_at(&self, date: NaiveDate, now: &DateTime<Tz>) -> AppResult<DailyResult> {
        let raw = self.source.fetch_swipes(date)?;
        Core::compute_daily_raw(&raw, date, now, &self.policy)
    }

    pub fn report(&self, period: Period) -> AppResult<Report> {
        let now = self.now();
        let today = civil_date(&now, &self.policy.tz);

        let attendance = self
            .source
            .fetch_attendance_status(period.start, period.end);

        let actuals = match period.kind {
            PeriodKind::Day => PeriodActuals::Day(self.daily_at(period.start, &now)?),
            PeriodKind::Week | PeriodKind::Month => PeriodActuals::Range {
                upstream: self.source.fetch_period_total(period.start, period.end),
                today: period
                    .contains(today)
                    .then(|| self.daily_at(today, &now)),
            },
        };

        let stats = Core::compute_enhanced_period(&actuals, &period, &attendance, &now, &self.policy)?;

        let daily = match actuals {
            PeriodActuals::Day(d) => Some(d),
            PeriodActuals::Range { today: live, .. } => live.and_then(Result::ok),
        };

        // one working day, before leave deductions
        let projection = daily
            .as_ref()
            .filter(|d| period.kind == PeriodKind::Day && d.date == today)
            .map(|d| {
                Core::project_achievement(
                    stats.actual_seconds,
                    stats.base_required_seconds,
                    d.is_currently_working,
                    d.open_session_start,
                    &now,
                )
            });

        Ok(Report {
            period,
            stats,
            daily,
            projection,
            generated_at: now,
        })
    }
}
