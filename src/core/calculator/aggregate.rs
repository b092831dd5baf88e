//! Rolls daily results and upstream totals into period stats.

use crate::core::calculator::{balance, required};
use crate::core::policy::Policy;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceStatus, DailyResult, DataIssue, Period, PeriodKind, PeriodStats, PeriodTotal,
};
use crate::sources::SourceError;
use crate::utils::date::civil_date;
use chrono::{DateTime, TimeZone};

/// What a period's actual time is built from.
#[derive(Debug)]
pub enum PeriodActuals {
    /// A single day computed from its swipes.
    Day(DailyResult),
    /// Upstream total of finalized days, plus today's live result when
    /// today lies in the window.
    Range {
        upstream: Result<PeriodTotal, SourceError>,
        today: Option<AppResult<DailyResult>>,
    },
}

pub fn compute_period_stats<T: TimeZone>(
    actuals: &PeriodActuals,
    period: &Period,
    attendance: &Result<AttendanceStatus, SourceError>,
    now: &DateTime<T>,
    policy: &Policy,
) -> AppResult<PeriodStats> {
    let today = civil_date(now, &policy.tz);
    let current_date_in_range = period.contains(today);
    let mut issues = Vec::new();

    let (actual_seconds, live_seconds) = match (period.kind, actuals) {
        (PeriodKind::Day, PeriodActuals::Day(daily)) => {
            if daily.date != period.start {
                return Err(AppError::InvalidPeriod(format!(
                    "daily result for {} does not belong to {}",
                    daily.date, period.start
                )));
            }
            let live = if daily.date == today {
                daily.total_actual_seconds
            } else {
                0
            };
            (daily.total_actual_seconds, live)
        }
        (PeriodKind::Week | PeriodKind::Month, PeriodActuals::Range { upstream, today: live }) => {
            let finalized = match upstream {
                Ok(total) => total.total_minutes.max(0) * 60,
                Err(e) => {
                    tracing::warn!(
                        start = %period.start,
                        end = %period.end,
                        error = %e,
                        "period total unavailable, counting it as zero"
                    );
                    issues.push(DataIssue::PeriodTotalUnavailable(e.to_string()));
                    0
                }
            };

            let live = match live {
                Some(Ok(daily)) if current_date_in_range && daily.date == today => {
                    daily.total_actual_seconds
                }
                Some(Ok(daily)) => {
                    tracing::debug!(date = %daily.date, "live result outside the current day, ignored");
                    0
                }
                Some(Err(e)) if current_date_in_range => {
                    tracing::warn!(error = %e, "live hours for today unavailable");
                    issues.push(DataIssue::LiveDayUnavailable(e.to_string()));
                    0
                }
                _ => 0,
            };

            (finalized + live, live)
        }
        (kind, _) => {
            return Err(AppError::InvalidPeriod(format!(
                "{} period given the wrong kind of actuals",
                kind.as_str()
            )));
        }
    };

    let status = match attendance {
        Ok(s) => *s,
        Err(e) => {
            tracing::warn!(error = %e, "attendance status unavailable, no deductions applied");
            issues.push(DataIssue::AttendanceStatusUnavailable(e.to_string()));
            AttendanceStatus::default()
        }
    };

    let base_required_seconds = required::base_required_seconds(period, policy);
    let required_seconds = required::calculate_required(period, &status, policy);
    let balance = balance::calculate_balance(actual_seconds, required_seconds);

    tracing::debug!(
        kind = period.kind.as_str(),
        required_seconds,
        actual_seconds,
        live_seconds,
        "period stats computed"
    );

    Ok(PeriodStats {
        kind: period.kind,
        period_start: period.start,
        period_end: period.end,
        base_required_seconds,
        required_seconds,
        actual_seconds,
        live_seconds,
        current_date_in_range,
        shortfall_seconds: balance.shortfall_seconds,
        excess_seconds: balance.excess_seconds,
        completion_ratio: balance.completion_ratio,
        status_mode: balance.status_mode,
        issues,
    })
}
