use crate::core::policy::Policy;
use crate::models::{AttendanceStatus, Period, PeriodKind};

/// Requirement before deductions: one working day for a day window,
/// one working day per Mon–Fri day otherwise.
pub fn base_required_seconds(period: &Period, policy: &Policy) -> i64 {
    let daily = policy.daily_required_seconds();

    match period.kind {
        PeriodKind::Day => daily,
        PeriodKind::Week | PeriodKind::Month => daily * period.weekdays(),
    }
}

/// Days removed from the requirement. A single day also drops "other"
/// absences; longer windows only holidays and leave.
pub fn deduction_days(kind: PeriodKind, status: &AttendanceStatus) -> f64 {
    let days = match kind {
        PeriodKind::Day => status.holiday_days + status.leave_days + status.other_days,
        PeriodKind::Week | PeriodKind::Month => status.holiday_days + status.leave_days,
    };
    days.max(0.0)
}

/// Requirement after deductions, floored at zero.
pub fn calculate_required(period: &Period, status: &AttendanceStatus, policy: &Policy) -> i64 {
    let base = base_required_seconds(period, policy);
    let deduction =
        (deduction_days(period.kind, status) * policy.daily_required_seconds() as f64).round() as i64;

    (base - deduction).max(0)
}
