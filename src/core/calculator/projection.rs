use crate::models::AchievementProjection;
use crate::utils::time::seconds_to_hours;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Straight-line projection of when `required` will be reached.
///
/// The running total already includes the time since `last_in`, so the
/// whole remaining delta is added to the IN instant, not to `now`.
/// `now` only fixes the zone the result is expressed in.
pub fn project(
    actual_seconds: i64,
    required_seconds: i64,
    is_working: bool,
    last_in: Option<DateTime<Utc>>,
    now: &DateTime<Tz>,
) -> AchievementProjection {
    if actual_seconds >= required_seconds {
        return AchievementProjection::already_achieved();
    }

    let remaining = required_seconds - actual_seconds;
    let hours_remaining = seconds_to_hours(remaining);

    if !is_working {
        return AchievementProjection::stalled(hours_remaining);
    }

    let Some(last_in) = last_in else {
        tracing::warn!("working without a known IN, cannot project");
        return AchievementProjection::stalled(hours_remaining);
    };

    let at = (last_in + Duration::seconds(remaining)).with_timezone(&now.timezone());

    AchievementProjection {
        will_achieve_at: Some(at),
        hours_remaining,
        is_achievable: true,
    }
}
