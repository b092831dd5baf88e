use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// When the requirement will be met if the worker keeps going.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementProjection {
    /// Only set while a session is open and the target is still ahead.
    pub will_achieve_at: Option<DateTime<Tz>>,
    pub hours_remaining: f64,
    pub is_achievable: bool,
}

impl AchievementProjection {
    pub fn already_achieved() -> Self {
        Self {
            will_achieve_at: None,
            hours_remaining: 0.0,
            is_achievable: true,
        }
    }

    pub fn stalled(hours_remaining: f64) -> Self {
        Self {
            will_achieve_at: None,
            hours_remaining,
            is_achievable: false,
        }
    }
}
