use chrono::Duration;
use chrono_tz::Tz;

/// Fixed inputs every computation needs besides the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Zone for civil-day and weekday decisions. The host zone is never used.
    pub tz: Tz,
    /// Requirement for one working day.
    pub daily_required: Duration,
    /// Length of the synthetic session placed before an unmatched first OUT.
    pub missing_in_estimate: Duration,
}

impl Policy {
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            ..Self::default()
        }
    }

    pub fn daily_required_seconds(&self) -> i64 {
        self.daily_required.num_seconds()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            tz: chrono_tz::Asia::Kolkata,
            daily_required: Duration::hours(8),
            missing_in_estimate: Duration::hours(2),
        }
    }
}
