use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One continuous work interval bounded by an IN and an OUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipePair {
    pub in_time: DateTime<Utc>,
    pub out_time: DateTime<Utc>,
    pub duration_seconds: i64,
    /// True when `in_time` was synthesized by the leading-OUT repair
    /// rather than observed.
    pub estimated: bool,
}

impl SwipePair {
    /// Build a session, rejecting an OUT that precedes its IN.
    /// The duration is rounded to the nearest whole second.
    pub fn new(
        in_time: DateTime<Utc>,
        out_time: DateTime<Utc>,
        estimated: bool,
    ) -> AppResult<Self> {
        if out_time < in_time {
            return Err(AppError::Invariant(format!(
                "session ends at {} before it starts at {}",
                out_time.to_rfc3339(),
                in_time.to_rfc3339()
            )));
        }

        let millis = (out_time - in_time).num_milliseconds();
        let duration_seconds = (millis + 500).div_euclid(1000);

        Ok(Self {
            in_time,
            out_time,
            duration_seconds,
            estimated,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.duration_seconds == 0
    }
}
