use crate::models::StatusMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub shortfall_seconds: i64,
    pub excess_seconds: i64,
    pub completion_ratio: f64,
    pub status_mode: StatusMode,
}

pub fn calculate_balance(actual: i64, required: i64) -> Balance {
    let completion_ratio = if required > 0 {
        (actual as f64 / required as f64).min(1.0)
    } else {
        1.0
    };

    let status_mode = if actual > required {
        StatusMode::Excess
    } else if actual == required {
        StatusMode::Complete
    } else {
        StatusMode::Incomplete
    };

    Balance {
        shortfall_seconds: (required - actual).max(0),
        excess_seconds: (actual - required).max(0),
        completion_ratio: completion_ratio.max(0.0),
        status_mode,
    }
}
