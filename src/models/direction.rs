use serde::{Deserialize, Serialize};

/// Direction of a swipe through the door/biometric reader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Convert the upstream `inOutIndicator` code → enum (1 = IN, 0 = OUT)
    pub fn from_indicator(code: i64) -> Option<Self> {
        match code {
            1 => Some(Direction::In),
            0 => Some(Direction::Out),
            _ => None,
        }
    }

    /// Convert enum → upstream indicator code
    pub fn indicator(&self) -> i64 {
        match self {
            Direction::In => 1,
            Direction::Out => 0,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Direction::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Direction::Out)
    }
}
