pub mod daily_result;
pub mod direction;
pub mod period;
pub mod projection;
pub mod swipe;
pub mod swipe_pair;

pub use daily_result::DailyResult;
pub use direction::Direction;
pub use period::{
    AttendanceStatus, DataIssue, Period, PeriodKind, PeriodStats, PeriodTotal, StatusMode,
};
pub use projection::AchievementProjection;
pub use swipe::{RawSwipe, SwipeEvent};
pub use swipe_pair::SwipePair;
