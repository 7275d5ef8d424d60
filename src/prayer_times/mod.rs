pub mod clock;
pub mod ramadan;
pub mod schedule;
pub mod season;

pub use clock::{ClockTime, TimeError, add_minutes};
pub use ramadan::{Today, TodayMode};
pub use schedule::{build_schedule, next_event};
pub use season::{ReferenceTimes, Season};
