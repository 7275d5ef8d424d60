pub mod grid;
pub mod holidays;

pub use grid::{days_in_month, first_weekday_of_month, month_grid, shift_month};
pub use holidays::HolidayCalendarIndex;
