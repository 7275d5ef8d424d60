pub mod calendar;
pub mod district_picker;
pub mod header;
pub mod next_event;
pub mod progress;
pub mod ramadan;
pub mod schedule;
pub mod statusbar;
