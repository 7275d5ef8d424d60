use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::prayer_times::ClockTime;

pub const RAMADAN_DAYS: u8 = 30;

/// One row of the reference Ramadan table, timed for Dhaka.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamadanDay {
    pub ordinal: u8,
    pub date: NaiveDate,
    pub sehri: ClockTime,
    pub iftar: ClockTime,
}

/// A Ramadan row shifted for a district, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RamadanDayResult {
    pub ordinal: u8,
    pub date: NaiveDate,
    pub islamic_date_label: String,
    pub gregorian_date_label: String,
    pub sehri: String,
    pub iftar: String,
}
