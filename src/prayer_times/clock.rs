use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid time '{0}': expected \"HH:MM AM\" or \"HH:MM PM\"")]
    InvalidTimeFormat(String),
}

/// A wall-clock time of day, rendered on a 12-hour dial ("05:12 AM").
///
/// Arithmetic wraps around midnight and never carries into a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a strict "HH:MM AM|PM" string with a zero-padded 01-12 hour.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidTimeFormat(s.to_string());

        let b = s.as_bytes();
        let shaped = b.len() == 8
            && b[0].is_ascii_digit()
            && b[1].is_ascii_digit()
            && b[2] == b':'
            && b[3].is_ascii_digit()
            && b[4].is_ascii_digit()
            && b[5] == b' ';
        if !shaped {
            return Err(invalid());
        }

        let hour: u32 = s[0..2].parse().map_err(|_| invalid())?;
        let minute: u32 = s[3..5].parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(invalid());
        }

        let hour24 = match &s[6..] {
            "AM" if hour == 12 => 0,
            "AM" => hour,
            "PM" if hour < 12 => hour + 12,
            "PM" => hour,
            _ => return Err(invalid()),
        };
        Self::from_hm(hour24, minute).ok_or_else(invalid)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Shift by a signed number of minutes, wrapping modulo one day.
    pub fn add_minutes(&self, delta: i64) -> Self {
        // Reduce first: Duration::minutes panics far below i64::MAX.
        let delta = Duration::minutes(delta.rem_euclid(MINUTES_PER_DAY));
        let (time, _wrapped_secs) = self.0.overflowing_add_signed(delta);
        Self(time)
    }

    /// Minutes from `self` forward to `later`, wrapping past midnight.
    pub fn minutes_until(&self, later: ClockTime) -> i64 {
        (later.minutes_since_midnight() as i64 - self.minutes_since_midnight() as i64)
            .rem_euclid(MINUTES_PER_DAY)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(t: NaiveTime) -> Self {
        // Sub-minute precision has no place on the dial.
        Self(t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t))
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%I:%M %p"))
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// Shift a "HH:MM AM|PM" string by `delta` minutes.
pub fn add_minutes(base: &str, delta: i64) -> Result<String, TimeError> {
    Ok(ClockTime::parse(base)?.add_minutes(delta).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_twelve_hour(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() == 8
            && b[0].is_ascii_digit()
            && b[1].is_ascii_digit()
            && b[2] == b':'
            && b[3].is_ascii_digit()
            && b[4].is_ascii_digit()
            && b[5] == b' '
            && (s.ends_with("AM") || s.ends_with("PM"))
    }

    fn every_minute_of_day() -> impl Iterator<Item = ClockTime> {
        (0..24).flat_map(|h| (0..60).filter_map(move |m| ClockTime::from_hm(h, m)))
    }

    #[test]
    fn parses_twelve_hour_edges() {
        assert_eq!(ClockTime::parse("12:00 AM").unwrap().minutes_since_midnight(), 0);
        assert_eq!(ClockTime::parse("12:00 PM").unwrap().minutes_since_midnight(), 720);
        assert_eq!(ClockTime::parse("01:30 PM").unwrap().minutes_since_midnight(), 810);
        assert_eq!(ClockTime::parse("11:59 PM").unwrap().minutes_since_midnight(), 1439);
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "", "5:12 AM", "05:12", "05:12 am", "05:12AM", "13:00 PM", "00:30 AM", "05:60 AM",
            "০৫:১২ AM", "05-12 AM", " 05:12 AM",
        ] {
            assert_eq!(
                ClockTime::parse(bad),
                Err(TimeError::InvalidTimeFormat(bad.to_string())),
                "accepted {:?}",
                bad
            );
        }
        assert!(add_minutes("garbage", 5).is_err());
    }

    #[test]
    fn crosses_midnight_both_ways() {
        assert_eq!(add_minutes("11:59 PM", 2).unwrap(), "12:01 AM");
        assert_eq!(add_minutes("12:01 AM", -2).unwrap(), "11:59 PM");
        assert_eq!(add_minutes("11:30 AM", 45).unwrap(), "12:15 PM");
        assert_eq!(add_minutes("05:58 PM", 7).unwrap(), "06:05 PM");
        assert_eq!(add_minutes("05:12 AM", -6).unwrap(), "05:06 AM");
    }

    #[test]
    fn zero_offset_is_identity() {
        for t in every_minute_of_day() {
            let s = t.to_string();
            assert_eq!(add_minutes(&s, 0).unwrap(), s);
        }
    }

    #[test]
    fn opposite_offsets_round_trip() {
        let deltas = [1, -1, 59, 61, -719, 720, 1439, 1440, -1441, 10_000, -98_765];
        for t in every_minute_of_day() {
            for d in deltas {
                let there = t.add_minutes(d);
                assert_eq!(there.add_minutes(-d), t, "{} {:+}", t, d);
                assert!(is_twelve_hour(&there.to_string()));
            }
        }
    }

    #[test]
    fn extreme_deltas_do_not_panic() {
        let t = ClockTime::parse("06:00 AM").unwrap();
        assert!(is_twelve_hour(&t.add_minutes(i64::MAX).to_string()));
        assert!(is_twelve_hour(&t.add_minutes(i64::MIN).to_string()));
        assert_eq!(t.add_minutes(1440 * 365), t);
    }

    #[test]
    fn minutes_until_wraps_forward() {
        let late = ClockTime::parse("11:00 PM").unwrap();
        let early = ClockTime::parse("01:00 AM").unwrap();
        assert_eq!(late.minutes_until(early), 120);
        assert_eq!(early.minutes_until(late), 1320);
        assert_eq!(early.minutes_until(early), 0);
    }

    #[test]
    fn serde_uses_clock_string() {
        let t: ClockTime = serde_json::from_str("\"04:43 AM\"").unwrap();
        assert_eq!(t.minutes_since_midnight(), 4 * 60 + 43);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"04:43 AM\"");
        assert!(serde_json::from_str::<ClockTime>("\"4:43\"").is_err());
    }
}
