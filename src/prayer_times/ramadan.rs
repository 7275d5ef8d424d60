use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{District, Language, RamadanDay, RamadanDayResult};
use crate::prayer_times::Season;
use crate::utils::labels::{gregorian_date_label, islamic_date_label};

/// How "today" is picked out of the Ramadan table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodayMode {
    /// The first day of Ramadan is always "today".
    #[default]
    Static,
    /// Match the system date against each row's Gregorian date.
    System,
}

impl TodayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodayMode::Static => "static",
            TodayMode::System => "system",
        }
    }

    pub fn resolve(&self, now: NaiveDate) -> Today {
        match self {
            TodayMode::Static => Today::Static,
            TodayMode::System => Today::Date(now),
        }
    }
}

impl FromStr for TodayMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(TodayMode::Static),
            "system" => Ok(TodayMode::System),
            _ => Err(anyhow::anyhow!("Unknown today mode: {} (use static or system)", s)),
        }
    }
}

/// The caller's notion of today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Today {
    Static,
    Date(NaiveDate),
}

impl Season {
    /// The full month for `district`. Times are shifted by the district
    /// offset and left in ASCII digits; labels follow `lang`.
    pub fn build_month(&self, district: &District, lang: Language) -> Vec<RamadanDayResult> {
        let offset = district.offset_minutes as i64;
        self.days
            .iter()
            .map(|row| RamadanDayResult {
                ordinal: row.ordinal,
                date: row.date,
                islamic_date_label: islamic_date_label(row.ordinal, lang),
                gregorian_date_label: gregorian_date_label(row.date, lang),
                sehri: row.sehri.add_minutes(offset).to_string(),
                iftar: row.iftar.add_minutes(offset).to_string(),
            })
            .collect()
    }

    pub fn day(&self, ordinal: u8) -> Option<&RamadanDay> {
        self.days.iter().find(|d| d.ordinal == ordinal)
    }

    pub fn ordinal_for(&self, date: NaiveDate) -> Option<u8> {
        self.days.iter().find(|d| d.date == date).map(|d| d.ordinal)
    }

    pub fn current_ordinal(&self, today: Today) -> Option<u8> {
        match today {
            Today::Static => self.days.first().map(|d| d.ordinal),
            Today::Date(date) => self.ordinal_for(date),
        }
    }

    pub fn is_current_day(&self, ordinal: u8, today: Today) -> bool {
        self.current_ordinal(today) == Some(ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::districts::{all_districts, find_district};
    use crate::prayer_times::ClockTime;

    fn season() -> Season {
        Season::builtin().unwrap()
    }

    fn minutes(s: &str) -> i64 {
        ClockTime::parse(s).unwrap().minutes_since_midnight() as i64
    }

    #[test]
    fn dhaka_month_matches_reference_rows() {
        let s = season();
        let month = s.build_month(find_district("dhaka"), Language::Bn);
        assert_eq!(month.len(), 30);
        assert_eq!(month[0].sehri, "05:12 AM");
        assert_eq!(month[0].iftar, "05:58 PM");
        assert_eq!(month[0].islamic_date_label, "১ রমজান");
        assert_eq!(month[0].gregorian_date_label, "বৃহস্পতিবার, ১৯ ফেব্রুয়ারি");
        assert_eq!(month[29].sehri, "04:43 AM");
        assert_eq!(month[29].gregorian_date_label, "শুক্রবার, ২০ মার্চ");
    }

    #[test]
    fn offset_shifts_every_row_exactly() {
        let s = season();
        let base = s.build_month(find_district("dhaka"), Language::En);
        let shifted_district = District::new("test", "পরীক্ষা", "Test", 60);
        let shifted = s.build_month(&shifted_district, Language::En);

        assert_eq!(base.len(), shifted.len());
        for (b, x) in base.iter().zip(&shifted) {
            assert_eq!(b.ordinal, x.ordinal);
            assert_eq!(b.date, x.date);
            assert_eq!(minutes(&x.sehri) - minutes(&b.sehri), 60);
            assert_eq!(minutes(&x.iftar) - minutes(&b.iftar), 60);
        }
        let ordinals: Vec<u8> = shifted.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, (1..=30).collect::<Vec<u8>>());
    }

    #[test]
    fn build_month_is_deterministic() {
        let s = season();
        for d in all_districts() {
            assert_eq!(s.build_month(d, Language::Bn), s.build_month(d, Language::Bn));
        }
    }

    #[test]
    fn static_today_is_first_day_only() {
        let s = season();
        assert!(s.is_current_day(1, Today::Static));
        assert!((2..=30).all(|o| !s.is_current_day(o, Today::Static)));
    }

    #[test]
    fn system_today_matches_gregorian_date() {
        let s = season();
        let march_1 = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(s.is_current_day(11, Today::Date(march_1)));
        assert!(!s.is_current_day(1, Today::Date(march_1)));

        let outside = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(s.current_ordinal(Today::Date(outside)), None);
        assert_eq!(
            TodayMode::System.resolve(march_1),
            Today::Date(march_1)
        );
    }

    #[test]
    fn day_lookup_by_ordinal() {
        let s = season();
        assert_eq!(s.day(15).map(|d| d.sehri.to_string()), Some("04:59 AM".to_string()));
        assert!(s.day(0).is_none());
        assert!(s.day(31).is_none());
    }
}
