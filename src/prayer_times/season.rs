use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{PrayerKind, RAMADAN_DAYS, RamadanDay};
use crate::prayer_times::ClockTime;

const BUILTIN_SEASON: &str = include_str!("../../assets/ramadan_2026.toml");

/// Dhaka base time for each event of the daily schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTimes {
    pub sehri: ClockTime,
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub dhuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub iftar: ClockTime,
    pub isha: ClockTime,
}

impl ReferenceTimes {
    pub fn get(&self, kind: PrayerKind) -> ClockTime {
        match kind {
            PrayerKind::Sehri => self.sehri,
            PrayerKind::Fajr => self.fajr,
            PrayerKind::Sunrise => self.sunrise,
            PrayerKind::Dhuhr => self.dhuhr,
            PrayerKind::Asr => self.asr,
            PrayerKind::Maghrib => self.maghrib,
            PrayerKind::Iftar => self.iftar,
            PrayerKind::Isha => self.isha,
        }
    }
}

/// One Ramadan season's reference tables, swappable without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub season: String,
    pub hijri_year: u32,
    #[serde(default)]
    pub source: Option<String>,
    pub reference: ReferenceTimes,
    pub days: Vec<RamadanDay>,
}

impl Season {
    /// The season compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SEASON).context("Parsing built-in season table")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let season =
            Self::from_toml_str(&content).with_context(|| format!("Parsing {:?}", path))?;
        log::info!("Loaded Ramadan season {} from {:?}", season.season, path);
        Ok(season)
    }

    /// Load `path` if given, otherwise fall back to the built-in table.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let season: Season = toml::from_str(content)?;
        season.validate()?;
        Ok(season)
    }

    fn validate(&self) -> Result<()> {
        if self.season.trim().is_empty() {
            bail!("Season name must not be empty");
        }
        if self.days.len() != RAMADAN_DAYS as usize {
            bail!(
                "Season {} has {} days, expected {}",
                self.season,
                self.days.len(),
                RAMADAN_DAYS
            );
        }
        for (idx, day) in self.days.iter().enumerate() {
            let expected = idx as u8 + 1;
            if day.ordinal != expected {
                bail!("Row {} has ordinal {}, expected {}", idx + 1, day.ordinal, expected);
            }
            if idx > 0 && self.days[idx - 1].date.succ_opt() != Some(day.date) {
                bail!("Ramadan {} ({}) does not follow the previous day", day.ordinal, day.date);
            }
        }
        Ok(())
    }

    /// Persistence key for this season's fasting tracker.
    pub fn tracker_key(&self) -> String {
        format!("fasted_days_{}", self.season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn builtin_with(edit: impl FnOnce(&str) -> String) -> Result<Season> {
        Season::from_toml_str(&edit(BUILTIN_SEASON))
    }

    #[test]
    fn builtin_season_is_valid() {
        let season = Season::builtin().unwrap();
        assert_eq!(season.season, "2026");
        assert_eq!(season.hijri_year, 1447);
        assert_eq!(season.days.len(), 30);
        assert_eq!(season.days[0].date, NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
        assert_eq!(season.days[29].date, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(season.days[0].sehri.to_string(), "05:12 AM");
        assert_eq!(season.days[29].iftar.to_string(), "06:10 PM");
        assert_eq!(season.reference.get(PrayerKind::Isha).to_string(), "07:10 PM");
        assert_eq!(season.tracker_key(), "fasted_days_2026");
    }

    #[test]
    fn rejects_malformed_time() {
        let err = builtin_with(|s| s.replacen("\"05:12 AM\"", "\"5:12\"", 1)).unwrap_err();
        assert!(format!("{:#}", err).contains("5:12"));
    }

    #[test]
    fn rejects_missing_row() {
        let cut = |s: &str| {
            let at = s.rfind("[[days]]").unwrap();
            s[..at].to_string()
        };
        assert!(builtin_with(cut).is_err());
    }

    #[test]
    fn rejects_out_of_order_ordinals() {
        let swapped = |s: &str| s.replacen("ordinal = 2\n", "ordinal = 3\n", 1);
        assert!(builtin_with(swapped).is_err());
    }

    #[test]
    fn rejects_date_gap() {
        let gap = |s: &str| s.replacen("\"2026-02-20\"", "\"2026-02-21\"", 1);
        assert!(builtin_with(gap).is_err());
    }

    #[test]
    fn loads_season_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ramadan_2027.toml");
        let content = BUILTIN_SEASON.replacen("season = \"2026\"", "season = \"2027\"", 1);
        std::fs::write(&path, content).unwrap();

        let season = Season::load_or_builtin(Some(&path)).unwrap();
        assert_eq!(season.tracker_key(), "fasted_days_2027");
        assert!(Season::load(&dir.path().join("missing.toml")).is_err());
    }
}
