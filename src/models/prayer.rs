use serde::{Deserialize, Serialize};

/// The named events shown on the daily schedule, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKind {
    Sehri,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Iftar,
    Isha,
}

impl PrayerKind {
    pub const ALL: [PrayerKind; 8] = [
        PrayerKind::Sehri,
        PrayerKind::Fajr,
        PrayerKind::Sunrise,
        PrayerKind::Dhuhr,
        PrayerKind::Asr,
        PrayerKind::Maghrib,
        PrayerKind::Iftar,
        PrayerKind::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerKind::Sehri => "sehri",
            PrayerKind::Fajr => "fajr",
            PrayerKind::Sunrise => "sunrise",
            PrayerKind::Dhuhr => "dhuhr",
            PrayerKind::Asr => "asr",
            PrayerKind::Maghrib => "maghrib",
            PrayerKind::Iftar => "iftar",
            PrayerKind::Isha => "isha",
        }
    }

    /// Sehri and Iftar mark the fasting boundaries and are emphasised.
    pub fn is_fasting_boundary(&self) -> bool {
        matches!(self, PrayerKind::Sehri | PrayerKind::Iftar)
    }
}

impl std::fmt::Display for PrayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerEvent {
    pub kind: PrayerKind,
    pub name: String,
    /// Already localized for the requested language.
    pub time: String,
    pub highlighted: bool,
}
