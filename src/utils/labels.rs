use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Language, PrayerKind};
use crate::utils::digits::localize_digits;

/// Gregorian month names (index 0 = January).
const MONTHS_BN: [&str; 12] = [
    "জানুয়ারি",
    "ফেব্রুয়ারি",
    "মার্চ",
    "এপ্রিল",
    "মে",
    "জুন",
    "জুলাই",
    "আগস্ট",
    "সেপ্টেম্বর",
    "অক্টোবর",
    "নভেম্বর",
    "ডিসেম্বর",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Sunday first to match the calendar grid.
const WEEKDAYS_BN: [&str; 7] = [
    "রবিবার",
    "সোমবার",
    "মঙ্গলবার",
    "বুধবার",
    "বৃহস্পতিবার",
    "শুক্রবার",
    "শনিবার",
];
const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const WEEKDAYS_SHORT_BN: [&str; 7] = ["রবি", "সোম", "মঙ্গল", "বুধ", "বৃহঃ", "শুক্র", "শনি"];
const WEEKDAYS_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn prayer_name(kind: PrayerKind, lang: Language) -> &'static str {
    match lang {
        Language::Bn => match kind {
            PrayerKind::Sehri => "সেহরি",
            PrayerKind::Fajr => "ফজর",
            PrayerKind::Sunrise => "সূর্যোদয়",
            PrayerKind::Dhuhr => "যোহর",
            PrayerKind::Asr => "আসর",
            PrayerKind::Maghrib => "মাগরিব",
            PrayerKind::Iftar => "ইফতার",
            PrayerKind::Isha => "এশা",
        },
        Language::En => match kind {
            PrayerKind::Sehri => "Sehri",
            PrayerKind::Fajr => "Fajr",
            PrayerKind::Sunrise => "Sunrise",
            PrayerKind::Dhuhr => "Dhuhr",
            PrayerKind::Asr => "Asr",
            PrayerKind::Maghrib => "Maghrib",
            PrayerKind::Iftar => "Iftar",
            PrayerKind::Isha => "Isha",
        },
    }
}

/// `month` is zero-based. Out of range yields an empty string.
pub fn month_name(month: u32, lang: Language) -> &'static str {
    let table = match lang {
        Language::Bn => &MONTHS_BN,
        Language::En => &MONTHS_EN,
    };
    table.get(month as usize).copied().unwrap_or("")
}

pub fn weekday_name(weekday: Weekday, lang: Language) -> &'static str {
    let idx = weekday.num_days_from_sunday() as usize;
    match lang {
        Language::Bn => WEEKDAYS_BN[idx],
        Language::En => WEEKDAYS_EN[idx],
    }
}

pub fn weekday_headers(lang: Language) -> &'static [&'static str; 7] {
    match lang {
        Language::Bn => &WEEKDAYS_SHORT_BN,
        Language::En => &WEEKDAYS_SHORT_EN,
    }
}

/// "১ রমজান" / "1 Ramadan"
pub fn islamic_date_label(ordinal: u8, lang: Language) -> String {
    match lang {
        Language::Bn => localize_digits(&format!("{} রমজান", ordinal), lang),
        Language::En => format!("{} Ramadan", ordinal),
    }
}

/// "বৃহস্পতিবার, ১৯ ফেব্রুয়ারি" / "Thursday, 19 February"
pub fn gregorian_date_label(date: NaiveDate, lang: Language) -> String {
    let label = format!(
        "{}, {:02} {}",
        weekday_name(date.weekday(), lang),
        date.day(),
        month_name(date.month0(), lang)
    );
    localize_digits(&label, lang)
}

pub fn holiday_kind(is_holiday: bool, lang: Language) -> &'static str {
    match (is_holiday, lang) {
        (true, Language::Bn) => "সরকারি ছুটি",
        (true, Language::En) => "Holiday",
        (false, Language::Bn) => "দিবস",
        (false, Language::En) => "Event",
    }
}
