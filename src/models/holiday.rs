use serde::{Deserialize, Serialize};

use crate::models::Language;

/// A public holiday or observance. `month` is zero-based (0 = January).
/// Events without a `year` recur every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEvent {
    pub day: u32,
    pub month: u32,
    #[serde(default)]
    pub year: Option<i32>,
    pub title_bn: String,
    pub title_en: String,
    pub is_holiday: bool,
}

impl HolidayEvent {
    pub fn recurring(day: u32, month: u32, title_bn: &str, title_en: &str, is_holiday: bool) -> Self {
        Self {
            day,
            month,
            year: None,
            title_bn: title_bn.to_string(),
            title_en: title_en.to_string(),
            is_holiday,
        }
    }

    pub fn dated(year: i32, month: u32, day: u32, title_bn: &str, title_en: &str) -> Self {
        Self {
            day,
            month,
            year: Some(year),
            title_bn: title_bn.to_string(),
            title_en: title_en.to_string(),
            is_holiday: true,
        }
    }

    pub fn title(&self, lang: Language) -> &str {
        match lang {
            Language::Bn => &self.title_bn,
            Language::En => &self.title_en,
        }
    }

    pub fn matches(&self, day: u32, month: u32, year: i32) -> bool {
        self.day == day && self.month == month && self.year.is_none_or(|y| y == year)
    }
}
