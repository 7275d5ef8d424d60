use std::collections::BTreeMap;

use crate::calendar::grid::days_in_month;
use crate::models::HolidayEvent;

/// National days of Bangladesh plus year-specific religious holidays.
/// Months are zero-based.
fn builtin_events() -> Vec<HolidayEvent> {
    vec![
        HolidayEvent::recurring(
            21,
            1,
            "শহীদ দিবস ও আন্তর্জাতিক মাতৃভাষা দিবস",
            "Shaheed Day & International Mother Language Day",
            true,
        ),
        HolidayEvent::recurring(8, 2, "আন্তর্জাতিক নারী দিবস", "International Women's Day", false),
        HolidayEvent::recurring(
            17,
            2,
            "বঙ্গবন্ধু শেখ মুজিবুর রহমানের জন্মবার্ষিকী",
            "Birthday of Bangabandhu Sheikh Mujibur Rahman",
            true,
        ),
        HolidayEvent::recurring(25, 2, "গণহত্যা দিবস", "Genocide Remembrance Day", false),
        HolidayEvent::recurring(26, 2, "স্বাধীনতা ও জাতীয় দিবস", "Independence and National Day", true),
        HolidayEvent::recurring(14, 3, "পহেলা বৈশাখ (বাংলা নববর্ষ)", "Pohela Boishakh (Bengali New Year)", true),
        HolidayEvent::recurring(1, 4, "মে দিবস", "May Day", true),
        HolidayEvent::recurring(14, 11, "শহীদ বুদ্ধিজীবী দিবস", "Martyred Intellectuals Day", false),
        HolidayEvent::recurring(16, 11, "বিজয় দিবস", "Victory Day", true),
        HolidayEvent::recurring(25, 11, "বড়দিন", "Christmas Day", true),
        // 2025
        HolidayEvent::dated(2025, 2, 31, "ঈদুল ফিতর", "Eid-ul-Fitr"),
        HolidayEvent::dated(2025, 3, 1, "ঈদুল ফিতর (২য় দিন)", "Eid-ul-Fitr (Day 2)"),
        HolidayEvent::dated(2025, 5, 7, "ঈদুল আযহা", "Eid-ul-Adha"),
        HolidayEvent::dated(2025, 5, 8, "ঈদুল আযহা (২য় দিন)", "Eid-ul-Adha (Day 2)"),
        // 2026
        HolidayEvent::dated(2026, 2, 21, "ঈদুল ফিতর", "Eid-ul-Fitr"),
        HolidayEvent::dated(2026, 2, 22, "ঈদুল ফিতর (২য় দিন)", "Eid-ul-Fitr (Day 2)"),
        HolidayEvent::dated(2026, 4, 27, "ঈদুল আযহা", "Eid-ul-Adha"),
        HolidayEvent::dated(2026, 4, 28, "ঈদুল আযহা (২য় দিন)", "Eid-ul-Adha (Day 2)"),
    ]
}

/// Date-keyed lookup over a fixed list of holidays and observances.
#[derive(Debug, Clone)]
pub struct HolidayCalendarIndex {
    events: Vec<HolidayEvent>,
}

impl Default for HolidayCalendarIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

impl HolidayCalendarIndex {
    pub fn builtin() -> Self {
        Self {
            events: builtin_events(),
        }
    }

    pub fn with_events(events: Vec<HolidayEvent>) -> Self {
        Self { events }
    }

    /// Every event on `day` of zero-based `month` in `year`, in catalog order.
    /// Yearless events match any year. Impossible dates simply match nothing.
    pub fn events_on(&self, day: u32, month: u32, year: i32) -> Vec<&HolidayEvent> {
        self.events
            .iter()
            .filter(|e| e.matches(day, month, year))
            .collect()
    }

    /// Events per day for one month; days without events are absent.
    pub fn month_events(&self, month: u32, year: i32) -> BTreeMap<u32, Vec<&HolidayEvent>> {
        (1..=days_in_month(year, month))
            .filter_map(|day| {
                let events = self.events_on(day, month, year);
                (!events.is_empty()).then_some((day, events))
            })
            .collect()
    }

    pub fn is_holiday(&self, day: u32, month: u32, year: i32) -> bool {
        self.events_on(day, month, year).iter().any(|e| e.is_holiday)
    }
}
