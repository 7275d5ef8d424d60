use crate::models::{District, Language, PrayerEvent, PrayerKind};
use crate::prayer_times::{ClockTime, ReferenceTimes};
use crate::utils::labels::prayer_name;
use crate::utils::localize_digits;

/// Shift every reference time by the district offset, in display order.
pub fn shifted_times(district: &District, reference: &ReferenceTimes) -> Vec<(PrayerKind, ClockTime)> {
    PrayerKind::ALL
        .iter()
        .map(|&kind| {
            let time = reference.get(kind).add_minutes(district.offset_minutes as i64);
            (kind, time)
        })
        .collect()
}

/// Today's schedule for `district`: Sehri, Fajr, Sunrise, Dhuhr, Asr,
/// Maghrib, Iftar, Isha. Names and digits follow `lang`.
pub fn build_schedule(
    district: &District,
    lang: Language,
    reference: &ReferenceTimes,
) -> Vec<PrayerEvent> {
    shifted_times(district, reference)
        .into_iter()
        .map(|(kind, time)| PrayerEvent {
            kind,
            name: prayer_name(kind, lang).to_string(),
            time: localize_digits(&time.to_string(), lang),
            highlighted: kind.is_fasting_boundary(),
        })
        .collect()
}

/// Returns (next event, minutes until it). Once Isha has passed the next
/// event is tomorrow's Sehri.
pub fn next_event(
    district: &District,
    reference: &ReferenceTimes,
    now: ClockTime,
) -> (PrayerKind, i64) {
    let times = shifted_times(district, reference);

    let upcoming = times
        .iter()
        .filter(|(_, t)| *t > now)
        .min_by_key(|(_, t)| *t);

    match upcoming {
        Some((kind, time)) => (*kind, now.minutes_until(*time)),
        None => {
            let (kind, time) = times
                .iter()
                .min_by_key(|(_, t)| *t)
                .copied()
                .unwrap_or((PrayerKind::Sehri, reference.sehri));
            (kind, now.minutes_until(time))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::districts::find_district;
    use crate::prayer_times::Season;

    fn reference() -> ReferenceTimes {
        Season::builtin().unwrap().reference
    }

    #[test]
    fn schedule_has_fixed_order_and_highlights() {
        for id in ["dhaka", "chattogram", "thakurgaon"] {
            for lang in [Language::Bn, Language::En] {
                let events = build_schedule(find_district(id), lang, &reference());
                let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
                assert_eq!(kinds, PrayerKind::ALL.to_vec());
                for e in &events {
                    assert_eq!(
                        e.highlighted,
                        matches!(e.kind, PrayerKind::Sehri | PrayerKind::Iftar)
                    );
                }
            }
        }
    }

    #[test]
    fn dhaka_schedule_uses_reference_times() {
        let events = build_schedule(find_district("dhaka"), Language::En, &reference());
        let times: Vec<_> = events.iter().map(|e| e.time.as_str()).collect();
        assert_eq!(
            times,
            [
                "05:10 AM", "05:15 AM", "06:38 AM", "12:15 PM", "04:05 PM", "05:50 PM",
                "05:52 PM", "07:10 PM"
            ]
        );
        assert_eq!(events[0].name, "Sehri");
    }

    #[test]
    fn bengali_schedule_localizes_names_and_digits() {
        let district = find_district("chattogram");
        let events = build_schedule(district, Language::Bn, &reference());
        assert_eq!(events[0].name, "সেহরি");
        // Chattogram is six minutes ahead of Dhaka.
        assert_eq!(district.offset_minutes, -6);
        assert_eq!(events[0].time, "০৫:০৪ AM");
        assert!(events.iter().all(|e| !e.time.chars().any(|c| c.is_ascii_digit())));
    }

    #[test]
    fn next_event_before_dawn_and_after_isha() {
        let dhaka = find_district("dhaka");
        let r = reference();

        let early = ClockTime::parse("04:10 AM").unwrap();
        assert_eq!(next_event(dhaka, &r, early), (PrayerKind::Sehri, 60));

        let afternoon = ClockTime::parse("05:51 PM").unwrap();
        assert_eq!(next_event(dhaka, &r, afternoon), (PrayerKind::Iftar, 1));

        let night = ClockTime::parse("11:10 PM").unwrap();
        assert_eq!(next_event(dhaka, &r, night), (PrayerKind::Sehri, 360));
    }
}
