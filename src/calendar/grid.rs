use chrono::{Datelike, NaiveDate, Weekday};

/// Days in a zero-based `month` of `year`, or 0 when the month is out of range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month > 11 {
        return 0;
    }
    let Some(first) = NaiveDate::from_ymd_opt(year, month + 1, 1) else {
        return 0;
    };
    let next = if month == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)
    };
    next.map(|n| n.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

pub fn first_weekday_of_month(year: i32, month: u32) -> Option<Weekday> {
    if month > 11 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1).map(|d| d.weekday())
}

/// Cells of a Sunday-first month grid: leading `None`s up to the first
/// weekday, then each day of the month.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = first_weekday_of_month(year, month) else {
        return Vec::new();
    };
    let lead = first.num_days_from_sunday() as usize;
    std::iter::repeat_n(None, lead)
        .chain((1..=days_in_month(year, month)).map(Some))
        .collect()
}

/// Step a zero-based (year, month) pair by `delta` months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths_follow_leap_rules() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2026, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2026, 0), 31);
        assert_eq!(days_in_month(2026, 3), 30);
        assert_eq!(days_in_month(2026, 11), 31);
    }

    #[test]
    fn out_of_range_month_is_empty() {
        assert_eq!(days_in_month(2026, 12), 0);
        assert_eq!(first_weekday_of_month(2026, 12), None);
        assert!(month_grid(2026, 40).is_empty());
        assert_eq!(days_in_month(2026, u32::MAX), 0);
    }

    #[test]
    fn first_weekday_matches_known_dates() {
        // 1 February 2026 is a Sunday, 1 March 2026 too, 1 January 2026 a Thursday.
        assert_eq!(first_weekday_of_month(2026, 1), Some(Weekday::Sun));
        assert_eq!(first_weekday_of_month(2026, 2), Some(Weekday::Sun));
        assert_eq!(first_weekday_of_month(2026, 0), Some(Weekday::Thu));
    }

    #[test]
    fn grid_pads_to_first_weekday() {
        let jan = month_grid(2026, 0);
        assert_eq!(&jan[..5], &[None, None, None, None, Some(1)]);
        assert_eq!(jan.len(), 4 + 31);
        assert_eq!(jan.last(), Some(&Some(31)));

        let feb = month_grid(2026, 1);
        assert_eq!(feb.first(), Some(&Some(1)));
        assert_eq!(feb.len(), 28);
    }

    #[test]
    fn shift_month_wraps_years() {
        assert_eq!(shift_month(2026, 0, -1), (2025, 11));
        assert_eq!(shift_month(2025, 11, 1), (2026, 0));
        assert_eq!(shift_month(2026, 5, 0), (2026, 5));
        assert_eq!(shift_month(2026, 5, 25), (2028, 6));
    }
}
