use unicode_width::UnicodeWidthStr;

use crate::models::Language;
use crate::utils::digits::localize_digits;

/// Format a span of minutes as "Xh Ym" or "Ym"
pub fn format_duration_mins(mins: i64, lang: Language) -> String {
    if mins <= 0 {
        return match lang {
            Language::Bn => "এখন".to_string(),
            Language::En => "now".to_string(),
        };
    }
    let hours = mins / 60;
    let minutes = mins % 60;
    let s = match (lang, hours > 0) {
        (Language::Bn, true) => format!("{} ঘণ্টা {} মিনিট", hours, minutes),
        (Language::Bn, false) => format!("{} মিনিট", minutes),
        (Language::En, true) => format!("{}h {}m", hours, minutes),
        (Language::En, false) => format!("{}m", minutes),
    };
    localize_digits(&s, lang)
}

/// Format a district offset as "+3 min" / "-6 min" / "0 min"
pub fn format_offset(minutes: i32, lang: Language) -> String {
    let sign = if minutes > 0 { "+" } else { "" };
    let unit = match lang {
        Language::Bn => "মিনিট",
        Language::En => "min",
    };
    localize_digits(&format!("{}{} {}", sign, minutes, unit), lang)
}

pub fn format_percent(ratio: f64, lang: Language) -> String {
    localize_digits(&format!("{}%", (ratio * 100.0).round() as i64), lang)
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Right-pad to a terminal column width. Bengali conjuncts make byte and
/// char counts useless for alignment.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_display_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formats_hours_and_minutes() {
        assert_eq!(format_duration_mins(0, Language::En), "now");
        assert_eq!(format_duration_mins(45, Language::En), "45m");
        assert_eq!(format_duration_mins(135, Language::En), "2h 15m");
        assert_eq!(format_duration_mins(135, Language::Bn), "২ ঘণ্টা ১৫ মিনিট");
    }

    #[test]
    fn offset_carries_explicit_plus() {
        assert_eq!(format_offset(7, Language::En), "+7 min");
        assert_eq!(format_offset(-6, Language::En), "-6 min");
        assert_eq!(format_offset(0, Language::Bn), "০ মিনিট");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(15, 30, 10), "█████░░░░░");
        assert_eq!(progress_bar(30, 30, 4), "████");
        assert_eq!(progress_bar(0, 0, 3), "░░░");
    }

    #[test]
    fn pad_display_uses_terminal_width() {
        assert_eq!(pad_display("ab", 4), "ab  ");
        assert_eq!(pad_display("abcdef", 4), "abcdef");
        assert_eq!(pad_display_left("7", 3), "  7");
    }
}
