use crate::models::Language;

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Replace ASCII digits with Bengali numerals when `lang` is Bengali.
///
/// This is a post-formatting pass over an already rendered string; every
/// other character, separators included, is left as is.
pub fn localize_digits(s: &str, lang: Language) -> String {
    match lang {
        Language::En => s.to_string(),
        Language::Bn => s
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    BENGALI_DIGITS[(c as u8 - b'0') as usize]
                } else {
                    c
                }
            })
            .collect(),
    }
}

/// Render a number and localize its digits in one go.
pub fn localize_number<T: std::fmt::Display>(n: T, lang: Language) -> String {
    localize_digits(&n.to_string(), lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_identity() {
        for s in ["", "05:12 AM", "abc 123", "১২:০০"] {
            assert_eq!(localize_digits(s, Language::En), s);
        }
    }

    #[test]
    fn bengali_replaces_only_ascii_digits() {
        assert_eq!(localize_digits("05:12 AM", Language::Bn), "০৫:১২ AM");
        assert_eq!(localize_digits("0123456789", Language::Bn), "০১২৩৪৫৬৭৮৯");
        assert_eq!(localize_digits("Day 3, 2026", Language::Bn), "Day ৩, ২০২৬");
    }

    #[test]
    fn bengali_is_idempotent() {
        let once = localize_digits("07:10 PM", Language::Bn);
        assert_eq!(localize_digits(&once, Language::Bn), once);
    }

    #[test]
    fn localize_number_formats_then_localizes() {
        assert_eq!(localize_number(30, Language::Bn), "৩০");
        assert_eq!(localize_number(-7, Language::En), "-7");
    }
}
