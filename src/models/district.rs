use serde::Serialize;

use crate::models::Language;

/// A district of Bangladesh and its Sehri/Iftar shift relative to Dhaka.
///
/// Positive offsets are later than Dhaka (west of it), negative ones earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct District {
    pub id: &'static str,
    pub name_bn: &'static str,
    pub name_en: &'static str,
    pub offset_minutes: i32,
}

impl District {
    pub const fn new(
        id: &'static str,
        name_bn: &'static str,
        name_en: &'static str,
        offset_minutes: i32,
    ) -> Self {
        Self {
            id,
            name_bn,
            name_en,
            offset_minutes,
        }
    }

    pub fn display_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Bn => self.name_bn,
            Language::En => self.name_en,
        }
    }
}
