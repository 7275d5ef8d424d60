pub mod district;
pub mod holiday;
pub mod language;
pub mod prayer;
pub mod ramadan;

pub use district::District;
pub use holiday::HolidayEvent;
pub use language::Language;
pub use prayer::{PrayerEvent, PrayerKind};
pub use ramadan::{RAMADAN_DAYS, RamadanDay, RamadanDayResult};
