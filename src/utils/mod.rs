pub mod digits;
pub mod format;
pub mod labels;

pub use digits::{localize_digits, localize_number};
