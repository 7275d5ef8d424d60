pub mod fasting;
pub mod store;

pub use fasting::{FastingTracker, TrackerError};
pub use store::{FastingStore, MemoryStore, SqliteStore};
