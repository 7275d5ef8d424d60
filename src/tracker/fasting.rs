use std::collections::BTreeSet;
use thiserror::Error;

use crate::models::RAMADAN_DAYS;
use crate::tracker::FastingStore;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Ramadan day {0} is out of range (1-30)")]
    OrdinalOutOfRange(u8),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// The set of Ramadan days marked as fasted for one season.
///
/// State is loaded once on `open` and written back in full after every
/// toggle, so what the tracker reports is always what is on disk.
pub struct FastingTracker<S: FastingStore> {
    store: S,
    key: String,
    days: BTreeSet<u8>,
}

impl<S: FastingStore> FastingTracker<S> {
    pub fn open(store: S, key: impl Into<String>) -> Result<Self, TrackerError> {
        let key = key.into();
        let loaded = store.load(&key)?;
        let days: BTreeSet<u8> = loaded.iter().copied().filter(|d| is_valid(*d)).collect();
        if days.len() != loaded.len() {
            log::warn!("Dropped out-of-range days from tracker '{}': {:?}", key, loaded);
        }
        log::debug!("Opened tracker '{}' with {} fasted days", key, days.len());
        Ok(Self { store, key, days })
    }

    /// Flip `ordinal` and persist. Returns whether the day is now fasted.
    pub fn toggle(&mut self, ordinal: u8) -> Result<bool, TrackerError> {
        if !is_valid(ordinal) {
            return Err(TrackerError::OrdinalOutOfRange(ordinal));
        }

        let now_fasted = if self.days.remove(&ordinal) {
            false
        } else {
            self.days.insert(ordinal);
            true
        };

        if let Err(e) = self.store.save(&self.key, &self.days) {
            // Roll back so memory never runs ahead of storage.
            if now_fasted {
                self.days.remove(&ordinal);
            } else {
                self.days.insert(ordinal);
            }
            return Err(e.into());
        }

        log::debug!("Tracker '{}': day {} fasted={}", self.key, ordinal, now_fasted);
        Ok(now_fasted)
    }

    /// Forget every fasted day of this season.
    pub fn reset(&mut self) -> Result<(), TrackerError> {
        self.store.clear(&self.key)?;
        log::debug!("Tracker '{}' cleared ({} days)", self.key, self.days.len());
        self.days.clear();
        Ok(())
    }

    pub fn is_fasted(&self, ordinal: u8) -> bool {
        self.days.contains(&ordinal)
    }

    pub fn fasted_count(&self) -> usize {
        self.days.len()
    }

    /// Fraction of the month fasted, in [0, 1].
    pub fn progress_ratio(&self) -> f64 {
        self.days.len() as f64 / RAMADAN_DAYS as f64
    }

    pub fn fasted_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days.iter().copied()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn is_valid(ordinal: u8) -> bool {
    (1..=RAMADAN_DAYS).contains(&ordinal)
}
