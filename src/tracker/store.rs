use anyhow::Result;
use rusqlite::Connection;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::db;
use crate::db::repository::TrackerRepo;

/// Durable home for a tracker's day set. `save` always receives the full set.
pub trait FastingStore {
    fn load(&self, key: &str) -> Result<BTreeSet<u8>>;
    fn save(&mut self, key: &str, days: &BTreeSet<u8>) -> Result<()>;
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// SQLite-backed store used by the CLI and TUI.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(db::open(path)?))
    }
}

impl FastingStore for SqliteStore {
    fn load(&self, key: &str) -> Result<BTreeSet<u8>> {
        Ok(TrackerRepo::get_days(&self.conn, key)?.unwrap_or_default())
    }

    fn save(&mut self, key: &str, days: &BTreeSet<u8>) -> Result<()> {
        TrackerRepo::put_days(&self.conn, key, days)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        TrackerRepo::clear(&self.conn, key)
    }
}

/// In-process store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, BTreeSet<u8>>,
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(key: &str, days: impl IntoIterator<Item = u8>) -> Self {
        let mut store = Self::new();
        store.records.insert(key.to_string(), days.into_iter().collect());
        store
    }

    pub fn record(&self, key: &str) -> Option<&BTreeSet<u8>> {
        self.records.get(key)
    }
}

impl FastingStore for MemoryStore {
    fn load(&self, key: &str) -> Result<BTreeSet<u8>> {
        Ok(self.records.get(key).cloned().unwrap_or_default())
    }

    fn save(&mut self, key: &str, days: &BTreeSet<u8>) -> Result<()> {
        self.records.insert(key.to_string(), days.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}
