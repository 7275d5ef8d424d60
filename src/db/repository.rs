use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;

// ─── Tracker state ──────────────────────────────────────────────────────────

/// Each tracker key holds one JSON array of day ordinals.
pub struct TrackerRepo;

impl TrackerRepo {
    pub fn get_days(conn: &Connection, key: &str) -> Result<Option<BTreeSet<u8>>> {
        let raw: Option<String> = conn
            .query_row(
                "SELECT days FROM tracker_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(None),
            Some(json) => {
                let days: BTreeSet<u8> = serde_json::from_str(&json)
                    .with_context(|| format!("Decoding tracker state for '{}'", key))?;
                Ok(Some(days))
            }
        }
    }

    pub fn put_days(conn: &Connection, key: &str, days: &BTreeSet<u8>) -> Result<()> {
        let json = serde_json::to_string(days)?;
        conn.execute(
            "INSERT INTO tracker_state (key, days, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET days = ?2, updated_at = datetime('now')",
            params![key, json],
        )?;
        Ok(())
    }

    pub fn clear(conn: &Connection, key: &str) -> Result<()> {
        conn.execute("DELETE FROM tracker_state WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn missing_key_reads_as_none() {
        let conn = conn();
        assert_eq!(TrackerRepo::get_days(&conn, "fasted_days_2026").unwrap(), None);
    }

    #[test]
    fn put_overwrites_whole_set() {
        let conn = conn();
        let key = "fasted_days_2026";
        TrackerRepo::put_days(&conn, key, &BTreeSet::from([1, 2, 3])).unwrap();
        TrackerRepo::put_days(&conn, key, &BTreeSet::from([5])).unwrap();
        assert_eq!(
            TrackerRepo::get_days(&conn, key).unwrap(),
            Some(BTreeSet::from([5]))
        );

        let raw: String = conn
            .query_row("SELECT days FROM tracker_state WHERE key = ?1", params![key], |r| r.get(0))
            .unwrap();
        assert_eq!(raw, "[5]");

        TrackerRepo::clear(&conn, key).unwrap();
        assert_eq!(TrackerRepo::get_days(&conn, key).unwrap(), None);
    }

    #[test]
    fn keys_are_independent() {
        let conn = conn();
        TrackerRepo::put_days(&conn, "fasted_days_2026", &BTreeSet::from([1])).unwrap();
        assert_eq!(TrackerRepo::get_days(&conn, "fasted_days_2027").unwrap(), None);
    }

    #[test]
    fn corrupt_state_is_an_error() {
        let conn = conn();
        conn.execute(
            "INSERT INTO tracker_state (key, days) VALUES ('k', 'not json')",
            [],
        )
        .unwrap();
        assert!(TrackerRepo::get_days(&conn, "k").is_err());
    }
}
