//! SQLite-backed option store

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::{schema, OptionStore};
use crate::errors::{ReviewError, Result};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create option store directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)?;
        conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))?;
        debug!(path = %path.display(), "opened option store");
        Self::with_connection(conn)
    }

    /// Store that lives only as long as the returned value
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Default location: `<data dir>/review-me/options.db`
    pub fn default_path() -> Result<PathBuf> {
        let data = dirs::data_dir()
            .ok_or_else(|| ReviewError::Other("Could not determine data directory".into()))?;
        Ok(data.join("review-me").join("options.db"))
    }

    fn conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| ReviewError::Other("option store lock poisoned".into()))
    }
}

impl OptionStore for SqliteStore {
    fn get_timestamp(&self, key: &str) -> Result<Option<i64>> {
        let conn = self.conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM options WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_timestamp(&self, key: &str, value: i64) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO options (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get_timestamp("wrm_x").unwrap(), None);

        store.set_timestamp("wrm_x", 1_700_000_000).unwrap();
        assert_eq!(store.get_timestamp("wrm_x").unwrap(), Some(1_700_000_000));

        store.set_timestamp("wrm_x", 1_700_000_500).unwrap();
        assert_eq!(store.get_timestamp("wrm_x").unwrap(), Some(1_700_000_500));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("options.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set_timestamp("wrm_persist", 123).unwrap();
        }

        assert!(path.exists());
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get_timestamp("wrm_persist").unwrap(), Some(123));
    }

    #[test]
    fn test_default_path_shape() {
        if let Ok(path) = SqliteStore::default_path() {
            assert!(path.ends_with("review-me/options.db"));
        }
    }
}
