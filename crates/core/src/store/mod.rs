//! Durable key-value storage for first-seen timestamps

use std::{collections::HashMap, sync::Mutex};

use crate::errors::{ReviewError, Result};

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;

/// Host-provided option storage keyed by arbitrary strings
pub trait OptionStore: Send + Sync {
    fn get_timestamp(&self, key: &str) -> Result<Option<i64>>;

    fn set_timestamp(&self, key: &str, value: i64) -> Result<()>;
}

/// In-process store; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: i64) -> Self {
        let store = Self::default();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.into(), value);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OptionStore for MemoryStore {
    fn get_timestamp(&self, key: &str) -> Result<Option<i64>> {
        let values = self
            .values
            .lock()
            .map_err(|_| ReviewError::Other("option store lock poisoned".into()))?;
        Ok(values.get(key).copied())
    }

    fn set_timestamp(&self, key: &str, value: i64) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| ReviewError::Other("option store lock poisoned".into()))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
