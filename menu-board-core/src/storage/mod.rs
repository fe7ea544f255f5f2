//! Local key/value persistence.
//!
//! The local backend writes the whole menu as one JSON blob under
//! [`MENU_KEY`], the same shape a browser would keep in `localStorage`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

/// Key under which the full menu state is stored.
pub const MENU_KEY: &str = "menu";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// String key/value persistence.
pub trait StorageAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed [`StorageAdapter`].
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Storage path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(default_path()?)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create the key/value table if it does not exist yet.
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("storage lock poisoned");
        conn.execute_batch(SCHEMA).context("Failed to create storage table")?;
        tracing::debug!("storage schema ready");
        Ok(())
    }
}

impl StorageAdapter for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().expect("storage lock poisoned");
        let value = conn
            .query_row("SELECT value FROM storage WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().expect("storage lock poisoned");
        conn.execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (key, value, Utc::now().to_rfc3339()),
        )?;
        tracing::debug!(key, bytes = value.len(), "storage write");
        Ok(())
    }
}

/// Platform data directory location of the storage file.
pub fn default_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "menu-board")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("menu-board.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> SqliteStorage {
        let storage = SqliteStorage::open_memory().unwrap();
        storage.migrate().unwrap();
        storage
    }

    #[test]
    fn missing_key_reads_as_none() {
        assert_eq!(memory().get(MENU_KEY).unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let storage = memory();
        storage.set(MENU_KEY, "{}").unwrap();
        storage.set(MENU_KEY, r#"{"espresso":[]}"#).unwrap();

        assert_eq!(
            storage.get(MENU_KEY).unwrap().as_deref(),
            Some(r#"{"espresso":[]}"#)
        );
    }

    #[test]
    fn migrate_is_idempotent() {
        let storage = memory();
        storage.set(MENU_KEY, "{}").unwrap();
        storage.migrate().unwrap();

        assert_eq!(storage.get(MENU_KEY).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn unmigrated_storage_rejects_writes() {
        let storage = SqliteStorage::open_memory().unwrap();
        assert!(storage.set(MENU_KEY, "{}").is_err());
    }

    #[test]
    fn file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("menu.db");

        {
            let storage = SqliteStorage::open(path.clone()).unwrap();
            storage.migrate().unwrap();
            storage.set(MENU_KEY, "[1]").unwrap();
        }

        let reopened = SqliteStorage::open(path).unwrap();
        reopened.migrate().unwrap();
        assert_eq!(reopened.get(MENU_KEY).unwrap().as_deref(), Some("[1]"));
    }
}
