//! Key-value store contract and backends.
//!
//! # Invariants
//! - Keys and values are opaque UTF-8 strings.
//! - `SqliteKeyValueStore` only accepts fully migrated connections.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SLOTS_TABLE: &str = "kv_slots";
const SLOTS_REQUIRED_COLUMNS: &[&str] = &["key", "value", "updated_at"];

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Backend refused the operation (quota, closed handle, ...).
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: expected schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-keyed slot storage, the shape of a browser `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}

/// Process-local store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// SQLite-backed store over the `kv_slots` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` on a foreign schema.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [SLOTS_TABLE],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(StoreError::MissingRequiredTable(SLOTS_TABLE));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({SLOTS_TABLE});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;
    for &required in SLOTS_REQUIRED_COLUMNS {
        if !columns.iter().any(|column| column == required) {
            return Err(StoreError::MissingRequiredColumn {
                table: SLOTS_TABLE,
                column: required,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get_item("a").unwrap(), None);

        store.set_item("a", "1").unwrap();
        store.set_item("a", "2").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove_item("a").unwrap();
        store.remove_item("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn store_is_usable_through_a_reference() {
        fn write_through(store: impl KeyValueStore) {
            store.set_item("k", "v").unwrap();
        }

        let store = MemoryKeyValueStore::new();
        write_through(&store);
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
