use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use rusqlite::{Connection, OptionalExtension};
use tracing::{error, warn};

use crate::{Store, StoreError, StoredValue};

const TABLE: &str = "preferences";

/// A durable store persisting values in a sqlite database.
///
/// All values live in a single `preferences` table keyed by preference key. Each value is the
/// JSON encoding of its [`StoredValue`], so the shape survives a round trip through the file.
/// Clones share the same connection.
#[derive(Clone)]
pub struct SqliteStore(Arc<Mutex<Connection>>);

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish()
    }
}

impl SqliteStore {
    /// Opens (or creates) the database `<folder_path>/<db_name>.sqlite`.
    ///
    /// The folder is created if it does not exist yet.
    pub fn open(folder_path: impl AsRef<Path>, db_name: &str) -> Result<Self, StoreError> {
        let folder_path = folder_path.as_ref();
        std::fs::create_dir_all(folder_path)?;

        let connection = Connection::open(folder_path.join(format!("{db_name}.sqlite")))?;
        Self::initialize(connection)
    }

    /// Opens a private database that lives only as long as the store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(connection: Connection) -> Result<Self, StoreError> {
        // Set WAL mode for better concurrency. In-memory databases report "memory" instead.
        connection.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })?;

        connection.execute(
            &format!("CREATE TABLE IF NOT EXISTS {TABLE} (key TEXT PRIMARY KEY, value TEXT NOT NULL)"),
            [],
        )?;

        Ok(SqliteStore(Arc::new(Mutex::new(connection))))
    }

    fn connection(&self) -> Option<MutexGuard<'_, Connection>> {
        match self.0.lock() {
            Ok(connection) => Some(connection),
            Err(_) => {
                error!("SqliteStore connection lock is poisoned");
                None
            }
        }
    }

    fn try_read(connection: &Connection, key: &str) -> Result<Option<String>, StoreError> {
        Ok(connection
            .query_row(
                &format!("SELECT value FROM {TABLE} WHERE key = ?1"),
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?)
    }

    fn try_write(
        connection: &mut Connection,
        key: &str,
        value: &StoredValue,
    ) -> Result<(), StoreError> {
        let value = serde_json::to_string(value)?;

        let transaction = connection.transaction()?;
        transaction.execute(
            &format!("INSERT OR REPLACE INTO {TABLE} (key, value) VALUES (?1, ?2)"),
            rusqlite::params![key, value],
        )?;
        transaction.commit()?;
        Ok(())
    }

    fn try_delete(connection: &mut Connection, key: &str) -> Result<(), StoreError> {
        let transaction = connection.transaction()?;
        transaction.execute(&format!("DELETE FROM {TABLE} WHERE key = ?1"), [key])?;
        transaction.commit()?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn read(&self, key: &str) -> Option<StoredValue> {
        let connection = self.connection()?;

        let json = match Self::try_read(&connection, key) {
            Ok(json) => json?,
            Err(e) => {
                warn!("Failed to read preference '{}': {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Failed to decode stored preference '{}': {:?}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: StoredValue) {
        let Some(mut connection) = self.connection() else {
            return;
        };

        if let Err(e) = Self::try_write(&mut connection, key, &value) {
            warn!("Failed to write preference '{}': {}", key, e);
        }
    }

    fn delete(&self, key: &str) {
        let Some(mut connection) = self.connection() else {
            return;
        };

        if let Err(e) = Self::try_delete(&mut connection, key) {
            warn!("Failed to delete preference '{}': {}", key, e);
        }
    }
}
