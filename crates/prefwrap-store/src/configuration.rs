use std::{path::PathBuf, sync::Arc};

use crate::{MemoryStore, SqliteStore, Store, StoreError};

/// Selects the store backing a set of preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfiguration {
    /// A process-local store. Values are lost when the process exits.
    Memory,

    /// A sqlite database, used for durable preferences.
    Sqlite {
        /// The folder holding the database file. It is created if missing.
        folder_path: PathBuf,
        /// The database file name without extension. Different users or apps should use
        /// different names.
        db_name: String,
    },
}

/// Opens the store described by `configuration`.
pub fn open_store(configuration: StoreConfiguration) -> Result<Arc<dyn Store>, StoreError> {
    match configuration {
        StoreConfiguration::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreConfiguration::Sqlite {
            folder_path,
            db_name,
        } => Ok(Arc::new(SqliteStore::open(folder_path, &db_name)?)),
    }
}
