use thiserror::Error;

/// Errors raised by the stores in this crate.
///
/// Only opening and installing stores returns them. The [`Store`](crate::Store) operations never
/// fail; stores log the errors they meet internally instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The sqlite database could not be opened or initialized.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// A value could not be encoded for storage. Logged by [`SqliteStore`](crate::SqliteStore)
    /// writes, never returned.
    #[error("Failed to serialize stored value: {0}")]
    Json(#[from] serde_json::Error),

    /// The folder holding the database could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The standard store was already installed or handed out.
    #[error("The standard store has already been initialized")]
    StandardAlreadyInstalled,
}
