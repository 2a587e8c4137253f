use std::sync::{Arc, OnceLock};

use crate::{MemoryStore, Store, StoreError};

static STANDARD: OnceLock<Arc<dyn Store>> = OnceLock::new();

/// Returns the process-wide standard store.
///
/// This is the store installed with [`install_standard`], or a [`MemoryStore`] if nothing was
/// installed before the first call. Every call returns a handle to the same store.
pub fn standard() -> Arc<dyn Store> {
    Arc::clone(STANDARD.get_or_init(|| Arc::new(MemoryStore::new())))
}

/// Installs `store` as the process-wide standard store.
///
/// Must be called before the first call to [`standard`]. Fails with
/// [`StoreError::StandardAlreadyInstalled`] once the standard store exists.
pub fn install_standard(store: Arc<dyn Store>) -> Result<(), StoreError> {
    STANDARD
        .set(store)
        .map_err(|_| StoreError::StandardAlreadyInstalled)
}
