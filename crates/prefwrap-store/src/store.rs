use crate::StoredValue;

/// A persistent key-value store.
///
/// Implementations are shared between many preferences, usually as `Arc<dyn Store>`, and must be
/// usable from any thread. None of the operations report errors: a store that fails internally
/// logs the failure, reads the key as absent and drops the write or delete.
pub trait Store: Send + Sync {
    /// Returns the value stored for `key`, or `None` if there is none.
    fn read(&self, key: &str) -> Option<StoredValue>;

    /// Stores `value` for `key`, replacing any previous value.
    fn write(&self, key: &str, value: StoredValue);

    /// Removes `key` and its value. Removing an absent key is a no-op.
    fn delete(&self, key: &str);
}
