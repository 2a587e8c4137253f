use std::sync::Arc;

use prefwrap_store::{Store, StoredValue};
use tracing::debug;

use crate::{Primitive, RawRepresentable};

/// How a [`TypedPreference`] maps its value onto the store.
///
/// Fixed when the preference is constructed, by the constructor that was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A primitive stored as-is. Falls back to the default.
    Direct,
    /// An optional primitive. `None` is stored as an absent key.
    DirectNullable,
    /// A [`RawRepresentable`] value stored as its raw value. Falls back to the default.
    RawRepresentable,
    /// An optional [`RawRepresentable`] value. `None` is stored as an absent key.
    RawRepresentableNullable,
}

// Conversions selected by the constructor. An encoded `None` means the key should be removed.
struct Codec<T> {
    decode: fn(StoredValue) -> Option<T>,
    encode: fn(&T) -> Option<StoredValue>,
}

impl<T> Codec<T> {
    fn direct() -> Self
    where
        T: Primitive,
    {
        Codec {
            decode: T::from_stored,
            encode: |value| Some(value.to_stored()),
        }
    }

    fn raw() -> Self
    where
        T: RawRepresentable,
    {
        Codec {
            decode: decode_raw::<T>,
            encode: |value| Some(value.raw_value().to_stored()),
        }
    }
}

impl<T> Codec<Option<T>> {
    fn nullable() -> Self
    where
        T: Primitive,
    {
        Codec {
            decode: |stored| T::from_stored(stored).map(Some),
            encode: |value| value.as_ref().map(T::to_stored),
        }
    }

    fn raw_nullable() -> Self
    where
        T: RawRepresentable,
    {
        Codec {
            decode: |stored| decode_raw::<T>(stored).map(Some),
            encode: |value| value.as_ref().map(|value| value.raw_value().to_stored()),
        }
    }
}

fn decode_raw<T: RawRepresentable>(stored: StoredValue) -> Option<T> {
    T::Raw::from_stored(stored).and_then(T::from_raw_value)
}

/// A typed value stored under a single key.
///
/// Reading never fails: when the key is absent, holds a value of another shape, or holds a raw
/// value with no matching case, [`value`](Self::value) returns the fallback. The fallback is the
/// default given at construction, or `None` for the nullable constructors.
///
/// Construction does not touch the store. Each read and write goes straight to the store, no
/// value is cached.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
///
/// use prefwrap::{MemoryStore, Store, StoredValue, TypedPreference};
///
/// let store = Arc::new(MemoryStore::new());
/// let retry_count = TypedPreference::direct("retry_count", 0_i64, store.clone());
///
/// retry_count.set_value(5);
/// assert_eq!(retry_count.value(), 5);
///
/// store.write("retry_count", StoredValue::String("five".to_string()));
/// assert_eq!(retry_count.value(), 0);
/// ```
pub struct TypedPreference<T> {
    key: String,
    store: Arc<dyn Store>,
    strategy: Strategy,
    fallback: T,
    codec: Codec<T>,
}

impl<T> std::fmt::Debug for TypedPreference<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedPreference")
            .field("key", &self.key)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl<T: Primitive> TypedPreference<T> {
    /// Creates a preference for a primitive value, read as `default` when unset.
    pub fn direct(key: impl Into<String>, default: T, store: Arc<dyn Store>) -> Self {
        Self::with_codec(key, store, Strategy::Direct, default, Codec::direct())
    }
}

impl<T: Primitive> TypedPreference<Option<T>> {
    /// Creates a preference for an optional primitive value, read as `None` when unset.
    pub fn nullable(key: impl Into<String>, store: Arc<dyn Store>) -> Self {
        Self::with_codec(key, store, Strategy::DirectNullable, None, Codec::nullable())
    }
}

impl<T: RawRepresentable> TypedPreference<T> {
    /// Creates a preference for a [`RawRepresentable`] value, read as `default` when unset or
    /// when the stored raw value matches no value of `T`.
    pub fn raw(key: impl Into<String>, default: T, store: Arc<dyn Store>) -> Self {
        Self::with_codec(key, store, Strategy::RawRepresentable, default, Codec::raw())
    }
}

impl<T: RawRepresentable> TypedPreference<Option<T>> {
    /// Creates a preference for an optional [`RawRepresentable`] value, read as `None` when
    /// unset or when the stored raw value matches no value of `T`.
    pub fn raw_nullable(key: impl Into<String>, store: Arc<dyn Store>) -> Self {
        Self::with_codec(
            key,
            store,
            Strategy::RawRepresentableNullable,
            None,
            Codec::raw_nullable(),
        )
    }
}

impl<T> TypedPreference<T> {
    fn with_codec(
        key: impl Into<String>,
        store: Arc<dyn Store>,
        strategy: Strategy,
        fallback: T,
        codec: Codec<T>,
    ) -> Self {
        TypedPreference {
            key: key.into(),
            store,
            strategy,
            fallback,
            codec,
        }
    }

    /// Stores `value`. For nullable preferences, `None` removes the key.
    pub fn set_value(&self, value: T) {
        match (self.codec.encode)(&value) {
            Some(stored) => self.store.write(&self.key, stored),
            None => self.store.delete(&self.key),
        }
    }
}

impl<T: Clone> TypedPreference<T> {
    /// Returns the stored value, or the fallback if there is no usable one.
    pub fn value(&self) -> T {
        let Some(stored) = self.store.read(&self.key) else {
            return self.fallback.clone();
        };

        let kind = stored.kind();
        match (self.codec.decode)(stored) {
            Some(value) => value,
            None => {
                debug!(
                    key = %self.key,
                    strategy = ?self.strategy,
                    stored = kind,
                    "Stored preference is unusable, using fallback"
                );
                self.fallback.clone()
            }
        }
    }
}
