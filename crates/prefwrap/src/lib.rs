#![doc = include_str!("../README.md")]

// Lets the derive macro refer to `::prefwrap` from inside this crate.
extern crate self as prefwrap;

mod preference;
mod primitive;
mod raw;

pub use prefwrap_macro::RawRepresentable;
pub use prefwrap_store::{
    install_standard, open_store, standard, MemoryStore, SqliteStore, Store, StoreConfiguration,
    StoreError, StoredValue,
};
pub use preference::{Strategy, TypedPreference};
pub use primitive::{Primitive, RawValue};
pub use raw::RawRepresentable;
