#![doc = include_str!("../README.md")]

/// The dynamically shaped value held by a store.
pub mod value;

/// The key-value contract every store implements.
pub mod store;

mod configuration;
mod error;
mod memory;
mod sqlite;
mod standard;

pub use configuration::{open_store, StoreConfiguration};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use standard::{install_standard, standard};
pub use store::Store;
pub use value::StoredValue;
