//! # crown-store
//!
//! Local key-value persistence for the Crown art app.
//!
//! Every screen reads and writes plain string values under a handful of
//! fixed keys.  The crate exposes the [`KeyValueStore`] trait, a SQLite-backed
//! [`Database`] implementation with schema migrations, an in-memory
//! [`MemoryStore`], typed JSON helpers, and snapshot export/import.

pub mod database;
pub mod kv;
pub mod memory;
pub mod migrations;
pub mod models;
pub mod snapshot;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use kv::{lock, shared, KeyValueStore, KeyValueStoreExt, SharedStore};
pub use memory::MemoryStore;
pub use models::*;
