//! Screen controllers.
//!
//! Each screen owns its state, reads the store when mounted and writes only
//! its own keys.  Screens never call each other.

pub mod albums;
pub mod camera;
pub mod catalog;
pub mod drawing;
pub mod profile;
pub mod quests;

use crown_store::{lock, KeyValueStoreExt, SharedStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Read a JSON value, treating an absent key, a malformed value or a storage
/// failure as "no data". Failures are logged.
pub(crate) fn read_or_default<T>(store: &SharedStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let result = lock(store).and_then(|guard| guard.get_json::<T>(key));
    match result {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "failed to load stored value, using default");
            T::default()
        }
    }
}

/// Persist a JSON value. Failures are logged and reported as `false`; the
/// caller's in-memory state stays authoritative for this session.
pub(crate) fn write_best_effort<T>(store: &SharedStore, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
{
    let result = lock(store).and_then(|mut guard| guard.set_json(key, value));
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(key, error = %e, "failed to persist value");
            false
        }
    }
}
