//! The [`KeyValueStore`] abstraction and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::error::{Result, StoreError};

/// Persistent string-keyed, string-valued storage.
///
/// A single `set` or `remove` is atomic; nothing spans multiple keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All keys, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}

/// JSON helpers available on every store, including `dyn KeyValueStore`.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize the value under `key`. A value of the wrong shape
    /// is an error, not `None`; callers decide whether to treat it as absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Json {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Process-wide handle to the store. Each screen holds its own clone.
pub type SharedStore = Arc<Mutex<dyn KeyValueStore + Send>>;

/// Wrap a concrete store for sharing between screens.
pub fn shared<S: KeyValueStore + Send + 'static>(store: S) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Lock the shared store, mapping poisoning to [`StoreError::LockPoisoned`].
pub fn lock(store: &SharedStore) -> Result<MutexGuard<'_, dyn KeyValueStore + Send + 'static>> {
    store.lock().map_err(|_| StoreError::LockPoisoned)
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn().query_row(
            "SELECT value FROM kv_entries WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(other) => Err(StoreError::Sqlite(other)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn()
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT key FROM kv_entries ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)
    }
}

impl Database {
    /// When the value under `key` was last written.
    pub fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let result = self.conn().query_row(
            "SELECT updated_at FROM kv_entries WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(ts) => {
                let parsed = DateTime::parse_from_rfc3339(&ts)?;
                Ok(Some(parsed.with_timezone(&Utc)))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(other) => Err(StoreError::Sqlite(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut db = Database::in_memory().unwrap();

        assert_eq!(db.get("profile_name").unwrap(), None);

        db.set("profile_name", "Ada").unwrap();
        assert_eq!(db.get("profile_name").unwrap().as_deref(), Some("Ada"));

        db.set("profile_name", "Grace").unwrap();
        assert_eq!(db.get("profile_name").unwrap().as_deref(), Some("Grace"));

        db.remove("profile_name").unwrap();
        assert_eq!(db.get("profile_name").unwrap(), None);

        // absent key
        db.remove("profile_name").unwrap();
    }

    #[test]
    fn keys_are_sorted() {
        let mut db = Database::in_memory().unwrap();
        db.set("favorites", "[]").unwrap();
        db.set("albums", "[]").unwrap();
        db.set("captured_photo", "/tmp/a.jpg").unwrap();

        assert_eq!(
            db.keys().unwrap(),
            vec!["albums", "captured_photo", "favorites"]
        );
    }

    #[test]
    fn json_helpers_round_trip_and_reject_bad_shapes() {
        let mut db = Database::in_memory().unwrap();
        db.set_json("favorites", &vec!["1", "3"]).unwrap();

        let favs: Option<Vec<String>> = db.get_json("favorites").unwrap();
        assert_eq!(favs, Some(vec!["1".to_string(), "3".to_string()]));

        db.set("favorites", "{not json").unwrap();
        let err = db.get_json::<Vec<String>>("favorites").unwrap_err();
        assert!(matches!(err, StoreError::Json { ref key, .. } if key == "favorites"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.db");

        {
            let mut db = Database::open_at(&path).unwrap();
            db.set("saved_drawings", r#"["data:image/png;base64,AAA"]"#)
                .unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        assert_eq!(
            db.get("saved_drawings").unwrap().as_deref(),
            Some(r#"["data:image/png;base64,AAA"]"#)
        );
        assert!(db.updated_at("saved_drawings").unwrap().is_some());
        assert!(db.updated_at("missing").unwrap().is_none());
    }

    #[test]
    fn shared_store_works_through_dyn() {
        let store = shared(Database::in_memory().unwrap());
        lock(&store).unwrap().set_json("completed_quests", &["2"]).unwrap();

        let done: Option<Vec<String>> = lock(&store).unwrap().get_json("completed_quests").unwrap();
        assert_eq!(done, Some(vec!["2".to_string()]));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let store = shared(Database::in_memory().unwrap());
        let holder = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.lock().unwrap();
            panic!("writer died mid-update");
        })
        .join();

        assert!(matches!(lock(&store), Err(StoreError::LockPoisoned)));
    }
}
