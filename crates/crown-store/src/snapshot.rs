use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Full dump of the store, serialized to JSON for backup or device transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// RFC-3339 timestamp of when the snapshot was taken
    pub created_at: String,
    /// Crate version that produced the snapshot
    pub version: String,
    pub entries: BTreeMap<String, String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportStats {
    pub entries_written: usize,
    pub entries_replaced: usize,
}

/// Collect every key and value currently in `store`.
pub fn export_snapshot<S: KeyValueStore + ?Sized>(store: &S) -> Result<StoreSnapshot> {
    let mut entries = BTreeMap::new();
    for key in store.keys()? {
        if let Some(value) = store.get(&key)? {
            entries.insert(key, value);
        }
    }

    tracing::info!(entries = entries.len(), "store snapshot exported");

    Ok(StoreSnapshot {
        created_at: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
    })
}

/// Write every entry of `snapshot` back. Existing keys are overwritten; keys
/// absent from the snapshot are left alone.
pub fn import_snapshot<S: KeyValueStore + ?Sized>(
    store: &mut S,
    snapshot: &StoreSnapshot,
) -> Result<ImportStats> {
    let mut stats = ImportStats::default();

    for (key, value) in &snapshot.entries {
        if store.get(key)?.is_some() {
            stats.entries_replaced += 1;
        }
        store.set(key, value)?;
        stats.entries_written += 1;
    }

    tracing::info!(
        written = stats.entries_written,
        replaced = stats.entries_replaced,
        from_version = %snapshot.version,
        "store snapshot imported"
    );

    Ok(stats)
}
