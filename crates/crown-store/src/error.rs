use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value did not match the expected shape.
    #[error("Malformed value under {key:?}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a value for storage failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// Another holder of the shared store panicked mid-write.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Chrono parsing error.
    #[error("Timestamp parse error: {0}")]
    ChronoParse(#[from] chrono::ParseError),

    /// Injected by test doubles and host bridges that cannot reach storage.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
