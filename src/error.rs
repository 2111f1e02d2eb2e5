/// Error types for the new tab dashboard
use thiserror::Error;

/// Failures while reading or writing browser storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {key}: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage bridge error: {0}")]
    Bridge(String),
}

/// Rejected edits to bookmarks, folders or todos
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("folder not found: {0}")]
    FolderNotFound(String),

    #[error("bookmark not found: {0}")]
    BookmarkNotFound(String),

    #[error("text must not be empty")]
    EmptyText,
}
