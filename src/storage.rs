/// Persistence of dashboard data as JSON blobs in browser storage
///
/// Loads fail soft to defaults and saves report success as a bool; errors are
/// logged and never retried. In-memory state stays authoritative.
use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::bookmark_data::Folder;
use crate::config::{BOOKMARKS_STORAGE_KEY, MEMOS_STORAGE_KEY, TODOS_STORAGE_KEY};
use crate::error::StorageError;
use crate::memos::MemoBook;
use crate::todos::TodoList;

/// Key-value storage of serialized blobs
// Futures are only ever polled on the single browser thread, so no Send bound.
#[allow(async_fn_in_trait)]
pub trait BlobStore {
    async fn get_blob(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set_blob(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Blob store kept in memory, for tests and for running outside the browser
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.blobs.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl BlobStore for MemoryStore {
    async fn get_blob(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    async fn set_blob(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert_raw(key, value);
        Ok(())
    }
}

pub fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })
}

pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(|source| StorageError::Deserialize {
        key: key.to_string(),
        source,
    })
}

/// Load the value under `key`. A missing key seeds storage with the default.
pub async fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: BlobStore,
    T: DeserializeOwned + Serialize + Default,
{
    load_or_seed(store, key, T::default).await
}

/// Load the value under `key`, falling back to `seed()`.
///
/// The seed is written back only when the key was missing; unreadable data is
/// left in place.
pub async fn load_or_seed<S, T, F>(store: &S, key: &str, seed: F) -> T
where
    S: BlobStore,
    T: DeserializeOwned + Serialize,
    F: FnOnce() -> T,
{
    let loaded = match store.get_blob(key).await {
        Ok(Some(raw)) => decode(key, &raw).map(Some),
        Ok(None) => Ok(None),
        Err(e) => Err(e),
    };

    match loaded {
        Ok(Some(value)) => value,
        Ok(None) => {
            log::debug!("No data under {}, writing defaults", key);
            let value = seed();
            save_value(store, key, &value).await;
            value
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", key, e);
            seed()
        }
    }
}

/// Serialize and store the value; false if anything failed
pub async fn save_value<S, T>(store: &S, key: &str, value: &T) -> bool
where
    S: BlobStore,
    T: Serialize + ?Sized,
{
    let result = match encode(key, value) {
        Ok(raw) => store.set_blob(key, &raw).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to save {}: {}", key, e);
            false
        }
    }
}

pub async fn load_folders<S: BlobStore>(store: &S) -> Vec<Folder> {
    load_or_default(store, BOOKMARKS_STORAGE_KEY).await
}

pub async fn save_folders<S: BlobStore>(store: &S, folders: &[Folder]) -> bool {
    save_value(store, BOOKMARKS_STORAGE_KEY, folders).await
}

/// First run starts with a few example to-dos
pub async fn load_todos<S: BlobStore>(store: &S) -> TodoList {
    load_or_seed(store, TODOS_STORAGE_KEY, TodoList::welcome).await
}

pub async fn save_todos<S: BlobStore>(store: &S, todos: &TodoList) -> bool {
    save_value(store, TODOS_STORAGE_KEY, todos).await
}

pub async fn load_memos<S: BlobStore>(store: &S) -> MemoBook {
    load_or_seed(store, MEMOS_STORAGE_KEY, MemoBook::welcome).await
}

pub async fn save_memos<S: BlobStore>(store: &S, memos: &MemoBook) -> bool {
    save_value(store, MEMOS_STORAGE_KEY, memos).await
}
