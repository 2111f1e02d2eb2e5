/// Browser storage bridge: chrome.storage.sync, or localStorage outside the extension
use wasm_bindgen::prelude::*;

use crate::error::StorageError;
use crate::storage::BlobStore;

// Import JS bridge functions
#[wasm_bindgen(module = "/newtab.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: &str) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeStorage;

/// Turn a stored value into a JSON blob.
///
/// Older versions stored arrays directly instead of JSON strings; those are
/// read through serde-wasm-bindgen and re-encoded.
pub fn blob_from_js(key: &str, value: JsValue) -> Result<Option<String>, StorageError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    if let Some(raw) = value.as_string() {
        return Ok(Some(raw));
    }

    let parsed: serde_json::Value = serde_wasm_bindgen::from_value(value)
        .map_err(|e| StorageError::Bridge(format!("Failed to read {}: {:?}", key, e)))?;
    crate::storage::encode(key, &parsed).map(Some)
}

impl BlobStore for ChromeStorage {
    async fn get_blob(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = getStorage(key)
            .await
            .map_err(|e| StorageError::Bridge(format!("Failed to get {}: {:?}", key, e)))?;

        blob_from_js(key, value)
    }

    async fn set_blob(&self, key: &str, value: &str) -> Result<(), StorageError> {
        setStorage(key, value)
            .await
            .map_err(|e| StorageError::Bridge(format!("Failed to save {}: {:?}", key, e)))
    }
}
