/// Compile-time settings for the new tab dashboard

/// chrome.storage key holding the serialized folder list
pub const BOOKMARKS_STORAGE_KEY: &str = "protabs_bookmarks";

/// chrome.storage key holding the to-do list
pub const TODOS_STORAGE_KEY: &str = "pro_tabs_todos";

/// chrome.storage key holding the memos
pub const MEMOS_STORAGE_KEY: &str = "pro_tabs_memos";

/// Title of the reserved folder that collects bookmarks added without a folder.
/// It is never removed automatically, even when empty.
pub const UNCATEGORIZED_FOLDER_NAME: &str = "미분류";

/// Favicon lookup service, queried with `domain` and `sz` parameters
pub const FAVICON_SERVICE_URL: &str = "https://www.google.com/s2/favicons";

/// Favicon size in pixels
pub const FAVICON_SIZE: u32 = 32;

/// Log level handed to wasm-logger at startup
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
