/// New Tab Dashboard - Chrome Extension replacing the new tab page
/// Built with Rust + WASM + Yew

pub mod bookmark_data;
pub mod bookmark_store;
pub mod config;
pub mod dnd;
pub mod error;
pub mod memos;
pub mod ordering;
pub mod search;
pub mod storage;
pub mod todos;
pub mod ui;
pub mod url_utils;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
}

// Re-export URL checks for the page's inline scripts
#[wasm_bindgen]
pub fn is_valid_url(url: &str) -> bool {
    url_utils::is_valid_url(url)
}

#[wasm_bindgen]
pub fn format_url(url: &str) -> String {
    url_utils::format_url(url)
}

// Start the Yew app for the new tab page
#[wasm_bindgen]
pub fn start_newtab() {
    log::info!("Starting new tab dashboard");
    yew::Renderer::<ui::newtab::NewTab>::new().render();
}
