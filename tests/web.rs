//! Browser smoke tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use newtab_dashboard::bookmark_data::{create_bookmark, create_folder, Folder};
use newtab_dashboard::dnd::{handle_drag_drop, DragSource, DropPosition, DropTarget};
use newtab_dashboard::storage::{load_folders, save_folders};
use newtab_dashboard::storage::decode;
use newtab_dashboard::ui::bookmarks::begin_drag;
use newtab_dashboard::ui::bridge::{blob_from_js, ChromeStorage};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn timestamps_and_ids_work_in_browser() {
    let folder = create_folder("Work", 0);
    let bookmark = create_bookmark("Docs", "docs.rs", 0);

    assert_eq!(folder.id.to_string().len(), 36);
    assert!(bookmark.created_at.ends_with('Z'));
}

#[wasm_bindgen_test]
fn exported_url_helpers() {
    assert!(newtab_dashboard::is_valid_url("example.com"));
    assert_eq!(newtab_dashboard::format_url("example.com"), "http://example.com");
}

#[wasm_bindgen_test]
async fn local_storage_round_trip() {
    let mut work = create_folder("Work", 0);
    work.bookmarks.push(create_bookmark("Docs", "https://docs.rs", 0));
    let news = create_folder("News", 1);
    let news_id = news.id.to_string();
    let work_id = work.id.to_string();

    let folders = handle_drag_drop(
        &[work, news],
        &DragSource::folder(&news_id),
        &DropTarget::folder(&work_id, DropPosition::Before),
    );
    assert_eq!(folders[0].id, news_id);

    assert!(save_folders(&ChromeStorage, &folders).await);
    assert_eq!(load_folders(&ChromeStorage).await, folders);
}

#[wasm_bindgen_test]
fn raw_array_values_become_blobs() {
    let raw = js_sys::JSON::parse(r#"[{"id":1,"title":"미분류","expanded":true,"bookmarks":[]}]"#).unwrap();

    let blob = blob_from_js("protabs_bookmarks", raw).unwrap().unwrap();
    let folders: Vec<Folder> = decode("protabs_bookmarks", &blob).unwrap();

    assert_eq!(folders[0].id, "1");
    assert!(folders[0].is_uncategorized());
    assert_eq!(blob_from_js("protabs_bookmarks", JsValue::NULL).unwrap(), None);
    assert_eq!(
        blob_from_js("protabs_bookmarks", JsValue::from_str("[]")).unwrap(),
        Some("[]".to_string())
    );
}

#[wasm_bindgen_test]
fn drag_start_attaches_source_id() {
    let transfer = web_sys::DataTransfer::new().unwrap();

    assert!(begin_drag(&transfer, &DragSource::bookmark("b1", "f1")));
    assert_eq!(transfer.get_data("text/plain").unwrap(), "b1");
}
