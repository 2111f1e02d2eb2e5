//! Property-based tests for the folder persistence adapter.
//!
//! Saving then loading returns the same folders, and saving what was just
//! loaded leaves the stored blob semantically unchanged. Blobs from older
//! releases keep their numeric ids and only gain explicit orders.

use futures::executor::block_on;
use newtab_dashboard::bookmark_data::{create_bookmark, create_folder, Folder};
use newtab_dashboard::config::BOOKMARKS_STORAGE_KEY;
use newtab_dashboard::storage::{load_folders, save_folders, MemoryStore};
use proptest::prelude::*;

/// Strategy for folder titles, including the reserved uncategorized name
fn arb_title() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("미분류".to_string()),
        "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
    ]
}

fn arb_url() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{2,10}", prop_oneof![Just(".com"), Just(".io"), Just(".co.uk")])
        .prop_map(|(host, tld)| format!("https://{}{}", host, tld))
}

fn arb_folders() -> impl Strategy<Value = Vec<Folder>> {
    prop::collection::vec(
        (arb_title(), any::<bool>(), prop::collection::vec((arb_title(), arb_url()), 0..4)),
        0..5,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (title, expanded, bookmarks))| {
                let mut folder = create_folder(&title, i);
                folder.expanded = expanded;
                folder.bookmarks = bookmarks
                    .iter()
                    .enumerate()
                    .map(|(j, (title, url))| create_bookmark(title, url, j))
                    .collect();
                folder
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn save_then_load_returns_same_folders(folders in arb_folders()) {
        let store = MemoryStore::new();

        prop_assert!(block_on(save_folders(&store, &folders)));
        prop_assert_eq!(block_on(load_folders(&store)), folders);
    }

    #[test]
    fn save_of_load_keeps_blob(folders in arb_folders()) {
        let store = MemoryStore::new();
        block_on(save_folders(&store, &folders));
        let before: serde_json::Value =
            serde_json::from_str(&store.raw(BOOKMARKS_STORAGE_KEY).unwrap()).unwrap();

        let loaded = block_on(load_folders(&store));
        prop_assert!(block_on(save_folders(&store, &loaded)));

        let after: serde_json::Value =
            serde_json::from_str(&store.raw(BOOKMARKS_STORAGE_KEY).unwrap()).unwrap();
        prop_assert_eq!(before, after);
    }
}

/// Blob as written by releases that used numeric ids and kept no orders or timestamps
const LEGACY_BLOB: &str = r#"[
    {"id": 1, "title": "미분류", "expanded": true, "bookmarks": [
        {"id": 7, "title": "Google", "url": "https://google.com"},
        {"id": 8, "title": "Docs", "url": "https://docs.rs", "faviconUrl": "https://www.google.com/s2/favicons?domain=docs.rs&sz=32"}
    ]},
    {"id": 2, "title": "Work", "expanded": false, "bookmarks": []}
]"#;

#[test]
fn legacy_blob_keeps_ids_and_only_gains_orders() {
    let store = MemoryStore::new();
    store.insert_raw(BOOKMARKS_STORAGE_KEY, LEGACY_BLOB);

    let loaded = block_on(load_folders(&store));
    assert!(block_on(save_folders(&store, &loaded)));

    let after: serde_json::Value =
        serde_json::from_str(&store.raw(BOOKMARKS_STORAGE_KEY).unwrap()).unwrap();
    let expected = serde_json::json!([
        {"id": 1, "title": "미분류", "expanded": true, "order": 0, "bookmarks": [
            {"id": 7, "title": "Google", "url": "https://google.com", "order": 0},
            {"id": 8, "title": "Docs", "url": "https://docs.rs", "order": 0,
             "faviconUrl": "https://www.google.com/s2/favicons?domain=docs.rs&sz=32"}
        ]},
        {"id": 2, "title": "Work", "expanded": false, "order": 0, "bookmarks": []}
    ]);
    assert_eq!(after, expected);

    // Once migrated, the blob is stable
    let reloaded = block_on(load_folders(&store));
    assert!(block_on(save_folders(&store, &reloaded)));
    let again: serde_json::Value =
        serde_json::from_str(&store.raw(BOOKMARKS_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(again, after);
}

#[test]
fn legacy_ids_resolve_in_drops() {
    use newtab_dashboard::dnd::{handle_drag_drop, DragSource, DropPosition, DropTarget};

    let store = MemoryStore::new();
    store.insert_raw(BOOKMARKS_STORAGE_KEY, LEGACY_BLOB);
    let folders = block_on(load_folders(&store));

    let result = handle_drag_drop(
        &folders,
        &DragSource::bookmark("8", "1"),
        &DropTarget::folder("2", DropPosition::Inside),
    );

    assert_eq!(result[1].bookmarks[0].id, "8");
    assert!(block_on(save_folders(&store, &result)));
    let saved: serde_json::Value =
        serde_json::from_str(&store.raw(BOOKMARKS_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(saved[1]["bookmarks"][0]["id"], serde_json::json!(8));
}
