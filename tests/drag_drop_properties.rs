//! Property-based tests for drag-and-drop reordering.
//!
//! For arbitrary folder layouts and arbitrary drops these check that orders
//! stay dense, bookmarks are moved rather than copied or lost, and only the
//! source folder of a move can disappear.

use std::collections::BTreeSet;

use newtab_dashboard::bookmark_data::{Bookmark, Folder};
use newtab_dashboard::config::UNCATEGORIZED_FOLDER_NAME;
use newtab_dashboard::dnd::{handle_drag_drop, DragSource, DropPosition, DropTarget};
use newtab_dashboard::ordering::normalize_order;
use proptest::prelude::*;
use proptest::sample::Index;

fn build_folders(sizes: &[usize], with_uncategorized: bool) -> Vec<Folder> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| Folder {
            id: format!("f{}", i).into(),
            title: if i == 0 && with_uncategorized {
                UNCATEGORIZED_FOLDER_NAME.to_string()
            } else {
                format!("Folder {}", i)
            },
            expanded: true,
            order: i,
            created_at: String::new(),
            bookmarks: (0..size)
                .map(|j| Bookmark {
                    id: format!("b{}_{}", i, j).into(),
                    title: format!("Bookmark {}.{}", i, j),
                    url: format!("https://site{}-{}.example.com", i, j),
                    favicon_url: String::new(),
                    order: j,
                    created_at: String::new(),
                })
                .collect(),
        })
        .collect()
}

/// Strategy for folder layouts: 1 to 5 folders holding 0 to 4 bookmarks each
fn arb_folders() -> impl Strategy<Value = Vec<Folder>> {
    (prop::collection::vec(0usize..5, 1..6), any::<bool>())
        .prop_map(|(sizes, with_uncategorized)| build_folders(&sizes, with_uncategorized))
}

fn arb_position() -> impl Strategy<Value = DropPosition> {
    prop_oneof![
        Just(DropPosition::Before),
        Just(DropPosition::Inside),
        Just(DropPosition::After),
    ]
}

/// Every bookmark as (folder id, bookmark id)
fn all_bookmarks(folders: &[Folder]) -> Vec<(String, String)> {
    folders
        .iter()
        .flat_map(|f| f.bookmarks.iter().map(move |b| (f.id.to_string(), b.id.to_string())))
        .collect()
}

fn bookmark_ids(folders: &[Folder]) -> BTreeSet<String> {
    all_bookmarks(folders).into_iter().map(|(_, id)| id).collect()
}

fn assert_dense(folders: &[Folder]) -> Result<(), TestCaseError> {
    for (i, folder) in folders.iter().enumerate() {
        prop_assert_eq!(folder.order, i);
        for (j, bookmark) in folder.bookmarks.iter().enumerate() {
            prop_assert_eq!(bookmark.order, j);
        }
    }
    Ok(())
}

/// Pick a drag source and drop target from the layout
fn pick_drop(
    folders: &[Folder],
    drag_bookmark: bool,
    target_bookmark: bool,
    source_pick: Index,
    target_pick: Index,
    position: DropPosition,
) -> (DragSource, DropTarget) {
    let bookmarks = all_bookmarks(folders);

    let source = if drag_bookmark && !bookmarks.is_empty() {
        let (folder_id, id) = source_pick.get(&bookmarks);
        DragSource::bookmark(id, folder_id)
    } else {
        DragSource::folder(&source_pick.get(folders).id.to_string())
    };

    let target = if target_bookmark && !bookmarks.is_empty() {
        let (folder_id, id) = target_pick.get(&bookmarks);
        DropTarget::bookmark(id, folder_id, position)
    } else {
        DropTarget::folder(&target_pick.get(folders).id.to_string(), position)
    };

    (source, target)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn drops_keep_orders_dense(
        folders in arb_folders(),
        drag_bookmark in any::<bool>(),
        target_bookmark in any::<bool>(),
        source_pick in any::<Index>(),
        target_pick in any::<Index>(),
        position in arb_position(),
    ) {
        let (source, target) = pick_drop(&folders, drag_bookmark, target_bookmark, source_pick, target_pick, position);

        let result = handle_drag_drop(&folders, &source, &target);

        assert_dense(&result)?;

        // Renumbering a result is a no-op
        let mut renumbered = result.clone();
        normalize_order(&mut renumbered);
        prop_assert_eq!(renumbered, result);
    }

    #[test]
    fn drops_move_bookmarks_without_loss(
        folders in arb_folders(),
        drag_bookmark in any::<bool>(),
        target_bookmark in any::<bool>(),
        source_pick in any::<Index>(),
        target_pick in any::<Index>(),
        position in arb_position(),
    ) {
        let (source, target) = pick_drop(&folders, drag_bookmark, target_bookmark, source_pick, target_pick, position);

        let result = handle_drag_drop(&folders, &source, &target);

        prop_assert_eq!(all_bookmarks(&result).len(), all_bookmarks(&folders).len());
        prop_assert_eq!(bookmark_ids(&result), bookmark_ids(&folders));
    }

    #[test]
    fn only_emptied_source_folders_disappear(
        folders in arb_folders(),
        drag_bookmark in any::<bool>(),
        target_bookmark in any::<bool>(),
        source_pick in any::<Index>(),
        target_pick in any::<Index>(),
        position in arb_position(),
    ) {
        let (source, target) = pick_drop(&folders, drag_bookmark, target_bookmark, source_pick, target_pick, position);

        let result = handle_drag_drop(&folders, &source, &target);

        for folder in &folders {
            if result.iter().any(|f| f.id == folder.id) {
                continue;
            }
            // A folder may only vanish when its last bookmark was dragged out
            prop_assert_eq!(&folder.id, &source.folder_id);
            prop_assert_eq!(folder.bookmarks.len(), 1);
            prop_assert!(!folder.is_uncategorized());
        }

        // The uncategorized folder survives every drop
        if folders.iter().any(Folder::is_uncategorized) {
            prop_assert!(result.iter().any(Folder::is_uncategorized));
        }
    }

    #[test]
    fn unknown_references_leave_folders_unchanged(
        folders in arb_folders(),
        pick in any::<Index>(),
        position in arb_position(),
    ) {
        let anchor = &pick.get(&folders).id.to_string();

        let missing_source = handle_drag_drop(
            &folders,
            &DragSource::bookmark("missing", anchor),
            &DropTarget::folder(anchor, position),
        );
        prop_assert_eq!(&missing_source, &folders);

        let missing_target = handle_drag_drop(
            &folders,
            &DragSource::folder(anchor),
            &DropTarget::folder("missing", position),
        );
        prop_assert_eq!(&missing_target, &folders);
    }
}
