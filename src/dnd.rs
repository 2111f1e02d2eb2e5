/// Drag-and-drop reordering of folders and bookmarks
///
/// Every drop is reduced to a new folder list by `handle_drag_drop`. The input is
/// never modified: all references are resolved before anything is spliced, and a
/// drop that names an unknown folder or bookmark returns the list unchanged.
use serde::{Deserialize, Serialize};

use crate::bookmark_data::{create_folder, folder_index, Folder};
use crate::ordering::normalize_order;

/// What is being dragged or dropped on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    Bookmark,
}

/// Where the drop lands relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    #[default]
    Inside,
    After,
}

/// The dragged item. For folders `folder_id` is the folder's own id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub kind: ItemKind,
    pub id: String,
    pub folder_id: String,
}

/// The item under the pointer at drop time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub kind: ItemKind,
    pub id: String,
    pub folder_id: String,
    pub position: DropPosition,
}

impl DragSource {
    pub fn folder(id: &str) -> Self {
        DragSource {
            kind: ItemKind::Folder,
            id: id.to_string(),
            folder_id: id.to_string(),
        }
    }

    pub fn bookmark(id: &str, folder_id: &str) -> Self {
        DragSource {
            kind: ItemKind::Bookmark,
            id: id.to_string(),
            folder_id: folder_id.to_string(),
        }
    }
}

impl DropTarget {
    pub fn folder(id: &str, position: DropPosition) -> Self {
        DropTarget {
            kind: ItemKind::Folder,
            id: id.to_string(),
            folder_id: id.to_string(),
            position,
        }
    }

    pub fn bookmark(id: &str, folder_id: &str, position: DropPosition) -> Self {
        DropTarget {
            kind: ItemKind::Bookmark,
            id: id.to_string(),
            folder_id: folder_id.to_string(),
            position,
        }
    }
}

/// True when dropping `source` on `target` can never change anything:
/// the item onto itself, a folder onto one of its own bookmarks, or a
/// bookmark into the folder that already holds it.
pub fn is_self_drop(source: &DragSource, target: &DropTarget) -> bool {
    match (source.kind, target.kind) {
        (ItemKind::Folder, ItemKind::Folder) => source.id == target.id,
        (ItemKind::Folder, ItemKind::Bookmark) => source.id == target.folder_id,
        (ItemKind::Bookmark, ItemKind::Bookmark) => {
            source.id == target.id && source.folder_id == target.folder_id
        }
        (ItemKind::Bookmark, ItemKind::Folder) => {
            target.position == DropPosition::Inside && source.folder_id == target.id
        }
    }
}

/// Drop position from the pointer's vertical offset inside the target element.
///
/// Folder rows: top quarter → before, bottom quarter → after, otherwise inside.
/// Bookmark rows split at half height.
pub fn position_from_pointer(kind: ItemKind, offset_y: f64, height: f64) -> DropPosition {
    match kind {
        ItemKind::Folder => {
            if offset_y < height * 0.25 {
                DropPosition::Before
            } else if offset_y > height * 0.75 {
                DropPosition::After
            } else {
                DropPosition::Inside
            }
        }
        ItemKind::Bookmark => {
            if offset_y < height / 2.0 {
                DropPosition::Before
            } else {
                DropPosition::After
            }
        }
    }
}

/// Apply a drop and return the resulting folder list
pub fn handle_drag_drop(folders: &[Folder], source: &DragSource, target: &DropTarget) -> Vec<Folder> {
    if is_self_drop(source, target) {
        return folders.to_vec();
    }

    let moved = match source.kind {
        ItemKind::Folder => {
            // A bookmark target anchors on its owning folder
            let anchor_id = match target.kind {
                ItemKind::Folder => &target.id,
                ItemKind::Bookmark => &target.folder_id,
            };
            move_folder(folders, &source.id, anchor_id, target.position)
        }
        ItemKind::Bookmark => move_bookmark(folders, source, target),
    };

    match moved {
        Some(mut next) => {
            normalize_order(&mut next);
            next
        }
        None => {
            log::debug!("Ignoring drop of {:?} onto {:?}: unresolved reference", source, target);
            folders.to_vec()
        }
    }
}

/// Move a folder next to the anchor folder. `Inside` places it after the anchor.
fn move_folder(folders: &[Folder], source_id: &str, anchor_id: &str, position: DropPosition) -> Option<Vec<Folder>> {
    let from = folder_index(folders, source_id)?;
    folder_index(folders, anchor_id)?;

    let mut next = folders.to_vec();
    let moved = next.remove(from);

    // Anchor index after the removal shifted everything behind the source
    let anchor = folder_index(&next, anchor_id)?;
    let insert_at = match position {
        DropPosition::Before => anchor,
        DropPosition::Inside | DropPosition::After => anchor + 1,
    };
    next.insert(insert_at, moved);
    Some(next)
}

fn move_bookmark(folders: &[Folder], source: &DragSource, target: &DropTarget) -> Option<Vec<Folder>> {
    let from_folder = folder_index(folders, &source.folder_id)?;
    let from_pos = folders[from_folder].bookmark_index(&source.id)?;

    match target.kind {
        ItemKind::Folder => {
            let to_folder = folder_index(folders, &target.id)?;
            match target.position {
                DropPosition::Inside => move_into_folder(folders, from_folder, from_pos, to_folder),
                DropPosition::Before | DropPosition::After => {
                    Some(split_into_new_folder(folders, from_folder, from_pos, to_folder, target.position))
                }
            }
        }
        ItemKind::Bookmark => {
            let to_folder = folder_index(folders, &target.folder_id)?;
            folders[to_folder].bookmark_index(&target.id)?;
            move_next_to_bookmark(folders, from_folder, from_pos, to_folder, target)
        }
    }
}

/// Append the bookmark to another folder
fn move_into_folder(folders: &[Folder], from_folder: usize, from_pos: usize, to_folder: usize) -> Option<Vec<Folder>> {
    let mut next = folders.to_vec();
    let bookmark = next[from_folder].bookmarks.remove(from_pos);
    next[to_folder].bookmarks.push(bookmark);
    normalize_order(&mut next[to_folder].bookmarks);
    normalize_order(&mut next[from_folder].bookmarks);
    remove_if_disposable(&mut next, from_folder);
    Some(next)
}

/// Wrap the bookmark in a new folder placed at the target folder's edge
fn split_into_new_folder(
    folders: &[Folder],
    from_folder: usize,
    from_pos: usize,
    to_folder: usize,
    position: DropPosition,
) -> Vec<Folder> {
    let mut next = folders.to_vec();
    let anchor_id = next[to_folder].id.to_string();

    let mut bookmark = next[from_folder].bookmarks.remove(from_pos);
    normalize_order(&mut next[from_folder].bookmarks);
    remove_if_disposable(&mut next, from_folder);

    // If the anchor was the emptied source folder, take over its slot
    let insert_at = match folder_index(&next, &anchor_id) {
        Some(anchor) if position == DropPosition::Before => anchor,
        Some(anchor) => anchor + 1,
        None => from_folder,
    };

    bookmark.order = 0;
    let mut folder = create_folder(&bookmark.title, insert_at);
    folder.bookmarks.push(bookmark);
    next.insert(insert_at, folder);
    next
}

/// Insert the bookmark before or after a sibling bookmark, in any folder
fn move_next_to_bookmark(
    folders: &[Folder],
    from_folder: usize,
    from_pos: usize,
    to_folder: usize,
    target: &DropTarget,
) -> Option<Vec<Folder>> {
    let mut next = folders.to_vec();
    let bookmark = next[from_folder].bookmarks.remove(from_pos);

    let siblings = &mut next[to_folder].bookmarks;
    let insert_at = match target.position {
        DropPosition::Inside => siblings.len(),
        DropPosition::Before | DropPosition::After => {
            let anchor = siblings.iter().position(|b| b.id == target.id)?;
            if target.position == DropPosition::Before { anchor } else { anchor + 1 }
        }
    };
    siblings.insert(insert_at, bookmark);
    normalize_order(siblings);

    if from_folder != to_folder {
        normalize_order(&mut next[from_folder].bookmarks);
        remove_if_disposable(&mut next, from_folder);
    }
    Some(next)
}

fn remove_if_disposable(folders: &mut Vec<Folder>, index: usize) -> bool {
    if folders[index].is_disposable() {
        let removed = folders.remove(index);
        log::debug!("Removed empty folder {} ({})", removed.title, removed.id);
        true
    } else {
        false
    }
}
