/// Session state for bookmarks: owns the folder list and applies user edits
///
/// The store never persists by itself. Callers save `folders()` after an edit
/// returns success.
use crate::bookmark_data::{create_bookmark, create_folder, folder_index, get_or_create_uncategorized_folder, Folder};
use crate::dnd::{handle_drag_drop, DragSource, DropTarget};
use crate::error::EditError;
use crate::ordering::{normalize_folders, normalize_order};
use crate::search::search_bookmarks;
use crate::url_utils::{extract_hostname, favicon_url, format_url, is_valid_url};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookmarkStore {
    folders: Vec<Folder>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        BookmarkStore { folders: Vec::new() }
    }

    /// Take over a loaded folder list, repairing any order gaps
    pub fn from_folders(folders: Vec<Folder>) -> Self {
        BookmarkStore {
            folders: normalize_folders(&folders),
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn get_folder(&self, folder_id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == folder_id)
    }

    /// Apply a drop; returns whether the folder list changed
    pub fn apply_drop(&mut self, source: &DragSource, target: &DropTarget) -> bool {
        let next = handle_drag_drop(&self.folders, source, target);
        if next == self.folders {
            false
        } else {
            self.folders = next;
            true
        }
    }

    pub fn add_folder(&mut self, title: &str) -> Result<String, EditError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EditError::EmptyText);
        }

        let folder = create_folder(title, self.folders.len());
        let id = folder.id.to_string();
        self.folders.push(folder);
        Ok(id)
    }

    /// Add a bookmark to a folder, or to the uncategorized folder when `folder_id` is None.
    ///
    /// The URL is stored formatted. A blank title falls back to the hostname.
    pub fn add_bookmark(&mut self, folder_id: Option<&str>, title: &str, url: &str) -> Result<String, EditError> {
        let (title, url) = prepare_bookmark(title, url)?;

        let index = match folder_id {
            Some(id) => folder_index(&self.folders, id).ok_or_else(|| EditError::FolderNotFound(id.to_string()))?,
            None => {
                let (folders, index) = get_or_create_uncategorized_folder(std::mem::take(&mut self.folders));
                self.folders = folders;
                normalize_order(&mut self.folders);
                index
            }
        };

        let folder = &mut self.folders[index];
        let bookmark = create_bookmark(&title, &url, folder.bookmarks.len());
        let id = bookmark.id.to_string();
        folder.bookmarks.push(bookmark);
        Ok(id)
    }

    pub fn update_bookmark(&mut self, folder_id: &str, bookmark_id: &str, title: &str, url: &str) -> Result<(), EditError> {
        let (title, url) = prepare_bookmark(title, url)?;
        let bookmark = self
            .folders
            .iter_mut()
            .find(|f| f.id == folder_id)
            .ok_or_else(|| EditError::FolderNotFound(folder_id.to_string()))?
            .bookmarks
            .iter_mut()
            .find(|b| b.id == bookmark_id)
            .ok_or_else(|| EditError::BookmarkNotFound(bookmark_id.to_string()))?;

        bookmark.favicon_url = favicon_url(&url);
        bookmark.title = title;
        bookmark.url = url;
        Ok(())
    }

    pub fn remove_bookmark(&mut self, folder_id: &str, bookmark_id: &str) -> bool {
        let Some(folder) = self.folders.iter_mut().find(|f| f.id == folder_id) else {
            return false;
        };

        let original_len = folder.bookmarks.len();
        folder.bookmarks.retain(|b| b.id != bookmark_id);
        normalize_order(&mut folder.bookmarks);
        folder.bookmarks.len() < original_len
    }

    pub fn rename_folder(&mut self, folder_id: &str, title: &str) -> Result<(), EditError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EditError::EmptyText);
        }

        self.folders
            .iter_mut()
            .find(|f| f.id == folder_id)
            .map(|folder| {
                folder.title = title.to_string();
            })
            .ok_or_else(|| EditError::FolderNotFound(folder_id.to_string()))
    }

    /// Delete a folder together with its bookmarks
    pub fn remove_folder(&mut self, folder_id: &str) -> bool {
        let original_len = self.folders.len();
        self.folders.retain(|f| f.id != folder_id);
        normalize_order(&mut self.folders);
        self.folders.len() < original_len
    }

    pub fn toggle_folder(&mut self, folder_id: &str) -> bool {
        self.folders
            .iter_mut()
            .find(|f| f.id == folder_id)
            .map(|folder| {
                folder.expanded = !folder.expanded;
            })
            .is_some()
    }

    pub fn search(&self, query: &str) -> Vec<Folder> {
        search_bookmarks(&self.folders, query)
    }
}

fn prepare_bookmark(title: &str, url: &str) -> Result<(String, String), EditError> {
    if !is_valid_url(url) {
        return Err(EditError::InvalidUrl(url.trim().to_string()));
    }

    let url = format_url(url);
    let title = match title.trim() {
        "" => extract_hostname(&url).unwrap_or_else(|| url.clone()),
        title => title.to_string(),
    };
    Ok((title, url))
}
