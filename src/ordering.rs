/// Presentation order bookkeeping shared by folders and bookmarks
use crate::bookmark_data::{Bookmark, Folder};

/// Items that carry a 0-based presentation index
pub trait Ordered {
    fn order(&self) -> usize;
    fn set_order(&mut self, order: usize);
}

impl Ordered for Folder {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

impl Ordered for Bookmark {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

/// Set each item's order to its position in the slice
pub fn normalize_order<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index);
    }
}

/// Copy of the items stably sorted by their stored order
pub fn sort_by_order<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.order());
    sorted
}

/// Sort folders and their bookmarks by stored order, then renumber densely.
/// Used on freshly loaded blobs whose orders may have gaps or duplicates.
pub fn normalize_folders(folders: &[Folder]) -> Vec<Folder> {
    let mut folders = sort_by_order(folders);
    normalize_order(&mut folders);
    for folder in &mut folders {
        folder.bookmarks = sort_by_order(&folder.bookmarks);
        normalize_order(&mut folder.bookmarks);
    }
    folders
}
