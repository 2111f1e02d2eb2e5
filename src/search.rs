/// Bookmark search across folders
use crate::bookmark_data::Folder;
use crate::ordering::sort_by_order;

/// Folders holding bookmarks whose title or URL contains the query.
///
/// Matching is case-insensitive on the trimmed query. Each returned folder is
/// expanded and carries only its matching bookmarks, sorted by order. A blank
/// query matches nothing.
pub fn search_bookmarks(folders: &[Folder], query: &str) -> Vec<Folder> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    folders
        .iter()
        .filter_map(|folder| {
            let matching: Vec<_> = folder
                .bookmarks
                .iter()
                .filter(|b| b.title.to_lowercase().contains(&query) || b.url.to_lowercase().contains(&query))
                .cloned()
                .collect();

            if matching.is_empty() {
                None
            } else {
                Some(Folder {
                    expanded: true,
                    bookmarks: sort_by_order(&matching),
                    ..folder.clone()
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark_data::{create_bookmark, create_folder};

    fn fixture() -> Vec<Folder> {
        let mut dev = create_folder("Dev", 0);
        dev.expanded = false;
        dev.bookmarks = vec![
            create_bookmark("Rust Docs", "https://doc.rust-lang.org", 1),
            create_bookmark("Crates", "https://crates.io", 0),
            create_bookmark("rustfmt", "https://github.com/rust-lang/rustfmt", 2),
        ];

        let mut news = create_folder("News", 1);
        news.bookmarks = vec![create_bookmark("BBC", "https://bbc.co.uk", 0)];

        vec![dev, news]
    }

    #[test]
    fn test_search_matches_title_and_url() {
        let results = search_bookmarks(&fixture(), "  RUST ");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dev");
        assert!(results[0].expanded);

        let titles: Vec<&str> = results[0].bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Rust Docs", "rustfmt"]);
    }

    #[test]
    fn test_search_sorts_by_order() {
        let results = search_bookmarks(&fixture(), "https");

        assert_eq!(results.len(), 2);
        let titles: Vec<&str> = results[0].bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Crates", "Rust Docs", "rustfmt"]);
    }

    #[test]
    fn test_search_blank_query() {
        assert!(search_bookmarks(&fixture(), "").is_empty());
        assert!(search_bookmarks(&fixture(), "   ").is_empty());
    }

    #[test]
    fn test_search_no_matches() {
        assert!(search_bookmarks(&fixture(), "python").is_empty());
    }
}
