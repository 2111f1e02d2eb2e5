/// Free-form memos
use serde::{Deserialize, Serialize};

use crate::bookmark_data::timestamp_now;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Serialized as a bare JSON array
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct MemoBook {
    pub memos: Vec<Memo>,
}

impl MemoBook {
    pub fn new() -> Self {
        MemoBook { memos: Vec::new() }
    }

    /// Starter memo shown on first run
    pub fn welcome() -> Self {
        let now = timestamp_now();
        MemoBook {
            memos: vec![Memo {
                id: 1,
                title: "Getting started".to_string(),
                content: "- Save bookmarks into folders\n- Drag to reorder\n- Keep a to-do list".to_string(),
                created_at: now.clone(),
                updated_at: now,
            }],
        }
    }

    pub fn get(&self, id: u64) -> Option<&Memo> {
        self.memos.iter().find(|m| m.id == id)
    }

    /// Replace the memo with the same id, or append it as a new memo.
    ///
    /// New memos with id 0 get the next free id. Returns the memo's id.
    pub fn upsert(&mut self, mut memo: Memo) -> u64 {
        let now = timestamp_now();

        if let Some(existing) = self.memos.iter_mut().find(|m| memo.id != 0 && m.id == memo.id) {
            if memo.created_at.is_empty() {
                memo.created_at = existing.created_at.clone();
            }
            memo.updated_at = now;
            *existing = memo;
            return existing.id;
        }

        if memo.id == 0 {
            memo.id = self.memos.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        }
        if memo.created_at.is_empty() {
            memo.created_at = now.clone();
        }
        memo.updated_at = now;

        let id = memo.id;
        self.memos.push(memo);
        id
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let original_len = self.memos.len();
        self.memos.retain(|m| m.id != id);
        self.memos.len() < original_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_memo() {
        let mut book = MemoBook::welcome();

        assert_eq!(book.memos.len(), 1);
        assert_eq!(book.memos[0].created_at, book.memos[0].updated_at);
        assert_eq!(book.upsert(Memo::default()), 2);
    }

    fn memo(id: u64, title: &str) -> Memo {
        Memo {
            id,
            title: title.to_string(),
            content: format!("{} notes", title),
            ..Memo::default()
        }
    }

    #[test]
    fn test_upsert_appends_with_next_id() {
        let mut book = MemoBook::new();

        assert_eq!(book.upsert(memo(0, "first")), 1);
        assert_eq!(book.upsert(memo(0, "second")), 2);

        let second = book.get(2).unwrap();
        assert_eq!(second.title, "second");
        assert!(!second.created_at.is_empty());
        assert_eq!(second.created_at, second.updated_at);
    }

    #[test]
    fn test_upsert_updates_existing() {
        let mut book = MemoBook::new();
        let id = book.upsert(memo(0, "draft"));
        let created_at = book.get(id).unwrap().created_at.clone();

        let returned = book.upsert(Memo {
            content: "rewritten".to_string(),
            ..memo(id, "final")
        });

        assert_eq!(returned, id);
        assert_eq!(book.memos.len(), 1);
        let stored = book.get(id).unwrap();
        assert_eq!(stored.title, "final");
        assert_eq!(stored.content, "rewritten");
        assert_eq!(stored.created_at, created_at);
    }

    #[test]
    fn test_upsert_keeps_explicit_new_id() {
        let mut book = MemoBook::new();
        assert_eq!(book.upsert(memo(42, "imported")), 42);
        assert_eq!(book.upsert(memo(0, "next")), 43);
    }

    #[test]
    fn test_delete() {
        let mut book = MemoBook::new();
        let id = book.upsert(memo(0, "gone"));

        assert!(book.delete(id));
        assert!(!book.delete(id));
        assert!(book.memos.is_empty());
    }
}
