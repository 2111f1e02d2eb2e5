/// Data structures for bookmarks and folders
use std::fmt;

use chrono::{Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::UNCATEGORIZED_FOLDER_NAME;
use crate::url_utils::favicon_url;

/// Folder or bookmark id.
///
/// Current ids are UUID strings; older blobs used integers. Each id is written
/// back in the form it was read, and compares against plain strings through
/// its display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Text(String),
    Number(i64),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Text(id) => f.write_str(id),
            Id::Number(id) => write!(f, "{}", id),
        }
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        match self {
            Id::Text(id) => id == other,
            Id::Number(id) => other.parse::<i64>().is_ok_and(|n| n == *id && n.to_string() == other),
        }
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Id {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Id::Text(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id::Text(id.to_string())
    }
}

/// A named, ordered container of bookmarks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: Id,
    pub title: String,
    #[serde(default = "default_expanded")]
    pub expanded: bool,
    #[serde(default)]
    pub order: usize,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

/// A saved link. Its id is unique only within the owning folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Id,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub favicon_url: String,
    #[serde(default)]
    pub order: usize,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl Folder {
    pub fn is_uncategorized(&self) -> bool {
        self.title == UNCATEGORIZED_FOLDER_NAME
    }

    pub fn bookmark_index(&self, bookmark_id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == bookmark_id)
    }

    /// Empty folders other than the uncategorized one are dropped after a move
    pub fn is_disposable(&self) -> bool {
        self.bookmarks.is_empty() && !self.is_uncategorized()
    }
}

fn default_expanded() -> bool {
    true
}

/// Current time as an RFC 3339 UTC string with millisecond precision
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Like `timestamp_now`, shifted back by whole days
pub fn timestamp_days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn generate_id() -> Id {
    Id::Text(Uuid::new_v4().to_string())
}

pub fn create_folder(title: &str, order: usize) -> Folder {
    Folder {
        id: generate_id(),
        title: title.to_string(),
        expanded: true,
        order,
        created_at: timestamp_now(),
        bookmarks: Vec::new(),
    }
}

pub fn create_bookmark(title: &str, url: &str, order: usize) -> Bookmark {
    Bookmark {
        id: generate_id(),
        title: title.to_string(),
        url: url.to_string(),
        favicon_url: favicon_url(url),
        order,
        created_at: timestamp_now(),
    }
}

pub fn folder_index(folders: &[Folder], folder_id: &str) -> Option<usize> {
    folders.iter().position(|f| f.id == folder_id)
}

/// Find the uncategorized folder, appending a new one when absent.
///
/// Returns the collection to use from now on together with the folder's index.
pub fn get_or_create_uncategorized_folder(mut folders: Vec<Folder>) -> (Vec<Folder>, usize) {
    if let Some(index) = folders.iter().position(Folder::is_uncategorized) {
        return (folders, index);
    }

    let next_order = folders.iter().map(|f| f.order + 1).max().unwrap_or(0);
    folders.push(create_folder(UNCATEGORIZED_FOLDER_NAME, next_order));
    let index = folders.len() - 1;
    (folders, index)
}
