/// UI module exports
pub mod bookmarks;
pub mod bridge;
pub mod components;
pub mod memos;
pub mod newtab;
pub mod todos;
