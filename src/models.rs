//! Frontend Models
//!
//! Data structures for todo items and the view-level selectors over them.

use serde::{Deserialize, Serialize};

/// Todo identifier (creation timestamp in milliseconds, bumped to stay unique)
pub type TodoId = u64;

/// A single task record, stored as `{"id", "text", "done"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    /// Older records omit this field
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Which items the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Done,
    Undone,
}

impl Filter {
    /// Unrecognized tags show everything
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "done" => Filter::Done,
            "undone" => Filter::Undone,
            _ => Filter::All,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Filter::All => "",
            Filter::Done => "done",
            Filter::Undone => "undone",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Done => item.done,
            Filter::Undone => !item.done,
        }
    }
}

/// What a remove request drops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveMode {
    /// Every completed item
    Done,
    /// The whole list
    All,
    /// The single item with this id
    One(TodoId),
}

impl RemoveMode {
    /// Maps the legacy `(mode, id)` pair: "done", "all", anything else removes one.
    pub fn from_tag(tag: &str, id: TodoId) -> Self {
        match tag {
            "done" => RemoveMode::Done,
            "all" => RemoveMode::All,
            _ => RemoveMode::One(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_tag() {
        assert_eq!(Filter::from_tag("done"), Filter::Done);
        assert_eq!(Filter::from_tag("undone"), Filter::Undone);
        assert_eq!(Filter::from_tag(""), Filter::All);
        assert_eq!(Filter::from_tag("all"), Filter::All);
        assert_eq!(Filter::from_tag("Done"), Filter::All);
    }

    #[test]
    fn test_remove_mode_from_tag() {
        assert_eq!(RemoveMode::from_tag("done", 7), RemoveMode::Done);
        assert_eq!(RemoveMode::from_tag("all", 7), RemoveMode::All);
        assert_eq!(RemoveMode::from_tag("", 7), RemoveMode::One(7));
        assert_eq!(RemoveMode::from_tag("dnoe", 7), RemoveMode::One(7));
    }

    #[test]
    fn test_done_defaults_to_false() {
        let item: TodoItem = serde_json::from_str(r#"{"id":1700000000000,"text":"buy milk"}"#).unwrap();
        assert_eq!(item, TodoItem::new(1_700_000_000_000, "buy milk"));
    }

    #[test]
    fn test_serialized_shape() {
        let mut item = TodoItem::new(3, "walk");
        item.done = true;
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":3,"text":"walk","done":true}"#);
    }
}
