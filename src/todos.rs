//! Todo List Utilities
//!
//! Pure transforms over the todo list. Each mutation returns a fresh snapshot,
//! or `None` when the request changes nothing.

use std::collections::HashSet;

use crate::models::{Filter, RemoveMode, TodoId, TodoItem};

/// Trim user input; blank text is rejected
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Append a new item at the end
pub fn appended(items: &[TodoItem], item: TodoItem) -> Vec<TodoItem> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

/// Flip `done` on the matching item
pub fn toggled(items: &[TodoItem], id: TodoId) -> Option<Vec<TodoItem>> {
    replace_item(items, id, |item| TodoItem {
        done: !item.done,
        ..item.clone()
    })
}

/// Replace the text of the matching item, keeping `done`
pub fn retexted(items: &[TodoItem], id: TodoId, text: &str) -> Option<Vec<TodoItem>> {
    replace_item(items, id, |item| TodoItem {
        text: text.to_string(),
        ..item.clone()
    })
}

fn replace_item(
    items: &[TodoItem],
    id: TodoId,
    replace: impl Fn(&TodoItem) -> TodoItem,
) -> Option<Vec<TodoItem>> {
    if !items.iter().any(|item| item.id == id) {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| if item.id == id { replace(item) } else { item.clone() })
            .collect(),
    )
}

/// Drop items per `mode`, preserving the order of the rest
pub fn removed(items: &[TodoItem], mode: RemoveMode) -> Option<Vec<TodoItem>> {
    let next: Vec<TodoItem> = match mode {
        RemoveMode::All => Vec::new(),
        RemoveMode::Done => items.iter().filter(|item| !item.done).cloned().collect(),
        RemoveMode::One(id) => items.iter().filter(|item| item.id != id).cloned().collect(),
    };
    (next.len() != items.len()).then_some(next)
}

/// Items passing `filter`, in list order
pub fn filtered(items: &[TodoItem], filter: Filter) -> Vec<TodoItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Count of items not yet done
pub fn remaining(items: &[TodoItem]) -> usize {
    items.iter().filter(|item| !item.done).count()
}

/// Keep the first item for each id. Returns the cleaned list and how many were dropped.
pub fn dedupe_ids(items: Vec<TodoItem>) -> (Vec<TodoItem>, usize) {
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<TodoItem> = items.into_iter().filter(|item| seen.insert(item.id)).collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Issues timestamp-derived ids that never repeat.
///
/// An id is the current time in milliseconds, bumped past the last one issued
/// when two adds land in the same millisecond (or the clock steps back).
/// Once the counter reaches `TodoId::MAX` the smallest id free in the list is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: TodoId,
}

impl IdGenerator {
    /// Start above every id already in `items`
    pub fn seeded(items: &[TodoItem]) -> Self {
        Self {
            last: items.iter().map(|item| item.id).max().unwrap_or(0),
        }
    }

    /// `items` must hold every id issued or seeded so far
    pub fn next(&mut self, now_ms: TodoId, items: &[TodoItem]) -> TodoId {
        match self.last.checked_add(1) {
            Some(floor) => {
                let id = now_ms.max(floor);
                self.last = id;
                id
            }
            None => {
                log::warn!("[STORE] Id counter exhausted, reusing a free id");
                smallest_free_id(items)
            }
        }
    }
}

fn smallest_free_id(items: &[TodoItem]) -> TodoId {
    let taken: HashSet<TodoId> = items.iter().map(|item| item.id).collect();
    // A list shorter than TodoId::MAX always leaves a gap
    (1..=TodoId::MAX).find(|id| !taken.contains(id)).unwrap_or(0)
}

/// Wall clock in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> TodoId {
    js_sys::Date::now() as TodoId
}

/// Wall clock in milliseconds
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> TodoId {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as TodoId)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: TodoId, done: bool) -> TodoItem {
        TodoItem {
            id,
            text: format!("Todo {}", id),
            done,
        }
    }

    fn ids(items: &[TodoItem]) -> Vec<TodoId> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  buy milk "), Some("buy milk".to_string()));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text(" \t\n"), None);
    }

    #[test]
    fn test_toggled_twice_restores() {
        let items = vec![make_item(1, false), make_item(2, true)];
        let once = toggled(&items, 2).unwrap();
        assert!(!once[1].done);
        assert_eq!(once[0], items[0]);
        let twice = toggled(&once, 2).unwrap();
        assert_eq!(twice, items);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let items = vec![make_item(1, false)];
        assert!(toggled(&items, 9).is_none());
        assert!(retexted(&items, 9, "x").is_none());
        assert!(removed(&items, RemoveMode::One(9)).is_none());
    }

    #[test]
    fn test_retexted_keeps_done() {
        let items = vec![make_item(1, true)];
        let next = retexted(&items, 1, "renamed").unwrap();
        assert_eq!(next[0].text, "renamed");
        assert!(next[0].done);
        // Source snapshot untouched
        assert_eq!(items[0].text, "Todo 1");
    }

    #[test]
    fn test_removed_modes() {
        let items = vec![
            make_item(1, true),
            make_item(2, false),
            make_item(3, true),
            make_item(4, false),
        ];

        assert!(removed(&items, RemoveMode::All).unwrap().is_empty());
        assert_eq!(ids(&removed(&items, RemoveMode::Done).unwrap()), vec![2, 4]);
        assert_eq!(ids(&removed(&items, RemoveMode::One(2)).unwrap()), vec![1, 3, 4]);
    }

    #[test]
    fn test_removed_nothing_to_drop() {
        assert!(removed(&[], RemoveMode::All).is_none());
        assert!(removed(&[make_item(1, false)], RemoveMode::Done).is_none());
    }

    #[test]
    fn test_filtered() {
        let items = vec![make_item(1, true), make_item(2, false), make_item(3, true)];
        assert_eq!(ids(&filtered(&items, Filter::Done)), vec![1, 3]);
        assert_eq!(ids(&filtered(&items, Filter::Undone)), vec![2]);
        assert_eq!(filtered(&items, Filter::All), items);
    }

    #[test]
    fn test_dedupe_ids_keeps_first() {
        let mut dup = make_item(1, true);
        dup.text = "second".to_string();
        let (kept, dropped) = dedupe_ids(vec![make_item(1, false), make_item(2, false), dup]);
        assert_eq!(dropped, 1);
        assert_eq!(ids(&kept), vec![1, 2]);
        assert_eq!(kept[0].text, "Todo 1");
    }

    #[test]
    fn test_id_generator_same_millisecond() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(1000, &[]), 1000);
        assert_eq!(ids.next(1000, &[]), 1001);
        assert_eq!(ids.next(1000, &[]), 1002);
        // Clock moving backwards still yields a fresh id
        assert_eq!(ids.next(500, &[]), 1003);
        assert_eq!(ids.next(5000, &[]), 5000);
    }

    #[test]
    fn test_id_generator_seeded_above_existing() {
        let items = vec![make_item(10, false), make_item(7_000, false)];
        let mut ids = IdGenerator::seeded(&items);
        assert_eq!(ids.next(100, &items), 7_001);
    }

    #[test]
    fn test_id_generator_exhausted_uses_free_id() {
        let mut items = vec![make_item(TodoId::MAX, false), make_item(1, false)];
        let mut ids = IdGenerator::seeded(&items);

        let id = ids.next(1_000, &items);
        assert_eq!(id, 2);
        items.push(make_item(id, false));

        assert_eq!(ids.next(1_000, &items), 3);
    }
}
