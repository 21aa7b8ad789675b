//! Search filtering over the authoritative list.
//!
//! The filtered view is always recomputed from scratch; nothing here caches.

use crate::models::ToDoItem;

/// Whether `item` belongs in the view for `term`.
///
/// Blank terms match everything. Otherwise the title or description must
/// contain the term, ignoring case. A draft row always matches so the row
/// being composed never disappears under an unrelated search.
pub fn matches(item: &ToDoItem, term: &str) -> bool {
    if term.trim().is_empty() || item.is_draft() {
        return true;
    }
    let needle = term.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
}

/// Items of `todos` matching `term`, in list order.
pub fn apply_filter(todos: &[ToDoItem], term: &str) -> Vec<ToDoItem> {
    todos
        .iter()
        .filter(|item| matches(item, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ToDoItem> {
        vec![
            ToDoItem::new("Test Todo 1", "Description 1"),
            ToDoItem::new("Test Todo 2", "Description 2"),
            ToDoItem::new("Groceries", "milk, EGGS"),
        ]
    }

    #[test]
    fn test_blank_term_matches_all() {
        let todos = sample();
        assert_eq!(apply_filter(&todos, "").len(), 3);
        assert_eq!(apply_filter(&todos, "   \t").len(), 3);
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let todos = sample();
        assert_eq!(apply_filter(&todos, "test").len(), 2);
        assert_eq!(apply_filter(&todos, "TODO 1").len(), 1);
    }

    #[test]
    fn test_description_match() {
        let todos = sample();
        let hits = apply_filter(&todos, "eggs");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Groceries");
    }

    #[test]
    fn test_no_match() {
        assert!(apply_filter(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_draft_always_matches() {
        let mut todos = sample();
        todos.insert(0, ToDoItem::draft());

        let hits = apply_filter(&todos, "zzz");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_draft());
    }

    #[test]
    fn test_preserves_order() {
        let todos = sample();
        let hits = apply_filter(&todos, "todo");
        assert_eq!(hits[0].title, "Test Todo 1");
        assert_eq!(hits[1].title, "Test Todo 2");
    }

    #[test]
    fn test_term_is_not_trimmed_when_matching() {
        let todos = sample();
        // Leading space is part of the needle: "Todo 1" is preceded by a space.
        assert_eq!(apply_filter(&todos, " todo 1").len(), 1);
        assert!(apply_filter(&todos, "  groceries").is_empty());
    }
}
