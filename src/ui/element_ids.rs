//! Stable identifiers for the interactive surface.
//!
//! Every clickable region carries one of these, so tests can find the add
//! button or a row's delete action without knowing screen coordinates.

pub const ADD_TODO_BUTTON: &str = "add-todo-button";
pub const SAVE_TODO_BUTTON: &str = "save-todo-button";
pub const CANCEL_EDIT_BUTTON: &str = "cancel-edit-button";
pub const EDIT_TODO_BUTTON: &str = "edit-todo-button";
pub const DELETE_TODO_BUTTON: &str = "delete-todo-button";
pub const SEARCH_TODO_INPUT: &str = "search-todo-input";
pub const TODO_GRID: &str = "todo-grid";
pub const EDIT_TITLE_INPUT: &str = "edit-title-input";
pub const EDIT_DESCRIPTION_INPUT: &str = "edit-description-input";
/// Per-column header cell.
pub const COLUMN_TITLE: &str = "column-title";
