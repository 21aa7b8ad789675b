//! Grid view trait abstraction.

use crate::models::ToDoItem;

/// The grid that renders the filtered list.
///
/// The controller pushes snapshots and edit-mode changes through this
/// trait; the view never mutates the list it is given. Structural changes
/// flow back through the controller's operations.
pub trait TableView {
    /// Replace the displayed rows and re-render.
    fn reload(&mut self, rows: &[ToDoItem]);

    /// Put the row for `item` into edit mode.
    fn edit_row(&mut self, item: &ToDoItem);

    /// Leave edit mode for the row for `item`.
    fn cancel_edit_row(&mut self, item: &ToDoItem);

    /// The creation-date column was shown or hidden.
    fn columns_changed(&mut self, show_creation_date: bool);
}
