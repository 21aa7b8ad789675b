//! Recording table view for testing.

use uuid::Uuid;

use crate::models::ToDoItem;
use crate::traits::TableView;

/// One call made on the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Rows handed over, by id.
    Reload(Vec<Uuid>),
    EditRow(Uuid),
    CancelEditRow(Uuid),
    ColumnsChanged(bool),
}

/// [`TableView`] that keeps the last snapshot and logs every call.
#[derive(Debug)]
pub struct RecordingTableView {
    rows: Vec<ToDoItem>,
    editing: Option<Uuid>,
    show_creation_date: bool,
    events: Vec<ViewEvent>,
}

impl Default for RecordingTableView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTableView {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            editing: None,
            show_creation_date: true,
            events: Vec::new(),
        }
    }

    /// Last rows received.
    pub fn rows(&self) -> &[ToDoItem] {
        &self.rows
    }

    /// Id of the row in edit mode.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn show_creation_date(&self) -> bool {
        self.show_creation_date
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Number of column re-render requests received.
    pub fn column_renders(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ViewEvent::ColumnsChanged(_)))
            .count()
    }

    /// Number of reloads received.
    pub fn reload_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ViewEvent::Reload(_)))
            .count()
    }
}

impl TableView for RecordingTableView {
    fn reload(&mut self, rows: &[ToDoItem]) {
        self.rows = rows.to_vec();
        self.events
            .push(ViewEvent::Reload(rows.iter().map(|row| row.id).collect()));
    }

    fn edit_row(&mut self, item: &ToDoItem) {
        self.editing = Some(item.id);
        self.events.push(ViewEvent::EditRow(item.id));
    }

    fn cancel_edit_row(&mut self, item: &ToDoItem) {
        if self.editing == Some(item.id) {
            self.editing = None;
        }
        self.events.push(ViewEvent::CancelEditRow(item.id));
    }

    fn columns_changed(&mut self, show_creation_date: bool) {
        self.show_creation_date = show_creation_date;
        self.events.push(ViewEvent::ColumnsChanged(show_creation_date));
    }
}
