//! Terminal table view.
//!
//! [`TodoTable`] is the [`TableView`] the controller drives in the terminal.
//! It keeps a read-only copy of the filtered rows, pages them ten at a
//! time, tracks the selected row and holds the single edit buffer.

use crossterm::event::KeyEvent;
use ratatui::style::{Color, Modifier, Style};
use tracing::debug;
use uuid::Uuid;

use crate::models::ToDoItem;
use crate::traits::TableView;
use crate::ui::input::LineInput;
use crate::ui::theme;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

// ============================================================================
// Row classification
// ============================================================================

/// Visual class of a row, derived from the item on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Pending,
    Completed,
}

impl RowClass {
    pub fn of(item: &ToDoItem) -> Self {
        if item.is_completed {
            RowClass::Completed
        } else {
            RowClass::Pending
        }
    }

    pub fn style(self) -> Style {
        match self {
            RowClass::Pending => Style::default(),
            RowClass::Completed => Style::default()
                .fg(theme::COLOR_COMPLETED)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

// ============================================================================
// Edit buffer
// ============================================================================

/// Field receiving keystrokes in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Description,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::Title => EditField::Description,
            EditField::Description => EditField::Title,
        }
    }
}

/// In-progress edits of one row.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    original: ToDoItem,
    pub title: LineInput,
    pub description: LineInput,
    pub field: EditField,
}

impl EditBuffer {
    pub fn new(item: &ToDoItem) -> Self {
        Self {
            original: item.clone(),
            title: LineInput::with_value(&item.title),
            description: LineInput::with_value(&item.description),
            field: EditField::Title,
        }
    }

    /// Id of the row being edited.
    pub fn id(&self) -> Uuid {
        self.original.id
    }

    /// The row as it was when editing started.
    pub fn original(&self) -> &ToDoItem {
        &self.original
    }

    /// The row with the buffered title and description applied.
    pub fn to_item(&self) -> ToDoItem {
        let mut item = self.original.clone();
        item.title = self.title.value().to_string();
        item.description = self.description.value().to_string();
        item
    }

    /// Input of `field`.
    pub fn input(&self, field: EditField) -> &LineInput {
        match field {
            EditField::Title => &self.title,
            EditField::Description => &self.description,
        }
    }

    /// Route an editing key to the active field.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match self.field {
            EditField::Title => self.title.handle_key(key),
            EditField::Description => self.description.handle_key(key),
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }
}

// ============================================================================
// TodoTable
// ============================================================================

/// Paged grid state.
#[derive(Debug)]
pub struct TodoTable {
    rows: Vec<ToDoItem>,
    /// Index into `rows`; the page follows it.
    selected: usize,
    edit: Option<EditBuffer>,
    show_creation_date: bool,
}

impl Default for TodoTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            edit: None,
            show_creation_date: true,
        }
    }

    pub fn rows(&self) -> &[ToDoItem] {
        &self.rows
    }

    pub fn show_creation_date(&self) -> bool {
        self.show_creation_date
    }

    // ------------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------------

    /// Zero-based page of the selected row.
    pub fn page(&self) -> usize {
        self.selected / PAGE_SIZE
    }

    /// Number of pages; an empty table still has one.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[ToDoItem] {
        let start = (self.page() * PAGE_SIZE).min(self.rows.len());
        let end = (start + PAGE_SIZE).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Index into `rows` of the first row on the current page.
    pub fn page_offset(&self) -> usize {
        self.page() * PAGE_SIZE
    }

    pub fn next_page(&mut self) -> bool {
        if self.page() + 1 >= self.page_count() {
            return false;
        }
        self.selected = (self.page() + 1) * PAGE_SIZE;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page() == 0 {
            return false;
        }
        self.selected = (self.page() - 1) * PAGE_SIZE;
        true
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn selected_index(&self) -> Option<usize> {
        (!self.rows.is_empty()).then_some(self.selected)
    }

    pub fn selected_item(&self) -> Option<&ToDoItem> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the row with `id`. Returns false if it is not shown.
    pub fn select_id(&mut self, id: Uuid) -> bool {
        match self.rows.iter().position(|row| row.id == id) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: Uuid) -> Option<&ToDoItem> {
        self.rows.iter().find(|row| row.id == id)
    }

    // ------------------------------------------------------------------------
    // Edit mode
    // ------------------------------------------------------------------------

    pub fn editing(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditBuffer> {
        self.edit.as_mut()
    }

    pub fn is_editing(&self, id: Uuid) -> bool {
        self.edit.as_ref().is_some_and(|edit| edit.id() == id)
    }
}

impl TableView for TodoTable {
    fn reload(&mut self, rows: &[ToDoItem]) {
        let selected_id = self.selected_item().map(|row| row.id);
        self.rows = rows.to_vec();
        let kept = selected_id.is_some_and(|id| self.select_id(id));
        if !kept {
            self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        }
        // Edit mode ends once its row is no longer shown
        if let Some(id) = self.edit.as_ref().map(EditBuffer::id) {
            if self.find(id).is_none() {
                debug!("Row {} left the view; leaving edit mode", id);
                self.edit = None;
            }
        }
    }

    fn edit_row(&mut self, item: &ToDoItem) {
        self.edit = Some(EditBuffer::new(item));
        self.select_id(item.id);
    }

    fn cancel_edit_row(&mut self, item: &ToDoItem) {
        if self.is_editing(item.id) {
            self.edit = None;
        }
    }

    fn columns_changed(&mut self, show_creation_date: bool) {
        self.show_creation_date = show_creation_date;
    }
}

/// Background of a row given its state.
pub fn row_background(selected: bool, editing: bool) -> Option<Color> {
    if editing {
        Some(theme::COLOR_EDIT_BG)
    } else if selected {
        Some(theme::COLOR_SELECTED_BG)
    } else {
        None
    }
}
