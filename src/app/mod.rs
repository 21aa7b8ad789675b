//! Application state for the terminal host.
//!
//! [`App`] wraps the [`ListController`] driving a [`TodoTable`], plus the
//! UI-only state the controller does not care about: focus, hit areas and
//! the redraw/quit flags. Input handling lives in [`handlers`].

mod handlers;
mod types;

pub use types::Focus;

use std::sync::Arc;
use tracing::debug;

use crate::controller::ListController;
use crate::models::ToDoItem;
use crate::traits::{ToDoStore, ViewportMonitor};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::{EditBuffer, LineInput, TodoTable};

/// Terminal application state.
pub struct App {
    pub controller: ListController<TodoTable>,
    pub focus: Focus,
    /// Search box contents; the controller holds the applied term
    pub search: LineInput,
    /// Clickable regions of the last frame
    pub hit_areas: HitAreaRegistry,
    pub should_quit: bool,
    /// Set when the screen is stale
    pub needs_redraw: bool,
}

impl App {
    pub fn new(store: Arc<dyn ToDoStore>) -> Self {
        Self {
            controller: ListController::new(store, TodoTable::new()),
            focus: Focus::Grid,
            search: LineInput::new(),
            hit_areas: HitAreaRegistry::new(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Load the list and hook up the viewport.
    pub async fn start(&mut self, viewport: &dyn ViewportMonitor) {
        self.controller.refresh().await;
        self.controller.attach_viewport(viewport).await;
        self.needs_redraw = true;
    }

    /// Release everything [`start`](Self::start) acquired.
    pub fn shutdown(&mut self) {
        self.controller.teardown();
    }

    pub fn table(&self) -> &TodoTable {
        self.controller.view()
    }

    pub fn is_editing(&self) -> bool {
        self.table().editing().is_some()
    }

    /// Apply a pushed viewport width.
    pub fn on_resize(&mut self, width: u32) {
        if self.controller.set_width(width) {
            self.needs_redraw = true;
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn add_todo(&mut self) {
        if self.controller.add_draft() {
            self.focus = Focus::Grid;
        }
    }

    /// Open `item` for editing, abandoning any other row in edit mode.
    pub fn edit(&mut self, item: &ToDoItem) {
        if let Some(current) = self.editing_original() {
            if current.id == item.id {
                return;
            }
            self.controller.cancel_edit(&current);
        }
        self.controller.edit_row(item);
        self.focus = Focus::Grid;
    }

    pub async fn save_edit(&mut self) {
        let Some(mut item) = self.table().editing().map(EditBuffer::to_item) else {
            return;
        };
        // The checkbox may have been toggled while editing
        if let Some(row) = self.table().find(item.id) {
            item.is_completed = row.is_completed;
        }
        self.controller.save_row(item).await;
    }

    pub fn cancel_edit(&mut self) {
        if let Some(original) = self.editing_original() {
            self.controller.cancel_edit(&original);
        }
    }

    pub async fn delete(&mut self, item: &ToDoItem) {
        if self.table().is_editing(item.id) {
            self.cancel_edit();
            if item.is_draft() {
                return;
            }
        }
        debug!("Deleting todo {}", item.id);
        self.controller.delete_row(item.id).await;
    }

    pub async fn toggle(&mut self, item: &ToDoItem) {
        self.controller
            .toggle_completed(item, !item.is_completed)
            .await;
    }

    pub fn selected_item(&self) -> Option<ToDoItem> {
        self.table().selected_item().cloned()
    }

    fn editing_original(&self) -> Option<ToDoItem> {
        self.table().editing().map(|edit| edit.original().clone())
    }
}
