//! List controller: the authoritative list and its add/edit/save state machine.
//!
//! This module contains [`ListController`] and the pure helpers it derives
//! its views from:
//! - [`filter`] - search filtering
//! - [`columns`] - responsive creation-date column policy
//!
//! Every mutating operation ends by re-reading the store, so the displayed
//! list always reflects whatever the backend actually kept.

pub mod columns;
pub mod filter;

pub use columns::{ColumnVisibility, MOBILE_WIDTH_THRESHOLD};
pub use filter::apply_filter;

use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::Notice;
use crate::models::{ToDoItem, DRAFT_ID};
use crate::traits::{ResizeSubscription, TableView, ToDoStore, ViewportMonitor};

/// Owns the to-do list and drives a [`TableView`].
pub struct ListController<V: TableView> {
    store: Arc<dyn ToDoStore>,
    view: V,
    /// Authoritative list.
    todos: Vec<ToDoItem>,
    /// Derived from `todos` and `search_term`; never edited directly.
    filtered: Vec<ToDoItem>,
    search_term: String,
    /// Set while a draft row is being composed.
    is_adding: bool,
    columns: ColumnVisibility,
    resize: Option<ResizeSubscription>,
    notice: Option<Notice>,
}

impl<V: TableView> ListController<V> {
    pub fn new(store: Arc<dyn ToDoStore>, view: V) -> Self {
        Self {
            store,
            view,
            todos: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            is_adding: false,
            columns: ColumnVisibility::new(),
            resize: None,
            notice: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The authoritative list.
    pub fn todos(&self) -> &[ToDoItem] {
        &self.todos
    }

    /// The list as currently displayed.
    pub fn filtered_todos(&self) -> &[ToDoItem] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Whether a draft is in flight (the add action is disabled).
    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    pub fn show_creation_date(&self) -> bool {
        self.columns.show_creation_date()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Last store failure, if not yet dismissed.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Whether a resize subscription is held.
    pub fn is_attached(&self) -> bool {
        self.resize.is_some()
    }

    fn has_draft(&self) -> bool {
        self.todos.iter().any(ToDoItem::is_draft)
    }

    fn apply_filter(&mut self) {
        self.filtered = apply_filter(&self.todos, &self.search_term);
    }

    // ========================================================================
    // List operations
    // ========================================================================

    /// Reload the list from the store and re-render.
    ///
    /// A failed read shows an empty list. A draft in progress survives the
    /// reload and stays at the head.
    pub async fn refresh(&mut self) {
        let mut todos = match self.store.list().await {
            Ok(todos) => {
                if matches!(self.notice, Some(Notice::LoadFailed(_))) {
                    self.notice = None;
                }
                todos
            }
            Err(err) => {
                warn!("Failed to load todos: {}", err);
                self.notice = Some(Notice::LoadFailed(err.to_string()));
                Vec::new()
            }
        };

        let stored = todos.len();
        todos.retain(|item| !item.is_draft());
        if todos.len() != stored {
            debug!("Dropped {} stored item(s) carrying the draft id", stored - todos.len());
        }
        if let Some(draft) = self.todos.iter().find(|item| item.is_draft()).cloned() {
            todos.insert(0, draft);
        }

        self.todos = todos;
        self.apply_filter();
        self.view.reload(&self.filtered);
    }

    /// Insert a draft at the head of the list and open it for editing.
    ///
    /// Returns `false` without doing anything while another draft is in
    /// flight.
    pub fn add_draft(&mut self) -> bool {
        if self.is_adding || self.has_draft() {
            debug!("add_draft ignored: a draft is already in flight");
            return false;
        }
        self.is_adding = true;

        let draft = ToDoItem::draft();
        self.todos.insert(0, draft.clone());
        self.apply_filter();
        self.view.reload(&self.filtered);
        self.view.edit_row(&draft);
        debug!("Draft created");
        true
    }

    /// Open an existing row for editing.
    pub fn edit_row(&mut self, item: &ToDoItem) {
        debug!("Editing todo {}", item.id);
        self.view.edit_row(item);
    }

    /// Commit the edited row.
    ///
    /// A draft gets a fresh id, is added to the store and moves to the tail.
    /// Any other row is updated in place. Either way the list is re-read,
    /// edit mode ends and the add action is re-enabled.
    pub async fn save_row(&mut self, mut item: ToDoItem) {
        let row = item.clone();

        if item.is_draft() {
            item.id = Uuid::new_v4();
            match self.store.add(&item).await {
                Ok(()) => info!("Added todo {}", item.id),
                Err(err) => {
                    error!("Failed to add todo {}: {}", item.id, err);
                    self.notice = Some(Notice::SaveFailed(err.to_string()));
                }
            }
            self.todos.retain(|t| !t.is_draft() && t.id != item.id);
            self.todos.push(item.clone());
            self.apply_filter();
        } else {
            match self.store.update(&item).await {
                Ok(()) => info!("Updated todo {}", item.id),
                Err(err) => {
                    error!("Failed to update todo {}: {}", item.id, err);
                    self.notice = Some(Notice::SaveFailed(err.to_string()));
                }
            }
        }

        self.refresh().await;
        self.view.cancel_edit_row(&row);
        self.is_adding = false;
        self.view.reload(&self.filtered);
    }

    /// Abandon editing. A draft is discarded without touching the store.
    pub fn cancel_edit(&mut self, item: &ToDoItem) {
        if item.is_draft() {
            self.todos.retain(|t| !t.is_draft());
            self.apply_filter();
            self.view.reload(&self.filtered);
            debug!("Draft discarded");
        }
        self.view.cancel_edit_row(item);
        self.is_adding = false;
    }

    /// Delete a row from the store and re-read the list.
    ///
    /// The draft id never reaches the store; deleting it discards the draft.
    pub async fn delete_row(&mut self, id: Uuid) {
        if id == DRAFT_ID {
            if let Some(draft) = self.todos.iter().find(|t| t.is_draft()).cloned() {
                self.cancel_edit(&draft);
            }
            return;
        }

        match self.store.delete(id).await {
            Ok(()) => info!("Deleted todo {}", id),
            Err(err) => {
                error!("Failed to delete todo {}: {}", id, err);
                self.notice = Some(Notice::DeleteFailed(err.to_string()));
            }
        }
        self.refresh().await;
    }

    /// Set the completed flag, persist it and re-read the list.
    pub async fn toggle_completed(&mut self, item: &ToDoItem, value: bool) {
        let mut item = item.clone();
        item.is_completed = value;
        if let Some(local) = self.todos.iter_mut().find(|t| t.id == item.id) {
            local.is_completed = value;
        }

        if item.is_draft() {
            self.apply_filter();
            self.view.reload(&self.filtered);
            return;
        }

        if let Err(err) = self.store.update(&item).await {
            error!("Failed to update todo {}: {}", item.id, err);
            self.notice = Some(Notice::SaveFailed(err.to_string()));
        }
        self.refresh().await;
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Replace the search term and recompute the view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filter();
        self.view.reload(&self.filtered);
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Subscribe to resize notifications, then read the current width once.
    pub async fn attach_viewport(&mut self, monitor: &dyn ViewportMonitor) {
        self.resize = Some(monitor.on_resize());
        let width = monitor.current_width().await;
        info!("Viewport attached (width={})", width);
        self.set_width(width);
    }

    /// Wait for the next resize notification.
    ///
    /// Never resolves while no viewport is attached.
    pub async fn next_resize(&mut self) -> Option<u32> {
        let width = match self.resize.as_mut() {
            Some(subscription) => subscription.next().await,
            None => std::future::pending().await,
        };
        if width.is_none() {
            warn!("Viewport monitor went away; resize notifications stopped");
            self.resize = None;
        }
        width
    }

    /// Apply a width. Returns `true` when column visibility changed.
    pub fn set_width(&mut self, width: u32) -> bool {
        if !self.columns.update(width) {
            return false;
        }
        let visible = self.columns.show_creation_date();
        debug!("Creation date column visible={} (width={})", visible, width);
        self.view.columns_changed(visible);
        true
    }

    /// Release the resize subscription.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.resize.take() {
            subscription.unsubscribe();
            info!("Viewport detached");
        }
    }
}
