//! Keyboard and mouse handling for the App.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use super::{App, Focus};
use crate::ui::interaction::ClickAction;
use crate::ui::{EditField, LineInput};

impl App {
    /// Handle a key press.
    ///
    /// Every handled key marks the app dirty.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        self.needs_redraw = true;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.focus == Focus::Search {
            self.handle_search_key(key);
        } else if self.is_editing() {
            self.handle_edit_key(key).await;
        } else {
            self.handle_grid_key(key).await;
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.focus = Focus::Grid,
            _ => {
                if self.search.handle_key(&key) {
                    let term = self.search.value().to_string();
                    if term != self.controller.search_term() {
                        self.controller.set_search_term(term);
                    }
                }
            }
        }
    }

    async fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.save_edit().await,
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(edit) = self.controller.view_mut().editing_mut() {
                    edit.next_field();
                }
            }
            _ => {
                if let Some(edit) = self.controller.view_mut().editing_mut() {
                    edit.handle_key(&key);
                }
            }
        }
    }

    async fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.controller.dismiss_notice(),
            KeyCode::Char('a') => self.add_todo(),
            KeyCode::Char('/') => self.focus_search(),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    self.edit(&item);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(item) = self.selected_item() {
                    self.delete(&item).await;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(item) = self.selected_item() {
                    self.toggle(&item).await;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.controller.view_mut().select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.controller.view_mut().select_next(),
            KeyCode::PageUp | KeyCode::Char('[') => {
                self.controller.view_mut().prev_page();
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                self.controller.view_mut().next_page();
            }
            _ => {}
        }
    }

    /// Handle a mouse event against the last frame's hit areas.
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    self.perform(action).await;
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.needs_redraw = true;
                }
            }
            MouseEventKind::ScrollDown => {
                self.controller.view_mut().select_next();
                self.needs_redraw = true;
            }
            MouseEventKind::ScrollUp => {
                self.controller.view_mut().select_prev();
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    /// Run the action behind a clicked control.
    pub async fn perform(&mut self, action: ClickAction) {
        debug!("Click on {} ({:?})", action.element_id(), action);
        self.needs_redraw = true;

        match action {
            ClickAction::AddTodo => self.add_todo(),
            ClickAction::FocusSearch => self.focus_search(),
            ClickAction::EditTodo(id) => {
                if let Some(item) = self.table().find(id).cloned() {
                    self.edit(&item);
                }
            }
            ClickAction::DeleteTodo(id) => {
                if let Some(item) = self.table().find(id).cloned() {
                    self.delete(&item).await;
                }
            }
            ClickAction::ToggleCompleted(id) => {
                if let Some(item) = self.table().find(id).cloned() {
                    self.toggle(&item).await;
                }
            }
            ClickAction::SelectRow(id) => {
                self.controller.view_mut().select_id(id);
                self.focus = Focus::Grid;
            }
            ClickAction::SaveTodo => self.save_edit().await,
            ClickAction::CancelEdit => self.cancel_edit(),
            ClickAction::FocusTitle => self.focus_field(EditField::Title),
            ClickAction::FocusDescription => self.focus_field(EditField::Description),
            ClickAction::PrevPage => {
                self.controller.view_mut().prev_page();
            }
            ClickAction::NextPage => {
                self.controller.view_mut().next_page();
            }
            ClickAction::ColumnHeader(_) => {}
        }
    }

    /// Move typing into the search box, picking up the current term.
    fn focus_search(&mut self) {
        if self.search.value() != self.controller.search_term() {
            self.search = LineInput::with_value(self.controller.search_term());
        }
        self.focus = Focus::Search;
    }

    fn focus_field(&mut self, field: EditField) {
        if let Some(edit) = self.controller.view_mut().editing_mut() {
            edit.field = field;
        }
        self.focus = Focus::Grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::models::ToDoItem;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn app_with(items: Vec<ToDoItem>) -> (InMemoryStore, App) {
        let store = InMemoryStore::with_items(items);
        let mut app = App::new(Arc::new(store.clone()));
        app.controller.refresh().await;
        (store, app)
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_even_while_editing() {
        let (_store, mut app) = app_with(vec![]).await;
        app.handle_key(key(KeyCode::Char('a'))).await;
        assert!(app.is_editing());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_q_types_into_edit_buffer() {
        let (_store, mut app) = app_with(vec![]).await;
        app.handle_key(key(KeyCode::Char('a'))).await;
        app.handle_key(key(KeyCode::Char('q'))).await;

        assert!(!app.should_quit);
        assert_eq!(
            app.table().editing().map(|e| e.title.value()),
            Some("New Todoq")
        );
    }

    #[tokio::test]
    async fn test_search_typing_filters() {
        let (_store, mut app) = app_with(vec![
            ToDoItem::new("Buy milk", ""),
            ToDoItem::new("Walk dog", ""),
        ])
        .await;

        app.handle_key(key(KeyCode::Char('/'))).await;
        for c in "MILK".chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
        assert_eq!(app.controller.filtered_todos().len(), 1);

        app.handle_key(key(KeyCode::Backspace)).await;
        assert_eq!(app.controller.search_term(), "MIL");

        app.handle_key(key(KeyCode::Home)).await;
        app.handle_key(key(KeyCode::Delete)).await;
        assert_eq!(app.controller.search_term(), "IL");

        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.focus, Focus::Grid);
    }

    #[tokio::test]
    async fn test_editing_another_row_discards_draft() {
        let (_store, mut app) = app_with(vec![ToDoItem::new("Existing", "")]).await;
        app.add_todo();
        assert!(app.controller.is_adding());

        let existing = app.controller.todos()[1].clone();
        app.perform(ClickAction::EditTodo(existing.id)).await;

        assert!(!app.controller.is_adding());
        assert_eq!(app.controller.todos().len(), 1);
        assert!(app.table().is_editing(existing.id));
    }

    #[tokio::test]
    async fn test_toggle_while_editing_draft_survives_save() {
        let (store, mut app) = app_with(vec![]).await;
        app.add_todo();
        let draft_id = app.controller.todos()[0].id;

        app.perform(ClickAction::ToggleCompleted(draft_id)).await;
        app.perform(ClickAction::SaveTodo).await;

        let added = store.added_items();
        assert_eq!(added.len(), 1);
        assert!(added[0].is_completed);
    }
}
