//! Common test utilities for integration tests.
//!
//! Fixtures for seeded stores and controllers, plus helpers for rendering
//! the app into a `TestBackend` and reading the result back as text.

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use todo_tui::app::App;
use todo_tui::controller::ListController;
use todo_tui::models::ToDoItem;
use todo_tui::ui;

/// The two items used across the controller scenarios.
pub fn two_items() -> Vec<ToDoItem> {
    vec![
        ToDoItem::new("Test Todo 1", "Description 1"),
        ToDoItem::new("Test Todo 2", "Description 2").completed(true),
    ]
}

/// `n` pending items titled "Item 0".."Item n-1".
pub fn numbered_items(n: usize) -> Vec<ToDoItem> {
    (0..n)
        .map(|i| ToDoItem::new(format!("Item {}", i), format!("Details {}", i)))
        .collect()
}

/// Controller over a store seeded with `items`, already refreshed.
pub async fn loaded_controller(
    items: Vec<ToDoItem>,
) -> (InMemoryStore, ListController<RecordingTableView>) {
    let store = InMemoryStore::with_items(items);
    let mut controller = ListController::new(Arc::new(store.clone()), RecordingTableView::new());
    controller.refresh().await;
    store.clear_calls();
    (store, controller)
}

/// App over a store seeded with `items`, already refreshed.
pub async fn loaded_app(items: Vec<ToDoItem>) -> (InMemoryStore, App) {
    let store = InMemoryStore::with_items(items);
    let mut app = App::new(Arc::new(store.clone()));
    app.controller.refresh().await;
    store.clear_calls();
    (store, app)
}

/// Render `app` at the given size and return the buffer.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as lines of text.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

/// Whole buffer as one string, lines joined with newlines.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}
