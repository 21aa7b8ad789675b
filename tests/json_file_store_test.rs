//! File-backed store driven through the controller.

mod common;

use std::sync::Arc;

use common::RecordingTableView;
use tempfile::TempDir;
use todo_tui::adapters::{open_store, JsonFileStore};
use todo_tui::config::{AppConfig, StoreBackend};
use todo_tui::controller::ListController;
use todo_tui::traits::ToDoStore;

const PASCAL_CASE_FILE: &str = r#"[
  {
    "Id": "0b9a4a43-5a3e-4f43-9d7e-2f8f3c1b6a01",
    "Title": "Water plants",
    "Description": "Balcony first",
    "IsCompleted": false,
    "CreationDate": "2024-05-02T08:15:00.0000000+00:00"
  },
  {
    "Id": "0b9a4a43-5a3e-4f43-9d7e-2f8f3c1b6a02",
    "Title": "Pay rent",
    "Description": "",
    "IsCompleted": true,
    "CreationDate": "2024-05-01T18:00:00+00:00"
  }
]"#;

#[tokio::test]
async fn test_reads_existing_pascal_case_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.json");
    std::fs::write(&path, PASCAL_CASE_FILE).unwrap();

    let store = JsonFileStore::new(&path);
    let todos = store.list().await.unwrap();

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].title, "Water plants");
    assert!(todos[1].is_completed);
}

#[tokio::test]
async fn test_controller_changes_persist_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.json");
    std::fs::write(&path, PASCAL_CASE_FILE).unwrap();

    {
        let store = Arc::new(JsonFileStore::new(&path));
        let mut controller = ListController::new(store, RecordingTableView::new());
        controller.refresh().await;

        controller.add_draft();
        let mut draft = controller.todos()[0].clone();
        draft.title = "Fix bike".to_string();
        controller.save_row(draft).await;

        let rent = controller.todos()[1].clone();
        controller.delete_row(rent.id).await;

        let plants = controller.todos()[0].clone();
        controller.toggle_completed(&plants, true).await;
    }

    let reopened = JsonFileStore::new(&path);
    let todos = reopened.list().await.unwrap();
    let titles: Vec<_> = todos.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Water plants", "Fix bike"]);
    assert!(todos[0].is_completed);
    assert!(!todos.iter().any(|t| t.is_draft()));

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"IsCompleted\""));
    assert!(json.contains("\"CreationDate\""));
}

#[tokio::test]
async fn test_corrupt_file_shows_empty_list_and_save_reports_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.json");
    std::fs::write(&path, "[{ broken").unwrap();

    let store = Arc::new(JsonFileStore::new(&path));
    let mut controller = ListController::new(store, RecordingTableView::new());
    controller.refresh().await;
    assert!(controller.todos().is_empty());
    assert!(controller.notice().is_none());

    controller.add_draft();
    let draft = controller.todos()[0].clone();
    controller.save_row(draft).await;

    assert!(controller.notice().is_some());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{ broken");
}

#[tokio::test]
async fn test_open_store_follows_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chosen.json");

    let file_store = open_store(&AppConfig::default().with_data_file(&path));
    file_store
        .add(&todo_tui::models::ToDoItem::new("On disk", ""))
        .await
        .unwrap();
    assert!(path.exists());

    let memory_store = open_store(
        &AppConfig::default()
            .with_data_file(dir.path().join("unused.json"))
            .with_store(StoreBackend::Memory),
    );
    memory_store
        .add(&todo_tui::models::ToDoItem::new("In memory", ""))
        .await
        .unwrap();
    assert!(!dir.path().join("unused.json").exists());
    assert_eq!(memory_store.list().await.unwrap().len(), 1);
}
