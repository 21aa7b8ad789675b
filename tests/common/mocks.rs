//! Mock implementations for test fixtures.
//!
//! Re-exports the crate's doubles and adds a store that records the
//! order of operations across several controllers.

pub use todo_tui::adapters::mock::{MockViewport, RecordingTableView, ViewEvent};
pub use todo_tui::adapters::{InMemoryStore, StoreCall};

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use todo_tui::error::StoreResult;
use todo_tui::models::ToDoItem;
use todo_tui::traits::ToDoStore;
use uuid::Uuid;

/// Store wrapper that tags each call with a label in a shared log.
#[derive(Clone)]
pub struct LabeledStore {
    label: &'static str,
    inner: InMemoryStore,
    log: Arc<Mutex<Vec<String>>>,
}

impl LabeledStore {
    pub fn new(label: &'static str, inner: InMemoryStore, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { label, inner, log }
    }

    fn record(&self, op: &str) {
        self.log.lock().unwrap().push(format!("{}:{}", self.label, op));
    }
}

#[async_trait]
impl ToDoStore for LabeledStore {
    async fn list(&self) -> StoreResult<Vec<ToDoItem>> {
        self.record("list");
        self.inner.list().await
    }

    async fn add(&self, item: &ToDoItem) -> StoreResult<()> {
        self.record("add");
        self.inner.add(item).await
    }

    async fn update(&self, item: &ToDoItem) -> StoreResult<()> {
        self.record("update");
        self.inner.update(item).await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.record("delete");
        self.inner.delete(id).await
    }
}
