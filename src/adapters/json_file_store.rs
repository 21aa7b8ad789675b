//! JSON file store.
//!
//! Persists the whole list as one pretty-printed JSON array. Every mutation
//! is a read-modify-write of that file, serialized by an async mutex.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::ToDoItem;
use crate::traits::ToDoStore;

/// File-backed [`ToDoStore`].
///
/// `list` never fails: unreadable or corrupt files are logged and show up
/// as an empty list. Writes read the file strictly first, so a corrupt file
/// is reported rather than overwritten.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> StoreResult<Vec<ToDoItem>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        let todos: Option<Vec<ToDoItem>> = serde_json::from_str(&json)?;
        Ok(todos.unwrap_or_default())
    }

    async fn write_all(&self, todos: &[ToDoItem]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| StoreError::io(parent, err))?;
            }
        }
        let json = serde_json::to_string_pretty(todos)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|err| StoreError::io(&self.path, err))?;
        debug!("Wrote {} todo(s) to {}", todos.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ToDoStore for JsonFileStore {
    async fn list(&self) -> StoreResult<Vec<ToDoItem>> {
        let _guard = self.lock.lock().await;
        match self.read_all().await {
            Ok(todos) => Ok(todos),
            Err(err) => {
                warn!("Error reading todos: {}", err);
                Ok(Vec::new())
            }
        }
    }

    async fn add(&self, item: &ToDoItem) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut todos = self.read_all().await?;
        todos.push(item.clone());
        self.write_all(&todos).await
    }

    async fn update(&self, item: &ToDoItem) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut todos = self.read_all().await?;
        match todos.iter_mut().find(|t| t.id == item.id) {
            Some(slot) => *slot = item.clone(),
            None => {
                debug!("Update skipped: todo {} not found", item.id);
                return Ok(());
            }
        }
        self.write_all(&todos).await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut todos = self.read_all().await?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            debug!("Delete skipped: todo {} not found", id);
            return Ok(());
        }
        self.write_all(&todos).await
    }
}
