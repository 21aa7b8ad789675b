//! In-memory store.
//!
//! Keeps the list in process memory. Used for `--memory` runs and as the
//! store double in tests: every call is journaled and reads or writes can
//! be told to fail.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::ToDoItem;
use crate::traits::ToDoStore;

/// One recorded store call.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Add(ToDoItem),
    Update(ToDoItem),
    Delete(Uuid),
}

/// In-memory [`ToDoStore`].
///
/// Clones share the same list and journal, so a test can keep one handle
/// while the controller owns another.
///
/// # Example
///
/// ```ignore
/// use todo_tui::adapters::InMemoryStore;
/// use todo_tui::traits::ToDoStore;
///
/// let store = InMemoryStore::new();
/// store.add(&ToDoItem::new("Water plants", "")).await?;
/// assert_eq!(store.list().await?.len(), 1);
/// assert_eq!(store.added_items().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<Mutex<Vec<ToDoItem>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    list_should_fail: Arc<AtomicBool>,
    write_should_fail: Arc<AtomicBool>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `items`.
    pub fn with_items(items: Vec<ToDoItem>) -> Self {
        let store = Self::new();
        *lock(&store.items) = items;
        store
    }

    /// Configure whether `list` should fail.
    pub fn set_list_should_fail(&self, should_fail: bool) {
        self.list_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Configure whether `add`, `update` and `delete` should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        self.write_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored items.
    pub fn items(&self) -> Vec<ToDoItem> {
        lock(&self.items).clone()
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<StoreCall> {
        lock(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Items passed to `add`, in call order.
    pub fn added_items(&self) -> Vec<ToDoItem> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                StoreCall::Add(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of `update` calls.
    pub fn update_count(&self) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| matches!(call, StoreCall::Update(_)))
            .count()
    }

    /// Ids passed to `delete`, in call order.
    pub fn deleted_ids(&self) -> Vec<Uuid> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                StoreCall::Delete(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: StoreCall) {
        lock(&self.calls).push(call);
    }

    fn check_write(&self) -> StoreResult<()> {
        if self.write_should_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ToDoStore for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<ToDoItem>> {
        self.record(StoreCall::List);
        if self.list_should_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated read failure".to_string()));
        }
        Ok(self.items())
    }

    async fn add(&self, item: &ToDoItem) -> StoreResult<()> {
        self.record(StoreCall::Add(item.clone()));
        self.check_write()?;
        lock(&self.items).push(item.clone());
        Ok(())
    }

    async fn update(&self, item: &ToDoItem) -> StoreResult<()> {
        self.record(StoreCall::Update(item.clone()));
        self.check_write()?;
        if let Some(slot) = lock(&self.items).iter_mut().find(|t| t.id == item.id) {
            *slot = item.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.record(StoreCall::Delete(id));
        self.check_write()?;
        lock(&self.items).retain(|t| t.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_list() {
        let store = InMemoryStore::new();
        let item = ToDoItem::new("Water plants", "");
        store.add(&item).await.unwrap();

        let items = store.list().await.unwrap();
        assert_eq!(items, vec![item.clone()]);
        assert_eq!(store.calls(), vec![StoreCall::Add(item), StoreCall::List]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let existing = ToDoItem::new("Keep", "");
        let store = InMemoryStore::with_items(vec![existing.clone()]);

        store.update(&ToDoItem::new("Ghost", "")).await.unwrap();

        assert_eq!(store.items(), vec![existing]);
        assert_eq!(store.update_count(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let first = ToDoItem::new("First", "");
        let second = ToDoItem::new("Second", "");
        let store = InMemoryStore::with_items(vec![first.clone(), second.clone()]);

        let mut changed = first.clone();
        changed.title = "First (edited)".to_string();
        store.update(&changed).await.unwrap();

        let items = store.items();
        assert_eq!(items[0].title, "First (edited)");
        assert_eq!(items[1], second);
    }

    #[tokio::test]
    async fn test_delete() {
        let item = ToDoItem::new("Gone soon", "");
        let store = InMemoryStore::with_items(vec![item.clone()]);

        store.delete(item.id).await.unwrap();
        store.delete(Uuid::new_v4()).await.unwrap();

        assert!(store.items().is_empty());
        assert_eq!(store.deleted_ids().len(), 2);
    }

    #[tokio::test]
    async fn test_failures() {
        let store = InMemoryStore::with_items(vec![ToDoItem::new("A", "")]);
        store.set_list_should_fail(true);
        assert!(matches!(store.list().await, Err(StoreError::Unavailable(_))));

        store.set_write_should_fail(true);
        let item = ToDoItem::new("B", "");
        assert!(store.add(&item).await.is_err());
        assert!(store.delete(item.id).await.is_err());
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let other = store.clone();
        *lock(&store.items) = vec![ToDoItem::new("Shared", "")];
        assert_eq!(other.items().len(), 1);
    }
}
