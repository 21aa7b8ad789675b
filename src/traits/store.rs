//! Persistence trait abstraction.
//!
//! Provides the CRUD contract the list controller depends on. Backends
//! (file, in-memory, ...) are chosen by the host at startup.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::ToDoItem;

/// Trait for to-do persistence.
///
/// # Example
///
/// ```ignore
/// use todo_tui::traits::ToDoStore;
///
/// async fn count_open<S: ToDoStore>(store: &S) -> usize {
///     store
///         .list()
///         .await
///         .map(|items| items.iter().filter(|i| !i.is_completed).count())
///         .unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait ToDoStore: Send + Sync {
    /// Load every stored item, in storage order.
    async fn list(&self) -> StoreResult<Vec<ToDoItem>>;

    /// Append a new item. The item already carries its real id.
    async fn add(&self, item: &ToDoItem) -> StoreResult<()>;

    /// Replace the stored item with the same id.
    ///
    /// Unknown ids are a silent no-op.
    async fn update(&self, item: &ToDoItem) -> StoreResult<()>;

    /// Remove the item with the given id.
    ///
    /// Unknown ids are a silent no-op.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
