//! Trait abstractions for the list controller's collaborators.
//!
//! The controller never talks to a concrete backend or widget. Each
//! collaborator sits behind one of these traits so hosts can plug in their
//! own implementations and tests can substitute doubles.
//!
//! # Traits
//!
//! - [`ToDoStore`] - CRUD persistence for to-do items
//! - [`ViewportMonitor`] - current width and pushed resize notifications
//! - [`TableView`] - the grid the controller feeds and drives into edit mode

pub mod store;
pub mod table;
pub mod viewport;

pub use store::ToDoStore;
pub use table::TableView;
pub use viewport::{ResizeBroadcaster, ResizeSubscription, ViewportMonitor};
