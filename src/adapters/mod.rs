//! Concrete implementations of trait abstractions.
//!
//! This module provides the adapters a host wires into the list controller.
//!
//! # Adapters
//!
//! - [`JsonFileStore`] - JSON file persistence
//! - [`InMemoryStore`] - process-local persistence with a call journal
//! - [`TerminalViewport`] - terminal width and resize notifications
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockViewport`] - scriptable widths and resize pushes
//! - [`mock::RecordingTableView`] - records every call the controller makes

pub mod json_file_store;
pub mod memory_store;
pub mod mock;
pub mod terminal_viewport;

pub use json_file_store::JsonFileStore;
pub use memory_store::{InMemoryStore, StoreCall};
pub use terminal_viewport::TerminalViewport;

use std::sync::Arc;
use tracing::info;

use crate::config::{AppConfig, StoreBackend};
use crate::traits::ToDoStore;

/// Build the store selected by `config`.
pub fn open_store(config: &AppConfig) -> Arc<dyn ToDoStore> {
    match config.store {
        StoreBackend::File => {
            info!("Using file store at {}", config.data_file.display());
            Arc::new(JsonFileStore::new(config.data_file.clone()))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Arc::new(InMemoryStore::new())
        }
    }
}
