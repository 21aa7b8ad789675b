//! Mock implementations for testing.
//!
//! These doubles let the controller be exercised without a terminal.
//!
//! # Available Mocks
//!
//! - [`MockViewport`] - viewport with scriptable width and resize pushes
//! - [`RecordingTableView`] - table view that records controller calls

pub mod table;
pub mod viewport;

pub use table::{RecordingTableView, ViewEvent};
pub use viewport::MockViewport;
