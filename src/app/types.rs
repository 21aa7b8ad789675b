//! Type definitions for the application state.

/// Which part of the screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The grid, or the row in edit mode when there is one
    #[default]
    Grid,
    /// The search input
    Search,
}
