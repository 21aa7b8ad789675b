//! Responsive column policy.

/// Widths above this show the creation-date column.
pub const MOBILE_WIDTH_THRESHOLD: u32 = 640;

/// Tracks whether the creation-date column is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnVisibility {
    show_creation_date: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnVisibility {
    /// Starts visible until a width says otherwise.
    pub fn new() -> Self {
        Self {
            show_creation_date: true,
        }
    }

    pub fn show_creation_date(&self) -> bool {
        self.show_creation_date
    }

    /// Apply a new width.
    ///
    /// Returns `true` only when visibility flipped, i.e. when a re-render
    /// is needed.
    pub fn update(&mut self, width: u32) -> bool {
        let visible = width > MOBILE_WIDTH_THRESHOLD;
        if visible == self.show_creation_date {
            return false;
        }
        self.show_creation_date = visible;
        true
    }
}
