//! Terminal viewport adapter.
//!
//! Reports the terminal width in width units and fans out resize events
//! received by the event loop.

use async_trait::async_trait;
use tracing::warn;

use crate::traits::{ResizeBroadcaster, ResizeSubscription, ViewportMonitor};

/// Column count assumed when the terminal size cannot be read.
const FALLBACK_COLUMNS: u16 = 80;

/// [`ViewportMonitor`] backed by the controlling terminal.
///
/// Widths are `columns * cell_width`, so with the default cell width of 8 a
/// standard 80-column terminal reports 640.
#[derive(Debug, Clone)]
pub struct TerminalViewport {
    broadcaster: ResizeBroadcaster,
    cell_width: u32,
}

impl TerminalViewport {
    pub fn new(cell_width: u32) -> Self {
        Self {
            broadcaster: ResizeBroadcaster::new(),
            cell_width: cell_width.max(1),
        }
    }

    /// Convert a column count to width units.
    pub fn columns_to_width(&self, columns: u16) -> u32 {
        columns as u32 * self.cell_width
    }

    /// Forward a terminal resize to subscribers.
    ///
    /// Returns the number of subscribers notified.
    pub fn handle_resize(&self, columns: u16) -> usize {
        self.broadcaster.publish(self.columns_to_width(columns))
    }

    pub fn subscriber_count(&self) -> usize {
        self.broadcaster.subscriber_count()
    }
}

#[async_trait]
impl ViewportMonitor for TerminalViewport {
    async fn current_width(&self) -> u32 {
        let columns = match crossterm::terminal::size() {
            Ok((columns, _rows)) => columns,
            Err(err) => {
                warn!("Could not read terminal size: {}", err);
                FALLBACK_COLUMNS
            }
        };
        self.columns_to_width(columns)
    }

    fn on_resize(&self) -> ResizeSubscription {
        self.broadcaster.subscribe()
    }
}
