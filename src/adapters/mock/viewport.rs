//! Mock viewport for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::traits::{ResizeBroadcaster, ResizeSubscription, ViewportMonitor};

/// Viewport with a scriptable width.
///
/// # Example
///
/// ```ignore
/// use todo_tui::adapters::mock::MockViewport;
///
/// let viewport = MockViewport::new(1024);
/// controller.attach_viewport(&viewport).await;
///
/// // Push a resize to every subscriber
/// viewport.resize(500);
/// ```
#[derive(Debug, Clone)]
pub struct MockViewport {
    width: Arc<AtomicU32>,
    queries: Arc<AtomicUsize>,
    broadcaster: ResizeBroadcaster,
}

impl MockViewport {
    /// Create a viewport reporting `width`.
    pub fn new(width: u32) -> Self {
        Self {
            width: Arc::new(AtomicU32::new(width)),
            queries: Arc::new(AtomicUsize::new(0)),
            broadcaster: ResizeBroadcaster::new(),
        }
    }

    /// Change the reported width without notifying anyone.
    pub fn set_width(&self, width: u32) {
        self.width.store(width, Ordering::SeqCst);
    }

    /// Change the width and push it to subscribers.
    ///
    /// Returns the number of subscribers notified.
    pub fn resize(&self, width: u32) -> usize {
        self.set_width(width);
        self.broadcaster.publish(width)
    }

    pub fn subscriber_count(&self) -> usize {
        self.broadcaster.subscriber_count()
    }

    /// How many times `current_width` was called.
    pub fn width_queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewportMonitor for MockViewport {
    async fn current_width(&self) -> u32 {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.width.load(Ordering::SeqCst)
    }

    fn on_resize(&self) -> ResizeSubscription {
        self.broadcaster.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_current_width_counts_queries() {
        let viewport = MockViewport::new(700);
        assert_eq!(viewport.current_width().await, 700);
        viewport.set_width(300);
        assert_eq!(viewport.current_width().await, 300);
        assert_eq!(viewport.width_queries(), 2);
    }

    #[test]
    fn test_resize_without_subscribers() {
        let viewport = MockViewport::new(700);
        assert_eq!(viewport.resize(500), 0);
    }
}
