//! Viewport trait abstraction.
//!
//! A viewport monitor answers "how wide is the window right now" and pushes
//! every later width change to its subscribers. Subscriptions are explicit
//! handles: once a handle is dropped the monitor forgets it, so a torn-down
//! listener can never be called back.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::mpsc;

/// Trait for window-width sources.
#[async_trait]
pub trait ViewportMonitor: Send + Sync {
    /// Current width in width units.
    async fn current_width(&self) -> u32;

    /// Register for resize notifications.
    ///
    /// Widths published after this call are delivered to the returned
    /// handle until it is dropped or [`ResizeSubscription::unsubscribe`]d.
    fn on_resize(&self) -> ResizeSubscription;
}

#[derive(Debug, Default)]
struct BroadcasterInner {
    next_id: AtomicU64,
    subscribers: Mutex<HashMap<u64, mpsc::UnboundedSender<u32>>>,
}

/// Subscriber registry shared by monitor implementations.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Default, Clone)]
pub struct ResizeBroadcaster {
    inner: Arc<BroadcasterInner>,
}

impl ResizeBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber and hand back its handle.
    pub fn subscribe(&self) -> ResizeSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut subscribers) = self.inner.subscribers.lock() {
            subscribers.insert(id, tx);
        }
        ResizeSubscription {
            id,
            rx,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `width` to every live subscriber.
    ///
    /// Returns the number of subscribers notified.
    pub fn publish(&self, width: u32) -> usize {
        let Ok(mut subscribers) = self.inner.subscribers.lock() else {
            return 0;
        };
        subscribers.retain(|_, tx| tx.send(width).is_ok());
        subscribers.len()
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .map(|subscribers| subscribers.len())
            .unwrap_or(0)
    }
}

/// Cancellable handle to a resize registration.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    rx: mpsc::UnboundedReceiver<u32>,
    registry: Weak<BroadcasterInner>,
}

impl ResizeSubscription {
    /// Wait for the next pushed width.
    ///
    /// Returns `None` once the monitor has gone away.
    pub async fn next(&mut self) -> Option<u32> {
        self.rx.recv().await
    }

    /// Release the registration.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut subscribers) = inner.subscribers.lock() {
                subscribers.remove(&self.id);
            }
        }
    }
}
