//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging log consumers into the
//! facade. Subscribers are invoked by the dispatch worker, one notification
//! at a time, in registration order.
//!
//! ## Contract
//! - Invocations happen on the dispatch worker task, strictly after the
//!   triggering log call has returned its formatted line.
//! - A subscriber added or removed between a log call and its delivery
//!   **is** respected: the worker reads the registry at delivery time.
//! - Panics inside a subscriber are contained by the worker (see
//!   [`Config::isolate_panics`](crate::Config::isolate_panics)); they never
//!   reach the publisher.
//!
//! ## Example (skeleton)
//! ```rust
//! use logvisor::{Notification, Subscribe};
//!
//! struct Audit;
//!
//! #[async_trait::async_trait]
//! impl Subscribe for Audit {
//!     async fn on_log(&self, n: &Notification) {
//!         // write audit record...
//!         let _ = (n.line(), n.category());
//!     }
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::records::Notification;

/// Shared handle to a subscriber.
///
/// Registration identity is the `Arc` allocation: pass a clone of the same
/// handle to [`Logger::unsubscribe`](crate::Logger::unsubscribe) to remove
/// the registration made with it.
pub type SubscriberRef = Arc<dyn Subscribe>;

/// Contract for log subscribers.
///
/// Called from the dispatch worker task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits);
/// a slow subscriber delays the rest of the batch and every later batch,
/// since delivery is strictly FIFO.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single notification.
    ///
    /// # Parameters
    /// - `notification`: the rendered line and the category of the
    ///   originating call (does not transfer ownership)
    async fn on_log(&self, notification: &Notification);

    /// Human-readable name (for fault reports).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
