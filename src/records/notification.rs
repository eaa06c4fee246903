//! # Delivered notifications.
//!
//! A [`Notification`] is what subscribers receive: the rendered line plus
//! the category of the originating call. Payloads are shared `Arc<str>`s so
//! fanning one notification out to many subscribers never re-allocates.
//!
//! ## Ordering guarantees
//! Each notification carries a globally unique sequence number (`seq`) that
//! increases monotonically in enqueue order. Because the dispatch queue is
//! single-worker FIFO, subscribers observe strictly increasing `seq` values.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for notification ordering.
static NOTIFY_SEQ: AtomicU64 = AtomicU64::new(0);

/// One formatted log line on its way to the subscribers.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp of the originating log call.
    pub at: SystemTime,
    /// The rendered line, exactly as returned by the log entry point.
    pub line: Arc<str>,
    /// Category of the originating call, if any.
    pub category: Option<Arc<str>>,
}

impl Notification {
    /// Creates a notification with the current timestamp and next sequence
    /// number.
    pub(crate) fn new(line: impl Into<Arc<str>>, category: Option<Arc<str>>) -> Self {
        Self {
            seq: NOTIFY_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            line: line.into(),
            category,
        }
    }

    /// The rendered line.
    #[inline]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The category of the originating call, if one was set.
    #[inline]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
