use std::sync::Arc;

use crate::core::{Config, Logger};
use crate::dispatch::DispatchQueue;
use crate::subscribers::{SubscriberRef, SubscriberRegistry};

/// Builder for constructing a [`Logger`] with pre-registered subscribers.
pub struct LoggerBuilder {
    cfg: Config,
    subscribers: Vec<SubscriberRef>,
}

impl LoggerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Seeds the subscriber list, in notification order.
    ///
    /// Further subscribers can be added at any time through
    /// [`Logger::subscribe`].
    pub fn with_subscribers(mut self, subscribers: Vec<SubscriberRef>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the facade instance.
    ///
    /// This consumes the builder and initializes the runtime components:
    /// the subscriber registry (seeded with the builder's subscribers) and
    /// the dispatch queue with its worker task. Must be called from within
    /// a tokio runtime.
    pub fn build(self) -> Logger {
        let registry = Arc::new(SubscriberRegistry::new(self.subscribers));
        let queue = DispatchQueue::new(Arc::clone(&registry), self.cfg.isolate_panics);
        Logger::new_internal(self.cfg, registry, queue)
    }
}
