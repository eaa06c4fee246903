//! # Logger: the facade tying formatting, registry, and dispatch together.
//!
//! [`Logger`] owns the subscriber registry and the dispatch queue, and
//! exposes the five log entry points plus `subscribe`/`unsubscribe`.
//!
//! ## Key responsibilities
//! - format each call into its final line and return it **synchronously**
//! - enqueue one dispatch job per call (delivered on a later event-loop
//!   iteration, strictly FIFO)
//! - mutate the subscriber list only through `subscribe`/`unsubscribe`
//!
//! ## High-level flow
//! ```text
//! logger.l(message, context, category)
//!     ├─► Record::new(..).with_context(..)?.with_category(..)
//!     ├─► render ──► "[category] message {json}"     (returned to caller)
//!     └─► DispatchQueue::enqueue(Notification)        (deferred side effect)
//!                         │
//!                         ▼ (worker task, later)
//!              registry.snapshot() ─► sub1.on_log ─► sub2.on_log ─► ...
//! ```
//!
//! ## Example
//! ```rust
//! use logvisor::{Config, Logger, Notification, SubscriberFn, SubscriberRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), logvisor::LogError> {
//!     let logger = Logger::new(Config::default(), Vec::new());
//!
//!     let printer: SubscriberRef = SubscriberFn::arc("printer", |n: Notification| async move {
//!         println!("{}", n.line());
//!     });
//!     logger.subscribe(printer.clone());
//!
//!     let line = logger.l(
//!         "User logged in",
//!         Some(&serde_json::json!({"userId": 123})),
//!         Some("auth"),
//!     )?;
//!     assert_eq!(line, r#"[auth] User logged in {"userId":123}"#);
//!
//!     logger.flush().await; // subscribers have now seen the line
//!     logger.unsubscribe(&printer);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::core::{Config, LoggerBuilder};
use crate::dispatch::DispatchQueue;
use crate::error::LogError;
use crate::records::{Level, Notification, Record};
use crate::subscribers::{SubscriberRef, SubscriberRegistry};

/// Logging facade handle.
///
/// Lightweight and cloneable: clones share the same registry and dispatch
/// queue, so a `Logger` can be handed to every component that needs it
/// (dependency injection) while behaving as one facade. For a process-wide
/// instance see [`default_logger`](crate::default_logger).
#[derive(Clone)]
pub struct Logger {
    cfg: Config,
    registry: Arc<SubscriberRegistry>,
    queue: DispatchQueue,
}

impl Logger {
    /// Creates a facade with the given configuration and initial
    /// subscribers.
    ///
    /// Spawns the dispatch worker; must be called from within a tokio
    /// runtime.
    pub fn new(cfg: Config, subscribers: Vec<SubscriberRef>) -> Self {
        Self::builder(cfg).with_subscribers(subscribers).build()
    }

    /// Returns a [`LoggerBuilder`] for the given configuration.
    pub fn builder(cfg: Config) -> LoggerBuilder {
        LoggerBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        cfg: Config,
        registry: Arc<SubscriberRegistry>,
        queue: DispatchQueue,
    ) -> Self {
        Self {
            cfg,
            registry,
            queue,
        }
    }

    /// Formats and dispatches one log call.
    ///
    /// Returns the formatted line synchronously, before any subscriber
    /// runs. Notification of every subscriber registered **at delivery
    /// time** is scheduled on the dispatch queue as a side effect.
    ///
    /// # Errors
    /// [`LogError::ContextSerialization`] when `context` cannot be rendered
    /// as JSON; raised during formatting, before anything is enqueued.
    pub fn log<C>(
        &self,
        level: Level,
        message: &str,
        context: Option<&C>,
        category: Option<&str>,
    ) -> Result<String, LogError>
    where
        C: Serialize + ?Sized,
    {
        let mut record = Record::new(level, message);
        if let Some(context) = context {
            record = record.with_context(context)?;
        }
        if let Some(category) = category {
            record = record.with_category(category);
        }
        Ok(self.submit(record))
    }

    /// Lower-level twin of [`Logger::log`]: dispatches a pre-built
    /// [`Record`].
    ///
    /// Infallible: any context was already serialized when the record was
    /// built.
    pub fn submit(&self, record: Record) -> String {
        let line = if self.cfg.tag_levels {
            format!("[{}] {}", record.level, record.render())
        } else {
            record.render()
        };
        self.queue
            .enqueue(Notification::new(line.as_str(), record.category));
        line
    }

    /// Generic log entry point (`Level::Log`).
    pub fn l<C>(
        &self,
        message: &str,
        context: Option<&C>,
        category: Option<&str>,
    ) -> Result<String, LogError>
    where
        C: Serialize + ?Sized,
    {
        self.log(Level::Log, message, context, category)
    }

    /// Warning entry point (`Level::Warn`).
    pub fn w<C>(
        &self,
        message: &str,
        context: Option<&C>,
        category: Option<&str>,
    ) -> Result<String, LogError>
    where
        C: Serialize + ?Sized,
    {
        self.log(Level::Warn, message, context, category)
    }

    /// Error entry point (`Level::Error`).
    pub fn e<C>(
        &self,
        message: &str,
        context: Option<&C>,
        category: Option<&str>,
    ) -> Result<String, LogError>
    where
        C: Serialize + ?Sized,
    {
        self.log(Level::Error, message, context, category)
    }

    /// Info entry point (`Level::Info`).
    pub fn i<C>(
        &self,
        message: &str,
        context: Option<&C>,
        category: Option<&str>,
    ) -> Result<String, LogError>
    where
        C: Serialize + ?Sized,
    {
        self.log(Level::Info, message, context, category)
    }

    /// Debug entry point (`Level::Debug`).
    pub fn d<C>(
        &self,
        message: &str,
        context: Option<&C>,
        category: Option<&str>,
    ) -> Result<String, LogError>
    where
        C: Serialize + ?Sized,
    {
        self.log(Level::Debug, message, context, category)
    }

    /// Appends a subscriber.
    ///
    /// Duplicate registrations of the same handle are permitted; each one
    /// fires per notification. Returns nothing: removal goes through
    /// [`Logger::unsubscribe`] with a clone of the same handle.
    pub fn subscribe(&self, subscriber: SubscriberRef) {
        self.registry.subscribe(subscriber);
    }

    /// Removes the first registration of `subscriber` (by `Arc` identity).
    ///
    /// Silently does nothing when the handle was never registered. One
    /// occurrence is removed per call when duplicates exist.
    pub fn unsubscribe(&self, subscriber: &SubscriberRef) {
        self.registry.unsubscribe(subscriber);
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }

    /// Waits until every notification enqueued before this call has been
    /// delivered.
    ///
    /// Tests use this as a deterministic scheduler step instead of
    /// sleeping.
    pub async fn flush(&self) {
        self.queue.flush().await;
    }

    /// Stops the dispatch worker after draining pending notifications.
    ///
    /// Later log calls still format and return their line, but nothing is
    /// delivered anymore. Idempotent; affects all clones of this facade.
    pub async fn close(&self) {
        self.queue.close().await;
    }

    /// True once [`Logger::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }
}
