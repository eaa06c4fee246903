//! # Simple console subscriber for debugging and demos.
//!
//! [`ConsoleWriter`] prints every delivered line to stdout. This is
//! primarily useful for development, debugging, and the bundled demos.
//!
//! ## Output format
//! ```text
//! [auth] User logged in {"userId":123}
//! Cache cleared
//! ```
//! The line is printed exactly as formatted by the facade; the category is
//! already embedded in the line, so nothing is added.
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use logvisor::{Config, ConsoleWriter, Logger, SubscriberRef};
//! # async fn demo() {
//! let subs: Vec<SubscriberRef> = vec![Arc::new(ConsoleWriter)];
//! let logger = Logger::new(Config::default(), subs);
//! # let _ = logger;
//! # }
//! ```

use async_trait::async_trait;

use crate::records::Notification;
use crate::subscribers::Subscribe;

/// Simple stdout subscriber.
///
/// Enabled via the `console` feature. Not intended for production use;
/// implement a custom [`Subscribe`] for structured sinks.
pub struct ConsoleWriter;

#[async_trait]
impl Subscribe for ConsoleWriter {
    async fn on_log(&self, notification: &Notification) {
        println!("{}", notification.line());
    }

    fn name(&self) -> &str {
        "console"
    }
}
