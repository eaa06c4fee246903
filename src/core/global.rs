//! # Process-wide default facade.
//!
//! The primary API is an explicitly constructed [`Logger`] handed to the
//! components that log (dependency injection). For drop-in convenience a
//! single process-wide instance is also offered: [`default_logger`] plus
//! the free functions [`l`], [`w`], [`e`], [`i`], [`d`], [`log_sub`],
//! [`log_unsub`] and [`log_flush`] that delegate to it.
//!
//! The default instance is created lazily on first use with
//! [`Config::default`]; call [`install`] earlier to use a custom-configured
//! instance instead. Either way the first touch must happen inside a tokio
//! runtime (it spawns the dispatch worker), and the instance lives for the
//! rest of the process; it is never torn down.
//!
//! ## Example
//! ```rust
//! use logvisor::{Notification, SubscriberFn, SubscriberRef, NO_CONTEXT};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), logvisor::LogError> {
//!     let printer: SubscriberRef = SubscriberFn::arc("printer", |n: Notification| async move {
//!         println!("{}", n.line());
//!     });
//!     logvisor::log_sub(printer.clone());
//!
//!     let line = logvisor::i("Cache cleared", NO_CONTEXT, None)?;
//!     assert_eq!(line, "Cache cleared");
//!
//!     logvisor::log_flush().await;
//!     logvisor::log_unsub(&printer);
//!     Ok(())
//! }
//! ```

use std::sync::OnceLock;

use serde::Serialize;

use crate::core::{Config, Logger};
use crate::error::LogError;
use crate::records::Level;
use crate::subscribers::SubscriberRef;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the process-wide default.
///
/// Returns `false` when a default instance already exists (installed
/// earlier or created lazily by a previous call into this module); the
/// existing instance is kept and `logger` is dropped.
pub fn install(logger: Logger) -> bool {
    DEFAULT.set(logger).is_ok()
}

/// Returns the process-wide default facade, creating it on first use.
///
/// Must first be called from within a tokio runtime.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(|| Logger::new(Config::default(), Vec::new()))
}

/// Generic log entry point on the default facade.
pub fn l<C>(message: &str, context: Option<&C>, category: Option<&str>) -> Result<String, LogError>
where
    C: Serialize + ?Sized,
{
    default_logger().log(Level::Log, message, context, category)
}

/// Warning entry point on the default facade.
pub fn w<C>(message: &str, context: Option<&C>, category: Option<&str>) -> Result<String, LogError>
where
    C: Serialize + ?Sized,
{
    default_logger().log(Level::Warn, message, context, category)
}

/// Error entry point on the default facade.
pub fn e<C>(message: &str, context: Option<&C>, category: Option<&str>) -> Result<String, LogError>
where
    C: Serialize + ?Sized,
{
    default_logger().log(Level::Error, message, context, category)
}

/// Info entry point on the default facade.
pub fn i<C>(message: &str, context: Option<&C>, category: Option<&str>) -> Result<String, LogError>
where
    C: Serialize + ?Sized,
{
    default_logger().log(Level::Info, message, context, category)
}

/// Debug entry point on the default facade.
pub fn d<C>(message: &str, context: Option<&C>, category: Option<&str>) -> Result<String, LogError>
where
    C: Serialize + ?Sized,
{
    default_logger().log(Level::Debug, message, context, category)
}

/// Registers a subscriber on the default facade.
pub fn log_sub(subscriber: SubscriberRef) {
    default_logger().subscribe(subscriber);
}

/// Removes a subscriber registration from the default facade.
pub fn log_unsub(subscriber: &SubscriberRef) {
    default_logger().unsubscribe(subscriber);
}

/// Waits until everything logged so far through the default facade has
/// been delivered.
pub async fn log_flush() {
    default_logger().flush().await;
}
