//! # logvisor
//!
//! **Logvisor** is a small asynchronous fan-out logging facade for Rust.
//!
//! It formats log messages synchronously and broadcasts them to registered
//! subscribers on a later event-loop iteration, strictly in call order. The
//! crate is designed as a building block: bring your own sinks by
//! implementing one trait (or wrapping a closure) and plug them in at
//! runtime.
//!
//! ## Architecture
//! ```text
//!   logger.l("User logged in", Some(&ctx), Some("auth"))
//!        │
//!        ├── Record ─► render ─► "[auth] User logged in {...}"  ──► returned
//!        │                                                          to caller
//!        └── Notification { seq, at, line, category }
//!                 │
//!                 ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  DispatchQueue (single unbounded FIFO + one worker task)  │
//! └───────────────────────────┬───────────────────────────────┘
//!                             ▼  (later event-loop iteration)
//!                  registry.snapshot()      (delivery-time membership)
//!                             │
//!              ┌──────────────┼──────────────┐
//!              ▼              ▼              ▼
//!        sub1.on_log    sub2.on_log    subN.on_log
//!        (insertion order, each awaited before the next)
//! ```
//!
//! ## Guarantees
//! | Area          | Behavior                                                              |
//! |---------------|-----------------------------------------------------------------------|
//! | **Synchrony** | every entry point returns the formatted line before any subscriber runs |
//! | **Ordering**  | global FIFO: all subscribers see call N before any sees call N+1       |
//! | **Membership**| the subscriber list is read when a notification is delivered, not when it was enqueued |
//! | **Isolation** | a panicking subscriber never reaches the publisher; see [`Config::isolate_panics`] |
//! | **Errors**    | the only fallible step is context serialization ([`LogError`])        |
//!
//! ## Optional features
//! - `console`: exports a simple built-in [`ConsoleWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use logvisor::{Config, Logger, Notification, SubscriberFn, SubscriberRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), logvisor::LogError> {
//!     let logger = Logger::new(Config::default(), Vec::new());
//!
//!     let audit: SubscriberRef = SubscriberFn::arc("audit", |n: Notification| async move {
//!         println!("#{} {}", n.seq, n.line());
//!     });
//!     logger.subscribe(audit.clone());
//!
//!     let line = logger.l(
//!         "User logged in",
//!         Some(&serde_json::json!({"userId": 123})),
//!         Some("auth"),
//!     )?;
//!     assert_eq!(line, r#"[auth] User logged in {"userId":123}"#);
//!
//!     logger.flush().await; // deterministic scheduler step; real code just lets it run
//!     logger.unsubscribe(&audit);
//!     logger.close().await;
//!     Ok(())
//! }
//! ```

mod core;
mod dispatch;
mod error;
mod records;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{Config, Logger, LoggerBuilder};
pub use crate::core::{d, default_logger, e, i, install, l, log_flush, log_sub, log_unsub, w};
pub use crate::error::LogError;
pub use crate::records::{Level, Notification, Record, NO_CONTEXT};
pub use crate::subscribers::{Subscribe, SubscriberFn, SubscriberRef};

// Optional: expose a simple built-in console subscriber (demo/reference).
// Enable with: `--features console`
#[cfg(feature = "console")]
pub use crate::subscribers::ConsoleWriter;
