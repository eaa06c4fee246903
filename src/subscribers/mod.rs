//! # Log subscribers.
//!
//! This module provides the [`Subscribe`] trait, the closure adapter
//! [`SubscriberFn`], and the ordered registry the facade mutates through
//! `subscribe`/`unsubscribe`.
//!
//! ## Architecture
//! ```text
//! Notification flow:
//!   Logger ── enqueue(Notification) ──► DispatchQueue ──► worker
//!                                                            │
//!                                              registry.snapshot() (at delivery time)
//!                                                            │
//!                                               ┌────────────┼────────────┐
//!                                               ▼            ▼            ▼
//!                                          sub1.on_log  sub2.on_log  subN.on_log
//!                                          (insertion order, awaited in turn)
//! ```
//!
//! ## Implementing custom subscribers
//! ```rust
//! use logvisor::{Notification, Subscribe};
//!
//! struct Metrics;
//!
//! #[async_trait::async_trait]
//! impl Subscribe for Metrics {
//!     async fn on_log(&self, n: &Notification) {
//!         if n.category() == Some("auth") {
//!             // increment auth counter
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "console")]
mod console;
mod registry;
mod subscribe;
mod subscriber_fn;

#[cfg(feature = "console")]
pub use console::ConsoleWriter;
pub(crate) use registry::SubscriberRegistry;
pub use subscribe::{Subscribe, SubscriberRef};
pub use subscriber_fn::SubscriberFn;
