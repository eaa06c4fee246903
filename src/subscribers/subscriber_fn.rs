//! # Function-backed subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure `F: Fn(Notification) -> Fut`, producing
//! a fresh future per notification. This avoids shared mutable state; if a
//! closure needs state across notifications, move an `Arc<...>` into it
//! explicitly.
//!
//! ## Example
//! ```rust
//! use logvisor::{Notification, SubscriberFn, SubscriberRef};
//!
//! let sub: SubscriberRef = SubscriberFn::arc("printer", |n: Notification| async move {
//!     println!("{}", n.line());
//! });
//!
//! assert_eq!(sub.name(), "printer");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::records::Notification;
use crate::subscribers::Subscribe;

/// Function-backed subscriber implementation.
///
/// Wraps a closure that *creates* a new future per notification. The
/// notification is passed by value (it is cheap to clone: shared `Arc`
/// payloads) so the future may outlive the borrow the worker holds.
#[derive(Debug)]
pub struct SubscriberFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscriberFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need a
    /// [`SubscriberRef`](crate::SubscriberRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Subscribe for SubscriberFn<F>
where
    F: Fn(Notification) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_log(&self, notification: &Notification) {
        (self.f)(notification.clone()).await;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
