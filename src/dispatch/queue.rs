//! # FIFO dispatch queue: deferred fan-out to subscribers.
//!
//! [`DispatchQueue`] is the "schedule" primitive behind the facade: log
//! calls enqueue jobs onto a single unbounded channel, and one worker task
//! delivers them strictly in order on later event-loop iterations.
//!
//! ## What it guarantees
//! - Enqueueing never blocks and never suspends; the publisher returns
//!   before any subscriber runs.
//! - Global FIFO: all subscribers for job N run before any subscriber for
//!   job N+1.
//! - The subscriber list is read **at delivery time**, so a subscriber
//!   added or removed between enqueue and delivery is respected.
//! - Panics inside subscribers are caught; the worker survives.
//!
//! ## What it does **not** guarantee
//! - No cancellation of an already-enqueued job: [`DispatchQueue::close`]
//!   drains what is queued before stopping the worker.
//! - No backpressure: the channel is unbounded.
//!
//! ## Diagram
//! ```text
//!    enqueue(Notification) ──► [ job queue ] ──► worker
//!    flush() ── Flush(ack) ──►      │              ├─ Notify: snapshot ► sub1 ► sub2 ► ... (awaited in turn)
//!                                   │              └─ Flush: ack
//!                                  FIFO
//! ```

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::records::Notification;
use crate::subscribers::SubscriberRegistry;

/// One unit of deferred work.
pub(crate) enum Job {
    /// Deliver a notification to every currently-registered subscriber.
    Notify(Notification),
    /// Barrier: acknowledge once every earlier job has been delivered.
    Flush(oneshot::Sender<()>),
}

/// Handle to the dispatch worker. Cheap to clone; all clones feed the same
/// FIFO queue.
#[derive(Clone)]
pub(crate) struct DispatchQueue {
    tx: mpsc::UnboundedSender<Job>,
    token: CancellationToken,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl DispatchQueue {
    /// Creates the queue and spawns its worker task.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub(crate) fn new(registry: Arc<SubscriberRegistry>, isolate_panics: bool) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
        let token = CancellationToken::new();
        let worker_token = token.clone();

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    job = rx.recv() => match job {
                        Some(job) => deliver(job, &registry, isolate_panics).await,
                        None => break,
                    },
                    _ = worker_token.cancelled() => {
                        // Already-enqueued jobs cannot be cancelled: drain
                        // what is queued, then stop.
                        while let Ok(job) = rx.try_recv() {
                            deliver(job, &registry, isolate_panics).await;
                        }
                        break;
                    }
                }
            }
        });

        Self {
            tx,
            token,
            worker: Arc::new(Mutex::new(Some(handle))),
        }
    }

    /// Enqueues one notification (non-blocking).
    ///
    /// After [`DispatchQueue::close`] the notification is dropped and a
    /// warning is printed with the facade prefix.
    pub(crate) fn enqueue(&self, notification: Notification) {
        if self.token.is_cancelled() {
            eprintln!("[logvisor] dispatch queue closed; notification dropped");
            return;
        }
        if self.tx.send(Job::Notify(notification)).is_err() {
            eprintln!("[logvisor] dispatch worker gone; notification dropped");
        }
    }

    /// Waits until every job enqueued before this call has been delivered.
    pub(crate) async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Job::Flush(ack)).is_ok() {
            let _ = done.await;
        }
    }

    /// Stops the worker: pending jobs are drained first, then the task is
    /// awaited. Idempotent.
    pub(crate) async fn close(&self) {
        self.token.cancel();
        if let Some(handle) = self.worker.lock().await.take() {
            let _ = handle.await;
        }
    }

    /// True once [`DispatchQueue::close`] has been called.
    pub(crate) fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Delivers one job. For notifications the registry is snapshotted *now*,
/// and subscribers run in insertion order, each awaited before the next.
async fn deliver(job: Job, registry: &SubscriberRegistry, isolate_panics: bool) {
    match job {
        Job::Flush(ack) => {
            let _ = ack.send(());
        }
        Job::Notify(notification) => {
            let subscribers = registry.snapshot();
            if isolate_panics {
                for sub in &subscribers {
                    let fut = sub.on_log(&notification);
                    if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                        eprintln!(
                            "[logvisor] subscriber '{}' panicked: {}",
                            sub.name(),
                            panic_info(&panic_err)
                        );
                    }
                }
            } else {
                // Reference behavior: one panicking subscriber aborts the
                // rest of this batch, but the worker itself survives.
                let batch = async {
                    for sub in &subscribers {
                        sub.on_log(&notification).await;
                    }
                };
                if let Err(panic_err) = std::panic::AssertUnwindSafe(batch).catch_unwind().await {
                    eprintln!(
                        "[logvisor] subscriber panic aborted delivery of seq={}: {}",
                        notification.seq,
                        panic_info(&panic_err)
                    );
                }
            }
        }
    }
}

/// Extracts a printable message from a caught panic payload.
fn panic_info(panic_err: &Box<dyn std::any::Any + Send>) -> String {
    let any = &**panic_err;
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::{SubscriberFn, SubscriberRef};
    use std::sync::Mutex as StdMutex;

    fn collector(
        name: &'static str,
    ) -> (SubscriberRef, Arc<StdMutex<Vec<String>>>) {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = SubscriberFn::arc(name, move |n: Notification| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(n.line().to_owned());
            }
        });
        (sub, seen)
    }

    #[tokio::test]
    async fn test_fifo_delivery_order() {
        let registry = Arc::new(SubscriberRegistry::new(Vec::new()));
        let (sub, seen) = collector("order");
        registry.subscribe(sub);

        let queue = DispatchQueue::new(Arc::clone(&registry), true);
        queue.enqueue(Notification::new("a", None));
        queue.enqueue(Notification::new("b", None));
        queue.enqueue(Notification::new("c", None));
        queue.flush().await;

        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_registry_read_at_delivery_time() {
        let registry = Arc::new(SubscriberRegistry::new(Vec::new()));
        let queue = DispatchQueue::new(Arc::clone(&registry), true);

        // Enqueued before the subscriber existed; delivered after.
        queue.enqueue(Notification::new("late joiner sees this", None));
        let (sub, seen) = collector("late");
        registry.subscribe(sub);
        queue.flush().await;

        assert_eq!(*seen.lock().unwrap(), vec!["late joiner sees this"]);
    }

    #[tokio::test]
    async fn test_panic_isolation_keeps_batch_alive() {
        let registry = Arc::new(SubscriberRegistry::new(Vec::new()));
        let faulty: SubscriberRef =
            SubscriberFn::arc("faulty", |_n: Notification| async { panic!("boom") });
        let (ok, seen) = collector("survivor");
        registry.subscribe(faulty);
        registry.subscribe(ok);

        let queue = DispatchQueue::new(Arc::clone(&registry), true);
        queue.enqueue(Notification::new("still delivered", None));
        queue.flush().await;

        assert_eq!(*seen.lock().unwrap(), vec!["still delivered"]);
    }

    #[tokio::test]
    async fn test_unisolated_panic_aborts_batch_but_not_worker() {
        let registry = Arc::new(SubscriberRegistry::new(Vec::new()));
        let faulty: SubscriberRef =
            SubscriberFn::arc("faulty", |_n: Notification| async { panic!("boom") });
        let (ok, seen) = collector("after-faulty");
        registry.subscribe(faulty.clone());
        registry.subscribe(ok);

        let queue = DispatchQueue::new(Arc::clone(&registry), false);
        queue.enqueue(Notification::new("first", None));
        queue.flush().await;
        // The panicking subscriber stopped the rest of the first batch.
        assert!(seen.lock().unwrap().is_empty());

        // The worker is still alive; later batches reach the survivor once
        // the faulty subscriber is gone.
        registry.unsubscribe(&faulty);
        queue.enqueue(Notification::new("second", None));
        queue.flush().await;
        assert_eq!(*seen.lock().unwrap(), vec!["second"]);
    }

    #[tokio::test]
    async fn test_close_drains_pending_jobs() {
        let registry = Arc::new(SubscriberRegistry::new(Vec::new()));
        let (sub, seen) = collector("drain");
        registry.subscribe(sub);

        let queue = DispatchQueue::new(Arc::clone(&registry), true);
        queue.enqueue(Notification::new("queued before close", None));
        queue.close().await;

        assert!(queue.is_closed());
        assert_eq!(*seen.lock().unwrap(), vec!["queued before close"]);

        // Enqueue after close is dropped, not delivered.
        queue.enqueue(Notification::new("dropped", None));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
