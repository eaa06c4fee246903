//! Deferred notification machinery.
//!
//! One queue, one worker: [`DispatchQueue`] turns a synchronous log call
//! into an asynchronous, strictly-FIFO fan-out over the subscriber
//! registry. See `core` for the facade that owns it.

mod queue;

pub(crate) use queue::DispatchQueue;
