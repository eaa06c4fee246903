//! # Example: basic
//!
//! Minimal end-to-end use of the facade with the built-in console
//! subscriber.
//!
//! Shows how to:
//! - Build a [`Logger`] with pre-registered subscribers.
//! - Log through the five entry points and read the returned line.
//! - Step the scheduler deterministically with [`Logger::flush`].
//!
//! ## Run
//! Requires the `console` feature to export [`ConsoleWriter`].
//! ```bash
//! cargo run --example basic --features console
//! ```

use std::sync::Arc;

use logvisor::{Config, ConsoleWriter, Logger, SubscriberRef, NO_CONTEXT};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let subs: Vec<SubscriberRef> = vec![Arc::new(ConsoleWriter)];
    let logger = Logger::new(Config::default(), subs);

    let line = logger.l(
        "User logged in",
        Some(&serde_json::json!({"userId": 123})),
        Some("auth"),
    )?;
    println!("returned synchronously: {line}");

    logger.w("token about to expire", NO_CONTEXT, Some("auth"))?;
    logger.i("Cache cleared", NO_CONTEXT, None)?;

    // Nothing has been printed by the subscriber yet; delivery happens on a
    // later event-loop iteration. Flush waits for it.
    logger.flush().await;

    logger.close().await;
    Ok(())
}
