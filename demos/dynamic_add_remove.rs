//! # Example: dynamic_add_remove
//!
//! Demonstrates runtime subscribe/unsubscribe and the delivery-time
//! membership rule: who gets notified is decided when a notification is
//! delivered, not when the log call was made.
//!
//! ## Run
//! ```bash
//! cargo run --example dynamic_add_remove
//! ```

use logvisor::{Config, Logger, Notification, SubscriberFn, SubscriberRef, NO_CONTEXT};

fn printer(tag: &'static str) -> SubscriberRef {
    SubscriberFn::arc(tag, move |n: Notification| async move {
        println!("[{tag}] {}", n.line());
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let logger = Logger::new(Config::default(), Vec::new());

    let alpha = printer("alpha");
    let bravo = printer("bravo");
    logger.subscribe(alpha.clone());
    logger.subscribe(bravo.clone());

    logger.l("both printers see this", NO_CONTEXT, None)?;
    logger.flush().await;

    // Remove bravo, log again: only alpha fires from now on.
    logger.unsubscribe(&bravo);
    logger.l("only alpha sees this", NO_CONTEXT, None)?;
    logger.flush().await;

    // Membership is read at delivery time: this line is scheduled while
    // alpha is registered, but alpha is gone before delivery runs.
    logger.l("nobody sees this", NO_CONTEXT, None)?;
    logger.unsubscribe(&alpha);
    logger.flush().await;

    println!("remaining subscribers: {}", logger.subscriber_count());
    logger.close().await;
    Ok(())
}
