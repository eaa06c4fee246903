//! # Example: custom_subscriber
//!
//! Demonstrates how to build and attach a custom subscriber.
//!
//! Shows how to:
//! - Implement the [`Subscribe`] trait.
//! - Guard the callback body so a failing sink reports instead of panics
//!   (recommended for any subscriber doing fallible work).
//! - Observe panic isolation: a faulty subscriber does not stop the rest
//!   of the batch.
//!
//! ## Run
//! ```bash
//! cargo run --example custom_subscriber
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use logvisor::{Config, Logger, Notification, Subscribe, SubscriberFn, NO_CONTEXT};

/// Tallies notifications per category. In real life this could export
/// metrics, ship lines to a collector, or trigger alerts.
struct CategoryMetrics {
    counts: Mutex<HashMap<String, usize>>,
}

impl CategoryMetrics {
    fn new() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// The fallible part of the sink, kept separate so the callback can
    /// guard it.
    fn record(&self, category: &str) -> Result<(), String> {
        let mut counts = self.counts.lock().map_err(|e| e.to_string())?;
        *counts.entry(category.to_owned()).or_insert(0) += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Subscribe for CategoryMetrics {
    async fn on_log(&self, n: &Notification) {
        // Guard the body: a failing sink reports and moves on.
        let category = n.category().unwrap_or("uncategorized");
        if let Err(err) = self.record(category) {
            eprintln!("[metrics] failed to record '{category}': {err}");
        }
    }

    fn name(&self) -> &str {
        "category-metrics"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let logger = Logger::new(Config::default(), Vec::new());

    let metrics = std::sync::Arc::new(CategoryMetrics::new());
    logger.subscribe(metrics.clone());

    // A deliberately faulty neighbor: with the default
    // `Config::isolate_panics`, its panic is contained and the metrics
    // subscriber still sees every notification.
    logger.subscribe(SubscriberFn::arc("faulty", |_n: Notification| async {
        panic!("demo subscriber failure");
    }));

    logger.l("User logged in", NO_CONTEXT, Some("auth"))?;
    logger.e("password rejected", NO_CONTEXT, Some("auth"))?;
    logger.i("Cache cleared", NO_CONTEXT, None)?;
    logger.flush().await;

    println!("\ncategory tallies:");
    for (category, count) in metrics.counts.lock().unwrap().iter() {
        println!("  {category}: {count}");
    }

    logger.close().await;
    Ok(())
}
