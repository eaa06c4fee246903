// End-to-end tests for the logging facade: formatting contract, deferred
// delivery, registration semantics, and the process-wide default surface.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use logvisor::{
    Config, Level, Logger, Notification, Record, SubscriberFn, SubscriberRef, NO_CONTEXT,
};

/// Capture sink: records every (line, category, seq) it is handed.
fn capture(name: &'static str) -> (SubscriberRef, Arc<Mutex<Vec<(String, Option<String>, u64)>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = SubscriberFn::arc(name, move |n: Notification| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().unwrap().push((
                n.line().to_owned(),
                n.category().map(str::to_owned),
                n.seq,
            ));
        }
    });
    (sub, seen)
}

#[tokio::test]
async fn auth_scenario_returns_line_and_notifies_subscriber() {
    let logger = Logger::new(Config::default(), Vec::new());
    let (sub, seen) = capture("auth-sink");
    logger.subscribe(sub);

    let line = logger
        .l(
            "User logged in",
            Some(&serde_json::json!({"userId": 123})),
            Some("auth"),
        )
        .unwrap();
    assert_eq!(line, r#"[auth] User logged in {"userId":123}"#);

    logger.flush().await;
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, r#"[auth] User logged in {"userId":123}"#);
    assert_eq!(seen[0].1.as_deref(), Some("auth"));
}

#[tokio::test]
async fn plain_info_returns_exact_message() {
    let logger = Logger::new(Config::default(), Vec::new());
    let line = logger.i("Cache cleared", NO_CONTEXT, None).unwrap();
    assert_eq!(line, "Cache cleared");
}

#[tokio::test]
async fn successive_calls_are_delivered_in_order() {
    let logger = Logger::new(Config::default(), Vec::new());
    let (sub, seen) = capture("fifo");
    logger.subscribe(sub);

    logger.l("a", NO_CONTEXT, None).unwrap();
    logger.l("b", NO_CONTEXT, None).unwrap();
    logger.flush().await;

    let seen = seen.lock().unwrap();
    let lines: Vec<&str> = seen.iter().map(|(l, _, _)| l.as_str()).collect();
    assert_eq!(lines, vec!["a", "b"]);
    assert!(seen[0].2 < seen[1].2, "sequence numbers must increase");
}

#[tokio::test]
async fn membership_is_decided_at_delivery_time() {
    let logger = Logger::new(Config::default(), Vec::new());
    let (early, early_seen) = capture("early");
    let (late, late_seen) = capture("late");

    logger.subscribe(early.clone());
    logger.l("broadcast", NO_CONTEXT, None).unwrap();

    // Between the call and its delivery: one leaves, one joins.
    logger.unsubscribe(&early);
    logger.subscribe(late);
    logger.flush().await;

    assert!(early_seen.lock().unwrap().is_empty());
    assert_eq!(late_seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_registration_fires_once_per_occurrence() {
    let logger = Logger::new(Config::default(), Vec::new());
    let count = Arc::new(AtomicUsize::new(0));
    let tally = Arc::clone(&count);
    let sub: SubscriberRef = SubscriberFn::arc("dup", move |_n: Notification| {
        let tally = Arc::clone(&tally);
        async move {
            tally.fetch_add(1, Ordering::SeqCst);
        }
    });

    logger.subscribe(sub.clone());
    logger.subscribe(sub.clone());
    logger.l("twice", NO_CONTEXT, None).unwrap();
    logger.flush().await;
    assert_eq!(count.load(Ordering::SeqCst), 2);

    // One unsubscribe removes one occurrence; the other stays live.
    logger.unsubscribe(&sub);
    logger.l("once", NO_CONTEXT, None).unwrap();
    logger.flush().await;
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn unsubscribe_of_unknown_subscriber_is_a_noop() {
    let logger = Logger::new(Config::default(), Vec::new());
    let (stranger, _) = capture("stranger");
    logger.unsubscribe(&stranger); // must not panic or disturb anything
    assert_eq!(logger.subscriber_count(), 0);
}

#[tokio::test]
async fn submit_accepts_prebuilt_records() {
    let logger = Logger::new(Config::default(), Vec::new());
    let (sub, seen) = capture("records");
    logger.subscribe(sub);

    let record = Record::new(Level::Warn, "disk almost full")
        .with_context(&serde_json::json!({"free": "512MB"}))
        .unwrap()
        .with_category("fs");
    let line = logger.submit(record);
    assert_eq!(line, r#"[fs] disk almost full {"free":"512MB"}"#);

    logger.flush().await;
    assert_eq!(seen.lock().unwrap()[0].0, line);
}

#[tokio::test]
async fn default_surface_covers_subscribe_log_flush_unsubscribe() {
    // The one test that touches process-wide state; everything else uses
    // its own Logger instance.
    let (sub, seen) = capture("default-sink");
    logvisor::log_sub(sub.clone());

    let line = logvisor::l(
        "User logged in",
        Some(&serde_json::json!({"userId": 123})),
        Some("auth"),
    )
    .unwrap();
    assert_eq!(line, r#"[auth] User logged in {"userId":123}"#);

    logvisor::log_flush().await;
    assert_eq!(seen.lock().unwrap().len(), 1);

    logvisor::log_unsub(&sub);
    logvisor::i("Cache cleared", NO_CONTEXT, None).unwrap();
    logvisor::log_flush().await;
    assert_eq!(seen.lock().unwrap().len(), 1);

    // A default instance exists now, so installing another one is refused.
    assert!(!logvisor::install(Logger::new(Config::default(), Vec::new())));
}
