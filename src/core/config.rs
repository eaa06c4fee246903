//! # Facade configuration.
//!
//! Provides [`Config`], the centralized settings for a [`Logger`].
//!
//! Config is used in two ways:
//! 1. **Direct construction**: `Logger::new(config, subscribers)`
//! 2. **Builder**: `Logger::builder(config).with_subscribers(...).build()`

/// Configuration for a logging facade instance.
///
/// ## Field semantics
/// - `isolate_panics`: wrap each subscriber invocation so one panicking
///   subscriber cannot prevent the rest of its batch from running. With
///   `false`, a panic aborts the remainder of that batch only; the dispatch
///   worker itself always survives.
/// - `tag_levels`: prepend `[level] ` (e.g. `[warn] `) to every formatted
///   line. Off by default: the five entry points then produce identical
///   output for the same inputs, and the line format stays stable for
///   consumers that parse it.
#[derive(Clone, Debug)]
pub struct Config {
    /// Contain subscriber panics per subscriber instead of per batch.
    pub isolate_panics: bool,

    /// Encode the entry-point level into the formatted line.
    pub tag_levels: bool,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `isolate_panics = true` (one faulty subscriber never silences the
    ///   rest of the batch)
    /// - `tag_levels = false` (level is not part of the line format)
    fn default() -> Self {
        Self {
            isolate_panics: true,
            tag_levels: false,
        }
    }
}
