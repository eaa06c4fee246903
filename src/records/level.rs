//! # Log levels for the five entry points.
//!
//! Every log call goes through one of five equivalent entry points
//! (`l`, `w`, `e`, `i`, `d`); [`Level`] records which one was used. The
//! level does **not** change the formatted output unless
//! [`Config::tag_levels`](crate::Config::tag_levels) is enabled; all five
//! variants share the same formatting and dispatch path.

use std::fmt;

/// Classification of a log call by entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Generic log (`l`).
    Log,
    /// Warning (`w`).
    Warn,
    /// Error (`e`).
    Error,
    /// Informational (`i`).
    Info,
    /// Debug (`d`).
    Debug,
}

impl Level {
    /// Returns the lowercase tag used when
    /// [`Config::tag_levels`](crate::Config::tag_levels) is enabled.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Log => "log",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
