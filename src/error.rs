//! Error types used by the logging facade.
//!
//! The facade has exactly one caller-visible failure mode: the context value
//! attached to a log call cannot be rendered as JSON. It surfaces as
//! [`LogError::ContextSerialization`] from the formatting step, before the
//! formatted line is returned and before anything is dispatched.
//!
//! Subscriber failures during delivery are not part of this taxonomy: they
//! are contained by the dispatch worker (see
//! [`Config::isolate_panics`](crate::Config::isolate_panics)) and never
//! propagate to the caller of a log entry point.

use thiserror::Error;

/// # Errors produced while building a log record.
///
/// Raised synchronously by the five log entry points and by
/// [`Record::with_context`](crate::Record::with_context).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum LogError {
    /// The context value could not be serialized to JSON.
    #[error("context serialization failed: {source}")]
    ContextSerialization {
        /// The underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl LogError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use logvisor::LogError;
    ///
    /// let source = serde_json::from_str::<i32>("not json").unwrap_err();
    /// let err = LogError::ContextSerialization { source };
    /// assert_eq!(err.as_label(), "context_serialization");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            LogError::ContextSerialization { .. } => "context_serialization",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            LogError::ContextSerialization { source } => {
                format!("context serialization failed: {source}")
            }
        }
    }
}
