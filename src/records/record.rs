//! # Ephemeral log record and the formatting contract.
//!
//! A [`Record`] exists only for the duration of one log call: the facade
//! builds it, renders it into the final line, hands the line to the
//! dispatch queue, and drops it. Records are never stored.
//!
//! ## Format
//! ```text
//! [category] message {"key":"value"}
//! ```
//! - the `[category] ` prefix appears only when a non-empty category is set;
//! - the context suffix appears only when a context value was attached, as
//!   its JSON rendering with a single leading space;
//! - the components are space-joined in that fixed order.
//!
//! ## Example
//! ```rust
//! use logvisor::{Level, Record};
//!
//! let rec = Record::new(Level::Log, "User logged in")
//!     .with_context(&serde_json::json!({"userId": 123}))?
//!     .with_category("auth");
//!
//! assert_eq!(rec.render(), r#"[auth] User logged in {"userId":123}"#);
//! # Ok::<(), logvisor::LogError>(())
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::error::LogError;
use crate::records::Level;

/// One log call, before formatting.
///
/// Context is serialized eagerly by [`Record::with_context`], so a
/// serialization failure surfaces to the caller synchronously, before the
/// record is rendered or dispatched.
#[derive(Debug, Clone)]
pub struct Record {
    /// Entry point this record came from.
    pub level: Level,
    /// The log message.
    pub message: String,
    /// Pre-rendered JSON context, if any.
    pub context: Option<String>,
    /// Optional category tag.
    pub category: Option<Arc<str>>,
}

impl Record {
    /// Creates a new record with no context and no category.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            context: None,
            category: None,
        }
    }

    /// Attaches a category tag.
    ///
    /// An empty category is kept but treated as absent when rendering.
    #[inline]
    pub fn with_category(mut self, category: impl Into<Arc<str>>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attaches a context value, serializing it to JSON immediately.
    ///
    /// # Errors
    /// Returns [`LogError::ContextSerialization`] when the value cannot be
    /// rendered as JSON (e.g. a map with non-string keys).
    pub fn with_context<C>(mut self, context: &C) -> Result<Self, LogError>
    where
        C: Serialize + ?Sized,
    {
        let rendered = serde_json::to_string(context)
            .map_err(|source| LogError::ContextSerialization { source })?;
        self.context = Some(rendered);
        Ok(self)
    }

    /// Renders the record into its final line.
    ///
    /// The level is never part of this rendering; the facade prepends a
    /// `[level] ` tag itself when configured to.
    pub fn render(&self) -> String {
        let category = self.category.as_deref().filter(|c| !c.is_empty());
        let extra = category.map_or(0, |c| c.len() + 3)
            + self.context.as_ref().map_or(0, |c| c.len() + 1);

        let mut line = String::with_capacity(self.message.len() + extra);
        if let Some(cat) = category {
            line.push('[');
            line.push_str(cat);
            line.push_str("] ");
        }
        line.push_str(&self.message);
        if let Some(ctx) = &self.context {
            line.push(' ');
            line.push_str(ctx);
        }
        line
    }
}
