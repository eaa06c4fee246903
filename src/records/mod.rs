//! Log data model: levels, ephemeral records, delivered notifications.
//!
//! This module groups the **data** side of the facade:
//! - [`Level`] which of the five entry points a call came from
//! - [`Record`] one log call before formatting (never stored)
//! - [`Notification`] the rendered line as delivered to subscribers
//!
//! The dispatch machinery that moves notifications lives in `dispatch`;
//! see `core` for the facade that ties both together.

mod level;
mod notification;
mod record;

pub use level::Level;
pub use notification::Notification;
pub use record::Record;

/// Absent context for the five entry points.
///
/// Rust cannot infer the context type parameter when `None` is passed
/// bare; this constant pins it:
///
/// ```rust
/// # async fn demo(logger: &logvisor::Logger) -> Result<(), logvisor::LogError> {
/// use logvisor::NO_CONTEXT;
///
/// let line = logger.i("Cache cleared", NO_CONTEXT, None)?;
/// assert_eq!(line, "Cache cleared");
/// # Ok(())
/// # }
/// ```
pub const NO_CONTEXT: Option<&serde_json::Value> = None;
