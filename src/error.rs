//! Error types used by the toastkit engine.
//!
//! The engine degrades gracefully almost everywhere: unknown ids are no-ops,
//! invalid durations clamp to zero, and promise failures become the error
//! branch's content. The only hard failure a caller can provoke is supplying
//! an external id that collides with a live toast.

use thiserror::Error;

/// # Errors produced by the notification engine.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A caller-supplied id collides with a live toast.
    ///
    /// Internally generated ids never collide; this can only happen with
    /// [`ToastOptions::with_id`](crate::ToastOptions::with_id).
    #[error("toast id {id:?} already exists")]
    DuplicateId {
        /// The colliding identifier.
        id: String,
    },

    /// The engine was shut down; no further toasts are accepted.
    #[error("engine is shut down")]
    Terminated,
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use toastkit::NotifyError;
    ///
    /// let err = NotifyError::DuplicateId { id: "upload".into() };
    /// assert_eq!(err.as_label(), "duplicate_id");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::DuplicateId { .. } => "duplicate_id",
            NotifyError::Terminated => "terminated",
        }
    }

    /// Returns a human-readable message with details about the error.
    ///
    /// # Example
    /// ```
    /// use toastkit::NotifyError;
    ///
    /// let err = NotifyError::DuplicateId { id: "upload".into() };
    /// assert_eq!(err.as_message(), "duplicate id: upload");
    /// ```
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::DuplicateId { id } => format!("duplicate id: {id}"),
            NotifyError::Terminated => "engine is shut down".to_string(),
        }
    }
}
