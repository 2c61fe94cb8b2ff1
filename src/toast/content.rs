//! # Opaque custom render payload.
//!
//! [`ContentHandle`] keeps the engine decoupled from any rendering
//! technology: it stores an arbitrary `Send + Sync` value behind a type-erased
//! handle and forwards it to whoever renders the stack. The engine never
//! inspects or evaluates the payload; downcasting is the renderer's business,
//! and rendering failures are the caller's responsibility.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased, cheaply cloneable handle to caller-supplied render content.
///
/// ## Example
/// ```
/// use toastkit::ContentHandle;
///
/// struct Card { headline: &'static str }
///
/// let handle = ContentHandle::new(Card { headline: "Deploy finished" });
/// let card = handle.downcast_ref::<Card>().unwrap();
/// assert_eq!(card.headline, "Deploy finished");
/// assert!(handle.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct ContentHandle {
    inner: Arc<dyn Any + Send + Sync>,
}

impl ContentHandle {
    /// Wraps an arbitrary payload.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Attempts to view the payload as `T`.
    ///
    /// Returns `None` when the stored type differs; the engine itself never
    /// calls this.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for ContentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentHandle(..)")
    }
}
