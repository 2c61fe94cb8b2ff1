//! # Runtime events emitted by the engine, timers, and subscriber workers.
//!
//! The [`EventKind`] enum classifies event types across four categories:
//! - **Lifecycle events**: creation, in-place update, removal
//! - **Timer events**: countdown armed, paused, resumed, fired
//! - **Stack events**: cap eviction, dismiss-all sweeps
//! - **Runtime events**: shutdown, subscriber overflow/panic
//!
//! The [`Event`] struct carries optional metadata such as the toast id,
//! position, variant, announcement text, and a dismiss reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! observed out of order by a slow subscriber.
//!
//! ## Example
//! ```rust
//! use toastkit::{Event, EventKind, Position, Variant};
//!
//! let ev = Event::new(EventKind::ToastCreated)
//!     .with_toast("toast-1")
//!     .with_position(Position::TopRight)
//!     .with_variant(Variant::Info)
//!     .with_text("A new version is available");
//!
//! assert_eq!(ev.kind, EventKind::ToastCreated);
//! assert_eq!(ev.toast.as_deref(), Some("toast-1"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::toast::{Position, Variant};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Toast lifecycle events ===
    /// A toast entered the registry.
    ///
    /// Sets:
    /// - `toast`: toast id
    /// - `position`, `variant`
    /// - `text`: announcement text, if any
    /// - `duration_ms`: configured countdown
    ToastCreated,

    /// A toast was mutated in place by `update`.
    ///
    /// Sets:
    /// - `toast`: toast id
    /// - `position`, `variant` (post-merge values)
    /// - `text`: announcement text, if any
    ToastUpdated,

    /// A toast left the registry; its dismiss hook has fired.
    ///
    /// Sets:
    /// - `toast`: toast id
    /// - `position`
    /// - `reason`: dismiss reason label (`expired`, `dismissed`, ...)
    ToastDismissed,

    // === Timer events ===
    /// Countdown armed for a toast.
    ///
    /// Sets: `toast`, `duration_ms` (remaining at arm time).
    TimerStarted,

    /// Countdown paused; remaining time banked.
    ///
    /// Sets: `toast`, `duration_ms` (remaining after the pause).
    TimerPaused,

    /// Countdown re-armed from banked remaining time.
    ///
    /// Sets: `toast`, `duration_ms` (remaining at resume).
    TimerResumed,

    /// Countdown ran out. Internal trigger: the engine listener converts this
    /// into a facade-path dismissal so registry, stack, and announcer stay
    /// consistent.
    ///
    /// Sets: `toast`.
    TimerFired,

    // === Stack events ===
    /// The per-position cap pushed out the oldest toast.
    ///
    /// Sets: `toast` (the evicted id), `position`.
    StackEvicted,

    /// A dismiss-all sweep finished; one `ToastDismissed` was published per
    /// removed toast before this marker.
    ///
    /// Sets: `position` when the sweep was scoped to one anchor.
    DismissedAll,

    // === Runtime events ===
    /// Engine teardown began; timers are being cancelled.
    ShutdownRequested,

    /// Subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `toast`: subscriber name
    /// - `reason`: reason string (e.g., "full", "closed")
    SubscriberOverflow,

    /// Subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `toast`: subscriber name
    /// - `reason`: panic info/message
    SubscriberPanicked,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Toast id (or subscriber name for subscriber events).
    pub toast: Option<Arc<str>>,
    /// Anchor position, if applicable.
    pub position: Option<Position>,
    /// Semantic variant, if applicable.
    pub variant: Option<Variant>,
    /// Announcement text mirrored for assistive technology.
    pub text: Option<Arc<str>>,
    /// Human-readable reason (dismiss reasons, overflow details, etc.).
    pub reason: Option<Arc<str>>,
    /// Countdown duration in milliseconds (compact).
    pub duration_ms: Option<u64>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            toast: None,
            position: None,
            variant: None,
            text: None,
            reason: None,
            duration_ms: None,
        }
    }

    /// Attaches a toast id (or subscriber name).
    #[inline]
    pub fn with_toast(mut self, toast: impl Into<Arc<str>>) -> Self {
        self.toast = Some(toast.into());
        self
    }

    /// Attaches an anchor position.
    #[inline]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attaches a semantic variant.
    #[inline]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Attaches announcement text.
    #[inline]
    pub fn with_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a countdown duration (stored as milliseconds).
    #[inline]
    pub fn with_duration(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u64::MAX)) as u64;
        self.duration_ms = Some(ms);
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_toast(subscriber)
            .with_reason(reason)
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_toast(subscriber)
            .with_reason(info)
    }

    /// True for events produced by the fan-out machinery itself.
    ///
    /// The subscriber set skips overflow reporting for these to avoid
    /// amplifying a persistent overflow.
    #[inline]
    pub fn is_fanout_report(&self) -> bool {
        matches!(
            self.kind,
            EventKind::SubscriberOverflow | EventKind::SubscriberPanicked
        )
    }
}
