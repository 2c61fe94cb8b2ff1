//! # Accessibility announcer: a passive screen-reader mirror.
//!
//! [`Announcer`] maintains a single piece of announcement text that a host
//! renders into a visually hidden live region. The text is **replaced**, never
//! appended, whenever a toast is created or transitions variant.
//!
//! ## Architecture
//! ```text
//! Engine ──► Bus ──► fanout_listener() ──► Announcer::on_event()
//!                                                │
//!                                                ▼
//!                                    Mutex<Option<Slot>>
//!                                   (text, politeness, seq, at)
//! ```
//!
//! ## Rules
//! - Only `ToastCreated` / `ToastUpdated` events carrying text announce
//! - Error-variant toasts announce assertively, everything else politely
//! - Announcements inside the debounce window coalesce (latest text wins,
//!   the window does not restart)
//! - [`Announcer::current`] returns `None` once the text has gone stale
//! - Pure observer: never touches registry state

use std::sync::Mutex;

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;
use crate::toast::Variant;

/// How urgently assistive technology should read an announcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Politeness {
    /// Read at the next graceful opportunity (`aria-live="polite"`).
    Polite,
    /// Interrupt current speech (`aria-live="assertive"`); used for errors.
    Assertive,
}

/// A snapshot of the live-region content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
    /// Event sequence that produced this text; newer always replaces older.
    pub seq: u64,
}

struct Slot {
    text: String,
    politeness: Politeness,
    seq: u64,
    at: Instant,
}

/// Stateful subscriber mirroring toast text for assistive technology.
pub struct Announcer {
    state: Mutex<Option<Slot>>,
    debounce: Duration,
    clear_after: Duration,
}

impl Announcer {
    /// Creates an announcer with the given debounce window and staleness delay.
    pub fn new(debounce: Duration, clear_after: Duration) -> Self {
        Self {
            state: Mutex::new(None),
            debounce,
            clear_after,
        }
    }

    /// Returns the current live-region content, or `None` when the last
    /// announcement has gone stale.
    pub fn current(&self) -> Option<Announcement> {
        let guard = self.state.lock().ok()?;
        let slot = guard.as_ref()?;
        if slot.at.elapsed() >= self.clear_after {
            return None;
        }
        Some(Announcement {
            text: slot.text.clone(),
            politeness: slot.politeness,
            seq: slot.seq,
        })
    }

    fn announce(&self, ev: &Event, text: &str) {
        let politeness = match ev.variant {
            Some(Variant::Error) => Politeness::Assertive,
            _ => Politeness::Polite,
        };

        let Ok(mut guard) = self.state.lock() else {
            return;
        };
        // Stale events (observed out of order) never overwrite newer text.
        if let Some(slot) = guard.as_ref() {
            if ev.seq <= slot.seq {
                return;
            }
        }

        let at = match guard.as_ref() {
            // Coalesce into the open debounce window instead of restarting it,
            // so a rapid burst counts as one announcement slot.
            Some(slot) if slot.at.elapsed() < self.debounce => slot.at,
            _ => Instant::now(),
        };

        *guard = Some(Slot {
            text: text.to_string(),
            politeness,
            seq: ev.seq,
            at,
        });
    }
}

#[async_trait]
impl Subscribe for Announcer {
    async fn on_event(&self, event: &Event) {
        match event.kind {
            EventKind::ToastCreated | EventKind::ToastUpdated => {
                if let Some(text) = event.text.as_deref() {
                    self.announce(event, text);
                }
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "announcer"
    }
}
