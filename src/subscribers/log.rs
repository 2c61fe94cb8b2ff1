//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and the demos.
//!
//! ## Output format
//! ```text
//! [created] toast=toast-0 variant=info position=top-right duration_ms=4000
//! [updated] toast=toast-0 variant=success
//! [dismissed] toast=toast-0 reason=expired
//! [evicted] toast=toast-1 position=top-right
//! [dismissed-all]
//! [shutdown-requested]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::ToastCreated => {
                println!(
                    "[created] toast={:?} variant={:?} position={:?} duration_ms={:?}",
                    e.toast,
                    e.variant.map(|v| v.as_label()),
                    e.position.map(|p| p.as_label()),
                    e.duration_ms
                );
            }
            EventKind::ToastUpdated => {
                println!(
                    "[updated] toast={:?} variant={:?}",
                    e.toast,
                    e.variant.map(|v| v.as_label())
                );
            }
            EventKind::ToastDismissed => {
                println!("[dismissed] toast={:?} reason={:?}", e.toast, e.reason);
            }
            EventKind::TimerStarted => {
                println!(
                    "[timer-started] toast={:?} remaining_ms={:?}",
                    e.toast, e.duration_ms
                );
            }
            EventKind::TimerPaused => {
                println!(
                    "[timer-paused] toast={:?} remaining_ms={:?}",
                    e.toast, e.duration_ms
                );
            }
            EventKind::TimerResumed => {
                println!(
                    "[timer-resumed] toast={:?} remaining_ms={:?}",
                    e.toast, e.duration_ms
                );
            }
            EventKind::TimerFired => {
                println!("[timer-fired] toast={:?}", e.toast);
            }
            EventKind::StackEvicted => {
                println!(
                    "[evicted] toast={:?} position={:?}",
                    e.toast,
                    e.position.map(|p| p.as_label())
                );
            }
            EventKind::DismissedAll => {
                println!("[dismissed-all]");
            }
            EventKind::ShutdownRequested => {
                println!("[shutdown-requested]");
            }
            EventKind::SubscriberOverflow => {
                println!(
                    "[subscriber-overflow] subscriber={:?} reason={:?}",
                    e.toast, e.reason
                );
            }
            EventKind::SubscriberPanicked => {
                println!(
                    "[subscriber-panicked] subscriber={:?} info={:?}",
                    e.toast, e.reason
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
