//! # Timer coordinator: one countdown per auto-dismissing toast.
//!
//! Maintains a one-to-one mapping from toast id to a running countdown with
//! pause/resume and elapsed-time accounting. Expiry never mutates the
//! registry directly: the countdown task publishes [`EventKind::TimerFired`]
//! and the engine's listener performs the removal through the facade path, so
//! registry, stack, and announcer stay consistent.
//!
//! ## Event flow
//! ```text
//! start(id, remaining) ──► spawn countdown ──► sleep(remaining)
//!                                                │
//!             cancel/pause ── token.cancel() ──┐ │
//!                                              ▼ ▼
//!                                     (silent)   publish TimerFired(id)
//!                                                      │
//!                                Engine timer_listener ┴─► dismiss(expired)
//! ```
//!
//! ## Rules
//! - `remaining <= 0` never arms a countdown (`duration = 0` means sticky)
//! - `pause` banks `remaining - elapsed` (saturating, never negative)
//! - `resume` re-arms from the banked value; no-op if not paused or spent
//! - `cancel` is always safe on an id with no active countdown
//! - a countdown that already fired and queued its event is harmless: the
//!   facade removal path is idempotent

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::events::{Bus, Event, EventKind};
use crate::toast::ToastId;

/// State of one countdown.
struct TimerEntry {
    /// Time left on the countdown, as of `started_at` (running) or as banked
    /// by the last pause (stopped).
    remaining: Duration,
    /// Scheduling timestamp; `None` while paused.
    started_at: Option<Instant>,
    /// Cancels the pending countdown task.
    cancel: CancellationToken,
}

/// One countdown per toast, with pause/resume accounting.
pub(crate) struct TimerCoordinator {
    entries: RwLock<HashMap<ToastId, TimerEntry>>,
    bus: Bus,
    runtime_token: CancellationToken,
}

impl TimerCoordinator {
    pub(crate) fn new(bus: Bus, runtime_token: CancellationToken) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            bus,
            runtime_token,
        }
    }

    /// Arms a countdown of `remaining` for `id`.
    ///
    /// No-op when `remaining` is zero. An existing countdown for the same id
    /// is cancelled first (re-arm semantics for duration changes).
    pub(crate) async fn start(&self, id: &ToastId, remaining: Duration) {
        let mut entries = self.entries.write().await;
        if let Some(old) = entries.remove(id) {
            old.cancel.cancel();
        }
        if remaining == Duration::ZERO {
            return;
        }

        let token = self.runtime_token.child_token();
        entries.insert(
            id.clone(),
            TimerEntry {
                remaining,
                started_at: Some(Instant::now()),
                cancel: token.clone(),
            },
        );
        drop(entries);

        self.spawn_countdown(id.as_arc(), remaining, token);
        self.bus.publish(
            Event::new(EventKind::TimerStarted)
                .with_toast(id.as_arc())
                .with_duration(remaining),
        );
    }

    /// Pauses the countdown, banking the remaining time.
    ///
    /// Idempotent: pausing an already-paused or unknown id changes nothing.
    /// Returns the banked remaining time when a pause actually happened.
    pub(crate) async fn pause(&self, id: &ToastId) -> Option<Duration> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(id)?;
        let started_at = entry.started_at.take()?;

        let elapsed = started_at.elapsed();
        entry.remaining = entry.remaining.saturating_sub(elapsed);
        entry.cancel.cancel();
        let remaining = entry.remaining;
        drop(entries);

        self.bus.publish(
            Event::new(EventKind::TimerPaused)
                .with_toast(id.as_arc())
                .with_duration(remaining),
        );
        Some(remaining)
    }

    /// Re-arms the countdown from the banked remaining time.
    ///
    /// No-op if the id is unknown, not paused, or the banked time is spent.
    pub(crate) async fn resume(&self, id: &ToastId) {
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get_mut(id) else {
            return;
        };
        if entry.started_at.is_some() || entry.remaining == Duration::ZERO {
            return;
        }

        let token = self.runtime_token.child_token();
        entry.cancel = token.clone();
        entry.started_at = Some(Instant::now());
        let remaining = entry.remaining;
        drop(entries);

        self.spawn_countdown(id.as_arc(), remaining, token);
        self.bus.publish(
            Event::new(EventKind::TimerResumed)
                .with_toast(id.as_arc())
                .with_duration(remaining),
        );
    }

    /// Cancels any countdown for `id`. Always safe to call.
    pub(crate) async fn cancel(&self, id: &ToastId) {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.remove(id) {
            entry.cancel.cancel();
        }
    }

    /// Cancels every countdown. Used at engine teardown and by dismiss-all.
    pub(crate) async fn cancel_all(&self) {
        let mut entries = self.entries.write().await;
        for (_, entry) in entries.drain() {
            entry.cancel.cancel();
        }
    }

    /// Time left on the countdown, or `None` when no countdown exists.
    ///
    /// For a running countdown this accounts for time elapsed since arming.
    pub(crate) async fn remaining(&self, id: &ToastId) -> Option<Duration> {
        let entries = self.entries.read().await;
        let entry = entries.get(id)?;
        match entry.started_at {
            Some(started_at) => Some(entry.remaining.saturating_sub(started_at.elapsed())),
            None => Some(entry.remaining),
        }
    }

    /// True when the countdown exists and is paused.
    pub(crate) async fn is_paused(&self, id: &ToastId) -> bool {
        let entries = self.entries.read().await;
        entries
            .get(id)
            .map(|e| e.started_at.is_none())
            .unwrap_or(false)
    }

    /// Spawns the countdown task: fires `TimerFired` unless cancelled first.
    fn spawn_countdown(&self, id: Arc<str>, remaining: Duration, token: CancellationToken) {
        let bus = self.bus.clone();
        // Deadline is anchored here; the task itself may be polled late.
        let deadline = Instant::now() + remaining;
        tokio::spawn(async move {
            tokio::select! {
                _ = time::sleep_until(deadline) => {
                    bus.publish(Event::new(EventKind::TimerFired).with_toast(id));
                }
                _ = token.cancelled() => {}
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> TimerCoordinator {
        TimerCoordinator::new(Bus::new(64), CancellationToken::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_remaining_never_arms() {
        let timers = coordinator();
        let id = ToastId::new("sticky");
        timers.start(&id, Duration::ZERO).await;
        assert!(timers.remaining(&id).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_publishes_timer_fired() {
        let timers = coordinator();
        let mut rx = timers.bus.subscribe();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(2)).await;
        let started = rx.recv().await.unwrap();
        assert_eq!(started.kind, EventKind::TimerStarted);

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.kind, EventKind::TimerFired);
        assert_eq!(fired.toast.as_deref(), Some("t"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_counts_from_start_not_first_poll() {
        let timers = coordinator();
        let mut rx = timers.bus.subscribe();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(2)).await;
        // The countdown task may not have been polled yet; the deadline must
        // still be anchored at start().
        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::time::sleep(Duration::from_millis(1)).await;

        let started = rx.try_recv().unwrap();
        assert_eq!(started.kind, EventKind::TimerStarted);
        let fired = rx.try_recv().unwrap();
        assert_eq!(fired.kind, EventKind::TimerFired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_banks_remaining_at_pause_time() {
        let timers = coordinator();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(5)).await;
        tokio::time::advance(Duration::from_secs(2)).await;

        let banked = timers.pause(&id).await.unwrap();
        assert_eq!(banked, Duration::from_secs(3));

        // Paused time does not tick.
        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(timers.remaining(&id).await, Some(Duration::from_secs(3)));
        assert!(timers.is_paused(&id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_is_idempotent() {
        let timers = coordinator();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(5)).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(timers.pause(&id).await, Some(Duration::from_secs(4)));
        assert_eq!(timers.pause(&id).await, None);
        assert_eq!(timers.remaining(&id).await, Some(Duration::from_secs(4)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_rearms_from_banked_time() {
        let timers = coordinator();
        let mut rx = timers.bus.subscribe();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(5)).await;
        tokio::time::advance(Duration::from_secs(2)).await;
        timers.pause(&id).await;
        timers.resume(&id).await;

        // Drain start/pause/resume, then expect the fire 3s after resume.
        let mut fired_at = None;
        for _ in 0..4 {
            let ev = rx.recv().await.unwrap();
            if ev.kind == EventKind::TimerFired {
                fired_at = Some(Instant::now());
                break;
            }
        }
        assert!(fired_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_fire_and_is_idempotent() {
        let timers = coordinator();
        let mut rx = timers.bus.subscribe();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(1)).await;
        timers.cancel(&id).await;
        timers.cancel(&id).await;

        tokio::time::advance(Duration::from_secs(5)).await;
        // Only the TimerStarted event is ever observed.
        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.kind, EventKind::TimerStarted);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_countdown() {
        let timers = coordinator();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(10)).await;
        tokio::time::advance(Duration::from_secs(4)).await;

        // Re-arm resets to the new value, elapsed fraction is dropped.
        timers.start(&id, Duration::from_secs(2)).await;
        assert_eq!(timers.remaining(&id).await, Some(Duration::from_secs(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_without_pause_is_noop() {
        let timers = coordinator();
        let id = ToastId::new("t");

        timers.start(&id, Duration::from_secs(5)).await;
        timers.resume(&id).await;
        assert!(!timers.is_paused(&id).await);

        timers.resume(&ToastId::new("ghost")).await;
    }
}
