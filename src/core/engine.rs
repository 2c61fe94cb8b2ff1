//! # Engine - the notification facade.
//!
//! [`Engine`] is the single entry point for creating, updating, and
//! dismissing toasts. It owns the registry, the timer coordinator, the stack
//! positioner, and the subscriber fan-out, and keeps them consistent by
//! routing **every** mutation through the facade paths below.
//!
//! ```text
//!  notify / success / error / ...          update(id, patch)
//!          │                                      │
//!          ▼                                      ▼
//!   ┌── create ────────────────┐        ┌── update ───────────┐
//!   │ registry.insert          │        │ registry.update     │
//!   │ stack overflow → evict   │        │ re-arm timer if the │
//!   │ timers.start             │        │ duration changed    │
//!   │ publish ToastCreated     │        │ publish ToastUpdated│
//!   └──────────────────────────┘        └─────────────────────┘
//!
//!   Bus ──► fanout_listener ──► SubscriberSet (log, announcer, ...)
//!       └─► timer_listener  ──► dismiss(reason = expired)
//! ```
//!
//! ## Rules
//! - unknown ids are silent no-ops for `update`, `dismiss`, `pause`, `resume`
//! - `dismiss` is idempotent; a toast's dismiss hook fires exactly once
//! - timer expiry is observed via the bus, never by mutating state from the
//!   countdown task, so a dismissal that races expiry resolves to one removal
//! - after `shutdown`, `notify` fails with [`NotifyError::Terminated`]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::core::config::EngineConfig;
use crate::core::registry::Registry;
use crate::core::stack::{StackPositioner, StackView};
use crate::core::timers::TimerCoordinator;
use crate::error::NotifyError;
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::{Announcement, Announcer, SubscriberSet};
use crate::toast::{
    ContentHandle, DismissReason, Position, ToastId, ToastOptions, ToastPatch, ToastView, Variant,
};

/// Notification engine facade.
///
/// Cheap to share: construct once via [`Engine::builder`], clone the
/// returned `Arc<Engine>` wherever toasts are raised.
pub struct Engine {
    cfg: EngineConfig,
    bus: Bus,
    registry: Registry,
    timers: TimerCoordinator,
    positioner: StackPositioner,
    subs: Arc<SubscriberSet>,
    announcer: Option<Arc<Announcer>>,
    runtime_token: CancellationToken,
    next_seq: AtomicU64,
    terminated: AtomicBool,
}

impl Engine {
    /// Starts building an engine from the given configuration.
    pub fn builder(cfg: EngineConfig) -> crate::core::builder::EngineBuilder {
        crate::core::builder::EngineBuilder::new(cfg)
    }

    pub(crate) fn from_parts(
        cfg: EngineConfig,
        bus: Bus,
        subs: Arc<SubscriberSet>,
        announcer: Option<Arc<Announcer>>,
        runtime_token: CancellationToken,
    ) -> Self {
        let positioner = StackPositioner::new(cfg.visible_limit());
        let timers = TimerCoordinator::new(bus.clone(), runtime_token.clone());
        Self {
            cfg,
            bus,
            registry: Registry::new(),
            timers,
            positioner,
            subs,
            announcer,
            runtime_token,
            next_seq: AtomicU64::new(0),
            terminated: AtomicBool::new(false),
        }
    }

    // === Creation ===

    /// Creates a toast from `opts` (a bare `&str` works as shorthand).
    ///
    /// Returns the id under which the toast is registered: the caller-chosen
    /// one, or a generated `toast-{n}`.
    pub async fn notify(&self, opts: impl Into<ToastOptions>) -> Result<ToastId, NotifyError> {
        self.create(opts.into()).await
    }

    /// Creates a success toast.
    pub async fn success(&self, opts: impl Into<ToastOptions>) -> Result<ToastId, NotifyError> {
        self.create(opts.into().with_variant(Variant::Success)).await
    }

    /// Creates an error toast.
    pub async fn error(&self, opts: impl Into<ToastOptions>) -> Result<ToastId, NotifyError> {
        self.create(opts.into().with_variant(Variant::Error)).await
    }

    /// Creates a warning toast.
    pub async fn warning(&self, opts: impl Into<ToastOptions>) -> Result<ToastId, NotifyError> {
        self.create(opts.into().with_variant(Variant::Warning)).await
    }

    /// Creates an info toast.
    pub async fn info(&self, opts: impl Into<ToastOptions>) -> Result<ToastId, NotifyError> {
        self.create(opts.into().with_variant(Variant::Info)).await
    }

    /// Creates a loading toast.
    ///
    /// Sticky unless the caller set a duration explicitly: a spinner should
    /// not vanish on its own.
    pub async fn loading(&self, opts: impl Into<ToastOptions>) -> Result<ToastId, NotifyError> {
        let mut opts = opts.into().with_variant(Variant::Loading);
        if opts.duration.is_none() {
            opts.duration = Some(Duration::ZERO);
        }
        self.create(opts).await
    }

    /// Creates a custom-content toast.
    pub async fn custom(
        &self,
        content: ContentHandle,
        opts: impl Into<ToastOptions>,
    ) -> Result<ToastId, NotifyError> {
        self.create(
            opts.into()
                .with_variant(Variant::Custom)
                .with_content(content),
        )
        .await
    }

    async fn create(&self, mut opts: ToastOptions) -> Result<ToastId, NotifyError> {
        if self.terminated.load(AtomicOrdering::SeqCst) {
            return Err(NotifyError::Terminated);
        }

        let (id, seq) = match opts.id.take() {
            Some(id) => (id, self.next_seq.fetch_add(1, AtomicOrdering::Relaxed)),
            None => self.generated_id().await,
        };
        let toast = opts.into_toast(&self.cfg, id.clone(), seq);
        let view = self.registry.insert(toast).await?;

        // Cap check happens after insert so the newcomer is part of the
        // partition; the positioner never selects it for eviction.
        let views = self.registry.views().await;
        for evicted in self.positioner.overflow_at(&views, view.position, &id) {
            self.bus.publish(
                Event::new(EventKind::StackEvicted)
                    .with_toast(evicted.as_arc())
                    .with_position(view.position),
            );
            self.dismiss_with_reason(&evicted, DismissReason::Evicted)
                .await;
        }

        self.timers.start(&id, view.duration).await;

        let mut ev = Event::new(EventKind::ToastCreated)
            .with_toast(id.as_arc())
            .with_position(view.position)
            .with_variant(view.variant)
            .with_duration(view.duration);
        if let Some(text) = view.announce_text() {
            ev = ev.with_text(text);
        }
        self.bus.publish(ev);

        Ok(id)
    }

    /// Draws a fresh generated id and its creation sequence.
    ///
    /// A caller-chosen id may squat a `toast-{n}` name; generated ids skip
    /// past live ones so `notify` without an explicit id cannot fail with
    /// `DuplicateId`.
    async fn generated_id(&self) -> (ToastId, u64) {
        loop {
            let seq = self.next_seq.fetch_add(1, AtomicOrdering::Relaxed);
            let id = ToastId::generated(seq);
            if self.registry.get_view(&id).await.is_none() {
                return (id, seq);
            }
        }
    }

    // === Mutation ===

    /// Merges `patch` into a live toast in place.
    ///
    /// Identity, position, and creation order are preserved. When the patch
    /// carries a duration the countdown restarts from the new full value
    /// (zero cancels it, making the toast sticky). Unknown ids are a no-op.
    pub async fn update(&self, id: &ToastId, patch: ToastPatch) {
        let rearm = patch.changes_duration();
        let Some(view) = self.registry.update(id, patch).await else {
            return;
        };

        if rearm {
            // start() drops any old countdown; zero only cancels.
            self.timers.start(id, view.duration).await;
        }

        let mut ev = Event::new(EventKind::ToastUpdated)
            .with_toast(id.as_arc())
            .with_position(view.position)
            .with_variant(view.variant);
        if let Some(text) = view.announce_text() {
            ev = ev.with_text(text);
        }
        self.bus.publish(ev);
    }

    // === Dismissal ===

    /// Dismisses one toast. Returns `false` when the id is not live
    /// (already dismissed, expired, or never existed).
    pub async fn dismiss(&self, id: &ToastId) -> bool {
        self.dismiss_with_reason(id, DismissReason::Dismissed).await
    }

    pub(crate) async fn dismiss_with_reason(&self, id: &ToastId, reason: DismissReason) -> bool {
        let Some(mut toast) = self.registry.remove(id).await else {
            return false;
        };
        self.timers.cancel(id).await;

        let view = toast.view();
        if let Some(hook) = toast.take_hook() {
            hook(&view);
        }
        self.bus.publish(
            Event::new(EventKind::ToastDismissed)
                .with_toast(id.as_arc())
                .with_position(view.position)
                .with_reason(reason.as_label()),
        );
        true
    }

    /// Dismisses every live toast in one sweep.
    ///
    /// The registry empties atomically first, so no countdown observed after
    /// this call can resurrect a removed toast.
    pub async fn dismiss_all(&self) {
        self.clear(None, DismissReason::DismissedAll).await;
    }

    /// Dismisses every toast anchored at `position`.
    pub async fn dismiss_position(&self, position: Position) {
        self.clear(Some(position), DismissReason::DismissedAll).await;
    }

    async fn clear(&self, position: Option<Position>, reason: DismissReason) {
        let removed = self.registry.remove_all(position).await;
        for mut toast in removed {
            let id = toast.id().clone();
            self.timers.cancel(&id).await;

            let view = toast.view();
            if let Some(hook) = toast.take_hook() {
                hook(&view);
            }
            self.bus.publish(
                Event::new(EventKind::ToastDismissed)
                    .with_toast(id.as_arc())
                    .with_position(view.position)
                    .with_reason(reason.as_label()),
            );
        }

        let mut ev = Event::new(EventKind::DismissedAll);
        if let Some(p) = position {
            ev = ev.with_position(p);
        }
        self.bus.publish(ev);
    }

    // === Hover pause ===

    /// Pauses the countdown (hover-enter). Gated on the toast's
    /// `pause_on_hover` flag; unknown ids and sticky toasts are no-ops.
    pub async fn pause(&self, id: &ToastId) {
        let Some(view) = self.registry.get_view(id).await else {
            return;
        };
        if !view.pause_on_hover {
            return;
        }
        self.timers.pause(id).await;
    }

    /// Resumes a paused countdown (hover-leave) from its banked remaining
    /// time. No-op when the toast is gone or was never paused.
    pub async fn resume(&self, id: &ToastId) {
        if self.registry.get_view(id).await.is_none() {
            return;
        }
        self.timers.resume(id).await;
    }

    // === Read side ===

    /// Snapshot of one toast.
    pub async fn get(&self, id: &ToastId) -> Option<ToastView> {
        self.registry.get_view(id).await
    }

    /// Ordered stack for one anchor, oldest first.
    pub async fn stack(&self, position: Position) -> Vec<ToastView> {
        let views = self.registry.views().await;
        self.positioner.stack_at(&views, position)
    }

    /// Every non-empty stack, in [`Position::ALL`](Position::ALL) order.
    pub async fn stacks(&self) -> Vec<StackView> {
        let views = self.registry.views().await;
        self.positioner.partitions(&views)
    }

    /// Time left on a toast's countdown; `None` for sticky or unknown ids.
    pub async fn remaining(&self, id: &ToastId) -> Option<Duration> {
        self.timers.remaining(id).await
    }

    /// Latest accessibility announcement, if one is still fresh.
    pub fn announcement(&self) -> Option<Announcement> {
        self.announcer.as_ref().and_then(|a| a.current())
    }

    /// Number of live toasts across all positions.
    pub async fn len(&self) -> usize {
        self.registry.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.registry.is_empty().await
    }

    /// Engine configuration (the defaults new toasts inherit).
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Subscribes to the raw event stream.
    ///
    /// For ad-hoc observation; long-lived consumers should implement
    /// [`Subscribe`](crate::Subscribe) and register through the builder to
    /// get a bounded queue and panic isolation.
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    // === Teardown ===

    /// Tears the engine down: sweeps every toast with the `shutdown` reason,
    /// cancels all countdowns, stops the listeners, and drains subscriber
    /// queues. Idempotent; `notify` fails afterwards.
    pub async fn shutdown(&self) {
        if self.terminated.swap(true, AtomicOrdering::SeqCst) {
            return;
        }

        self.bus.publish(Event::new(EventKind::ShutdownRequested));
        self.clear(None, DismissReason::Shutdown).await;
        self.timers.cancel_all().await;

        // Let the fan-out listener forward what is already on the bus before
        // the token stops it.
        tokio::task::yield_now().await;
        self.runtime_token.cancel();
        self.subs.shutdown().await;
    }

    // === Listeners ===

    pub(crate) fn spawn_listeners(self: &Arc<Self>) {
        self.spawn_fanout_listener();
        self.spawn_timer_listener();
    }

    /// Bridges the bus into the subscriber set.
    fn spawn_fanout_listener(&self) {
        let mut rx = self.bus.subscribe();
        let subs = Arc::clone(&self.subs);
        let token = self.runtime_token.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    msg = rx.recv() => match msg {
                        Ok(ev) => subs.emit(&ev),
                        Err(broadcast::error::RecvError::Closed) => break,
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    },
                }
            }
        });
    }

    /// Converts `TimerFired` into a facade-path dismissal.
    fn spawn_timer_listener(self: &Arc<Self>) {
        let mut rx = self.bus.subscribe();
        let token = self.runtime_token.clone();
        let engine = Arc::clone(self);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    msg = rx.recv() => match msg {
                        Ok(ev) => {
                            if ev.kind != EventKind::TimerFired {
                                continue;
                            }
                            let Some(id) = &ev.toast else { continue };
                            let id = ToastId::new(Arc::clone(id));
                            // Idempotent: a manual dismissal racing the
                            // countdown simply loses.
                            engine
                                .dismiss_with_reason(&id, DismissReason::Expired)
                                .await;
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    },
                }
            }
        });
    }
}
