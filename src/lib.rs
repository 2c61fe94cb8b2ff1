//! # toastkit
//!
//! **Toastkit** is an async notification (toast) lifecycle engine for Rust.
//!
//! It owns the full lifecycle of transient notifications: creation with
//! per-toast overrides, auto-dismiss countdowns with hover pause/resume,
//! in-place updates, promise-tracked async operations, per-position stacking
//! with a visible cap, and an accessibility announcement mirror. Rendering is
//! out of scope: a host (TUI, GUI, web bridge) consumes the ordered stack
//! snapshots and the event stream.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   notify / success / error / loading / promise / update / dismiss
//!                              │
//! ┌────────────────────────────▼──────────────────────────────────────┐
//! │  Engine (facade)                                                  │
//! │  - Registry (live toasts by id, creation-ordered snapshots)       │
//! │  - TimerCoordinator (one countdown per toast, pause/resume)       │
//! │  - StackPositioner (per-position order + visible cap)             │
//! │  - Bus (broadcast events)                                         │
//! │  - SubscriberSet (fans out to user subscribers)                   │
//! └──────┬──────────────────────────────┬─────────────────────────────┘
//!        │ publishes                    │ countdown tasks publish
//!        │ ToastCreated/Updated/        │ TimerFired
//!        │ Dismissed, StackEvicted, ... │
//!        ▼                              ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Bus (broadcast channel)                    │
//! │                (capacity: EngineConfig::bus_capacity)             │
//! └───────────────┬───────────────────────────────┬───────────────────┘
//!                 ▼                               ▼
//!         fanout_listener                   timer_listener
//!                 │                               │
//!                 ▼                               ▼
//!          SubscriberSet                 Engine::dismiss(expired)
//!        (per-sub queues)
//!        ┌───────┼────────┐
//!        ▼       ▼        ▼
//!     worker1 worker2  workerN
//!        ▼       ▼        ▼
//!      log   announcer  custom
//! ```
//!
//! ### Lifecycle
//! ```text
//! ToastOptions ──► Engine::notify ──► Registry ──► TimerCoordinator
//!
//!   ├─► id assigned (caller-chosen or generated "toast-{n}")
//!   ├─► unset fields inherit EngineConfig defaults
//!   ├─► cap full? ─► evict oldest at that position (reason: evicted)
//!   ├─► duration > 0 ─► arm countdown
//!   │      ├─ hover ─► pause (bank remaining) ─► leave ─► resume
//!   │      └─ countdown fires ─► dismiss (reason: expired)
//!   ├─► update(id, patch) ─► merge in place, re-arm if duration changed
//!   └─► dismiss / dismiss_all / shutdown ─► remove, fire hook once,
//!        publish ToastDismissed with reason
//! ```
//!
//! ## Features
//! | Area              | Description                                                       | Key types / traits                        |
//! |-------------------|-------------------------------------------------------------------|-------------------------------------------|
//! | **Creation**      | Variant sugar, per-toast overrides, custom payloads.              | [`ToastOptions`], [`Variant`], [`ContentHandle`] |
//! | **Timers**        | Auto-dismiss, hover pause/resume, sticky toasts.                  | [`Engine::pause`], [`Engine::resume`]     |
//! | **Updates**       | In-place morphing, e.g. loading → success.                        | [`ToastPatch`], [`Engine::update`]        |
//! | **Promises**      | One toast tracking an async operation end to end.                 | [`PromiseHandlers`], [`PromiseBranch`]    |
//! | **Stacking**      | Per-position order, visible cap with FIFO eviction.               | [`StackView`], [`Position`]               |
//! | **Accessibility** | Debounced live-region text mirror.                                | [`Announcer`], [`Announcement`]           |
//! | **Subscriber API**| Hook into lifecycle events (logging, metrics, bridges).           | [`Subscribe`], [`SubscriberSet`]          |
//! | **Errors**        | Typed creation failures; unknown ids are silent no-ops.           | [`NotifyError`]                           |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use toastkit::{Engine, EngineConfig, ToastOptions, ToastPatch, Variant};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = Engine::builder(EngineConfig::default()).build();
//!
//!     // Fire-and-forget with the config defaults.
//!     engine.success("Profile saved").await?;
//!
//!     // A named, sticky toast morphed in place later.
//!     let id = engine
//!         .notify(
//!             ToastOptions::new()
//!                 .with_id("sync")
//!                 .with_title("Syncing")
//!                 .with_duration(Duration::ZERO),
//!         )
//!         .await?;
//!     engine
//!         .update(
//!             &id,
//!             ToastPatch::new()
//!                 .with_variant(Variant::Success)
//!                 .with_title("Synced")
//!                 .with_duration(Duration::from_secs(2)),
//!         )
//!         .await;
//!
//!     engine.shutdown().await;
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod events;
mod subscribers;
mod toast;

// ---- Public re-exports ----

pub use crate::core::{
    Engine, EngineBuilder, EngineConfig, PromiseBranch, PromiseHandlers, StackView,
};
pub use error::NotifyError;
pub use events::{Bus, Event, EventKind};
pub use subscribers::{
    Announcement, Announcer, LogWriter, Politeness, Subscribe, SubscriberSet,
};
pub use toast::{
    Animation, ContentHandle, DismissReason, Position, Theme, ToastId, ToastOptions, ToastPatch,
    ToastView, Variant,
};
