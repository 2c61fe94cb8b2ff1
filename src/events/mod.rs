//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to runtime events emitted by the engine facade, timer
//! coordinator, and subscriber workers.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Engine`, `TimerCoordinator`, `SubscriberSet` workers
//!   (overflow/panic).
//! - **Consumers**: the engine's fan-out listener (feeds `SubscriberSet`) and
//!   its timer listener (turns `TimerFired` into a facade-path dismissal).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
