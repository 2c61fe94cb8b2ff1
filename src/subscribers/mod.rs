//! # Event subscribers for the toastkit engine.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`]
//! fan-out, and built-in implementations for handling runtime events
//! broadcast through the [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Engine ── publish(Event) ──► Bus ──► fanout_listener ──► SubscriberSet
//!                                              │
//!                                         ┌────┴─────┬──────────┐
//!                                         ▼          ▼          ▼
//!                                     Announcer  LogWriter   Custom...
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** - observe and react to events (logging, metrics)
//! - **Stateful subscribers** - maintain internal state based on events
//!   ([`Announcer`], which mirrors toast text for assistive technology)

mod announcer;
mod log;
mod set;
mod subscribe;

pub use announcer::{Announcement, Announcer, Politeness};
pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
