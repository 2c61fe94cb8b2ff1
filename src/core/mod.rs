//! # Core: engine facade, registry, timers, stacking, promise adapter.
//!
//! - [`Engine`] is the facade every mutation goes through
//! - [`EngineBuilder`] wires the bus, subscribers, and listeners
//! - [`EngineConfig`] holds provider-level defaults
//! - [`StackView`] is the ordered per-anchor render snapshot
//! - [`PromiseHandlers`] / [`PromiseBranch`] track async operations

mod builder;
mod config;
mod engine;
mod promise;
mod registry;
mod stack;
mod timers;

pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
pub use promise::{PromiseBranch, PromiseHandlers};
pub use stack::StackView;
