//! # Engine builder.
//!
//! Assembles the bus, the subscriber fan-out, and the engine's background
//! listeners, then hands back an `Arc<Engine>` ready for use.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use toastkit::{Engine, EngineConfig, LogWriter};
//!
//! # async fn demo() {
//! let engine = Engine::builder(EngineConfig::default())
//!     .with_subscriber(Arc::new(LogWriter))
//!     .build();
//! engine.notify("ready").await.unwrap();
//! # }
//! ```
//!
//! ## Rules
//! - `build` spawns tasks, so it must run inside a tokio runtime
//! - the built-in announcer is registered automatically when
//!   `cfg.announce` is on; turn the flag off to supply your own
//! - subscriber registration is build-time only; there is no late attach

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::core::config::EngineConfig;
use crate::core::engine::Engine;
use crate::events::Bus;
use crate::subscribers::{Announcer, Subscribe, SubscriberSet};

/// Builder for [`Engine`].
pub struct EngineBuilder {
    cfg: EngineConfig,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl EngineBuilder {
    pub(crate) fn new(cfg: EngineConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Registers one event subscriber.
    pub fn with_subscriber(mut self, sub: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(sub);
        self
    }

    /// Registers a batch of event subscribers.
    pub fn with_subscribers(mut self, subs: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers.extend(subs);
        self
    }

    /// Wires everything together and spawns the background listeners.
    pub fn build(self) -> Arc<Engine> {
        let Self {
            cfg,
            mut subscribers,
        } = self;

        let bus = Bus::new(cfg.bus_capacity_clamped());
        let runtime_token = CancellationToken::new();

        let announcer = if cfg.announce {
            let announcer = Arc::new(Announcer::new(
                cfg.announce_debounce,
                cfg.announce_clear_after,
            ));
            subscribers.push(Arc::clone(&announcer) as Arc<dyn Subscribe>);
            Some(announcer)
        } else {
            None
        };

        let subs = Arc::new(SubscriberSet::new(subscribers, bus.clone()));
        let engine = Arc::new(Engine::from_parts(
            cfg,
            bus,
            subs,
            announcer,
            runtime_token,
        ));
        engine.spawn_listeners();
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::LogWriter;

    #[tokio::test]
    async fn test_build_registers_announcer_by_default() {
        let engine = Engine::builder(EngineConfig::default()).build();
        engine.notify("hello").await.unwrap();
        // The announcer was attached even though none was registered by hand.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(engine.announcement().is_some());
    }

    #[tokio::test]
    async fn test_announce_off_means_no_announcer() {
        let mut cfg = EngineConfig::default();
        cfg.announce = false;
        let engine = Engine::builder(cfg).build();
        engine.notify("quiet").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(engine.announcement().is_none());
    }

    #[tokio::test]
    async fn test_extra_subscribers_accepted() {
        let engine = Engine::builder(EngineConfig::default())
            .with_subscriber(Arc::new(LogWriter))
            .build();
        engine.notify("logged").await.unwrap();
        engine.shutdown().await;
    }
}
