//! # Provider-level engine configuration.
//!
//! Provides [`EngineConfig`] centralized defaults for the engine.
//!
//! Config is used in two ways:
//! 1. **Engine creation**: `Engine::builder(config).build()`
//! 2. **Toast defaults**: any field a caller leaves unset on
//!    [`ToastOptions`](crate::ToastOptions) falls back to these values
//!
//! ## Sentinel values
//! - `max_visible = 0` → unlimited (no cap, no eviction)
//! - `default_duration = 0s` → toasts are sticky unless given a duration

use std::time::Duration;

use crate::toast::{Position, Theme};

/// Global configuration for the notification engine.
///
/// Defines:
/// - **Toast defaults**: position, duration, interaction flags, theme
/// - **Stacking**: per-position visible cap
/// - **Accessibility**: announcer toggle and its timing windows
/// - **Layout hints**: container offsets forwarded to the renderer
/// - **Event system**: bus capacity for event delivery
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to
/// avoid sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Anchor used when a toast does not choose one.
    pub default_position: Position,

    /// Countdown used when a toast does not choose one.
    ///
    /// `Duration::ZERO` = sticky by default. The promise adapter also uses
    /// this for terminal states when the branch supplies no duration.
    pub default_duration: Duration,

    /// Theme applied when neither the toast nor the host overrides it.
    pub default_theme: Theme,

    /// Maximum simultaneously visible toasts per position.
    ///
    /// - `0` = unlimited (no eviction)
    /// - `n > 0` = the oldest toast in a full partition is dismissed before
    ///   a newcomer becomes visible (FIFO eviction)
    pub max_visible: usize,

    /// Default for `pause_on_hover` when a toast does not choose.
    pub pause_on_hover: bool,

    /// Default for `dismissible` when a toast does not choose.
    pub dismissible: bool,

    /// Enables the built-in accessibility announcer.
    pub announce: bool,

    /// Debounce window for coalescing rapid announcements.
    pub announce_debounce: Duration,

    /// Delay after which a stale announcement clears.
    pub announce_clear_after: Duration,

    /// Top container offset in pixels, forwarded to the renderer.
    pub offset_top: u16,

    /// Bottom container offset in pixels, forwarded to the renderer.
    pub offset_bottom: u16,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` messages
    /// will receive `Lagged` and skip older items. Minimum value is 1
    /// (enforced by Bus).
    pub bus_capacity: usize,
}

impl EngineConfig {
    /// Returns the per-position visible cap as an `Option`.
    ///
    /// - `None` → unlimited (no eviction)
    /// - `Some(n)` → at most `n` visible toasts per position
    #[inline]
    pub fn visible_limit(&self) -> Option<usize> {
        if self.max_visible == 0 {
            None
        } else {
            Some(self.max_visible)
        }
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for EngineConfig {
    /// Default configuration:
    ///
    /// - `default_position = top-right`
    /// - `default_duration = 4s`
    /// - `default_theme = System`
    /// - `max_visible = 5`
    /// - `pause_on_hover = true`, `dismissible = true`
    /// - `announce = true` (debounce 250ms, clear after 5s)
    /// - `offset_top = offset_bottom = 16`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            default_position: Position::TopRight,
            default_duration: Duration::from_secs(4),
            default_theme: Theme::System,
            max_visible: 5,
            pause_on_hover: true,
            dismissible: true,
            announce: true,
            announce_debounce: Duration::from_millis(250),
            announce_clear_after: Duration::from_secs(5),
            offset_top: 16,
            offset_bottom: 16,
            bus_capacity: 1024,
        }
    }
}
