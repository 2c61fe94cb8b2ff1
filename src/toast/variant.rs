//! # Semantic classification of toasts, plus inert presentation hints.
//!
//! [`Variant`] is the semantic category the engine acts on (it decides the
//! announcer's politeness and is how a loading toast morphs into a terminal
//! state). [`Animation`] and [`Theme`] are carried for the renderer but never
//! interpreted by the engine.

/// Semantic category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Neutral message with no implied outcome.
    Default,
    Success,
    Error,
    Warning,
    Info,
    /// In-flight operation; typically `duration = 0` until updated to a
    /// terminal variant.
    Loading,
    /// Caller-rendered payload (see [`ContentHandle`](crate::ContentHandle)).
    Custom,
}

impl Variant {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
            Variant::Info => "info",
            Variant::Loading => "loading",
            Variant::Custom => "custom",
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Default
    }
}

/// Entry/exit animation hint, forwarded verbatim to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    Slide,
    Fade,
    Bounce,
    /// No animation.
    None,
}

impl Default for Animation {
    fn default() -> Self {
        Animation::Slide
    }
}

/// Per-toast theme override, forwarded verbatim to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the host application's theme.
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}
