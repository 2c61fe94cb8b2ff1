//! # Creation-time toast configuration.
//!
//! [`ToastOptions`] is what callers hand to the engine facade. Every field is
//! optional; anything left unset falls back to the provider-level defaults in
//! [`EngineConfig`](crate::EngineConfig) when the record is materialized.
//!
//! A bare string is accepted as shorthand for `{ description }`:
//!
//! ```
//! use toastkit::ToastOptions;
//!
//! let opts: ToastOptions = "saved".into();
//! let full = ToastOptions::new().with_title("Saved").with_description("All changes synced");
//! # let _ = (opts, full);
//! ```

use std::time::Duration;

use crate::core::EngineConfig;
use crate::toast::content::ContentHandle;
use crate::toast::position::Position;
use crate::toast::record::{DismissHook, Toast, ToastId, ToastView};
use crate::toast::variant::{Animation, Theme, Variant};

/// Partial configuration for creating a toast.
#[derive(Default)]
pub struct ToastOptions {
    pub(crate) id: Option<ToastId>,
    pub(crate) variant: Option<Variant>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) position: Option<Position>,
    pub(crate) duration: Option<Duration>,
    pub(crate) dismissible: Option<bool>,
    pub(crate) pause_on_hover: Option<bool>,
    pub(crate) dismiss_on_click: Option<bool>,
    pub(crate) animation: Option<Animation>,
    pub(crate) theme: Option<Theme>,
    pub(crate) class_name: Option<String>,
    pub(crate) content: Option<ContentHandle>,
    pub(crate) on_dismiss: Option<DismissHook>,
}

impl ToastOptions {
    /// Empty options; everything inherits the engine defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies an external identifier instead of a generated one.
    ///
    /// Colliding with a live toast makes creation fail with
    /// [`NotifyError::DuplicateId`](crate::NotifyError::DuplicateId).
    pub fn with_id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the semantic variant explicitly.
    ///
    /// The facade's sugar (`success`, `error`, ...) overrides this.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Anchors the toast; immutable after creation.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the auto-dismiss countdown. `Duration::ZERO` means sticky.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the countdown from raw milliseconds.
    ///
    /// Negative or non-finite values clamp to zero (sticky) instead of being
    /// rejected.
    pub fn with_duration_ms(mut self, ms: f64) -> Self {
        self.duration = Some(clamp_duration_ms(ms));
        self
    }

    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = Some(pause_on_hover);
        self
    }

    pub fn with_dismiss_on_click(mut self, dismiss_on_click: bool) -> Self {
        self.dismiss_on_click = Some(dismiss_on_click);
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Style override forwarded verbatim to the renderer.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Attaches an opaque custom render payload.
    pub fn with_content(mut self, content: ContentHandle) -> Self {
        self.content = Some(content);
        self
    }

    /// Registers the single-fire dismiss hook.
    pub fn on_dismiss<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&ToastView) + Send + Sync + 'static,
    {
        self.on_dismiss = Some(Box::new(hook));
        self
    }

    /// Materializes the record, filling unset fields from `cfg`.
    pub(crate) fn into_toast(self, cfg: &EngineConfig, id: ToastId, created_seq: u64) -> Toast {
        Toast::new(
            id,
            created_seq,
            self.variant.unwrap_or_default(),
            self.title,
            self.description,
            self.position.unwrap_or(cfg.default_position),
            self.duration.unwrap_or(cfg.default_duration),
            self.dismissible.unwrap_or(cfg.dismissible),
            self.pause_on_hover.unwrap_or(cfg.pause_on_hover),
            self.dismiss_on_click.unwrap_or(false),
            self.animation.unwrap_or_default(),
            self.theme,
            self.class_name,
            self.content,
            self.on_dismiss,
        )
    }

    /// Reinterprets creation options as an update patch.
    ///
    /// Used by the promise adapter to morph the loading toast in place.
    /// Identity and placement (`id`, `position`) do not carry over; neither
    /// does a dismiss hook, which is registered at creation only.
    pub(crate) fn into_patch(self) -> crate::toast::patch::ToastPatch {
        let mut patch = crate::toast::patch::ToastPatch::new();
        patch.variant = self.variant;
        patch.title = self.title;
        patch.description = self.description;
        patch.duration = self.duration;
        patch.dismissible = self.dismissible;
        patch.pause_on_hover = self.pause_on_hover;
        patch.dismiss_on_click = self.dismiss_on_click;
        patch.animation = self.animation;
        patch.theme = self.theme;
        patch.class_name = self.class_name;
        patch.content = self.content;
        patch
    }
}

impl From<&str> for ToastOptions {
    /// Shorthand: a bare string becomes the description.
    fn from(text: &str) -> Self {
        ToastOptions::new().with_description(text)
    }
}

impl From<String> for ToastOptions {
    fn from(text: String) -> Self {
        ToastOptions::new().with_description(text)
    }
}

/// Clamps raw millisecond input to a valid countdown.
///
/// Negative and non-finite values mean "no auto-dismiss" rather than an error.
pub(crate) fn clamp_duration_ms(ms: f64) -> Duration {
    if !ms.is_finite() || ms <= 0.0 {
        Duration::ZERO
    } else {
        Duration::from_millis(ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        assert_eq!(clamp_duration_ms(-50.0), Duration::ZERO);
    }

    #[test]
    fn test_non_finite_duration_clamps_to_zero() {
        assert_eq!(clamp_duration_ms(f64::NAN), Duration::ZERO);
        assert_eq!(clamp_duration_ms(f64::INFINITY), Duration::ZERO);
        assert_eq!(clamp_duration_ms(f64::NEG_INFINITY), Duration::ZERO);
    }

    #[test]
    fn test_positive_duration_kept() {
        assert_eq!(clamp_duration_ms(2000.0), Duration::from_millis(2000));
    }

    #[test]
    fn test_bare_string_is_description_shorthand() {
        let opts: ToastOptions = "plain message".into();
        assert_eq!(opts.description.as_deref(), Some("plain message"));
        assert!(opts.title.is_none());
        assert!(opts.variant.is_none());
    }

    #[test]
    fn test_unset_fields_inherit_config_defaults() {
        let cfg = EngineConfig::default();
        let toast =
            ToastOptions::new().into_toast(&cfg, crate::ToastId::generated(7), 7);
        assert_eq!(toast.position(), cfg.default_position);
        assert_eq!(toast.duration(), cfg.default_duration);
        assert_eq!(toast.created_seq(), 7);
    }
}
