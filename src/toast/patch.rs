//! # Partial update applied to a live toast.
//!
//! [`ToastPatch`] mirrors the updatable subset of
//! [`ToastOptions`](crate::ToastOptions). Fields left unset keep their prior
//! values; `id`, `position`, and the creation key are deliberately absent.
//!
//! ## Rules
//! - applying a patch to an unknown id is a silent no-op at the facade
//! - changing `duration` is a deliberate re-arm: the countdown restarts from
//!   the new value, elapsed fraction is not preserved

use std::time::Duration;

use crate::toast::content::ContentHandle;
use crate::toast::options::clamp_duration_ms;
use crate::toast::variant::{Animation, Theme, Variant};

/// Field-by-field merge payload for [`Engine::update`](crate::Engine::update).
#[derive(Default)]
pub struct ToastPatch {
    pub(crate) variant: Option<Variant>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) duration: Option<Duration>,
    pub(crate) dismissible: Option<bool>,
    pub(crate) pause_on_hover: Option<bool>,
    pub(crate) dismiss_on_click: Option<bool>,
    pub(crate) animation: Option<Animation>,
    pub(crate) theme: Option<Theme>,
    pub(crate) class_name: Option<String>,
    pub(crate) content: Option<ContentHandle>,
}

impl ToastPatch {
    /// Empty patch; applying it changes nothing but still counts as an update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions the variant, e.g. loading → success.
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

    /// Re-arms the countdown from `duration`. `Duration::ZERO` cancels it.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Re-arms from raw milliseconds; negative or non-finite clamps to zero.
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

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_content(mut self, content: ContentHandle) -> Self {
        self.content = Some(content);
        self
    }

    /// True when the patch re-arms the countdown.
    pub(crate) fn changes_duration(&self) -> bool {
        self.duration.is_some()
    }
}
