//! # The live toast record and its read-only render snapshot.
//!
//! [`Toast`] is the registry-owned record: it carries the single-fire dismiss
//! hook and is therefore neither `Clone` nor exposed outside the engine.
//! [`ToastView`] is the cheap snapshot handed to renderers and dismiss hooks.
//!
//! ## Rules
//! - `id` and the creation key are immutable for the record's lifetime
//! - the dismiss hook fires **exactly once**, at removal, then is discarded
//! - remaining time lives in the timer coordinator, not here

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::toast::content::ContentHandle;
use crate::toast::patch::ToastPatch;
use crate::toast::position::Position;
use crate::toast::variant::{Animation, Theme, Variant};

/// Caller-visible toast identifier.
///
/// Unique across the whole registry for the record's lifetime. Internally
/// generated ids never collide; caller-chosen ids may, in which case creation
/// fails with [`NotifyError::DuplicateId`](crate::NotifyError::DuplicateId).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(Arc<str>);

impl ToastId {
    /// Wraps a caller-chosen identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Builds an internally generated identifier from the creation sequence.
    pub(crate) fn generated(seq: u64) -> Self {
        Self(format!("toast-{seq}").into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cheap clone of the backing allocation, for event payloads.
    pub(crate) fn as_arc(&self) -> Arc<str> {
        Arc::clone(&self.0)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Why a toast left the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    /// Countdown ran out.
    Expired,
    /// Explicit `dismiss(id)` call.
    Dismissed,
    /// Swept by `dismiss_all()`.
    DismissedAll,
    /// Pushed out by the per-position visible cap.
    Evicted,
    /// Engine teardown.
    Shutdown,
}

impl DismissReason {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            DismissReason::Expired => "expired",
            DismissReason::Dismissed => "dismissed",
            DismissReason::DismissedAll => "dismissed_all",
            DismissReason::Evicted => "evicted",
            DismissReason::Shutdown => "shutdown",
        }
    }
}

/// Single-fire removal hook.
///
/// `Sync` because the owning record lives behind the registry's shared lock.
pub type DismissHook = Box<dyn FnOnce(&ToastView) + Send + Sync + 'static>;

/// Registry-owned toast record.
pub struct Toast {
    id: ToastId,
    variant: Variant,
    title: Option<String>,
    description: Option<String>,
    position: Position,
    duration: Duration,
    dismissible: bool,
    pause_on_hover: bool,
    dismiss_on_click: bool,
    animation: Animation,
    theme: Option<Theme>,
    class_name: Option<String>,
    content: Option<ContentHandle>,
    created_seq: u64,
    created_at: Instant,
    on_dismiss: Option<DismissHook>,
}

impl Toast {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: ToastId,
        created_seq: u64,
        variant: Variant,
        title: Option<String>,
        description: Option<String>,
        position: Position,
        duration: Duration,
        dismissible: bool,
        pause_on_hover: bool,
        dismiss_on_click: bool,
        animation: Animation,
        theme: Option<Theme>,
        class_name: Option<String>,
        content: Option<ContentHandle>,
        on_dismiss: Option<DismissHook>,
    ) -> Self {
        Self {
            id,
            variant,
            title,
            description,
            position,
            duration,
            dismissible,
            pause_on_hover,
            dismiss_on_click,
            animation,
            theme,
            class_name,
            content,
            created_seq,
            created_at: Instant::now(),
            on_dismiss,
        }
    }

    pub fn id(&self) -> &ToastId {
        &self.id
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Insertion-order key, assigned at call time.
    pub fn created_seq(&self) -> u64 {
        self.created_seq
    }

    /// Merges the present fields of `patch` into this record.
    ///
    /// `id`, `position`, and the creation key are immutable and not part of
    /// the patch type at all.
    pub(crate) fn apply_patch(&mut self, patch: ToastPatch) {
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(dismissible) = patch.dismissible {
            self.dismissible = dismissible;
        }
        if let Some(pause_on_hover) = patch.pause_on_hover {
            self.pause_on_hover = pause_on_hover;
        }
        if let Some(dismiss_on_click) = patch.dismiss_on_click {
            self.dismiss_on_click = dismiss_on_click;
        }
        if let Some(animation) = patch.animation {
            self.animation = animation;
        }
        if let Some(theme) = patch.theme {
            self.theme = Some(theme);
        }
        if let Some(class_name) = patch.class_name {
            self.class_name = Some(class_name);
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
    }

    /// Takes the dismiss hook, leaving `None` behind.
    pub(crate) fn take_hook(&mut self) -> Option<DismissHook> {
        self.on_dismiss.take()
    }

    /// Read-only snapshot for rendering and hooks.
    pub fn view(&self) -> ToastView {
        ToastView {
            id: self.id.clone(),
            variant: self.variant,
            title: self.title.clone(),
            description: self.description.clone(),
            position: self.position,
            duration: self.duration,
            dismissible: self.dismissible,
            pause_on_hover: self.pause_on_hover,
            dismiss_on_click: self.dismiss_on_click,
            animation: self.animation,
            theme: self.theme,
            class_name: self.class_name.clone(),
            content: self.content.clone(),
            created_seq: self.created_seq,
            created_at: self.created_at,
        }
    }

}

/// Read-only snapshot of a toast, safe to hand to renderers.
#[derive(Clone, Debug)]
pub struct ToastView {
    pub id: ToastId,
    pub variant: Variant,
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Position,
    pub duration: Duration,
    pub dismissible: bool,
    pub pause_on_hover: bool,
    pub dismiss_on_click: bool,
    pub animation: Animation,
    pub theme: Option<Theme>,
    pub class_name: Option<String>,
    pub content: Option<ContentHandle>,
    pub created_seq: u64,
    pub created_at: Instant,
}

impl ToastView {
    /// True when the toast never auto-dismisses.
    pub fn is_sticky(&self) -> bool {
        self.duration == Duration::ZERO
    }

    /// Text mirrored into the accessibility announcement channel.
    ///
    /// Title and description joined when both are present; `None` for a toast
    /// that only carries custom content.
    pub fn announce_text(&self) -> Option<String> {
        match (&self.title, &self.description) {
            (Some(t), Some(d)) => Some(format!("{t}: {d}")),
            (Some(t), None) => Some(t.clone()),
            (None, Some(d)) => Some(d.clone()),
            (None, None) => None,
        }
    }
}
