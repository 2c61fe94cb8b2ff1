//! # Toast data model.
//!
//! This module provides the core toast-related types:
//! - [`Toast`] - the registry-owned record (not exported; see [`ToastView`])
//! - [`ToastView`] - read-only snapshot handed to renderers and hooks
//! - [`ToastId`] - caller-visible identifier
//! - [`ToastOptions`] / [`ToastPatch`] - creation config and partial update
//! - [`Variant`], [`Position`], [`Animation`], [`Theme`] - classification enums
//! - [`ContentHandle`] - opaque custom render payload

mod content;
mod options;
mod patch;
mod position;
mod record;
mod variant;

pub use content::ContentHandle;
pub use options::ToastOptions;
pub use patch::ToastPatch;
pub use position::Position;
pub use record::{DismissReason, Toast, ToastId, ToastView};
pub use variant::{Animation, Theme, Variant};
