//! # Toast registry - the single store of live notification records.
//!
//! The registry owns every live [`Toast`] keyed by id. It is mutated only
//! through the engine facade (single-writer discipline), so ordering between
//! calls from different event sources is fully determined by arrival order.
//!
//! ## Rules
//! - ids are unique across the whole registry, not per position
//! - `insert` is the only operation that can fail (duplicate id)
//! - `update` on an unknown id is a no-op returning `None`, not an error
//! - removal returns the owned record so the caller can cancel its timer and
//!   fire its dismiss hook exactly once
//! - no tombstones: a removed id may be reused immediately

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::NotifyError;
use crate::toast::{Position, Toast, ToastId, ToastPatch, ToastView};

/// Live toast records keyed by id.
pub(crate) struct Registry {
    toasts: RwLock<HashMap<ToastId, Toast>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            toasts: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a new record; fails if the id collides with a live toast.
    pub(crate) async fn insert(&self, toast: Toast) -> Result<ToastView, NotifyError> {
        let mut toasts = self.toasts.write().await;
        if toasts.contains_key(toast.id()) {
            return Err(NotifyError::DuplicateId {
                id: toast.id().as_str().to_string(),
            });
        }
        let view = toast.view();
        toasts.insert(toast.id().clone(), toast);
        Ok(view)
    }

    /// Merges the present fields of `patch` into the record.
    ///
    /// Returns the post-merge view, or `None` when the id is unknown.
    pub(crate) async fn update(&self, id: &ToastId, patch: ToastPatch) -> Option<ToastView> {
        let mut toasts = self.toasts.write().await;
        let toast = toasts.get_mut(id)?;
        toast.apply_patch(patch);
        Some(toast.view())
    }

    /// Deletes and returns the record, or `None` if absent.
    pub(crate) async fn remove(&self, id: &ToastId) -> Option<Toast> {
        self.toasts.write().await.remove(id)
    }

    /// Removes every record, optionally scoped to one anchor.
    ///
    /// Returns the removed set (ordered by creation) for caller-side cleanup:
    /// timer cancellation and hook firing.
    pub(crate) async fn remove_all(&self, position: Option<Position>) -> Vec<Toast> {
        let mut toasts = self.toasts.write().await;
        let ids: Vec<ToastId> = toasts
            .iter()
            .filter(|(_, t)| position.map_or(true, |p| t.position() == p))
            .map(|(id, _)| id.clone())
            .collect();

        let mut removed: Vec<Toast> = ids
            .into_iter()
            .filter_map(|id| toasts.remove(&id))
            .collect();
        removed.sort_unstable_by_key(|t| t.created_seq());
        removed
    }

    /// Snapshot of one record.
    pub(crate) async fn get_view(&self, id: &ToastId) -> Option<ToastView> {
        self.toasts.read().await.get(id).map(|t| t.view())
    }

    /// Snapshot of every live record, ordered by creation sequence.
    pub(crate) async fn views(&self) -> Vec<ToastView> {
        let toasts = self.toasts.read().await;
        let mut views: Vec<ToastView> = toasts.values().map(|t| t.view()).collect();
        views.sort_unstable_by_key(|v| v.created_seq);
        views
    }

    pub(crate) async fn len(&self) -> usize {
        self.toasts.read().await.len()
    }

    pub(crate) async fn is_empty(&self) -> bool {
        self.toasts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::toast::{ToastOptions, Variant};

    fn make(id: &str, seq: u64, opts: ToastOptions) -> Toast {
        opts.with_id(id)
            .into_toast(&EngineConfig::default(), ToastId::new(id), seq)
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let reg = Registry::new();
        reg.insert(make("a", 0, ToastOptions::new())).await.unwrap();

        let err = reg
            .insert(make("a", 1, ToastOptions::new()))
            .await
            .unwrap_err();
        assert_eq!(err.as_label(), "duplicate_id");
        assert_eq!(reg.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_merges_and_preserves_identity() {
        let reg = Registry::new();
        reg.insert(make(
            "a",
            3,
            ToastOptions::new()
                .with_title("Loading")
                .with_description("hold on"),
        ))
        .await
        .unwrap();

        let view = reg
            .update(
                &ToastId::new("a"),
                ToastPatch::new()
                    .with_variant(Variant::Success)
                    .with_title("Done"),
            )
            .await
            .unwrap();

        assert_eq!(view.id.as_str(), "a");
        assert_eq!(view.created_seq, 3);
        assert_eq!(view.variant, Variant::Success);
        assert_eq!(view.title.as_deref(), Some("Done"));
        // Field absent from the patch keeps its prior value.
        assert_eq!(view.description.as_deref(), Some("hold on"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let reg = Registry::new();
        let res = reg
            .update(&ToastId::new("ghost"), ToastPatch::new().with_title("x"))
            .await;
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn test_remove_all_scoped_to_position() {
        let reg = Registry::new();
        reg.insert(make(
            "a",
            0,
            ToastOptions::new().with_position(Position::TopRight),
        ))
        .await
        .unwrap();
        reg.insert(make(
            "b",
            1,
            ToastOptions::new().with_position(Position::BottomLeft),
        ))
        .await
        .unwrap();
        reg.insert(make(
            "c",
            2,
            ToastOptions::new().with_position(Position::TopRight),
        ))
        .await
        .unwrap();

        let removed = reg.remove_all(Some(Position::TopRight)).await;
        let ids: Vec<&str> = removed.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(reg.len().await, 1);

        let rest = reg.remove_all(None).await;
        assert_eq!(rest.len(), 1);
        assert!(reg.is_empty().await);
    }

    #[tokio::test]
    async fn test_views_ordered_by_creation() {
        let reg = Registry::new();
        for (id, seq) in [("x", 5), ("y", 1), ("z", 3)] {
            reg.insert(make(id, seq, ToastOptions::new())).await.unwrap();
        }
        let order: Vec<u64> = reg.views().await.iter().map(|v| v.created_seq).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }
}
