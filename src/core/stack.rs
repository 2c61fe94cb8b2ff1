//! # Stack positioner: per-position ordering and capacity.
//!
//! Partitions the registry's live set by anchor position, orders each
//! partition by creation sequence ascending (oldest first), and decides which
//! toasts the visible cap pushes out.
//!
//! ## Rules
//! - ordering key is the creation sequence assigned at call time, so two
//!   `notify` calls issued in sequence on one position are always visually
//!   ordered by call order
//! - eviction policy is FIFO: when a partition exceeds the cap, its oldest
//!   toasts are dismissed first
//! - the positioner is pure over snapshots; the engine applies its eviction
//!   verdicts through the facade removal path

use crate::toast::{Position, ToastId, ToastView};

/// Ordered read-only view of one anchor's stack.
#[derive(Clone, Debug)]
pub struct StackView {
    pub position: Position,
    /// Oldest first; renderers wanting newest-on-top iterate in reverse.
    pub toasts: Vec<ToastView>,
}

/// Per-position ordering and capacity policy.
pub(crate) struct StackPositioner {
    max_visible: Option<usize>,
}

impl StackPositioner {
    pub(crate) fn new(max_visible: Option<usize>) -> Self {
        Self { max_visible }
    }

    /// Orders one anchor's partition from a creation-ordered snapshot.
    pub(crate) fn stack_at(&self, views: &[ToastView], position: Position) -> Vec<ToastView> {
        views
            .iter()
            .filter(|v| v.position == position)
            .cloned()
            .collect()
    }

    /// Builds every non-empty stack, in [`Position::ALL`] order.
    pub(crate) fn partitions(&self, views: &[ToastView]) -> Vec<StackView> {
        Position::ALL
            .iter()
            .filter_map(|&position| {
                let toasts = self.stack_at(views, position);
                if toasts.is_empty() {
                    None
                } else {
                    Some(StackView { position, toasts })
                }
            })
            .collect()
    }

    /// Ids the cap pushes out of one anchor, oldest first.
    ///
    /// `newcomer` is never evicted: the cap dismisses existing toasts to make
    /// room for the latest arrival.
    pub(crate) fn overflow_at(
        &self,
        views: &[ToastView],
        position: Position,
        newcomer: &ToastId,
    ) -> Vec<ToastId> {
        let Some(cap) = self.max_visible else {
            return Vec::new();
        };

        let stack = self.stack_at(views, position);
        if stack.len() <= cap {
            return Vec::new();
        }

        let excess = stack.len() - cap;
        stack
            .iter()
            .filter(|v| v.id != *newcomer)
            .take(excess)
            .map(|v| v.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::toast::ToastOptions;

    fn view(id: &str, seq: u64, position: Position) -> ToastView {
        ToastOptions::new()
            .with_position(position)
            .into_toast(&EngineConfig::default(), ToastId::new(id), seq)
            .view()
    }

    #[test]
    fn test_stack_orders_by_creation() {
        let p = StackPositioner::new(Some(5));
        let views = vec![
            view("a", 1, Position::TopRight),
            view("b", 2, Position::BottomLeft),
            view("c", 3, Position::TopRight),
        ];

        let stack = p.stack_at(&views, Position::TopRight);
        let ids: Vec<&str> = stack.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_partitions_skip_empty_anchors() {
        let p = StackPositioner::new(Some(5));
        let views = vec![view("a", 1, Position::TopRight)];

        let parts = p.partitions(&views);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].position, Position::TopRight);
    }

    #[test]
    fn test_overflow_evicts_oldest_first() {
        let p = StackPositioner::new(Some(2));
        let newcomer = ToastId::new("d");
        let views = vec![
            view("a", 1, Position::TopRight),
            view("b", 2, Position::TopRight),
            view("c", 3, Position::TopRight),
            view("d", 4, Position::TopRight),
        ];

        let evicted = p.overflow_at(&views, Position::TopRight, &newcomer);
        let ids: Vec<&str> = evicted.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_newcomer_never_evicted() {
        let p = StackPositioner::new(Some(1));
        let newcomer = ToastId::new("b");
        let views = vec![
            view("a", 1, Position::TopRight),
            view("b", 2, Position::TopRight),
        ];

        let evicted = p.overflow_at(&views, Position::TopRight, &newcomer);
        assert_eq!(evicted, vec![ToastId::new("a")]);
    }

    #[test]
    fn test_unlimited_cap_never_overflows() {
        let p = StackPositioner::new(None);
        let newcomer = ToastId::new("z");
        let views: Vec<ToastView> = (0..50)
            .map(|i| view(&format!("t{i}"), i, Position::TopCenter))
            .collect();
        assert!(p.overflow_at(&views, Position::TopCenter, &newcomer).is_empty());
    }
}
