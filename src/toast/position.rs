//! # Anchor positions for notification stacks.
//!
//! A toast renders inside one of six screen regions. The position is chosen
//! at creation time and never changes afterwards: moving a live toast between
//! stacks would reshuffle two partitions at once and break the per-position
//! ordering guarantee.

/// Screen region a toast stack is anchored to.
///
/// Immutable after creation. The engine partitions live toasts by position
/// and orders each partition by creation sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All six anchors, in rendering order (top row first).
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// True for the three top anchors.
    #[inline]
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    /// Returns a short stable label (kebab-case) for use in logs and markup.
    pub fn as_label(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl Default for Position {
    /// Returns [`Position::TopRight`], the conventional toast anchor.
    fn default() -> Self {
        Position::TopRight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_anchors_flagged() {
        for p in Position::ALL {
            assert_eq!(p.is_top(), p.as_label().starts_with("top-"));
        }
    }
}
