#![forbid(unsafe_code)]

//! Slide transitions requested from the host.
//!
//! | Step | Left-to-right | Right-to-left |
//! |------|---------------|---------------|
//! | Push | new content enters from the right | from the left |
//! | Pop  | prior content enters from the left | from the right |

use std::time::Duration;

use navkit_core::LayoutDirection;

/// Which navigation step a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// A screen was pushed.
    Push,
    /// One or more screens were popped.
    Pop,
}

/// Edge of the container the incoming content slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideEdge {
    Left,
    Right,
}

impl SlideEdge {
    /// The other edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A push-style slide the host should play for the next subview change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The navigation step being animated.
    pub kind: TransitionKind,
    /// Edge the incoming content enters from.
    pub from: SlideEdge,
    /// Requested duration; easing is up to the host.
    pub duration: Duration,
}

impl Transition {
    /// Slide for pushing a screen in a `direction` layout.
    #[must_use]
    pub const fn push(direction: LayoutDirection, duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Push,
            from: leading_edge(direction.flipped()),
            duration,
        }
    }

    /// Slide for popping back in a `direction` layout.
    #[must_use]
    pub const fn pop(direction: LayoutDirection, duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Pop,
            from: leading_edge(direction),
            duration,
        }
    }

    /// Slide for `kind` in a `direction` layout.
    #[must_use]
    pub const fn for_kind(
        kind: TransitionKind,
        direction: LayoutDirection,
        duration: Duration,
    ) -> Self {
        match kind {
            TransitionKind::Push => Self::push(direction, duration),
            TransitionKind::Pop => Self::pop(direction, duration),
        }
    }
}

/// Edge where reading starts.
const fn leading_edge(direction: LayoutDirection) -> SlideEdge {
    match direction {
        LayoutDirection::LeftToRight => SlideEdge::Left,
        LayoutDirection::RightToLeft => SlideEdge::Right,
    }
}
