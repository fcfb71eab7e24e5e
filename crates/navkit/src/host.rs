#![forbid(unsafe_code)]

//! Host container abstraction.
//!
//! The host is the rendering surface the controller mounts views into. It
//! owns the real view objects, layout, compositing and animation timing; the
//! controller only tells it which view to attach or detach and which slide
//! to play.
//!
//! # Call Ordering
//!
//! For every navigation step the controller issues, in order:
//!
//! 1. `remove_subview(old)` if a view is mounted.
//! 2. `perform_transition(..)` if the step is animated.
//! 3. `add_subview(new)`.
//!
//! Implementations must not call back into the controller; it is borrowed
//! for the duration of these calls.

use navkit_core::{LayoutDirection, detect_system_layout_direction};

use crate::screen::ViewId;
use crate::transition::Transition;

/// Rendering surface that hosts the active view.
pub trait HostContainer {
    /// Attach `view` as a child of the container.
    fn add_subview(&mut self, view: ViewId);

    /// Detach `view` from the container.
    fn remove_subview(&mut self, view: ViewId);

    /// Animate the next subview change with `transition`.
    fn perform_transition(&mut self, transition: &Transition);

    /// Layout direction of the container.
    ///
    /// Default: derived from the process locale.
    fn layout_direction(&self) -> LayoutDirection {
        detect_system_layout_direction()
    }
}
