#![forbid(unsafe_code)]

//! Screens, their views, and the navigation-aware capability.

use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::controller::{NavigationController, WeakNavigationController};

/// Global counter for unique view IDs.
static VIEW_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque handle for a displayable surface.
///
/// The host maps IDs to its own view objects; the controller only moves IDs
/// in and out of the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Mint a new process-unique view ID.
    #[must_use]
    pub fn next() -> Self {
        Self(VIEW_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// A view-owning unit that can be placed on a navigation stack.
///
/// Implementations must not call back into the owning controller from
/// [`view`](Self::view); it is invoked while the controller is borrowed.
pub trait Screen {
    /// The view mounted while this screen is active.
    fn view(&self) -> ViewId;

    /// Capability query for [`NavigationAware`].
    ///
    /// Screens that want a back-reference to their controller return
    /// `Some(self)`. Default: `None`.
    fn as_navigation_aware(&self) -> Option<&dyn NavigationAware> {
        None
    }
}

/// Capability for screens that hold a back-reference to their controller.
///
/// The controller writes the slot when the screen is pushed (and when the
/// screen is the root, at construction).
pub trait NavigationAware {
    /// Storage for the back-reference.
    fn navigation_slot(&self) -> &NavigationSlot;

    /// The owning controller, if it is still alive.
    fn navigation_controller(&self) -> Option<NavigationController> {
        self.navigation_slot().controller()
    }
}

/// Non-owning slot holding a screen's owning controller.
#[derive(Default)]
pub struct NavigationSlot {
    owner: RefCell<Option<WeakNavigationController>>,
}

impl NavigationSlot {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            owner: RefCell::new(None),
        }
    }

    /// Upgrade to the owning controller.
    ///
    /// Returns `None` if the slot was never written or the controller has
    /// been dropped.
    #[must_use]
    pub fn controller(&self) -> Option<NavigationController> {
        self.owner
            .borrow()
            .as_ref()
            .and_then(WeakNavigationController::upgrade)
    }

    /// Whether the slot points at a live controller.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.controller().is_some()
    }

    /// Whether the slot points at `controller`.
    #[must_use]
    pub fn is_owned_by(&self, controller: &NavigationController) -> bool {
        self.owner
            .borrow()
            .as_ref()
            .is_some_and(|weak| weak.points_to(controller))
    }

    pub(crate) fn attach(&self, owner: WeakNavigationController) {
        *self.owner.borrow_mut() = Some(owner);
    }
}

impl fmt::Debug for NavigationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}
