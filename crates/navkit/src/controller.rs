#![forbid(unsafe_code)]

//! Navigation controller: a permanent root plus a stack of pushed screens.
//!
//! # States
//!
//! - **Rooted**: no pushed screens, the root is active.
//! - **Pushed(n)**: `n >= 1` pushed screens, the most recent one is active.
//!
//! # Invariants
//!
//! - `view_controllers_count() == pushed + 1`, never less than 1.
//! - At most one view is mounted in the host; exactly one after the first
//!   mount.
//! - The root is never popped.
//! - A pushed [`NavigationAware`](crate::NavigationAware) screen's slot
//!   points at this controller before `push` returns.
//!
//! # Failure Modes
//!
//! | Call | Condition | Behavior |
//! |------|-----------|----------|
//! | `new` | root is not navigation-aware | `Err(NavigationError::RootNotNavigationAware)` |
//! | `pop` | Rooted | `None`, no host calls |
//! | `pop_to_root` | Rooted | `None`, no host calls |
//! | `pop_to` | target absent or already on top | `None`, no host calls |
//!
//! # Handles
//!
//! [`NavigationController`] is a cheap, clonable handle to shared state.
//! Screens hold a [`WeakNavigationController`] instead, so dropping every
//! strong handle frees the controller even while screens are still alive.

use std::cell::RefCell;
use std::fmt;
use std::iter;
use std::rc::{Rc, Weak};

use navkit_core::{LayoutDirection, Stack};
use tracing::{debug, error, trace, trace_span};

use crate::config::NavigationConfig;
use crate::delegate::NavigationDelegate;
use crate::error::NavigationError;
use crate::host::HostContainer;
use crate::screen::{Screen, ViewId};
use crate::transition::{Transition, TransitionKind};

/// Shared state behind every controller handle.
struct NavigationState {
    root: Rc<dyn Screen>,
    /// Pushed screens; head is the active one.
    stack: Stack<Rc<dyn Screen>>,
    /// View currently attached to the host.
    mounted: Option<ViewId>,
    /// Set by the first `view_will_appear`.
    appeared: bool,
    host: Box<dyn HostContainer>,
    config: NavigationConfig,
    delegate: Option<Rc<dyn NavigationDelegate>>,
}

impl NavigationState {
    fn top(&self) -> &Rc<dyn Screen> {
        self.stack.head().unwrap_or(&self.root)
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.config
            .layout_direction
            .unwrap_or_else(|| self.host.layout_direction())
    }

    fn transition_for(&self, kind: TransitionKind, animated: bool) -> Option<Transition> {
        if !animated || self.config.reduced_motion {
            return None;
        }
        Some(Transition::for_kind(
            kind,
            self.layout_direction(),
            self.config.transition_duration(),
        ))
    }

    fn unmount(&mut self) {
        if let Some(view) = self.mounted.take() {
            self.host.remove_subview(view);
        }
    }

    /// Mount `view`, animated when `transition` is given. Returns whether a
    /// transition was requested.
    fn mount(&mut self, view: ViewId, transition: Option<Transition>) -> bool {
        let animated = transition.is_some();
        if let Some(transition) = transition {
            let _span = trace_span!(
                "navkit_transition",
                kind = ?transition.kind,
                from = ?transition.from,
                duration_ms = transition.duration.as_millis() as u64
            )
            .entered();
            self.host.perform_transition(&transition);
        }
        self.host.add_subview(view);
        self.mounted = Some(view);
        animated
    }

    /// Pop `count` screens and remount the new top with one transition.
    ///
    /// `count` must not exceed the pushed depth. Returns the popped screens
    /// top first.
    fn pop_screens(&mut self, count: usize, animated: bool) -> (Vec<Rc<dyn Screen>>, bool) {
        debug_assert!(count <= self.stack.len(), "pop past the root");
        self.unmount();
        let mut popped = Vec::with_capacity(count);
        for _ in 0..count {
            match self.stack.pop() {
                Ok(screen) => popped.push(screen),
                Err(err) => {
                    error!(%err, requested = count, "navkit: pop reached the root");
                    break;
                }
            }
        }
        let view = self.top().view();
        let transition = self.transition_for(TransitionKind::Pop, animated);
        let animated = self.mount(view, transition);
        (popped, animated)
    }
}

/// Handle to a navigation controller.
///
/// Cloning the handle shares the same controller.
#[derive(Clone)]
pub struct NavigationController {
    inner: Rc<RefCell<NavigationState>>,
}

/// Non-owning reference to a [`NavigationController`].
#[derive(Clone)]
pub struct WeakNavigationController {
    inner: Weak<RefCell<NavigationState>>,
}

impl WeakNavigationController {
    /// Upgrade to a strong handle if the controller is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<NavigationController> {
        self.inner
            .upgrade()
            .map(|inner| NavigationController { inner })
    }

    pub(crate) fn points_to(&self, controller: &NavigationController) -> bool {
        Weak::ptr_eq(&self.inner, &Rc::downgrade(&controller.inner))
    }
}

impl fmt::Debug for WeakNavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakNavigationController")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl NavigationController {
    /// Create a controller with the default configuration.
    ///
    /// Nothing is mounted until [`view_will_appear`](Self::view_will_appear).
    ///
    /// # Errors
    ///
    /// [`NavigationError::RootNotNavigationAware`] if `root` does not
    /// implement [`NavigationAware`](crate::NavigationAware).
    pub fn new(
        root: Rc<dyn Screen>,
        host: impl HostContainer + 'static,
    ) -> Result<Self, NavigationError> {
        Self::with_config(root, host, NavigationConfig::default())
    }

    /// Create a controller with an explicit configuration.
    ///
    /// # Errors
    ///
    /// [`NavigationError::RootNotNavigationAware`] if `root` does not
    /// implement [`NavigationAware`](crate::NavigationAware).
    pub fn with_config(
        root: Rc<dyn Screen>,
        host: impl HostContainer + 'static,
        config: NavigationConfig,
    ) -> Result<Self, NavigationError> {
        if root.as_navigation_aware().is_none() {
            return Err(NavigationError::RootNotNavigationAware);
        }

        let controller = Self {
            inner: Rc::new(RefCell::new(NavigationState {
                root: Rc::clone(&root),
                stack: Stack::new(),
                mounted: None,
                appeared: false,
                host: Box::new(host),
                config,
                delegate: None,
            })),
        };

        if let Some(aware) = root.as_navigation_aware() {
            aware.navigation_slot().attach(controller.downgrade());
        }
        debug!(root = %root.view(), "navkit: controller created");
        Ok(controller)
    }

    /// Create a non-owning reference to this controller.
    #[must_use]
    pub fn downgrade(&self) -> WeakNavigationController {
        WeakNavigationController {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether two handles refer to the same controller.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Install or clear the delegate.
    ///
    /// The previous delegate is dropped after the controller is released, so
    /// its `Drop` may query the controller.
    pub fn set_delegate(&self, delegate: Option<Rc<dyn NavigationDelegate>>) {
        let previous = std::mem::replace(&mut self.inner.borrow_mut().delegate, delegate);
        drop(previous);
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> NavigationConfig {
        self.inner.borrow().config.clone()
    }

    /// Replace the configuration. Applies from the next navigation step.
    pub fn set_config(&self, config: NavigationConfig) {
        let previous = std::mem::replace(&mut self.inner.borrow_mut().config, config);
        drop(previous);
    }

    // --- Lifecycle ---

    /// Signal that the controller's own view is about to become visible.
    ///
    /// The first call mounts the active view without a transition. Later
    /// calls do nothing. If a screen was pushed (and therefore mounted)
    /// before the first call, nothing is mounted again.
    pub fn view_will_appear(&self) {
        let shown = {
            let mut state = self.inner.borrow_mut();
            if state.appeared {
                return;
            }
            state.appeared = true;
            if state.mounted.is_some() {
                return;
            }
            let top = Rc::clone(state.top());
            let view = top.view();
            state.mount(view, None);
            debug!(view = %view, "navkit: initial mount");
            (top, state.delegate.clone())
        };
        self.notify(shown.1, &shown.0, false);
    }

    /// Whether [`view_will_appear`](Self::view_will_appear) has been called.
    #[must_use]
    pub fn has_appeared(&self) -> bool {
        self.inner.borrow().appeared
    }

    // --- Navigation ---

    /// Push `screen` and make it active.
    ///
    /// If the screen is navigation-aware, its slot is pointed at this
    /// controller. With `animated`, the host is asked for a push slide
    /// before the new view is added.
    pub fn push(&self, screen: Rc<dyn Screen>, animated: bool) {
        let owner = self.downgrade();
        let (animated, delegate) = {
            let mut state = self.inner.borrow_mut();
            state.unmount();
            state.stack.push(Rc::clone(&screen));
            if let Some(aware) = screen.as_navigation_aware() {
                aware.navigation_slot().attach(owner);
            }
            let view = screen.view();
            let transition = state.transition_for(TransitionKind::Push, animated);
            let animated = state.mount(view, transition);
            debug!(
                depth = state.stack.len(),
                view = %view,
                animated,
                "navkit: push"
            );
            (animated, state.delegate.clone())
        };
        self.notify(delegate, &screen, animated);
    }

    /// Pop the active screen and return it.
    ///
    /// Returns `None` without touching the host when only the root remains.
    pub fn pop(&self, animated: bool) -> Option<Rc<dyn Screen>> {
        let (popped, top, animated, delegate) = {
            let mut state = self.inner.borrow_mut();
            if state.stack.is_empty() {
                trace!("navkit: pop at root");
                return None;
            }
            let (popped, animated) = state.pop_screens(1, animated);
            let top = Rc::clone(state.top());
            debug!(
                depth = state.stack.len(),
                view = %top.view(),
                animated,
                "navkit: pop"
            );
            (popped, top, animated, state.delegate.clone())
        };
        self.notify(delegate, &top, animated);
        popped.into_iter().next()
    }

    /// Pop every pushed screen, returning them top first.
    ///
    /// The depth is taken once at call time. The host sees a single unmount
    /// and a single mount of the root view. Returns `None` when already at
    /// the root.
    pub fn pop_to_root(&self, animated: bool) -> Option<Vec<Rc<dyn Screen>>> {
        let depth = self.inner.borrow().stack.len();
        if depth == 0 {
            trace!("navkit: pop_to_root at root");
            return None;
        }
        self.pop_count(depth, animated)
    }

    /// Pop until `target` is the active screen, returning the popped screens
    /// top first.
    ///
    /// Returns `None` if `target` is not in the history or is already on top.
    /// Passing the root behaves like [`pop_to_root`](Self::pop_to_root).
    pub fn pop_to(
        &self,
        target: &Rc<dyn Screen>,
        animated: bool,
    ) -> Option<Vec<Rc<dyn Screen>>> {
        let count = {
            let state = self.inner.borrow();
            if Rc::ptr_eq(target, &state.root) {
                state.stack.len()
            } else {
                state.stack.iter().position(|s| Rc::ptr_eq(s, target))?
            }
        };
        if count == 0 {
            trace!("navkit: pop_to target already on top");
            return None;
        }
        self.pop_count(count, animated)
    }

    fn pop_count(&self, count: usize, animated: bool) -> Option<Vec<Rc<dyn Screen>>> {
        let (popped, top, animated, delegate) = {
            let mut state = self.inner.borrow_mut();
            let (popped, animated) = state.pop_screens(count, animated);
            let top = Rc::clone(state.top());
            debug!(
                popped = popped.len(),
                depth = state.stack.len(),
                view = %top.view(),
                animated,
                "navkit: pop many"
            );
            (popped, top, animated, state.delegate.clone())
        };
        self.notify(delegate, &top, animated);
        Some(popped)
    }

    fn notify(
        &self,
        delegate: Option<Rc<dyn NavigationDelegate>>,
        screen: &Rc<dyn Screen>,
        animated: bool,
    ) {
        if let Some(delegate) = delegate {
            delegate.did_show(self, screen, animated);
        }
    }

    // --- State Queries ---

    /// Number of screens in the history, root included.
    #[must_use]
    pub fn view_controllers_count(&self) -> usize {
        self.inner.borrow().stack.len() + 1
    }

    /// The active screen: the most recent push, or the root.
    #[must_use]
    pub fn top_view_controller(&self) -> Rc<dyn Screen> {
        Rc::clone(self.inner.borrow().top())
    }

    /// The permanent root screen.
    #[must_use]
    pub fn root_view_controller(&self) -> Rc<dyn Screen> {
        Rc::clone(&self.inner.borrow().root)
    }

    /// Full history top to bottom; the root is last.
    #[must_use]
    pub fn view_controllers(&self) -> Vec<Rc<dyn Screen>> {
        let state = self.inner.borrow();
        state
            .stack
            .iter()
            .cloned()
            .chain(iter::once(Rc::clone(&state.root)))
            .collect()
    }

    /// Whether `screen` is anywhere in the history.
    #[must_use]
    pub fn contains(&self, screen: &Rc<dyn Screen>) -> bool {
        let state = self.inner.borrow();
        Rc::ptr_eq(&state.root, screen) || state.stack.iter().any(|s| Rc::ptr_eq(s, screen))
    }

    /// Whether only the root remains.
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.inner.borrow().stack.is_empty()
    }

    /// View of the active screen.
    #[must_use]
    pub fn active_view(&self) -> ViewId {
        self.inner.borrow().top().view()
    }

    /// View currently attached to the host, if any.
    #[must_use]
    pub fn mounted_view(&self) -> Option<ViewId> {
        self.inner.borrow().mounted
    }

    /// Direction used for slides: the config override, else the host's.
    #[must_use]
    pub fn layout_direction(&self) -> LayoutDirection {
        self.inner.borrow().layout_direction()
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("NavigationController")
            .field("count", &(state.stack.len() + 1))
            .field("mounted", &state.mounted)
            .field("appeared", &state.appeared)
            .finish()
    }
}
