#![forbid(unsafe_code)]

//! Stack-based navigation for retained-mode UI hosts.
//!
//! A [`NavigationController`] owns a permanent *root* screen and a stack of
//! pushed screens. Exactly one screen is active at a time; its view is the
//! only one mounted in the [`HostContainer`].
//!
//! # Ownership
//!
//! Screens are created by the caller and shared with the controller as
//! `Rc<dyn Screen>`. Screens that implement [`NavigationAware`] receive a
//! weak back-reference to the controller when pushed, so they can push and
//! pop on their owner without creating a reference cycle.
//!
//! # Threading
//!
//! The controller is `!Send`: every call happens on the UI thread. Host
//! transitions are fire-and-forget; the controller's own state is complete
//! when each call returns.
//!
//! # Example
//!
//! ```ignore
//! use navkit::{NavigationController, NavigationSlot, NavigationAware, Screen, ViewId};
//!
//! struct Settings {
//!     view: ViewId,
//!     nav: NavigationSlot,
//! }
//!
//! impl Screen for Settings {
//!     fn view(&self) -> ViewId {
//!         self.view
//!     }
//!
//!     fn as_navigation_aware(&self) -> Option<&dyn NavigationAware> {
//!         Some(self)
//!     }
//! }
//!
//! impl NavigationAware for Settings {
//!     fn navigation_slot(&self) -> &NavigationSlot {
//!         &self.nav
//!     }
//! }
//!
//! let nav = NavigationController::new(root, host)?;
//! nav.view_will_appear();
//! nav.push(Rc::new(Settings { view: ViewId::next(), nav: NavigationSlot::new() }), true);
//! let popped = nav.pop(true);
//! ```

pub mod config;
pub mod controller;
pub mod delegate;
pub mod error;
pub mod host;
pub mod screen;
pub mod transition;

#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::NavigationConfig;
pub use controller::{NavigationController, WeakNavigationController};
pub use delegate::NavigationDelegate;
pub use error::NavigationError;
pub use host::HostContainer;
pub use navkit_core::{LayoutDirection, Stack, StackError, detect_system_layout_direction};
pub use screen::{NavigationAware, NavigationSlot, Screen, ViewId};
pub use transition::{SlideEdge, Transition, TransitionKind};
