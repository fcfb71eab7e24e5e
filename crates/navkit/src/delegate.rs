#![forbid(unsafe_code)]

//! Observer for active-screen changes.

use std::rc::Rc;

use crate::controller::NavigationController;
use crate::screen::Screen;

/// Receives a callback every time a different screen becomes active.
///
/// Called after the controller's state update is complete and its internal
/// borrow is released, so the delegate may query or drive `controller`.
pub trait NavigationDelegate {
    /// `screen` is now the top screen and its view is mounted.
    ///
    /// `animated` is `true` when a transition was requested from the host.
    fn did_show(&self, controller: &NavigationController, screen: &Rc<dyn Screen>, animated: bool);
}
