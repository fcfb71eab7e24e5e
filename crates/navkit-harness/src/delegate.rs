#![forbid(unsafe_code)]

//! Delegate that records active-screen changes.

use std::cell::RefCell;
use std::rc::Rc;

use navkit::{NavigationController, NavigationDelegate, Screen};

use crate::screen::label_of;

/// One `did_show` callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEvent {
    /// Label of the screen that became active.
    pub label: String,
    /// Whether a transition was requested.
    pub animated: bool,
    /// `view_controllers_count()` observed from inside the callback.
    pub count: usize,
}

/// Records every [`NavigationDelegate::did_show`] call.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    events: RefCell<Vec<ShowEvent>>,
}

impl RecordingDelegate {
    /// A new recorder, ready to hand to
    /// [`NavigationController::set_delegate`].
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Events so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<ShowEvent> {
        self.events.borrow().clone()
    }

    /// Labels of shown screens, oldest first.
    #[must_use]
    pub fn shown_labels(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|e| e.label.clone())
            .collect()
    }
}

impl NavigationDelegate for RecordingDelegate {
    fn did_show(&self, controller: &NavigationController, screen: &Rc<dyn Screen>, animated: bool) {
        self.events.borrow_mut().push(ShowEvent {
            label: label_of(screen),
            animated,
            count: controller.view_controllers_count(),
        });
    }
}
