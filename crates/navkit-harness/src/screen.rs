#![forbid(unsafe_code)]

//! Labelled test screens.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use navkit::{NavigationAware, NavigationSlot, Screen, ViewId};

thread_local! {
    static VIEW_LABELS: RefCell<HashMap<ViewId, String>> = RefCell::new(HashMap::new());
}

/// Label registered for `view`, or its `Display` form if none.
#[must_use]
pub fn view_label(view: ViewId) -> String {
    VIEW_LABELS.with(|labels| {
        labels
            .borrow()
            .get(&view)
            .cloned()
            .unwrap_or_else(|| view.to_string())
    })
}

/// Label of a screen's view.
#[must_use]
pub fn label_of(screen: &Rc<dyn Screen>) -> String {
    view_label(screen.view())
}

/// Labels of `screens`, in order.
#[must_use]
pub fn labels(screens: &[Rc<dyn Screen>]) -> Vec<String> {
    screens.iter().map(label_of).collect()
}

/// A screen with a fixed label and a freshly minted view.
#[derive(Debug)]
pub struct TestScreen {
    label: String,
    view: ViewId,
    slot: Option<NavigationSlot>,
}

impl TestScreen {
    /// A screen implementing [`NavigationAware`].
    #[must_use]
    pub fn aware(label: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::build(label.into(), true))
    }

    /// A screen without the navigation-aware capability.
    #[must_use]
    pub fn plain(label: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::build(label.into(), false))
    }

    fn build(label: String, aware: bool) -> Self {
        let view = ViewId::next();
        VIEW_LABELS.with(|labels| labels.borrow_mut().insert(view, label.clone()));
        Self {
            label,
            view,
            slot: aware.then(NavigationSlot::new),
        }
    }

    /// The screen's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the screen implements [`NavigationAware`].
    #[must_use]
    pub fn is_aware(&self) -> bool {
        self.slot.is_some()
    }

    /// The back-reference slot, if navigation-aware.
    #[must_use]
    pub fn slot(&self) -> Option<&NavigationSlot> {
        self.slot.as_ref()
    }

    /// Coerce to the trait object the controller stores.
    #[must_use]
    pub fn as_dyn(self: &Rc<Self>) -> Rc<dyn Screen> {
        Rc::clone(self) as Rc<dyn Screen>
    }
}

impl Screen for TestScreen {
    fn view(&self) -> ViewId {
        self.view
    }

    fn as_navigation_aware(&self) -> Option<&dyn NavigationAware> {
        if self.slot.is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl NavigationAware for TestScreen {
    fn navigation_slot(&self) -> &NavigationSlot {
        // Only reachable through `as_navigation_aware`, which checks the slot.
        match &self.slot {
            Some(slot) => slot,
            None => unreachable!("plain TestScreen queried for its navigation slot"),
        }
    }
}
