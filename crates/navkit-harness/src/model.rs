#![forbid(unsafe_code)]

//! Reference model and random operation sequences.
//!
//! [`ModelNavigation`] is a plain `Vec`-of-labels model of the controller.
//! [`Scenario`] drives a real controller and the model in lockstep so
//! property tests can compare them after every step.

use std::rc::Rc;

use navkit::NavigationController;
use proptest::prelude::*;

use crate::host::RecordingHost;
use crate::screen::{TestScreen, label_of, labels, view_label};

/// One controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOp {
    Push { aware: bool, animated: bool },
    Pop { animated: bool },
    PopToRoot { animated: bool },
    /// Pop to the screen `depth` entries below the top of the history.
    PopTo { depth: usize, animated: bool },
    Appear,
}

/// Strategy for a single [`NavOp`], weighted towards pushes and pops.
pub fn nav_op() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        4 => (any::<bool>(), any::<bool>())
            .prop_map(|(aware, animated)| NavOp::Push { aware, animated }),
        3 => any::<bool>().prop_map(|animated| NavOp::Pop { animated }),
        1 => any::<bool>().prop_map(|animated| NavOp::PopToRoot { animated }),
        1 => (0usize..6, any::<bool>())
            .prop_map(|(depth, animated)| NavOp::PopTo { depth, animated }),
        1 => Just(NavOp::Appear),
    ]
}

/// Strategy for a sequence of up to `max_len` operations.
pub fn nav_ops(max_len: usize) -> impl Strategy<Value = Vec<NavOp>> {
    proptest::collection::vec(nav_op(), 0..=max_len)
}

/// Label-level model of a navigation controller.
#[derive(Debug, Clone)]
pub struct ModelNavigation {
    root: String,
    /// Pushed labels, oldest first.
    pushed: Vec<String>,
    mounted: Option<String>,
    appeared: bool,
}

impl ModelNavigation {
    /// A model in the Rooted state.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            pushed: Vec::new(),
            mounted: None,
            appeared: false,
        }
    }

    /// Record a push of `label`.
    pub fn push(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.mounted = Some(label.clone());
        self.pushed.push(label);
    }

    /// Pop one label; `None` when Rooted.
    pub fn pop(&mut self) -> Option<String> {
        let popped = self.pushed.pop()?;
        self.mounted = Some(self.top().to_owned());
        Some(popped)
    }

    /// Pop every pushed label, top first; `None` when Rooted.
    pub fn pop_to_root(&mut self) -> Option<Vec<String>> {
        if self.pushed.is_empty() {
            return None;
        }
        let popped = self.pushed.drain(..).rev().collect();
        self.mounted = Some(self.root.clone());
        Some(popped)
    }

    /// Pop until the label `depth` entries below the top is active.
    ///
    /// `None` when `depth` is zero or past the root.
    pub fn pop_to(&mut self, depth: usize) -> Option<Vec<String>> {
        if depth == 0 || depth > self.pushed.len() {
            return None;
        }
        let keep = self.pushed.len() - depth;
        let popped = self.pushed.drain(keep..).rev().collect();
        self.mounted = Some(self.top().to_owned());
        Some(popped)
    }

    /// First appearance mounts the top label if nothing is mounted.
    pub fn appear(&mut self) {
        if self.appeared {
            return;
        }
        self.appeared = true;
        if self.mounted.is_none() {
            self.mounted = Some(self.top().to_owned());
        }
    }

    /// History size, root included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Active label.
    #[must_use]
    pub fn top(&self) -> &str {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// History top to bottom, root last.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.pushed
            .iter()
            .rev()
            .chain(std::iter::once(&self.root))
            .cloned()
            .collect()
    }

    /// Mounted label, if any.
    #[must_use]
    pub fn mounted(&self) -> Option<&str> {
        self.mounted.as_deref()
    }
}

/// A controller, its recording host and the model, driven together.
pub struct Scenario {
    pub controller: NavigationController,
    pub host: RecordingHost,
    pub model: ModelNavigation,
    pushes: usize,
}

impl Scenario {
    /// Rooted scenario on a left-to-right host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(RecordingHost::new())
    }

    /// Rooted scenario on `host`.
    ///
    /// # Panics
    ///
    /// Never in practice: the root is always navigation-aware.
    #[must_use]
    pub fn with_host(host: RecordingHost) -> Self {
        let root = TestScreen::aware("root");
        let controller = NavigationController::new(root.as_dyn(), host.clone())
            .expect("navigation-aware root is accepted");
        Self {
            controller,
            host,
            model: ModelNavigation::new("root"),
            pushes: 0,
        }
    }

    /// Apply `op` to both sides.
    ///
    /// Returns `(actual, expected)` popped labels.
    pub fn step(&mut self, op: NavOp) -> (Option<Vec<String>>, Option<Vec<String>>) {
        match op {
            NavOp::Push { aware, animated } => {
                self.pushes += 1;
                let label = format!("s{}", self.pushes);
                let screen = if aware {
                    TestScreen::aware(label)
                } else {
                    TestScreen::plain(label)
                };
                self.controller.push(screen.as_dyn(), animated);
                self.model.push(screen.label());
                (None, None)
            }
            NavOp::Pop { animated } => {
                let actual = self.controller.pop(animated).map(|s| vec![label_of(&s)]);
                let expected = self.model.pop().map(|l| vec![l]);
                (actual, expected)
            }
            NavOp::PopToRoot { animated } => {
                let actual = self
                    .controller
                    .pop_to_root(animated)
                    .map(|popped| labels(&popped));
                (actual, self.model.pop_to_root())
            }
            NavOp::PopTo { depth, animated } => {
                let history = self.controller.view_controllers();
                let actual = history
                    .get(depth)
                    .and_then(|target| self.controller.pop_to(target, animated))
                    .map(|popped| labels(&popped));
                (actual, self.model.pop_to(depth))
            }
            NavOp::Appear => {
                self.controller.view_will_appear();
                self.model.appear();
                (None, None)
            }
        }
    }

    /// Compare controller, host and model; describe the first mismatch.
    ///
    /// # Errors
    ///
    /// A message naming the diverging property.
    pub fn check(&self) -> Result<(), String> {
        let nav = &self.controller;
        if nav.view_controllers_count() != self.model.count() {
            return Err(format!(
                "count: controller {} model {}",
                nav.view_controllers_count(),
                self.model.count()
            ));
        }
        let top = label_of(&nav.top_view_controller());
        if top != self.model.top() {
            return Err(format!("top: controller {top} model {}", self.model.top()));
        }
        let history = labels(&nav.view_controllers());
        if history != self.model.history() {
            return Err(format!(
                "history: controller {history:?} model {:?}",
                self.model.history()
            ));
        }
        let mounted = nav.mounted_view().map(view_label);
        if mounted.as_deref() != self.model.mounted() {
            return Err(format!(
                "mounted: controller {mounted:?} model {:?}",
                self.model.mounted()
            ));
        }
        let subviews: Vec<String> = self
            .host
            .subviews()
            .into_iter()
            .map(view_label)
            .collect();
        let expected: Vec<String> = self
            .model
            .mounted()
            .map(str::to_owned)
            .into_iter()
            .collect();
        if subviews != expected {
            return Err(format!("host subviews {subviews:?}, expected {expected:?}"));
        }
        for screen in nav.view_controllers() {
            if let Some(aware) = screen.as_navigation_aware()
                && !aware.navigation_slot().is_owned_by(nav)
            {
                return Err(format!("{} slot not owned by controller", label_of(&screen)));
            }
        }
        Ok(())
    }

    /// The root screen.
    #[must_use]
    pub fn root(&self) -> Rc<dyn navkit::Screen> {
        self.controller.root_view_controller()
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
