#![forbid(unsafe_code)]

//! Recording host container.

use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;

use navkit::{HostContainer, LayoutDirection, SlideEdge, Transition, TransitionKind, ViewId};

use crate::screen::view_label;

/// One call made by the controller into the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    Add(ViewId),
    Remove(ViewId),
    Transition(Transition),
}

#[derive(Debug, Default)]
struct Journal {
    ops: Vec<HostOp>,
    subviews: Vec<ViewId>,
}

/// Host that records every call and tracks its subview list.
///
/// Clones share the same journal, so a test can keep one clone and hand the
/// other to the controller.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    journal: Rc<RefCell<Journal>>,
    direction: Rc<Cell<LayoutDirection>>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// A left-to-right host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_direction(LayoutDirection::LeftToRight)
    }

    /// A right-to-left host.
    #[must_use]
    pub fn rtl() -> Self {
        Self::with_direction(LayoutDirection::RightToLeft)
    }

    /// A host with the given layout direction.
    #[must_use]
    pub fn with_direction(direction: LayoutDirection) -> Self {
        Self {
            journal: Rc::default(),
            direction: Rc::new(Cell::new(direction)),
        }
    }

    /// Change the reported layout direction.
    pub fn set_direction(&self, direction: LayoutDirection) {
        self.direction.set(direction);
    }

    /// Every call so far, in order.
    #[must_use]
    pub fn ops(&self) -> Vec<HostOp> {
        self.journal.borrow().ops.clone()
    }

    /// Views currently attached, oldest first.
    #[must_use]
    pub fn subviews(&self) -> Vec<ViewId> {
        self.journal.borrow().subviews.clone()
    }

    /// Transitions requested so far.
    #[must_use]
    pub fn transitions(&self) -> Vec<Transition> {
        self.journal
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                HostOp::Transition(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    /// How many times `view` was added.
    #[must_use]
    pub fn add_count(&self, view: ViewId) -> usize {
        self.journal
            .borrow()
            .ops
            .iter()
            .filter(|op| **op == HostOp::Add(view))
            .count()
    }

    /// Forget recorded calls; the subview list is kept.
    pub fn clear_ops(&self) {
        self.journal.borrow_mut().ops.clear();
    }

    /// One line per call, with views shown by label.
    ///
    /// ```text
    /// remove R
    /// transition push from=right 250ms
    /// add A
    /// ```
    #[must_use]
    pub fn transcript(&self) -> String {
        let journal = self.journal.borrow();
        let mut out = String::new();
        for op in &journal.ops {
            match op {
                HostOp::Add(view) => {
                    let _ = writeln!(out, "add {}", view_label(*view));
                }
                HostOp::Remove(view) => {
                    let _ = writeln!(out, "remove {}", view_label(*view));
                }
                HostOp::Transition(t) => {
                    let kind = match t.kind {
                        TransitionKind::Push => "push",
                        TransitionKind::Pop => "pop",
                    };
                    let from = match t.from {
                        SlideEdge::Left => "left",
                        SlideEdge::Right => "right",
                    };
                    let _ = writeln!(
                        out,
                        "transition {kind} from={from} {}ms",
                        t.duration.as_millis()
                    );
                }
            }
        }
        out
    }
}

impl HostContainer for RecordingHost {
    fn add_subview(&mut self, view: ViewId) {
        tracing::trace!(view = %view, "recording host: add");
        let mut journal = self.journal.borrow_mut();
        journal.ops.push(HostOp::Add(view));
        journal.subviews.push(view);
    }

    fn remove_subview(&mut self, view: ViewId) {
        tracing::trace!(view = %view, "recording host: remove");
        let mut journal = self.journal.borrow_mut();
        journal.ops.push(HostOp::Remove(view));
        journal.subviews.retain(|v| *v != view);
    }

    fn perform_transition(&mut self, transition: &Transition) {
        self.journal
            .borrow_mut()
            .ops
            .push(HostOp::Transition(*transition));
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction.get()
    }
}
