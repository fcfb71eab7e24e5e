#![forbid(unsafe_code)]

//! End-to-end navigation scenarios against a recording host.
//!
//! Run: `cargo test -p navkit --test navigation_scenarios`

use std::rc::Rc;

use navkit::{
    NavigationAware, NavigationConfig, NavigationController, NavigationError, NavigationSlot,
    Screen, ViewId,
};
use navkit_harness::{
    RecordingDelegate, RecordingHost, TestScreen, init_test_logging, label_of, labels,
};

fn setup() -> (NavigationController, Rc<TestScreen>, RecordingHost) {
    init_test_logging();
    let host = RecordingHost::new();
    let root = TestScreen::aware("R");
    let nav = NavigationController::new(root.as_dyn(), host.clone()).unwrap();
    (nav, root, host)
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn construction_rejects_plain_root() {
    let root = TestScreen::plain("R");
    let result = NavigationController::new(root.as_dyn(), RecordingHost::new());
    assert_eq!(result.unwrap_err(), NavigationError::RootNotNavigationAware);
    assert!(!root.is_aware());
}

#[test]
fn construction_does_not_mount() {
    let (nav, _root, host) = setup();
    assert!(host.ops().is_empty());
    assert_eq!(nav.view_controllers_count(), 1);
    assert!(nav.is_rooted());
}

// =============================================================================
// Scenario from the navigation contract
// =============================================================================

#[test]
fn push_push_pop_pop_to_root() {
    let (nav, root, _host) = setup();
    nav.view_will_appear();
    let a = TestScreen::aware("A");
    let b = TestScreen::aware("B");

    nav.push(a.as_dyn(), true);
    nav.push(b.as_dyn(), true);
    assert_eq!(nav.view_controllers_count(), 3);
    assert_eq!(labels(&nav.view_controllers()), vec!["B", "A", "R"]);

    let popped = nav.pop(true).unwrap();
    assert!(Rc::ptr_eq(&popped, &b.as_dyn()));
    assert!(Rc::ptr_eq(&nav.top_view_controller(), &a.as_dyn()));
    assert_eq!(nav.view_controllers_count(), 2);

    let popped = nav.pop_to_root(true).unwrap();
    assert_eq!(labels(&popped), vec!["A"]);
    assert_eq!(nav.view_controllers_count(), 1);
    assert!(Rc::ptr_eq(&nav.top_view_controller(), &root.as_dyn()));
}

#[test]
fn pushes_build_history_top_first() {
    let (nav, _root, _host) = setup();
    for label in ["s1", "s2", "s3", "s4"] {
        nav.push(TestScreen::aware(label).as_dyn(), false);
    }
    assert_eq!(nav.view_controllers_count(), 5);
    assert_eq!(label_of(&nav.top_view_controller()), "s4");
    assert_eq!(labels(&nav.view_controllers()), vec!["s4", "s3", "s2", "s1", "R"]);
}

#[test]
fn push_pop_round_trip_restores_state() {
    let (nav, _root, host) = setup();
    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), false);

    let count = nav.view_controllers_count();
    let top = nav.top_view_controller();
    let active = nav.active_view();

    nav.push(TestScreen::plain("B").as_dyn(), true);
    nav.pop(true);

    assert_eq!(nav.view_controllers_count(), count);
    assert!(Rc::ptr_eq(&nav.top_view_controller(), &top));
    assert_eq!(nav.active_view(), active);
    assert_eq!(host.subviews(), vec![active]);
}

#[test]
fn pop_to_root_returns_reverse_push_order() {
    let (nav, root, host) = setup();
    nav.view_will_appear();
    for label in ["a", "b", "c"] {
        nav.push(TestScreen::aware(label).as_dyn(), false);
    }
    let popped = nav.pop_to_root(false).unwrap();
    assert_eq!(labels(&popped), vec!["c", "b", "a"]);
    assert_eq!(host.subviews(), vec![root.view()]);
    assert!(nav.pop_to_root(false).is_none());
}

// =============================================================================
// Initial mount
// =============================================================================

#[test]
fn appear_mounts_root_exactly_once() {
    let (nav, root, host) = setup();
    assert_eq!(nav.mounted_view(), None);
    for _ in 0..4 {
        nav.view_will_appear();
    }
    assert_eq!(host.add_count(root.view()), 1);
    assert_eq!(host.subviews(), vec![root.view()]);
    assert!(host.transitions().is_empty());
}

#[test]
fn pop_at_root_makes_no_host_calls() {
    let (nav, _root, host) = setup();
    nav.view_will_appear();
    host.clear_ops();
    assert!(nav.pop(true).is_none());
    assert!(nav.pop_to_root(true).is_none());
    assert!(host.ops().is_empty());
    assert_eq!(nav.view_controllers_count(), 1);
}

// =============================================================================
// Back-references
// =============================================================================

#[test]
fn pushed_aware_screens_point_at_controller() {
    let (nav, root, _host) = setup();
    let a = TestScreen::aware("A");
    assert!(!a.slot().unwrap().is_attached());
    nav.push(a.as_dyn(), false);
    assert!(a.slot().unwrap().is_owned_by(&nav));
    assert!(root.slot().unwrap().is_owned_by(&nav));
    let from_screen = a.navigation_controller().unwrap();
    assert!(from_screen.ptr_eq(&nav));
}

#[test]
fn back_reference_is_not_ownership() {
    let (nav, _root, _host) = setup();
    let a = TestScreen::aware("A");
    nav.push(a.as_dyn(), false);
    drop(nav);
    assert!(a.navigation_controller().is_none());
}

/// Screen that navigates on its owner through the back-reference.
struct Wizard {
    view: ViewId,
    nav: NavigationSlot,
}

impl Wizard {
    fn next_step(&self) {
        if let Some(nav) = self.navigation_controller() {
            nav.push(TestScreen::aware("step").as_dyn(), true);
        }
    }

    fn finish(&self) -> usize {
        self.navigation_controller()
            .and_then(|nav| nav.pop_to_root(false))
            .map_or(0, |popped| popped.len())
    }
}

impl Screen for Wizard {
    fn view(&self) -> ViewId {
        self.view
    }

    fn as_navigation_aware(&self) -> Option<&dyn NavigationAware> {
        Some(self)
    }
}

impl NavigationAware for Wizard {
    fn navigation_slot(&self) -> &NavigationSlot {
        &self.nav
    }
}

#[test]
fn screen_drives_its_owner() {
    let (nav, _root, _host) = setup();
    let wizard = Rc::new(Wizard {
        view: ViewId::next(),
        nav: NavigationSlot::new(),
    });
    nav.push(Rc::clone(&wizard) as Rc<dyn Screen>, false);
    wizard.next_step();
    wizard.next_step();
    assert_eq!(nav.view_controllers_count(), 4);
    assert_eq!(wizard.finish(), 3);
    assert!(nav.is_rooted());
}

// =============================================================================
// pop_to
// =============================================================================

#[test]
fn pop_to_intermediate_screen() {
    let (nav, _root, host) = setup();
    nav.view_will_appear();
    let a = TestScreen::aware("A");
    nav.push(a.as_dyn(), false);
    nav.push(TestScreen::aware("B").as_dyn(), false);
    nav.push(TestScreen::plain("C").as_dyn(), false);

    let popped = nav.pop_to(&a.as_dyn(), false).unwrap();
    assert_eq!(labels(&popped), vec!["C", "B"]);
    assert_eq!(label_of(&nav.top_view_controller()), "A");
    assert_eq!(host.subviews(), vec![a.view()]);
}

#[test]
fn pop_to_top_or_stranger_is_none() {
    let (nav, _root, _host) = setup();
    let a = TestScreen::aware("A");
    nav.push(a.as_dyn(), false);
    assert!(nav.pop_to(&a.as_dyn(), false).is_none());
    let stranger = TestScreen::aware("X").as_dyn();
    assert!(nav.pop_to(&stranger, false).is_none());
    assert_eq!(nav.view_controllers_count(), 2);
}

#[test]
fn pop_to_root_screen_matches_pop_to_root() {
    let (nav, root, _host) = setup();
    nav.push(TestScreen::aware("A").as_dyn(), false);
    nav.push(TestScreen::aware("B").as_dyn(), false);
    let popped = nav.pop_to(&root.as_dyn(), false).unwrap();
    assert_eq!(labels(&popped), vec!["B", "A"]);
    assert!(nav.is_rooted());
}

#[test]
fn contains_tracks_history() {
    let (nav, root, _host) = setup();
    let a = TestScreen::aware("A");
    assert!(nav.contains(&root.as_dyn()));
    assert!(!nav.contains(&a.as_dyn()));
    nav.push(a.as_dyn(), false);
    assert!(nav.contains(&a.as_dyn()));
    nav.pop(false);
    assert!(!nav.contains(&a.as_dyn()));
}

// =============================================================================
// Delegate
// =============================================================================

#[test]
fn delegate_sees_every_active_change() {
    let (nav, _root, _host) = setup();
    let delegate = RecordingDelegate::new();
    nav.set_delegate(Some(delegate.clone()));

    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), true);
    nav.push(TestScreen::aware("B").as_dyn(), false);
    nav.pop(true);
    nav.pop_to_root(false);
    nav.pop(true);

    assert_eq!(delegate.shown_labels(), vec!["R", "A", "B", "A", "R"]);
    let events = delegate.events();
    assert_eq!(
        events.iter().map(|e| e.count).collect::<Vec<_>>(),
        vec![1, 2, 3, 2, 1]
    );
    assert_eq!(
        events.iter().map(|e| e.animated).collect::<Vec<_>>(),
        vec![false, true, false, true, false]
    );
}

#[test]
fn delegate_reports_reduced_motion_as_unanimated() {
    let host = RecordingHost::new();
    let root = TestScreen::aware("R");
    let config = NavigationConfig::new().with_reduced_motion(true);
    let nav = NavigationController::with_config(root.as_dyn(), host.clone(), config).unwrap();
    let delegate = RecordingDelegate::new();
    nav.set_delegate(Some(delegate.clone()));

    nav.push(TestScreen::aware("A").as_dyn(), true);
    assert!(!delegate.events()[0].animated);
    assert!(host.transitions().is_empty());

    nav.set_delegate(None);
    nav.pop(true);
    assert_eq!(delegate.events().len(), 1);
}
