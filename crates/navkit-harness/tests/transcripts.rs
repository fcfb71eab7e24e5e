#![forbid(unsafe_code)]

//! Host call transcripts for the main navigation flows.
//!
//! Each test pins the exact sequence of unmount, transition request and
//! mount that a host observes.

use std::time::Duration;

use navkit::{LayoutDirection, NavigationConfig, NavigationController, SlideEdge};
use navkit_harness::{RecordingHost, TestScreen, assert_transcript, init_test_logging};

fn controller(host: &RecordingHost) -> NavigationController {
    init_test_logging();
    NavigationController::new(TestScreen::aware("R").as_dyn(), host.clone()).unwrap()
}

// ============================================================================
// Left-to-right
// ============================================================================

#[test]
fn transcript_animated_push_pop_ltr() {
    let host = RecordingHost::new();
    let nav = controller(&host);
    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), true);
    nav.pop(true);
    assert_transcript!(
        host,
        [
            "add R",
            "remove R",
            "transition push from=right 250ms",
            "add A",
            "remove A",
            "transition pop from=left 250ms",
            "add R",
        ]
    );
}

#[test]
fn transcript_unanimated_push() {
    let host = RecordingHost::new();
    let nav = controller(&host);
    nav.view_will_appear();
    nav.push(TestScreen::plain("A").as_dyn(), false);
    assert_transcript!(host, ["add R", "remove R", "add A"]);
}

#[test]
fn transcript_push_before_appear() {
    let host = RecordingHost::new();
    let nav = controller(&host);
    nav.push(TestScreen::aware("A").as_dyn(), false);
    nav.view_will_appear();
    nav.view_will_appear();
    assert_transcript!(host, ["add A"]);
}

#[test]
fn transcript_pop_to_root_is_one_transition() {
    let host = RecordingHost::new();
    let nav = controller(&host);
    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), false);
    nav.push(TestScreen::aware("B").as_dyn(), false);
    nav.push(TestScreen::aware("C").as_dyn(), false);
    host.clear_ops();

    nav.pop_to_root(true);
    assert_transcript!(
        host,
        ["remove C", "transition pop from=left 250ms", "add R"]
    );
}

// ============================================================================
// Right-to-left
// ============================================================================

#[test]
fn transcript_animated_push_pop_rtl() {
    let host = RecordingHost::rtl();
    let nav = controller(&host);
    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), true);
    nav.pop(true);
    assert_transcript!(
        host,
        [
            "add R",
            "remove R",
            "transition push from=left 250ms",
            "add A",
            "remove A",
            "transition pop from=right 250ms",
            "add R",
        ]
    );
}

#[test]
fn transcript_follows_host_direction_changes() {
    let host = RecordingHost::new();
    let nav = controller(&host);
    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), true);
    host.set_direction(LayoutDirection::RightToLeft);
    nav.push(TestScreen::aware("B").as_dyn(), true);
    let edges: Vec<_> = host.transitions().iter().map(|t| t.from).collect();
    assert_eq!(edges, vec![SlideEdge::Right, SlideEdge::Left]);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn transcript_custom_duration() {
    let host = RecordingHost::new();
    let config = NavigationConfig::new().with_transition_duration(Duration::from_millis(120));
    let nav =
        NavigationController::with_config(TestScreen::aware("R").as_dyn(), host.clone(), config)
            .unwrap();
    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), true);
    assert_transcript!(
        host,
        [
            "add R",
            "remove R",
            "transition push from=right 120ms",
            "add A",
        ]
    );
}

#[test]
fn transcript_reduced_motion() {
    let host = RecordingHost::new();
    let nav = controller(&host);
    nav.set_config(NavigationConfig::new().with_reduced_motion(true));
    nav.view_will_appear();
    nav.push(TestScreen::aware("A").as_dyn(), true);
    nav.pop(true);
    assert_transcript!(host, ["add R", "remove R", "add A", "remove A", "add R"]);
}
