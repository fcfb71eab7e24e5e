#![forbid(unsafe_code)]

//! Test harness for navkit.
//!
//! - [`RecordingHost`]: a [`HostContainer`](navkit::HostContainer) that
//!   journals every call and tracks mounted subviews.
//! - [`TestScreen`]: labelled screens, navigation-aware or plain.
//! - [`RecordingDelegate`]: records every active-screen change.
//! - [`model`]: a reference model plus proptest strategies for random
//!   operation sequences.
//! - [`assert_transcript!`]: compare a host journal against expected lines.
//!
//! Labels are resolved through a thread-local registry, so transcripts stay
//! stable no matter how many views other tests have minted.

pub mod delegate;
pub mod host;
pub mod logging;
pub mod model;
pub mod screen;

pub use delegate::{RecordingDelegate, ShowEvent};
pub use host::{HostOp, RecordingHost};
pub use logging::init_test_logging;
pub use model::{ModelNavigation, NavOp, Scenario, nav_op, nav_ops};
pub use screen::{TestScreen, label_of, labels, view_label};

/// Assert that a [`RecordingHost`] transcript matches the expected lines.
///
/// ```ignore
/// assert_transcript!(host, [
///     "add R",
///     "remove R",
///     "transition push from=right 250ms",
///     "add A",
/// ]);
/// ```
#[macro_export]
macro_rules! assert_transcript {
    ($host:expr, [$($line:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($line),*];
        let actual = $host.transcript();
        let actual: ::std::vec::Vec<&str> = actual.lines().collect();
        assert_eq!(actual, expected, "host transcript mismatch");
    }};
}
