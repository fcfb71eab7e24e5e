#![forbid(unsafe_code)]

//! Errors from navigation controller construction.

use std::fmt;

/// Configuration errors that prevent a controller from being built.
///
/// These indicate a coding defect in the caller, not a runtime condition to
/// recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// The root screen does not implement [`NavigationAware`](crate::NavigationAware).
    RootNotNavigationAware,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotNavigationAware => {
                write!(f, "root screen must implement NavigationAware")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
