#![forbid(unsafe_code)]

//! Core primitives for navkit.
//!
//! This crate provides:
//! - [`Stack`] for LIFO navigation history with head-to-tail iteration
//! - [`LayoutDirection`] for picking slide edges in left-to-right and
//!   right-to-left hosts

pub mod direction;
pub mod stack;

pub use direction::{LayoutDirection, detect_system_layout_direction};
pub use stack::{Iter, Stack, StackError};
