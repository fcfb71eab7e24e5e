#![forbid(unsafe_code)]

//! LIFO stack used for navigation history.
//!
//! The most recently pushed value is the *head*. Iteration walks from the
//! head towards the oldest value (the *tail*).
//!
//! # Invariants
//!
//! - `len()` equals pushes minus successful pops.
//! - `head()` is the value returned by the next successful `pop()`.
//! - `iter()` yields exactly `len()` values, head first, and can be restarted
//!   any number of times without mutating the stack.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty pop | `pop()` with `len() == 0` | `Err(StackError::EmptyStackPop)` |
//!
//! An empty pop is a caller bug: check [`Stack::is_empty`] first.

use std::fmt;

/// Errors from [`Stack`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop()` was called on an empty stack.
    EmptyStackPop,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStackPop => write!(f, "pop called on an empty stack"),
        }
    }
}

impl std::error::Error for StackError {}

/// LIFO container with O(1) push, pop and head access.
///
/// Backed by a `Vec` whose last element is the head.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Push a value; it becomes the new head.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the head.
    ///
    /// # Errors
    ///
    /// [`StackError::EmptyStackPop`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::EmptyStackPop)
    }

    /// Peek at the head without removing it.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of values on the stack.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter().rev(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail iterator over a [`Stack`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::iter::Rev<std::slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values are pushed in iteration order, so the last one becomes the head.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
