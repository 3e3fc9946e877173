//! A last-in-first-out stack backed by a growable buffer.
//!
//! # Examples
//!
//! ```
//! use datastructures::stack::Stack;
//!
//! let mut stack = Stack::new();
//!
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! // Peeking doesn't remove anything.
//! assert_eq!(stack.peek(), Some(&3));
//! assert_eq!(stack.len(), 3);
//!
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//!
//! // Popping an empty stack just comes back empty handed.
//! assert_eq!(stack.pop(), None);
//! assert!(stack.is_empty());
//! ```

use std::fmt;
use std::iter::FromIterator;

/// A LIFO stack. The top of the stack is the most recently pushed value that
/// hasn't been popped.
#[derive(Clone)]
pub struct Stack<T> {
    /// The top of the stack is the end of the buffer.
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("items", &self.items).finish()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Generates a new, empty `Stack` that can hold `capacity` values before
    /// it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes the top value of the stack and returns it, or `None` if the
    /// stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrows the top value of the stack without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructures::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// assert_eq!(stack.peek(), None);
    ///
    /// stack.push("a");
    /// assert_eq!(stack.peek(), Some(&"a"));
    /// assert_eq!(stack.len(), 1);
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the stack has no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pushes every value in order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
