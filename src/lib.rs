//! This crate exposes two elementary containers: an unbalanced Binary
//! Search Tree (BST) and a LIFO stack.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will store the value
//! that was inserted and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). The
//! [`tree::Tree`] here never rebalances so its height is only `O(lg N)` when
//! values arrive in a friendly order. Sorted input gives a height of `N`.
//! BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! ## Stack
//!
//! [`stack::Stack`] is a thin wrapper over a `Vec` where the last value
//! pushed is the first one popped.
//!
//! Neither container does any locking. Wrap them in a `Mutex` (or similar)
//! to share them between threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod stack;
pub mod tree;
