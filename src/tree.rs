//! An unbalanced Binary Search Tree holding a set of unique values. Nothing
//! is ever rotated, so the shape of the tree is entirely decided by the order
//! values are inserted in. Inserting already sorted values produces a tree
//! that is really a linked list with a height equal to its length.
//!
//! Every operation that walks the tree (including `Drop`) recurses once per
//! level so very tall trees can exhaust the call stack. Only [`Tree::iter`]
//! walks with an explicit stack.
//!
//! # Examples
//!
//! ```
//! use datastructures::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again doesn't do anything.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 3);
//!
//! // Values come out in ascending order.
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
//!
//! assert!(tree.delete(&2));
//! assert!(!tree.contains(&2));
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An owning, possibly empty, pointer to a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree with no self-balancing. This can be used for
/// inserting, searching for, and deleting values as well as visiting all
/// values in ascending order.
// TODO stack based Drop so dropping a degenerate tree can't overflow.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given value into the tree. Returns `false` if the value
    /// was already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructures::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match self.root.as_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Node::new_boxed(value));
                true
            }
        }
    }

    /// Returns whether a value equal to the given one is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructures::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.as_ref().map_or(false, |n| n.contains(value))
    }

    /// Deletes the given value from the tree. Returns `false` if the value
    /// wasn't present, in which case nothing happens.
    ///
    /// A node with two children isn't unlinked itself. Instead it takes the
    /// value of its in-order successor (the smallest value in its right
    /// subtree) and the successor's node is unlinked. Either way exactly one
    /// node leaves the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructures::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        match Node::delete_from(&mut self.root, value) {
            DeleteResult::Deleted => true,
            DeleteResult::NotFound => false,
            DeleteResult::DeleteSelf => unreachable!("`delete_from` unlinks matching nodes"),
        }
    }

    /// Calls `visit` once for every value in the tree, smallest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructures::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    ///
    /// let mut sum = 0;
    /// tree.traverse(|x| sum = sum * 10 + x);
    /// assert_eq!(sum, 123);
    /// ```
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = &self.root {
            root.traverse(&mut visit);
        }
    }

    /// Returns an iterator over the values of the tree in ascending order.
    /// This yields the same sequence as [`Tree::traverse`] but lazily, and
    /// without recursing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Counts the values in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.len())
    }

    /// Gets the number of levels in the tree. An empty tree has a height of
    /// 0 and a tree with just a root has a height of 1.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns whether, for every node, the heights of its left and right
    /// subtrees differ by at most one. This is only a report on the current
    /// shape; nothing ever rebalances the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructures::tree::Tree;
    ///
    /// let balanced: Tree<_> = vec![4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// assert!(balanced.is_balanced());
    ///
    /// let sorted: Tree<_> = (1..=5).collect();
    /// assert!(!sorted.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.root
            .as_ref()
            .map_or(true, |n| n.balanced_height().is_some())
    }

    /// Returns whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the values of a [`Tree`]. Created by
/// [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose values haven't been yielded yet but whose left subtrees
    /// have. The top of the stack is the next value.
    stack: Vec<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// What happened when deleting from a subtree.
enum DeleteResult {
    /// The value wasn't found so nothing was deleted.
    NotFound,
    /// The `Node` returning this holds the value and has at most one child.
    /// Its parent must replace it with that child.
    DeleteSelf,
    /// A node was unlinked from the subtree.
    Deleted,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// The height of a possibly empty subtree.
fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height())
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = match value.cmp(&self.value) {
            Ordering::Less => match self.left.as_mut() {
                Some(left) => left.insert(value),
                None => {
                    self.left = Some(Self::new_boxed(value));
                    true
                }
            },
            Ordering::Equal => false,
            Ordering::Greater => match self.right.as_mut() {
                Some(right) => right.insert(value),
                None => {
                    self.right = Some(Self::new_boxed(value));
                    true
                }
            },
        };

        if cfg!(debug_assertions) {
            if let Some(left) = &self.left {
                assert!(self.value > left.value);
            }
            if let Some(right) = &self.right {
                assert!(self.value < right.value);
            }
        }
        inserted
    }

    fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_ref().map_or(false, |n| n.contains(value)),
            Ordering::Equal => true,
            Ordering::Greater => self.right.as_ref().map_or(false, |n| n.contains(value)),
        }
    }

    /// Deletes `value` from the subtree rooted at this node. See the
    /// documentation on [`DeleteResult`] for what the return values mean.
    fn delete(&mut self, value: &T) -> DeleteResult
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => Self::delete_from(&mut self.left, value),
            Ordering::Equal => match self.right.take() {
                // Two children: promote the successor's value into this node.
                Some(right) if self.left.is_some() => {
                    let (successor, new_right) = right.take_smallest();
                    self.value = successor;
                    self.right = new_right;
                    DeleteResult::Deleted
                }
                right => {
                    self.right = right;
                    DeleteResult::DeleteSelf
                }
            },
            Ordering::Greater => Self::delete_from(&mut self.right, value),
        }
    }

    /// Deletes `value` from the subtree behind `link`, replacing the node at
    /// `link` with its only child (or nothing) if that node holds `value`.
    /// Never returns [`DeleteResult::DeleteSelf`].
    fn delete_from(link: &mut Link<T>, value: &T) -> DeleteResult
    where
        T: Ord,
    {
        match link.as_mut().map(|n| n.delete(value)) {
            Some(DeleteResult::DeleteSelf) => {
                if let Some(mut deleted) = link.take() {
                    *link = deleted.left.take().or_else(|| deleted.right.take());
                }
                DeleteResult::Deleted
            }
            Some(DeleteResult::Deleted) => DeleteResult::Deleted,
            None | Some(DeleteResult::NotFound) => DeleteResult::NotFound,
        }
    }

    /// Unlinks the smallest node of this subtree. Returns its value and
    /// whatever is left of the subtree.
    fn take_smallest(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            Some(left) => {
                let (smallest, new_left) = left.take_smallest();
                self.left = new_left;
                (smallest, Some(self))
            }
            None => {
                let node = *self;
                (node.value, node.right)
            }
        }
    }

    fn traverse<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = &self.left {
            left.traverse(visit);
        }
        visit(&self.value);
        if let Some(right) = &self.right {
            right.traverse(visit);
        }
    }

    fn len(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.len()) + self.right.as_ref().map_or(0, |n| n.len())
    }

    /// How many levels are in the subtree rooted at this node. A node with
    /// no children has a height of 1.
    fn height(&self) -> usize {
        height(&self.left).max(height(&self.right)) + 1
    }

    /// The height of this subtree if every node in it has subtrees whose
    /// heights differ by at most one, otherwise `None`.
    fn balanced_height(&self) -> Option<usize> {
        let left_height = self.left.as_ref().map_or(Some(0), |n| n.balanced_height())?;
        let right_height = self.right.as_ref().map_or(Some(0), |n| n.balanced_height())?;

        let (shorter, taller) = if left_height < right_height {
            (left_height, right_height)
        } else {
            (right_height, left_height)
        };
        if taller - shorter > 1 {
            None
        } else {
            Some(taller + 1)
        }
    }
}

/// Asserts the BST ordering holds at every node and returns how many
/// nodes were checked.
#[cfg(test)]
fn assert_bst<T>(tree: &Tree<T>) -> usize
where
    T: Ord + fmt::Debug,
{
    fn check<T>(node: &Node<T>, lower: Option<&T>, upper: Option<&T>) -> usize
    where
        T: Ord + fmt::Debug,
    {
        if let Some(lower) = lower {
            assert!(&node.value > lower, "{:?} is not above {:?}", node.value, lower);
        }
        if let Some(upper) = upper {
            assert!(&node.value < upper, "{:?} is not below {:?}", node.value, upper);
        }

        1 + node
            .left
            .as_ref()
            .map_or(0, |n| check(n, lower, Some(&node.value)))
            + node
                .right
                .as_ref()
                .map_or(0, |n| check(n, Some(&node.value), upper))
    }

    tree.root.as_ref().map_or(0, |n| check(n, None, None))
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of values in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    assert_eq!(bst.insert(v.clone()), set.insert(v.clone()));
                }
                Op::Delete(v) => {
                    assert_eq!(bst.delete(v), set.remove(v));
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            assert_bst(&tree) == set.len()
                && tree.len() == set.len()
                && set.iter().all(|v| tree.contains(v))
        }
    }

    quickcheck::quickcheck! {
        fn balanced_matches_definition(xs: Vec<i8>) -> bool {
            fn naive<T>(link: &Link<T>) -> bool {
                match link {
                    None => true,
                    Some(n) => {
                        let (l, r) = (height(&n.left), height(&n.right));
                        l.max(r) - l.min(r) <= 1 && naive(&n.left) && naive(&n.right)
                    }
                }
            }

            let tree: Tree<_> = xs.into_iter().collect();
            tree.is_balanced() == naive(&tree.root)
        }
    }
}
