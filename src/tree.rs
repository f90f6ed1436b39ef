//! The threaded binary search tree itself.
//!
//! # Examples
//!
//! ```
//! use threaded_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//! assert!(tree.minimum().is_err());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert_eq!(tree.search(&1), Some(&1));
//! assert_eq!(tree.minimum(), Ok(&1));
//! assert_eq!(tree.maximum(), Ok(&3));
//!
//! // Values come back sorted by following threads alone.
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ptr::NonNull;

use crate::error::EmptyTreeError;
use crate::iter::Iter;
use crate::link::{Link, Tag};
use crate::node::Node;
use crate::pretty::Pretty;

/// An unbalanced binary search tree whose empty child slots are threads to
/// each node's in-order predecessor and successor.
///
/// The shape depends only on insertion order. Equal values are kept and sort
/// to the right of the values they equal. Nothing is ever removed.
pub struct Tree<T> {
    // A `Link` rather than an `Option<Box<Node>>` so the empty tree is a thread like every other
    // empty slot and insertion never special-cases the root.
    root: Link<T>,
    len: usize,
    depth: usize,
}

/// The side of a parent a new node is being attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

// SAFETY: The tree exclusively owns every node reachable through `Child` links and threads only
// alias nodes of the same tree, so sending or sharing the tree is like sending or sharing a
// `Box<T>` collection.
unsafe impl<T: Send> Send for Tree<T> {}
unsafe impl<T: Sync> Sync for Tree<T> {}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        if self.len > 0 {
            tracing::debug!(len = self.len, depth = self.depth, "dropping threaded tree");
        }

        let mut stack = Vec::new();
        if let Link::Child(root) = mem::replace(&mut self.root, Link::thread(None)) {
            stack.push(root);
        }

        while let Some(node) = stack.pop() {
            // SAFETY: Every `Child` link is the one and only owning pointer to a node created by
            // `Box::leak` in `Tree::insert`. Each node is pushed exactly once (by its parent, or
            // above for the root) and threads are never followed here, so nothing is freed twice.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            if let Link::Child(left) = node.left {
                stack.push(left);
            }
            if let Link::Child(right) = node.right {
                stack.push(right);
            }
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    /// Builds a new tree by re-inserting every value in pre-order. Parents are
    /// always inserted before their descendants, so the copy has the same
    /// shape, depth and threads as the original.
    fn clone(&self) -> Self {
        tracing::debug!(len = self.len, "cloning threaded tree");

        let mut tree = Self::new();
        self.traverse_pre_order(|value| tree.insert(value.clone()));
        tree
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

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::thread(None),
            len: 0,
            depth: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes on the longest path from the root, counting the
    /// root itself. An empty tree has depth 0 and a single node has depth 1.
    ///
    /// Since nothing is ever removed this is also the height of the tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Exchanges the contents of two trees without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.child_node()
    }

    /// The node holding the smallest value. Its [`previous`][Node::previous] is `None`.
    pub fn first(&self) -> Option<&Node<T>> {
        self.root().map(Node::leftmost)
    }

    /// The node holding the largest value. Its [`next`][Node::next] is `None`.
    pub fn last(&self) -> Option<&Node<T>> {
        self.root().map(Node::rightmost)
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::{EmptyTreeError, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.minimum(), Err(EmptyTreeError));
    ///
    /// tree.insert(4);
    /// tree.insert(2);
    /// assert_eq!(tree.minimum(), Ok(&2));
    /// ```
    pub fn minimum(&self) -> Result<&T, EmptyTreeError> {
        self.first().map(Node::value).ok_or(EmptyTreeError)
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree holds no values.
    pub fn maximum(&self) -> Result<&T, EmptyTreeError> {
        self.last().map(Node::value).ok_or(EmptyTreeError)
    }

    /// Iterates over the values in sorted order by following each node's
    /// [`next`][Node::next] link. No stack is kept.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first(), self.last(), self.len)
    }

    /// Calls `visit` on every value in sorted order.
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left_child();
            }
            let Some(node) = stack.pop() else {
                return;
            };
            visit(node.value());
            current = node.right_child();
        }
    }

    /// Calls `visit` on every value, each parent before its left then right
    /// subtree.
    pub fn traverse_pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<_> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(node.value());
            stack.extend(node.right_child());
            stack.extend(node.left_child());
        }
    }

    /// Calls `visit` on every value, each parent after its left then right
    /// subtree.
    pub fn traverse_post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        // (node, children already pushed)
        let mut stack: Vec<_> = self.root().map(|root| (root, false)).into_iter().collect();
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                visit(node.value());
                continue;
            }
            stack.push((node, true));
            stack.extend(node.right_child().map(|right| (right, false)));
            stack.extend(node.left_child().map(|left| (left, false)));
        }
    }

    /// A [`Display`][fmt::Display]-able sideways drawing of the tree, largest
    /// values at the top.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.pretty().to_string(), "┌───3\n2\n└───1\n");
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty::new(self.root())
    }

    /// Inserts the value into the tree. Values equal to one already stored are
    /// kept and placed in its right subtree.
    ///
    /// The new node is placed and threaded in a single walk down from the root:
    /// the last ancestor passed on the way down is the new node's neighbour on
    /// the side it faces into the tree, and the slot it replaces already holds
    /// the thread for its outer side.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut new_node = Node::new_boxed(value);
        let mut slot = &mut self.root;
        let mut side = Side::Left;
        let mut neighbor = None;
        let mut level = 1;

        while let Link::Child(mut parent) = *slot {
            // SAFETY: `parent` is owned by this tree and we hold `&mut self`, so no other
            // reference to any node exists. Only one node is borrowed mutably at a time: the
            // previous `slot` borrow ends when it is reassigned below.
            let parent_node = unsafe { parent.as_mut() };
            side = match parent_node.value().cmp(new_node.value()) {
                Ordering::Greater => Side::Left,
                Ordering::Equal | Ordering::Less => Side::Right,
            };
            slot = match side {
                Side::Left => &mut parent_node.left,
                Side::Right => &mut parent_node.right,
            };
            neighbor = Some(parent);
            level += 1;
        }

        // The slot is a thread: its old target is the new node's outer neighbour and the parent
        // we came from is its inner one.
        let outer = *slot;
        let inner = Link::thread(neighbor);
        match side {
            Side::Left => {
                new_node.left.set(outer);
                new_node.right.set(inner);
            }
            Side::Right => {
                new_node.left.set(inner);
                new_node.right.set(outer);
            }
        }
        slot.set(Link::child(NonNull::from(Box::leak(new_node))));

        self.len += 1;
        self.depth = self.depth.max(level);
        tracing::trace!(level, len = self.len, depth = self.depth, "inserted node");

        if cfg!(debug_assertions) {
            if let Some(root) = self.root() {
                assert_eq!(self.root.tag(), Tag::Child);
                assert!(root.leftmost().previous().is_none());
                assert!(root.rightmost().next().is_none());
            }
        }
    }

    /// Finds a stored value equal to `value` by walking down from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.search_node(value).map(Node::value)
    }

    /// Like [`search`][Tree::search] but returns the node, so the search can
    /// be continued with [`Node::previous`] and [`Node::next`].
    pub fn search_node(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match node.value().cmp(value) {
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.left_child(),
                Ordering::Less => node.right_child(),
            };
        }
        None
    }

    /// The same lookup as [`search`][Tree::search] written as a recursion.
    /// This recurses once per level, so it should be avoided on trees built
    /// from long sorted runs.
    pub fn search_recursive(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        fn go<'a, T: Ord>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a T> {
            let node = node?;
            match node.value().cmp(value) {
                Ordering::Equal => Some(node.value()),
                Ordering::Greater => go(node.left_child(), value),
                Ordering::Less => go(node.right_child(), value),
            }
        }

        go(self.root(), value)
    }
}
