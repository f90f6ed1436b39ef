//! A threaded Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores some value and may have a
//! left and a right child `Node`. The invariant of this BST is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! Searching takes `O(height)`. This tree doesn't rebalance, so its height is
//! decided by insertion order alone and sorted input gives a linked list.
//!
//! ## Threads
//!
//! In an ordinary BST about half of all child pointers are null. Here every
//! such slot is instead a *thread*: the empty left slot of a node points to the
//! node's in-order predecessor and the empty right slot to its successor. The
//! smallest node's left thread and the largest node's right thread point
//! nowhere. With threads in place a sorted walk needs no stack, no recursion
//! and no parent pointers, just [`Node::next`] over and over.
//!
//! Threads are written during insertion in the same walk that finds the new
//! node's place, so no fix-up pass is ever needed.
//!
//! # Examples
//!
//! ```
//! use threaded_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.depth(), 3);
//!
//! // Walk the threads by hand from the smallest node.
//! let mut node = tree.first();
//! let mut sorted = Vec::new();
//! while let Some(n) = node {
//!     sorted.push(*n.value());
//!     node = n.next();
//! }
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod link;
mod node;
mod pretty;
mod tree;

#[cfg(test)]
mod test;

pub use error::EmptyTreeError;
pub use iter::Iter;
pub use link::Tag;
pub use node::Node;
pub use pretty::Pretty;
pub use tree::Tree;
