use std::fmt;

use crate::link::{Link, Tag};

/// A single value stored in a [`Tree`][crate::Tree] along with its two links.
///
/// Each side of a `Node` holds either a real child or a thread to the node's
/// in-order neighbour on that side. This is what lets [`previous`][Node::previous]
/// and [`next`][Node::next] walk the tree in sorted order without a stack or
/// parent pointers.
///
/// # Examples
///
/// ```
/// use threaded_bst::Tree;
///
/// let mut tree = Tree::new();
/// for x in [5, 3, 8, 4] {
///     tree.insert(x);
/// }
///
/// let four = tree.search_node(&4).unwrap();
/// assert_eq!(four.previous().map(|n| *n.value()), Some(3));
/// assert_eq!(four.next().map(|n| *n.value()), Some(5));
/// ```
pub struct Node<T> {
    value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

// SAFETY: A shared `&Node` only gives read access to values and to other nodes of the same tree.
// Links are only rewritten through `&mut Tree`, which can't coexist with a shared borrow.
unsafe impl<T: Sync> Sync for Node<T> {}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Links are reported by tag only. Following threads would loop.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left.tag())
            .field("right", &self.right.tag())
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: Link::thread(None),
            right: Link::thread(None),
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, or `None` if the left link is a thread.
    pub fn left_child(&self) -> Option<&Self> {
        self.left.child_node()
    }

    /// The root of the right subtree, or `None` if the right link is a thread.
    pub fn right_child(&self) -> Option<&Self> {
        self.right.child_node()
    }

    /// Whether the left link holds a child or a thread.
    pub fn left_tag(&self) -> Tag {
        self.left.tag()
    }

    /// Whether the right link holds a child or a thread.
    pub fn right_tag(&self) -> Tag {
        self.right.tag()
    }

    /// The in-order predecessor of this node, or `None` for the smallest node.
    ///
    /// This is `O(1)` when the left link is a thread and otherwise descends to
    /// the rightmost node of the left subtree.
    pub fn previous(&self) -> Option<&Self> {
        match self.left.tag() {
            Tag::Thread => self.left.target(),
            Tag::Child => self.left_child().map(Self::rightmost),
        }
    }

    /// The in-order successor of this node, or `None` for the largest node.
    ///
    /// This is `O(1)` when the right link is a thread and otherwise descends to
    /// the leftmost node of the right subtree.
    pub fn next(&self) -> Option<&Self> {
        match self.right.tag() {
            Tag::Thread => self.right.target(),
            Tag::Child => self.right_child().map(Self::leftmost),
        }
    }

    pub(crate) fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left_child() {
            current = left;
        }
        current
    }

    pub(crate) fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right_child() {
            current = right;
        }
        current
    }
}
