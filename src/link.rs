//! The storage slot behind every child position of a [`Node`].
//!
//! A slot either owns a real subtree (`Child`) or holds a non-owning "thread"
//! to the owning node's in-order neighbour (`Thread`). A `Thread` with no target
//! marks the tree's minimum (left slot) or maximum (right slot). An empty tree's
//! root slot is `Thread(None)`.

use std::ptr::NonNull;

use crate::node::Node;

/// Which kind of link a child slot of a [`Node`] currently holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The slot holds a real subtree root owned by the node.
    Child,
    /// The slot holds a non-owning reference to the node's in-order
    /// predecessor (left slot) or successor (right slot), if there is one.
    Thread,
}

pub(crate) enum Link<T> {
    /// Owning. Only these links are followed when the tree is dropped.
    Child(NonNull<Node<T>>),
    /// Non-owning. Aliases a node owned elsewhere in the same tree.
    Thread(Option<NonNull<Node<T>>>),
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    pub(crate) fn child(node: NonNull<Node<T>>) -> Self {
        Self::Child(node)
    }

    pub(crate) fn thread(node: Option<NonNull<Node<T>>>) -> Self {
        Self::Thread(node)
    }

    pub(crate) fn tag(&self) -> Tag {
        match self {
            Self::Child(_) => Tag::Child,
            Self::Thread(_) => Tag::Thread,
        }
    }

    pub(crate) fn set(&mut self, link: Self) {
        *self = link;
    }

    /// The raw target of this link regardless of its tag.
    pub(crate) fn target_ptr(&self) -> Option<NonNull<Node<T>>> {
        match *self {
            Self::Child(node) => Some(node),
            Self::Thread(node) => node,
        }
    }

    pub(crate) fn target(&self) -> Option<&Node<T>> {
        // SAFETY: Every pointer stored in a link, owning or not, points at a node allocated by
        // `Node::new_boxed` and owned by the same tree as the node holding this link. Nodes are
        // only freed when the whole tree is dropped, which requires that no `&Node` borrowed from
        // it is still alive. Mutation of nodes only happens through `&mut Tree`, so no `&mut Node`
        // can alias the shared reference handed out here.
        unsafe { self.target_ptr().map(|ptr| &*ptr.as_ptr()) }
    }

    /// The target if this is an owning link, `None` for threads.
    pub(crate) fn child_node(&self) -> Option<&Node<T>> {
        match self {
            Self::Child(_) => self.target(),
            Self::Thread(_) => None,
        }
    }
}
