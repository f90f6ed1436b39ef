use std::iter::FusedIterator;

use crate::node::Node;

/// A sorted iterator over the values of a [`Tree`][crate::Tree], created by
/// [`Tree::iter`][crate::Tree::iter].
///
/// Each step follows a single [`Node::next`] (or [`Node::previous`] from the
/// back), so the iterator holds two node references and a count, never a stack.
pub struct Iter<'a, T> {
    front: Option<&'a Node<T>>,
    back: Option<&'a Node<T>>,
    // Stops the two ends from walking past each other.
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(first: Option<&'a Node<T>>, last: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            front: first,
            back: last,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = node.next();
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        self.back = node.previous();
        Some(node.value())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}
