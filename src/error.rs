use thiserror::Error;

/// Returned by [`Tree::minimum`][crate::Tree::minimum] and
/// [`Tree::maximum`][crate::Tree::maximum] when the tree holds no values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("tree is empty")]
pub struct EmptyTreeError;
