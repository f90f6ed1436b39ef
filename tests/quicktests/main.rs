#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod threaded;

/// Operations applied to a tree and to a sorted `Vec` model of it.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Search for the T in the tree
    Search(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Search(T::arbitrary(g))
        }
    }
}
