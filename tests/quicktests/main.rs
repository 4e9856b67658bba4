#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Check membership of the T
    Search(T),
    /// Empty the data structure
    Clear,
    /// Compare traversals
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Clearing is rare
    /// so trees get a chance to grow between clears.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 0, 1, 1, 1, 2, 3, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Search(T::arbitrary(g)),
            2 => Op::Clear,
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
