use quickcheck::{Arbitrary, Gen};

use crate::traverse::Order;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Delete the K from the tree
    Delete(K),
    /// Walk the tree in the given order
    Traverse(Order),
}

impl Arbitrary for Order {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Order::Preorder, Order::Inorder, Order::Postorder])
            .unwrap()
    }
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Delete(K::arbitrary(g)),
            2 => Op::Traverse(Order::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
