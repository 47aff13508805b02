use linked_bst::{BinarySearchTree, Order};

use std::collections::HashSet;

fn strictly_ascending(keys: &[i8]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.into_iter().collect();

        strictly_ascending(&tree.keys(Order::Inorder))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x).map(|n| n.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn insert_is_idempotent(xs: Vec<i8>, again: i8) -> bool {
        let mut tree: BinarySearchTree<_> = xs.into_iter().collect();
        tree.insert(again);
        let before = tree.keys(Order::Preorder);

        !tree.insert(again) && tree.keys(Order::Preorder) == before
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.delete(delete);
        }

        let deleted: HashSet<_> = deletes.iter().copied().collect();
        let still_present: HashSet<_> = xs.into_iter().filter(|x| !deleted.contains(x)).collect();

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.len() == still_present.len()
            && strictly_ascending(&tree.keys(Order::Inorder))
    }
}

quickcheck::quickcheck! {
    fn parents_are_found(xs: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.into_iter().collect();

        tree.iter(Order::Preorder).all(|parent| {
            [parent.left(), parent.right()]
                .into_iter()
                .flatten()
                .all(|child| {
                    tree.find_parent_of(child.key()).map(|p| p.key()) == Some(parent.key())
                })
        })
    }
}
