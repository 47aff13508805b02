//! An unbalanced BST whose nodes have no parent pointers.
//!
//! Whenever an operation needs "the parent of X" it finds it again by searching from the root.
//! That costs `O(height)` per lookup but keeps ownership a plain tree: every node is owned by
//! exactly one link, either a parent's child link or the tree's root.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{BinarySearchTree, Order};
//!
//! let mut tree: BinarySearchTree<_> = [11, 6, 19, 4, 8].into_iter().collect();
//!
//! assert_eq!(tree.keys(Order::Inorder), [4, 6, 8, 11, 19]);
//! assert_eq!(tree.height(), 3);
//!
//! // Inserting a key that's already there changes nothing.
//! assert!(!tree.insert(6));
//!
//! // 6 has two children so its predecessor, 4, takes its place.
//! assert!(tree.delete(&6));
//! assert_eq!(tree.keys(Order::Preorder), [11, 4, 8, 19]);
//! assert_eq!(tree.find_parent_of(&8).map(|n| *n.key()), Some(4));
//!
//! // Deleting it again reports that nothing was there.
//! assert!(!tree.delete(&6));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{Link, TreeNode};
use crate::traverse::{Iter, Order, Traverser};

/// A binary search tree over unique keys.
///
/// For every node, all keys in its left subtree are strictly smaller and all keys in its right
/// subtree are strictly greater. Duplicate inserts are ignored, so a key identifies its node.
pub struct BinarySearchTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for BinarySearchTree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for BinarySearchTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter(Order::Inorder).map(TreeNode::key))
            .finish()
    }
}

impl<K> BinarySearchTree<K> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&TreeNode<K>> {
        self.root.as_deref()
    }

    /// How many keys the tree holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Walks the whole tree lazily in the given order.
    pub fn iter(&self, order: Order) -> Iter<'_, K> {
        Iter::new(self.root(), order)
    }

    /// The keys of the tree in the given visit order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{BinarySearchTree, Order};
    ///
    /// let tree: BinarySearchTree<_> = [2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.keys(Order::Preorder), [2, 1, 3]);
    /// assert_eq!(tree.keys(Order::Inorder), [1, 2, 3]);
    /// assert_eq!(tree.keys(Order::Postorder), [1, 3, 2]);
    /// ```
    pub fn keys(&self, order: Order) -> Vec<K>
    where
        K: Clone,
    {
        let mut traverser = Traverser::new(order, |_| {});
        traverser.traverse(self.root());
        traverser
            .into_nodes()
            .into_iter()
            .map(|node| node.key.clone())
            .collect()
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        // Same as `1 + max(height(left), height(right))`, tracked with an explicit stack.
        let mut height = 0;
        let mut pending: Vec<(&TreeNode<K>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The number of nodes without children.
    pub fn number_of_leaves(&self) -> usize {
        let mut leaves = 0;
        Traverser::new(Order::Preorder, |node: &TreeNode<K>| {
            if node.is_leaf() {
                leaves += 1;
            }
        })
        .traverse(self.root());

        leaves
    }

    /// The rightmost, and therefore largest, node of the subtree rooted at `subtree`.
    ///
    /// An absent subtree has no maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [8, 3, 5, 4, 12].into_iter().collect();
    ///
    /// let root = tree.root();
    /// assert_eq!(BinarySearchTree::find_max(root).map(|n| *n.key()), Some(12));
    /// assert_eq!(
    ///     BinarySearchTree::find_max(root.and_then(|n| n.left())).map(|n| *n.key()),
    ///     Some(5)
    /// );
    /// assert!(BinarySearchTree::<i32>::find_max(None).is_none());
    /// ```
    pub fn find_max(subtree: Option<&TreeNode<K>>) -> Option<&TreeNode<K>> {
        let mut node = subtree?;
        while let Some(right) = node.right() {
            node = right;
        }

        Some(node)
    }
}

impl<K> BinarySearchTree<K>
where
    K: Ord,
{
    /// Inserts `key` and returns `true`, or returns `false` without touching the tree if `key`
    /// is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let link = Self::link_to(&mut self.root, &key);
        if link.is_some() {
            trace!(len = self.len, "key already present, insert is a no-op");
            return false;
        }

        *link = Some(Box::new(TreeNode::new(key)));
        self.len += 1;
        trace!(len = self.len, "inserted key");
        true
    }

    /// The node holding `key`, if any.
    pub fn search(&self, key: &K) -> Option<&TreeNode<K>> {
        let mut node = self.root()?;
        loop {
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// `true` if `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// The node whose left or right child holds `key`.
    ///
    /// Nodes don't know their parents, so this descends from the root checking the children of
    /// each node on the way. The root has no parent and a missing key has none either.
    pub fn find_parent_of(&self, key: &K) -> Option<&TreeNode<K>> {
        let mut node = self.root()?;
        loop {
            let holds_key = |child: Option<&TreeNode<K>>| child.is_some_and(|c| c.key == *key);
            if holds_key(node.left()) || holds_key(node.right()) {
                return Some(node);
            }

            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return None,
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Removes the node holding `key`. Returns `false`, leaving the tree as it was, if there is
    /// no such node.
    ///
    /// The link that owns the node (the root, or a child link of its parent) is found again by
    /// searching from the root and then rewired depending on the node's children:
    ///
    /// * no children: the link is emptied.
    /// * one child: the child moves up into the link.
    /// * two children: the in-order predecessor, the largest key in the left subtree, moves up
    ///   into the link and adopts both subtrees.
    pub fn delete(&mut self, key: &K) -> bool {
        let link = Self::link_to(&mut self.root, key);
        let Some(mut target) = link.take() else {
            trace!(len = self.len, "key not present, nothing to delete");
            return false;
        };

        let (replacement, case) = match (target.left.take(), target.right.take()) {
            (None, None) => (None, "leaf"),
            (Some(child), None) | (None, Some(child)) => (Some(child), "single child"),
            (Some(left), Some(right)) => {
                (Some(Self::splice_predecessor(left, right)), "two children")
            }
        };
        *link = replacement;
        self.len -= 1;
        debug!(case, len = self.len, "deleted node");
        true
    }

    /// Builds the replacement for a deleted node that had both a `left` and a `right` subtree.
    ///
    /// The predecessor is the largest key in `left`, so it is greater than everything left
    /// behind in `left` and smaller than everything in `right`. It is cut out of `left`, its own
    /// left subtree taking its old place, and then adopts what remains of `left` and all of
    /// `right`.
    ///
    /// ```text
    ///        target              pred
    ///        /    \              /   \
    ///       a      right  ->    a    right
    ///      / \                 / \
    ///     x   pred            x   y
    ///         /
    ///        y
    /// ```
    ///
    /// When `left` is itself the predecessor it keeps its own left subtree and just gains
    /// `right`.
    fn splice_predecessor(left: Box<TreeNode<K>>, right: Box<TreeNode<K>>) -> Box<TreeNode<K>> {
        let mut remaining = Some(left);
        let mut predecessor = match Self::detach_max(&mut remaining) {
            Some(predecessor) => predecessor,
            // `remaining` started out as `Some` so there is always a max to detach.
            None => return right,
        };

        predecessor.left = remaining;
        predecessor.right = Some(right);
        predecessor
    }

    /// Cuts the rightmost node out of the subtree in `link`. Its left subtree, if any, is moved
    /// into the link it was cut from.
    fn detach_max(mut link: &mut Link<K>) -> Option<Box<TreeNode<K>>> {
        loop {
            let has_right = link.as_ref().is_some_and(|node| node.right.is_some());
            link = match (has_right, link) {
                (true, Some(node)) => &mut node.right,
                (_, link) => {
                    let mut max = link.take()?;
                    *link = max.left.take();
                    return Some(max);
                }
            };
        }
    }

    /// The link that holds `key`, or the empty link where `key` would be inserted.
    ///
    /// This is the mutable counterpart of [`BinarySearchTree::find_parent_of`]: the link
    /// returned is the child link of the node's parent, or the root itself.
    fn link_to<'a>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K> {
        loop {
            let ordering = link.as_ref().map(|node| key.cmp(&node.key));
            link = match (ordering, link) {
                (Some(Ordering::Less), Some(node)) => &mut node.left,
                (Some(Ordering::Greater), Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }
}

impl<K> FromIterator<K> for BinarySearchTree<K>
where
    K: Ord,
{
    /// Inserts each key in the order given. Later duplicates are ignored.
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<K> Extend<K> for BinarySearchTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}
