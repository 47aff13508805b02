//! The vertex type shared by the tree and its traversals.

use std::fmt;

use crate::traverse::{Iter, Order};

/// An owned, possibly absent child subtree.
pub(crate) type Link<K> = Option<Box<TreeNode<K>>>;

/// A single vertex of a [`BinarySearchTree`][crate::BinarySearchTree].
///
/// A node owns its two children outright and knows nothing about its parent. Keeping the
/// children ordered relative to the key is the tree's job, not the node's.
pub struct TreeNode<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Drop for TreeNode<K> {
    fn drop(&mut self) {
        // Unlink descendants one by one so a tall subtree doesn't recurse through every `Box`.
        let mut pending: Vec<Box<Self>> = self.left.take().into_iter().collect();
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Clone for TreeNode<K>
where
    K: Clone,
{
    /// Copies the whole subtree bottom up. In postorder both subtrees of a node have been
    /// copied by the time the node is reached, right on top of left.
    fn clone(&self) -> Self {
        let mut copied: Vec<Box<Self>> = Vec::new();
        for node in Iter::new(Some(self), Order::Postorder) {
            let right = node.right.as_ref().and_then(|_| copied.pop());
            let left = node.left.as_ref().and_then(|_| copied.pop());
            copied.push(Box::new(Self {
                key: node.key.clone(),
                left,
                right,
            }));
        }

        match copied.pop() {
            Some(root) => *root,
            None => Self::new(self.key.clone()),
        }
    }
}

impl<K> fmt::Debug for TreeNode<K>
where
    K: fmt::Debug,
{
    /// Shows the key and the keys of the children, not the whole subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("key", &self.key)
            .field("left", &self.left().map(Self::key))
            .field("right", &self.right().map(Self::key))
            .finish()
    }
}

impl<K> TreeNode<K> {
    /// Construct a childless node holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Replaces the left subtree, handing back the one that was there.
    pub fn set_left(&mut self, left: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.left, left.map(Box::new)).map(|old| *old)
    }

    /// Replaces the right subtree, handing back the one that was there.
    pub fn set_right(&mut self, right: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.right, right.map(Box::new)).map(|old| *old)
    }

    /// `true` when neither child is present.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `true` when both children are present.
    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// The only child of this node when exactly one is present. Leaves and full nodes give
    /// `None`.
    pub fn sole_child(&self) -> Option<&Self> {
        match (self.left(), self.right()) {
            (Some(child), None) | (None, Some(child)) => Some(child),
            _ => None,
        }
    }
}
