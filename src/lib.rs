//! This crate exposes small, generic linked data structures, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the number of
//! levels from the root `Node` down to the deepest leaf `Node`). The [`BinarySearchTree`]
//! here does no rebalancing, so inserting keys in sorted order gives a tree as tall as it
//! has keys. BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree; see [`Order::Inorder`].
//!
//! The nodes ([`TreeNode`]) don't point back at their parents. Deletion finds the
//! parent of a node again by searching down from the root.
//!
//! ## Lists
//!
//! [`LinkedList`] is a singly linked list; [`Stack`] and [`Queue`] wrap it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod list;
pub mod node;
pub mod traverse;
pub mod tree;

pub use list::{LinkedList, ListIter, Queue, Stack};
pub use node::TreeNode;
pub use traverse::{Iter, Order, Traverser};
pub use tree::BinarySearchTree;
