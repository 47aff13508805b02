//! Depth-first walks over a subtree of [`TreeNode`]s.
//!
//! [`Iter`] is the lazy sequence of nodes for one of the three classic [`Order`]s.
//! [`Traverser`] drives an `Iter` to the end, firing a callback for each node and
//! remembering every node it visited.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{BinarySearchTree, Order, Traverser};
//!
//! let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
//!
//! let mut seen = Vec::new();
//! let mut traverser = Traverser::new(Order::Postorder, |node| seen.push(*node.key()));
//! traverser.traverse(tree.root());
//! let visited = traverser.into_nodes().len();
//!
//! assert_eq!(seen, [1, 3, 2]);
//! assert_eq!(visited, 3);
//! ```

use crate::node::TreeNode;

/// The order in which a depth-first walk reports nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node, then the right subtree. On a search tree this yields
    /// keys in ascending order.
    Inorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

/// Pending work on the explicit stack.
enum Step<'a, K> {
    /// Push this node's subtrees and the node itself in the right order.
    Expand(&'a TreeNode<K>),
    /// Hand this node to the caller.
    Visit(&'a TreeNode<K>),
}

/// A lazy depth-first iterator over a subtree.
///
/// The walk keeps its own stack instead of recursing so a degenerate, list shaped tree can be
/// walked no matter how tall it is.
pub struct Iter<'a, K> {
    order: Order,
    stack: Vec<Step<'a, K>>,
}

impl<'a, K> Iter<'a, K> {
    /// Starts a walk of the subtree rooted at `root`. An absent root gives an empty walk.
    pub fn new(root: Option<&'a TreeNode<K>>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Step::Expand).into_iter().collect(),
        }
    }

    /// Schedules `node` and its children. The stack is LIFO so everything is pushed in reverse
    /// of the order it should come out.
    fn expand(&mut self, node: &'a TreeNode<K>) {
        let left = node.left().map(Step::Expand);
        let right = node.right().map(Step::Expand);

        match self.order {
            Order::Preorder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(Step::Visit(node));
            }
            Order::Inorder => {
                self.stack.extend(right);
                self.stack.push(Step::Visit(node));
                self.stack.extend(left);
            }
            Order::Postorder => {
                self.stack.push(Step::Visit(node));
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a TreeNode<K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Visit(node) => return Some(node),
                Step::Expand(node) => self.expand(node),
            }
        }

        None
    }
}

/// Walks a subtree in a fixed [`Order`], calling `visit` once per node and recording the nodes
/// in the order they were visited.
pub struct Traverser<'a, K, F> {
    order: Order,
    visit: F,
    nodes: Vec<&'a TreeNode<K>>,
}

impl<'a, K, F> Traverser<'a, K, F>
where
    F: FnMut(&'a TreeNode<K>),
{
    /// Builds a traverser for `order` that reports each node to `visit`.
    pub fn new(order: Order, visit: F) -> Self {
        Self {
            order,
            visit,
            nodes: Vec::new(),
        }
    }

    /// Walks the subtree rooted at `root` and returns the visited nodes.
    ///
    /// Every call starts over: the record from a previous walk is discarded. Walking an absent
    /// subtree visits nothing and never calls `visit`.
    pub fn traverse(&mut self, root: Option<&'a TreeNode<K>>) -> &[&'a TreeNode<K>] {
        self.nodes.clear();
        for node in Iter::new(root, self.order) {
            (self.visit)(node);
            self.nodes.push(node);
        }

        &self.nodes
    }

    /// The order this traverser walks in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// The nodes visited by the last walk.
    pub fn nodes(&self) -> &[&'a TreeNode<K>] {
        &self.nodes
    }

    /// Consumes the traverser, keeping only the nodes visited by the last walk.
    pub fn into_nodes(self) -> Vec<&'a TreeNode<K>> {
        self.nodes
    }
}
