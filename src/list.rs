//! Singly linked sequences: a [`LinkedList`] and the [`Stack`] and [`Queue`] built on it.
//!
//! Each list node owns the next one and nothing points backwards, so operations at the tail
//! walk the list from the head.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{BinarySearchTree, Order, Queue, Stack};
//!
//! let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
//!
//! // Traversal output can be collected straight into a queue or a stack.
//! let mut queue: Queue<_> = tree.iter(Order::Inorder).map(|n| *n.key()).collect();
//! let mut stack: Stack<_> = tree.iter(Order::Inorder).map(|n| *n.key()).collect();
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(stack.pop(), Some(3));
//! ```

use std::fmt;

type ListLink<T> = Option<Box<ListNode<T>>>;

struct ListNode<T> {
    value: T,
    next: ListLink<T>,
}

/// A singly linked list.
pub struct LinkedList<T> {
    head: ListLink<T>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    /// Renders the list as `(a) -> (b) -> (c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "({})", value)?;
        }

        Ok(())
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> LinkedList<T> {
    /// Generate a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// How many values the list holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The value at the head of the list.
    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// The value at the tail of the list.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            next: self.head.as_deref(),
        }
    }

    /// Adds `value` at the tail.
    pub fn append(&mut self, value: T) {
        *self.tail_link() = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
    }

    /// Adds `value` at the head.
    pub fn insert_beginning(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    /// Adds `value` right after the value at `index`. Returns `false` if there is no such
    /// index.
    pub fn insert_after(&mut self, index: usize, value: T) -> bool {
        let Some(node) = self.node_mut(index) else {
            return false;
        };
        let next = node.next.take();
        node.next = Some(Box::new(ListNode { value, next }));
        self.len += 1;
        true
    }

    /// Removes and returns the value right after the value at `index`.
    pub fn remove_after(&mut self, index: usize) -> Option<T> {
        let node = self.node_mut(index)?;
        let mut removed = node.next.take()?;
        node.next = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    /// Removes and returns the value at the head.
    pub fn remove_beginning(&mut self) -> Option<T> {
        let mut removed = self.head.take()?;
        self.head = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    /// Removes and returns the value at the tail.
    pub fn remove_last(&mut self) -> Option<T> {
        let mut link = &mut self.head;
        loop {
            let is_last = link.as_ref().map(|node| node.next.is_none())?;
            link = match (is_last, link) {
                (false, Some(node)) => &mut node.next,
                (_, link) => {
                    let removed = link.take()?;
                    self.len -= 1;
                    return Some(removed.value);
                }
            };
        }
    }

    /// The empty link after the last node.
    fn tail_link(&mut self) -> &mut ListLink<T> {
        let mut link = &mut self.head;
        loop {
            let at_end = link.is_none();
            link = match (at_end, link) {
                (false, Some(node)) => &mut node.next,
                (_, link) => return link,
            };
        }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut ListNode<T>> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }

        Some(node)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.extend(values);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        // Find the tail once rather than walking to it for every value.
        let mut added = 0;
        let mut link = self.tail_link();
        for value in values {
            let node = link.insert(Box::new(ListNode { value, next: None }));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

/// Iterator over the values of a [`LinkedList`], head to tail.
pub struct ListIter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

/// A last in, first out stack.
#[derive(Debug)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Puts `value` on top.
    pub fn push(&mut self, value: T) {
        self.list.insert_beginning(value);
    }

    /// Takes the value off the top.
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_beginning()
    }

    /// The value on top, if any.
    pub fn top(&self) -> Option<&T> {
        self.list.first()
    }

    /// How many values are stacked.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// `true` if nothing is stacked.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The backing list, top first.
    pub fn as_list(&self) -> &LinkedList<T> {
        &self.list
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut stack = Self::new();
        stack.extend(values);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }
}

/// A first in, first out queue.
#[derive(Debug)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        self.list.append(value);
    }

    /// Takes the value at the front.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.remove_beginning()
    }

    /// The value at the front, if any.
    pub fn front(&self) -> Option<&T> {
        self.list.first()
    }

    /// How many values are queued.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The backing list, front first.
    pub fn as_list(&self) -> &LinkedList<T> {
        &self.list
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut queue = Self::new();
        queue.extend(values);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.list.extend(values);
    }
}
