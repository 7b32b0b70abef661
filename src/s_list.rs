//! A simple singly linked list

use alloc::boxed::Box;

use core::fmt;
use core::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

/// A node of a `LinkedList`, owned exclusively by its predecessor
/// (or by the list head for the first node).
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Returns the value held by this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the next node, or None if this is the last one.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Returns true if this node has no successor.
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.value)
    }
}

/// Singly linked list without a tail reference.
///
/// Appending and anything that needs the last node walk from the head,
/// so they cost O(n).
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the first node of the list, or None if the list is empty.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns the first element of the list, or None if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    /// Returns the last element of the list, or None if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.find(|node, _| node.is_tail()).map(Node::value)
    }

    /// Appends an element at the tail of the list.
    pub fn insert(&mut self, value: T) -> &mut Self {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        self
    }

    /// Insert an element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the first element of the list and returns it.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Returns the first node, walking from the head, for which
    /// `predicate(node, index)` holds.
    pub fn find<P>(&self, mut predicate: P) -> Option<&Node<T>>
    where
        P: FnMut(&Node<T>, usize) -> bool,
    {
        let mut curr = self.head.as_deref();
        let mut index = 0;
        while let Some(node) = curr {
            if predicate(node, index) {
                return Some(node);
            }
            curr = node.next.as_deref();
            index += 1;
        }
        None
    }

    /// Unlinks the first node matching `predicate(node, index)` and
    /// returns its value.
    ///
    /// The owning link of the matched node (the head, or the `next` of its
    /// predecessor) is rewired to the node's successor. Returns None if no
    /// node matches.
    pub fn remove<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&Node<T>, usize) -> bool,
    {
        let mut link = &mut self.head;
        let mut index = 0;
        while link
            .as_deref()
            .is_some_and(|node| !predicate(node, index))
        {
            link = &mut link.as_mut()?.next;
            index += 1;
        }

        let node = link.take()?;
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        tracing::trace!(index, len = self.len, "unlinked list node");
        Some(value)
    }

    /// Drops every element of the list.
    pub fn clear(&mut self) {
        // unlink one node at a time, a recursive drop could blow the stack
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator over the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // find the tail link once instead of walking per element
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            let node = link.insert(Box::new(Node::new(value)));
            link = &mut node.next;
            self.len += 1;
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter()`]. See its
/// documentation for more.
pub struct Iter<'a, T: 'a> {
    curr: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.curr = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
