//! LIFO stack built on nothing more than a [`LinkedList`].

use core::fmt;

use crate::error::{Error, Result};
use crate::s_list::LinkedList;

/// A stack whose top is the last node of the underlying list.
///
/// The list keeps no tail reference, so [`pop`](Stack::pop) and
/// [`peek`](Stack::peek) scan from the head: O(n) time, O(1) extra space.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Pushes a value, which becomes the new top.
    pub fn push(&mut self, value: T) {
        self.list.insert(value);
    }

    /// Removes and returns the top value.
    pub fn pop(&mut self) -> Result<T> {
        self.list
            .remove(|node, _| node.is_tail())
            .ok_or(Error::EmptyStack)
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.list
            .find(|node, _| node.is_tail())
            .map(|node| node.value())
            .ok_or(Error::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.list.head().is_none()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("items", &self.list).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;
    use crate::error::Error;

    #[test]
    fn test_stack() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.peek(), Ok(&1));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new();
        for i in 0..50 {
            stack.push(i);
        }
        for i in (0..50).rev() {
            assert_eq!(stack.pop(), Ok(i));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_fails() {
        let mut stack = Stack::<char>::new();
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
        assert_eq!(stack.peek(), Err(Error::EmptyStack));

        stack.push('x');
        assert_eq!(stack.pop(), Ok('x'));
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
    }
}
