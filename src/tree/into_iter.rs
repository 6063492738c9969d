use std::iter::FusedIterator;

use super::node::{Link, Node};

/// Consuming in-order iterator: yields the owned items in ascending order
pub struct IntoIter<T> {
    // Every node on the stack has already had its left subtree detached and pushed above it
    stack: Vec<Box<Node<T>>>,
    len: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {stack: Vec::new(), len};
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Link<T>) {
        while let Some(mut node) = current {
            current = node.take_left();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let (value, _, right) = node.into_parts();
        self.push_left_spine(right);
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Walk the rest so that long right chains are released one node at a time
        self.by_ref().for_each(drop);
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
