use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::Node;

/// Breadth-first traversal: each level from left to right, starting at the root
pub struct IterLevelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> IterLevelorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for IterLevelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterLevelorder<'a, T> {}
