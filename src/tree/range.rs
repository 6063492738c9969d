use std::borrow::Borrow;
use std::iter::FusedIterator;

use super::Node;

/// Ascending iterator over the items `item` with `low <= item <= high`
///
/// Subtrees lying entirely below `low` are never entered and iteration stops at the first item
/// above `high`, so a query costs `O(k + height)` for `k` yielded items.
pub struct Range<'a, T, Q: ?Sized> {
    stack: Vec<&'a Node<T>>,
    low: &'a Q,
    high: &'a Q,
}

impl<'a, T, Q> Range<'a, T, Q>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    pub(super) fn new(root: Option<&'a Node<T>>, low: &'a Q, high: &'a Q) -> Self {
        let mut iter = Self {stack: Vec::new(), low, high};
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            let value: &Q = node.value().borrow();
            if value < self.low {
                // This node and its whole left subtree are below the range
                current = node.right();
            } else {
                self.stack.push(node);
                current = node.left();
            }
        }
    }
}

impl<'a, T, Q> Iterator for Range<'a, T, Q>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let value: &Q = node.value().borrow();
        if value > self.high {
            // Everything still pending comes after this node in order
            self.stack.clear();
            return None;
        }

        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T, Q> FusedIterator for Range<'a, T, Q>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{}
