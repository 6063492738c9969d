use std::ptr;
use std::iter::FusedIterator;

use super::Node;

/// Depth-first post-order traversal: left subtree, then right subtree, then node
pub struct IterPostorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        if let Some(root) = root {
            iter.descend(root);
        }
        iter
    }

    /// Walks down the left spine from `node`, leaving each right child just below its parent
    fn descend(&mut self, mut node: &'a Node<T>) {
        loop {
            self.stack.extend(node.right());
            self.stack.push(node);

            match node.left() {
                Some(left) => node = left,
                None => break,
            }
        }
    }
}

/// Compares two nodes using pointer equality only
fn is_same_node<T>(top: Option<&&Node<T>>, node: &Node<T>) -> bool {
    top.map_or(false, |&top| ptr::eq(top, node))
}

impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;

            match node.right() {
                // Right subtree not visited yet: swap it with its parent and walk it first
                Some(right) if is_same_node(self.stack.last(), right) => {
                    self.stack.pop();
                    self.stack.push(node);
                    self.descend(right);
                },

                _ => return Some(node.value()),
            }
        }
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}
