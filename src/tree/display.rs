use std::fmt;

use super::{LinkedBST, Node};

/// Renders the tree rotated 90 degrees counter-clockwise
///
/// Each item is printed on its own line, prefixed by `"| "` once per level of depth. The right
/// subtree comes above its parent and the left subtree below it, so the root sits at the left
/// margin and reading top to bottom gives the items in descending order.
///
/// ```
/// use linked_bst::linked_bst;
///
/// let tree = linked_bst![2, 1, 3];
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T: fmt::Display> fmt::Display for LinkedBST<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse in-order walk (right, node, left), keeping the depth of every pending node
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut current = self.root().map(|root| (root, 0));

        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right().map(|right| (right, depth + 1));
            }

            let (node, depth) = match stack.pop() {
                Some(entry) => entry,
                None => break,
            };

            for _ in 0..depth {
                f.write_str("| ")?;
            }
            writeln!(f, "{}", node.value())?;

            current = node.left().map(|left| (left, depth + 1));
        }

        Ok(())
    }
}
