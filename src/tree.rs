mod node;
mod preorder;
mod inorder;
mod postorder;
mod levelorder;
mod range;
mod into_iter;
mod display;

pub use node::Node;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use levelorder::*;
pub use range::*;
pub use into_iter::*;

use std::fmt;
use std::mem;
use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

use crate::error::{Error, Result};

use node::Link;

/// A link-based binary search tree (BST) whose items are their own keys
///
/// BST properties: For each node with item `v`:
/// - Every item in the left subtree is less than `v`
/// - Every item in the right subtree is greater than or equal to `v`
///
/// Items that compare equal are all kept (they are routed to the right of each other), so this
/// is not a set. Lookups return one of the equal items. Removing a node with two children lifts
/// the largest item of its left subtree into it; if that item is stored more than once, copies of
/// it may remain in the left subtree. Every operation only relies on `left <= item <= right`.
///
/// The tree never rebalances itself. Inserting items in sorted order produces a chain; call
/// [`rebalance`](LinkedBST::rebalance) to rebuild it with minimal height.
pub struct LinkedBST<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for LinkedBST<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> Drop for LinkedBST<T> {
    fn drop(&mut self) {
        // Dropping the boxes directly would recurse once per level, which overflows the stack on
        // chain-shaped trees
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_left());
            stack.extend(node.take_right());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedBST<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedBST")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T: Clone> Clone for LinkedBST<T> {
    fn clone(&self) -> Self {
        // Post-order walk: both subtrees of a node are built before the node itself
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut stack: Vec<(&Node<T>, bool)> = self.root().map(|root| (root, false)).into_iter().collect();
        while let Some((node, children_built)) = stack.pop() {
            if children_built {
                let right = if node.has_right() { built.pop() } else { None };
                let left = if node.has_left() { built.pop() } else { None };
                built.push(Box::new(Node::with_children(node.value().clone(), left, right)));
            } else {
                stack.push((node, true));
                stack.extend(node.right().map(|right| (right, false)));
                stack.extend(node.left().map(|left| (left, false)));
            }
        }

        debug_assert!(built.len() <= 1);
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T: Ord> PartialEq for LinkedBST<T> {
    fn eq(&self, other: &Self) -> bool {
        // Trees with the same items may be shaped differently depending on insertion order, so
        // compare the sorted sequences instead of the structure
        self.len() == other.len() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord> Eq for LinkedBST<T> {}

impl<T> LinkedBST<T> {
    /// Creates an empty `LinkedBST`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBST;
    /// let mut tree: LinkedBST<&str> = LinkedBST::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items in the tree (i.e. the number of nodes)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBST;
    ///
    /// let mut tree = LinkedBST::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.add(1);
    /// tree.add(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no items
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!((self.len == 0) == self.root.is_none());
        self.len == 0
    }

    /// Removes every item from the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked_bst;
    ///
    /// let mut tree = linked_bst![3, 1, 2];
    /// assert!(!tree.is_empty());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the height of the tree: the number of links on the longest path from the root to
    /// a leaf
    ///
    /// An empty tree has height -1 and a single node has height 0.
    ///
    /// Time complexity: `O(n)`
    pub fn height(&self) -> isize {
        Node::height(self.root())
    }

    /// Iterates over the items in ascending order. Same as [`iter_inorder`](LinkedBST::iter_inorder)
    pub fn iter(&self) -> IterInorder<'_, T> {
        self.iter_inorder()
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, T> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree, yielding the items in ascending order
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(self.root())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, T> {
        IterPostorder::new(self.root())
    }

    /// Performs a level-order (breadth-first) traversal of the tree
    pub fn iter_levelorder(&self) -> IterLevelorder<'_, T> {
        IterLevelorder::new(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing traversals. The shape of the
    /// tree depends on insertion order and on calls to `rebalance`, so for a guaranteed ordering
    /// use the various iteration methods.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{linked_bst, tree::Node};
    ///
    /// // Sum of the items on the leftmost path
    /// fn left_spine_sum(mut node: Option<&Node<i32>>) -> i32 {
    ///     let mut sum = 0;
    ///     while let Some(current) = node {
    ///         sum += current.value();
    ///         node = current.left();
    ///     }
    ///     sum
    /// }
    ///
    /// let tree = linked_bst![5, 3, 8, 1];
    /// assert_eq!(left_spine_sum(tree.root()), 9);
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> LinkedBST<T> {
    /// Returns `true` if the tree contains an item equal to `item`
    ///
    /// The item may be any borrowed form of the tree's item type, but the ordering on the
    /// borrowed form must match the ordering on the item type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBST;
    ///
    /// let mut tree = LinkedBST::new();
    /// tree.add(String::from("abc"));
    /// assert!(tree.contains("abc"));
    /// assert!(!tree.contains("def"));
    /// ```
    pub fn contains<Q>(&self, item: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find(item).is_some()
    }

    /// Returns a reference to a stored item equal to `item`, or `None` if there is no such item
    ///
    /// If several equal items are stored, the one closest to the root is returned.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBST;
    ///
    /// let mut tree = LinkedBST::new();
    /// tree.add(1);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&2), None);
    /// ```
    pub fn find<Q>(&self, item: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match item.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node.value()),
            }
        }

        None
    }

    fn find_node_mut<Q>(&mut self, item: &Q) -> Option<&mut Node<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current.take() {
            match item.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left_mut(),
                Ordering::Greater => current = node.right_mut(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Adds an item to the tree
    ///
    /// The item is always added, even if an equal item is already present. Equal items are
    /// placed to the right of each other. The tree is not rebalanced.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBST;
    ///
    /// let mut tree = LinkedBST::new();
    /// tree.add(37);
    /// tree.add(37);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&37, &37]);
    /// ```
    pub fn add(&mut self, item: T) {
        let mut current = match self.root.as_deref_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Box::new(Node::new(item)));

                debug_assert_eq!(self.len, 0);
                self.len = 1;

                return;
            },
        };

        while let Some(node) = current.take() {
            if item < *node.value() {
                // Free spot found, attach where we stopped
                if !node.has_left() {
                    node.set_left(Node::new(item));
                    break;
                }
                current = node.left_mut();
            } else {
                // Greater or equal items go right
                if !node.has_right() {
                    node.set_right(Node::new(item));
                    break;
                }
                current = node.right_mut();
            }
        }

        self.len += 1;
    }

    /// Removes an item equal to `item` from the tree and returns it
    ///
    /// If the matched node has two children, its item is swapped out for the largest item of
    /// its left subtree and that item's node is unlinked instead. Exactly one node is released
    /// per call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no equal item is stored. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{linked_bst, Error};
    ///
    /// let mut tree = linked_bst![5, 3, 8];
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(Error::NotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        // Find the link that owns the matching node. The root link is handled like any other.
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                None => {
                    log::trace!("remove: no matching item among {} items", self.len);
                    return Err(Error::NotFound);
                },
                Some(node) => item.cmp(node.value().borrow()),
            };

            // Only reborrow the link when moving down so nothing is borrowed on `break`
            match ordering {
                Ordering::Equal => break,
                Ordering::Less => if let Some(node) = link {
                    link = node.left_link_mut();
                },
                Ordering::Greater => if let Some(node) = link {
                    link = node.right_link_mut();
                },
            }
        }

        let mut target = match link.take() {
            Some(target) => target,
            None => return Err(Error::NotFound),
        };

        let removed = if target.has_right() {
            match target.detach_left_max() {
                // Two children: lift the in-order predecessor into this node and keep the node
                Some(predecessor) => {
                    let removed = target.replace_value(predecessor);
                    *link = Some(target);
                    removed
                },

                None => {
                    let (removed, _, right) = target.into_parts();
                    *link = right;
                    removed
                },
            }
        } else {
            let (removed, left, _) = target.into_parts();
            *link = left;
            removed
        };

        self.len -= 1;
        debug_assert!(self.len != 0 || self.root.is_none());

        Ok(removed)
    }

    /// Replaces a stored item equal to `item` with `new_item`, returning the previous item, or
    /// `None` if there is no such item
    ///
    /// If `new_item` compares equal to `item` it is written into the same node. Otherwise the old
    /// item is removed and `new_item` is added at its own position, so the tree stays ordered.
    /// The number of items never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked_bst;
    ///
    /// let mut tree = linked_bst![5, 3, 8];
    /// assert_eq!(tree.replace(&3, 9), Some(3));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&5, &8, &9]);
    /// assert_eq!(tree.replace(&3, 1), None);
    /// ```
    pub fn replace<Q>(&mut self, item: &Q, new_item: T) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        if item.cmp(new_item.borrow()) == Ordering::Equal {
            let node = self.find_node_mut(item)?;
            return Some(node.replace_value(new_item));
        }

        let removed = self.remove(item).ok()?;
        log::trace!("replace: new item belongs elsewhere, re-adding it");
        self.add(new_item);

        Some(removed)
    }

    /// Returns true if the height of the tree is within `2 * log2(len + 1) - 1`
    ///
    /// This is an approximate bound, not a per-node (AVL style) balance check. An empty tree is
    /// balanced: its height of -1 meets the bound of -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBST;
    ///
    /// let mut tree: LinkedBST<_> = (0..100).collect();
    /// assert!(!tree.is_balanced());
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let bound = 2.0 * ((self.len + 1) as f64).log2() - 1.0;
        self.height() as f64 <= bound
    }

    /// Iterates in ascending order over the items between `low` and `high`, both inclusive
    ///
    /// Subtrees outside of the range are skipped. If `low > high` nothing is yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked_bst;
    ///
    /// let tree = linked_bst![5, 3, 8, 1, 4, 7, 9];
    /// let items: Vec<_> = tree.range_find(&3, &8).copied().collect();
    /// assert_eq!(items, [3, 4, 5, 7, 8]);
    /// ```
    pub fn range_find<'a, Q>(&'a self, low: &'a Q, high: &'a Q) -> Range<'a, T, Q>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        Range::new(self.root(), low, high)
    }

    /// Returns the smallest item strictly greater than `item`, or `None` if there is no such item
    ///
    /// `item` does not need to be stored in the tree.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked_bst;
    ///
    /// let tree = linked_bst![5, 3, 8, 1, 4, 7, 9];
    /// assert_eq!(tree.successor(&5), Some(&7));
    /// assert_eq!(tree.successor(&6), Some(&7));
    /// assert_eq!(tree.successor(&9), None);
    /// ```
    pub fn successor<Q>(&self, item: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut candidate = None;
        let mut current = self.root();
        while let Some(node) = current {
            let value: &Q = node.value().borrow();
            if value > item {
                candidate = Some(node.value());
                current = node.left();
            } else {
                current = node.right();
            }
        }

        candidate
    }

    /// Returns the largest item strictly less than `item`, or `None` if there is no such item
    ///
    /// `item` does not need to be stored in the tree.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked_bst;
    ///
    /// let tree = linked_bst![5, 3, 8, 1, 4, 7, 9];
    /// assert_eq!(tree.predecessor(&5), Some(&4));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor<Q>(&self, item: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut candidate = None;
        let mut current = self.root();
        while let Some(node) = current {
            let value: &Q = node.value().borrow();
            if value < item {
                candidate = Some(node.value());
                current = node.right();
            } else {
                current = node.left();
            }
        }

        candidate
    }

    /// Rebuilds the tree with minimal height for its current items
    ///
    /// The items are taken out in ascending order and added back median first: the middle item
    /// of the sorted sequence, then (recursively) the middle items of its left and right halves.
    /// The number of items and their in-order sequence are unchanged.
    ///
    /// Minimal height is only reached when all items are distinct. Re-adding goes through
    /// [`add`](Self::add), which sends equal items to the right, so a run of equal items
    /// becomes a right-leaning chain again.
    ///
    /// ```
    /// use linked_bst::LinkedBST;
    ///
    /// let mut tree: LinkedBST<_> = vec![2; 6].into_iter().collect();
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 5);
    /// assert!(!tree.is_balanced());
    /// ```
    ///
    /// Time complexity: `O(n log n)`
    pub fn rebalance(&mut self) {
        let mut items: Vec<Option<T>> = mem::take(self).into_iter().map(Some).collect();

        // Half-open ranges of `items` still to be added. The left half is pushed last so that it
        // is added before the right half.
        let mut pending = vec![(0, items.len())];
        while let Some((start, end)) = pending.pop() {
            if start >= end {
                continue;
            }

            let mid = start + (end - start) / 2;
            if let Some(item) = items[mid].take() {
                self.add(item);
            }

            pending.push((mid + 1, end));
            pending.push((start, mid));
        }

        log::debug!("rebalanced {} items to height {}", self.len, self.height());
    }
}

impl<T: Ord> Extend<T> for LinkedBST<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for LinkedBST<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a LinkedBST<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

impl<T> IntoIterator for LinkedBST<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);
        IntoIter::new(self.root.take(), len)
    }
}
