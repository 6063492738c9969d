use std::mem;

/// The owning link from a parent (or the tree itself) to a child node
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of the binary search tree
///
/// Each node exclusively owns its children. There is no parent pointer.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self {value, left, right}
    }

    pub(crate) fn into_parts(self) -> (T, Link<T>, Link<T>) {
        (self.value, self.left, self.right)
    }

    /// Returns the item stored in this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    pub(crate) fn left_link_mut(&mut self) -> &mut Link<T> {
        &mut self.left
    }

    pub(crate) fn right_link_mut(&mut self) -> &mut Link<T> {
        &mut self.right
    }

    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }

    /// Replaces the stored item, returning the previous one
    ///
    /// New value MUST maintain BST property
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    /// Unlinks the node holding the largest item of the left subtree and returns that item
    ///
    /// The unlinked node's own left subtree takes its place. Returns `None` (and leaves the
    /// node untouched) if there is no left subtree.
    pub(crate) fn detach_left_max(&mut self) -> Option<T> {
        let mut link = &mut self.left;
        while link.as_ref().map_or(false, |node| node.has_right()) {
            if let Some(node) = link {
                link = &mut node.right;
            }
        }

        let (value, left, _) = link.take()?.into_parts();
        *link = left;
        Some(value)
    }

    /// Height of the subtree rooted at `node`: -1 when absent, 0 for a leaf
    pub(crate) fn height(node: Option<&Self>) -> isize {
        match node {
            None => -1,
            Some(node) => 1 + Self::height(node.left()).max(Self::height(node.right())),
        }
    }
}
