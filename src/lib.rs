//! A link-based binary search tree whose items are their own keys.
//!
//! [`LinkedBST`] keeps its items ordered as they are added, supports lookups, removal, range and
//! successor/predecessor queries, and can be rebuilt with minimal height on demand with
//! [`LinkedBST::rebalance`]. It never rebalances by itself.
//!
//! ```
//! use linked_bst::{linked_bst, Error};
//!
//! let mut tree = linked_bst![5, 3, 8, 1, 4, 7, 9];
//! assert_eq!(tree.successor(&5), Some(&7));
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.remove(&5), Err(Error::NotFound));
//!
//! let items: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(items, [1, 3, 4, 7, 8, 9]);
//! ```

#![allow(clippy::upper_case_acronyms)]

pub mod error;
pub mod tree;

pub use error::{Error, Result};
pub use tree::LinkedBST;

/// Creates a [`LinkedBST`] holding the given items, added in the order they are listed
#[macro_export]
macro_rules! linked_bst {
    // trailing comma case
    ($($item:expr,)+) => ($crate::linked_bst!($($item),+));

    ($($item:expr),*) => {
        {
            let mut _tree = $crate::LinkedBST::new();
            $(
                _tree.add($item);
            )*
            _tree
        }
    };
}
