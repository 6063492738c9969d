use thiserror::Error;

/// Errors returned by operations that require an item to be present in the tree
///
/// Lookups that may legitimately miss (`find`, `successor`, `range_find`, ...) return `Option`
/// or an empty iterator instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested item is not stored in the tree
    #[error("item not found in tree")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
