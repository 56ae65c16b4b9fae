//! Error type for dot-path writes.

use thiserror::Error;

/// Failure reported by [`crate::set`] and [`crate::PathAccessor::set`].
///
/// Reads and deletes never fail; a miss there is a default value or a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// The root passed to `set` is a leaf, so there is nothing to write into.
    #[error("ROOT_NOT_CONTAINER")]
    RootNotContainer,
    /// The path has no tokens, so there is no target key.
    #[error("EMPTY_PATH")]
    EmptyPath,
    /// A token used against an array is not a canonical non-negative index.
    #[error("INVALID_INDEX: {token:?}")]
    InvalidIndex { token: String },
    /// An array index lies past the end of the array (appending at `len` is allowed).
    #[error("INDEX_OUT_OF_BOUNDS: {index} > {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(DotPathError::RootNotContainer.to_string(), "ROOT_NOT_CONTAINER");
        assert_eq!(DotPathError::EmptyPath.to_string(), "EMPTY_PATH");
        assert_eq!(
            DotPathError::InvalidIndex {
                token: "x".to_string()
            }
            .to_string(),
            "INVALID_INDEX: \"x\""
        );
        assert_eq!(
            DotPathError::IndexOutOfBounds { index: 5, len: 2 }.to_string(),
            "INDEX_OUT_OF_BOUNDS: 5 > 2"
        );
    }
}
