//! Error types for index-checked operations.

use thiserror::Error;

/// Errors reported by the checked (`try_*`) operations of [`FenwickTree`].
///
/// [`FenwickTree`]: crate::FenwickTree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index fell outside `0..len`.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A range was reversed or reached past the end of the structure.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
