//! Errors that can occur when addressing or iterating a [`SeqList`](../struct.SeqList.html).

use thiserror::Error;

/// Error type for all fallible [`SeqList`](../struct.SeqList.html) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error,)]
pub enum Error {
    /// An index fell outside the range accepted by the operation.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the list when the index was rejected.
        len: usize,
    },
    /// A value was requested from an iterator which has no more elements.
    #[error("the iterator has no more elements")]
    Exhausted,
}

impl Error {
    /// Returns the rejected index if this is an [`Error::IndexOutOfRange`].
    #[inline]
    pub fn index(&self,) -> Option<usize,> {
        match *self {
            Error::IndexOutOfRange { index, .. } => Some(index),
            Error::Exhausted => None,
        }
    }
}
