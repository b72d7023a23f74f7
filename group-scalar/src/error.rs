//! Error types.

/// Scalar errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Binary encoding has the wrong length.
    #[error("wrong size buffer: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Length the encoding must have.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Bytes are not a canonical encoding of a field element.
    #[error("scalar was not canonically encoded")]
    NonCanonical,

    /// Failure of the underlying reader or writer.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
