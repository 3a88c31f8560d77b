use thiserror::Error;

/// Error surface for the codec and envelope APIs.
///
/// Mirrors the four error kinds of the reference design: a bad argument,
/// a destination/buffer that is too small, an allocation failure, and an
/// internal codec failure (bad grid state, unrepresentable input shape).
#[derive(Debug, Error, PartialEq)]
pub enum BsqError {
    /// Null/empty input, zero-length shape, or a method unsupported for
    /// the call shape (e.g. `TOPK` passed to `compress_1d`).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Destination capacity (or a loaded buffer) is smaller than required.
    #[error("buffer too small: needed {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Bytes (or elements, depending on call site) required.
        needed: usize,
        /// Bytes (or elements) actually supplied.
        got: usize,
    },

    /// Allocation failed while building a payload or envelope.
    #[error("allocation failed")]
    Allocation,

    /// Internal codec invariant violated (e.g. malformed grid/table state).
    #[error("codec error: {0}")]
    Codec(&'static str),
}

pub type Result<T> = std::result::Result<T, BsqError>;
