//! bitsqueeze is a library of lossy numeric codecs for dense FP32 tensors,
//! aimed at neural-network weight and activation quantization.
//!
//! Each codec lives in its own [`codec`] submodule and exposes a uniform
//! `compress`/`decompress`/`packed_size` surface; [`envelope`] binds a
//! [`codec::Method`] tag to one of those codecs in a single self-describing
//! buffer so a caller doesn't need to track which method produced a given
//! payload. [`metrics`] compares an original tensor against a reconstructed
//! one.
//!
//! # Examples
//!
//! See [`envelope`] and the individual [`codec`] submodules.

pub mod codec;
pub mod envelope;
pub mod error;
pub mod float;
pub mod metrics;

pub use codec::Method;
pub use envelope::{compress_1d, compress_2d, decompress, apply, load, packed_size, Envelope, EnvelopeHeader};
pub use error::{BsqError, Result};
