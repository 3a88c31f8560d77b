//! Large-grid 2-bit codecs (IQ2_XXS / IQ2_XS / IQ2_S). All three share the
//! same importance-weighted grid-quantization algorithm over super-blocks
//! of 256 elements; they differ in grid size, sign encoding, and scale
//! granularity. See [`group`] for the shared search and [`init`] for the
//! lazily-built grid/neighbor side tables.

pub mod group;
pub mod init;
pub mod s;
pub mod tables;
pub mod xs;
pub mod xxs;
