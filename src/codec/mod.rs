//! Per-method codec implementations. Each submodule exposes a
//! `compress(&[f32]) -> Result<Vec<u8>>`, a matching `decompress`, and a
//! `packed_size(usize) -> usize` so callers can size destination buffers
//! without doing a full encode first. [`crate::envelope`] is the one place
//! that dispatches on [`Method`] to pick among them.

pub mod bf16;
pub mod fp16;
pub mod fp4;
pub mod fp8;
pub mod iq2;
pub mod method;
pub mod mxfp4;
pub mod mxfp8;
pub mod nf4;
pub mod nf4_dq;
pub mod nvfp4;
pub mod q2_k;
pub mod q4_0;
pub mod q8_0;
pub mod sparsity;

pub use method::Method;
