//! Half- and sub-byte-width float helpers shared by the codec family.
//!
//! Each submodule is a pure bit-twiddling conversion layer with no notion
//! of blocks, scales, or payload layout — those concerns live in
//! [`crate::codec`].

pub mod bf16;
pub mod fp16;
pub mod fp4;
pub mod fp8;
