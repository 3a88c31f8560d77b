//! Q2_K / Q2_K_FAST: super-block quantization, 256 elements per super-block
//! split into 16 sub-blocks of 16. Each sub-block gets a 4-bit scale and a
//! 4-bit signed min, both themselves quantized against a super-block-wide
//! FP16 scale and FP16 min; elements become 2-bit codes against their
//! sub-block's decoded `(scale, min)` pair.
//!
//! The reference "optimal" and "fast" variants use the identical scale/min
//! search (plain min-max per sub-block) and differ only in whether the
//! super-block loop runs on one thread or many; here `q2_k_fast` just
//! drives the same routine through rayon.

use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;

use crate::error::{BsqError, Result};
use crate::float::fp16;

pub const SUB_BLOCK_SIZE: usize = 16;
pub const SUB_BLOCKS_PER_SUPER: usize = 16;
pub const SUPER_BLOCK_SIZE: usize = SUB_BLOCK_SIZE * SUB_BLOCKS_PER_SUPER; // 256

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct SuperBlock {
    super_scale: u16,
    super_min: u16,
    scales: [u8; 16],
    data: [u8; 64],
}

const SUPER_BLOCK_BYTES: usize = std::mem::size_of::<SuperBlock>();

fn num_super_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(SUPER_BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    num_super_blocks(num_elements) * SUPER_BLOCK_BYTES
}

/// Plain min-max scale/min for one 16-element sub-block.
fn find_scale_and_min(sub_block: &[f32]) -> (f32, f32) {
    let local_max = sub_block.iter().cloned().fold(f32::MIN, f32::max);
    let local_min = sub_block.iter().cloned().fold(f32::MAX, f32::min);
    ((local_max - local_min) / 3.0, local_min)
}

fn sign_extend_nibble(qi: u8) -> i8 {
    ((qi << 4) as i8) >> 4
}

fn pack_codes(l: &[u8; SUPER_BLOCK_SIZE]) -> [u8; 64] {
    let mut out = [0u8; 64];
    for group in 0..2 {
        let j = group * 128;
        for l_idx in 0..32 {
            let b0 = l[j + l_idx];
            let b1 = l[j + 32 + l_idx];
            let b2 = l[j + 64 + l_idx];
            let b3 = l[j + 96 + l_idx];
            out[j / 4 + l_idx] = b0 | (b1 << 2) | (b2 << 4) | (b3 << 6);
        }
    }
    out
}

fn unpack_codes(data: &[u8; 64]) -> [u8; SUPER_BLOCK_SIZE] {
    let mut out = [0u8; SUPER_BLOCK_SIZE];
    for group in 0..2 {
        let j = group * 128;
        for l_idx in 0..32 {
            let byte = data[j / 4 + l_idx];
            out[j + l_idx] = byte & 0x3;
            out[j + 32 + l_idx] = (byte >> 2) & 0x3;
            out[j + 64 + l_idx] = (byte >> 4) & 0x3;
            out[j + 96 + l_idx] = (byte >> 6) & 0x3;
        }
    }
    out
}

fn quantize_super_block(buf: &[f32; SUPER_BLOCK_SIZE]) -> SuperBlock {
    let mut raw_scale = [0f32; SUB_BLOCKS_PER_SUPER];
    let mut raw_min = [0f32; SUB_BLOCKS_PER_SUPER];
    let mut max_scale = 0f32;
    let mut max_abs_min = 0f32;

    for j in 0..SUB_BLOCKS_PER_SUPER {
        let sub = &buf[j * SUB_BLOCK_SIZE..(j + 1) * SUB_BLOCK_SIZE];
        let (scale, min_val) = find_scale_and_min(sub);
        raw_scale[j] = scale;
        raw_min[j] = min_val;
        max_scale = max_scale.max(scale);
        max_abs_min = max_abs_min.max(min_val.abs());
    }

    let iscale_scale = if max_scale > 0.0 { 15.0 / max_scale } else { 0.0 };
    let iscale_min = if max_abs_min > 0.0 { 7.0 / max_abs_min } else { 0.0 };

    let mut scales = [0u8; 16];
    let mut decoded_scale = [0f32; SUB_BLOCKS_PER_SUPER];
    let mut decoded_min = [0f32; SUB_BLOCKS_PER_SUPER];
    let super_scale_f = max_scale / 15.0;
    let super_min_f = max_abs_min / 7.0;

    for j in 0..SUB_BLOCKS_PER_SUPER {
        let l = (raw_scale[j] * iscale_scale).round().clamp(0.0, 15.0) as u8;
        let signed_min = (raw_min[j] * iscale_min).round().clamp(-8.0, 7.0) as i8;
        scales[j] = l | (((signed_min as u8) & 0xF) << 4);

        decoded_scale[j] = super_scale_f * l as f32;
        decoded_min[j] = super_min_f * signed_min as f32;
    }

    let mut codes = [0u8; SUPER_BLOCK_SIZE];
    for j in 0..SUB_BLOCKS_PER_SUPER {
        let scale = decoded_scale[j];
        let min_val = decoded_min[j];
        for k in 0..SUB_BLOCK_SIZE {
            let x = buf[j * SUB_BLOCK_SIZE + k];
            let code = if scale > 0.0 {
                ((x - min_val) / scale).round().clamp(0.0, 3.0) as u8
            } else {
                0
            };
            codes[j * SUB_BLOCK_SIZE + k] = code;
        }
    }

    SuperBlock {
        super_scale: fp16::from_f32(super_scale_f),
        super_min: fp16::from_f32(super_min_f),
        scales,
        data: pack_codes(&codes),
    }
}

fn dequantize_super_block(block: &SuperBlock, out: &mut [f32]) {
    let super_scale = fp16::to_f32(block.super_scale);
    let super_min = fp16::to_f32(block.super_min);
    let codes = unpack_codes(&block.data);

    for j in 0..SUB_BLOCKS_PER_SUPER {
        let packed = block.scales[j];
        let l = packed & 0xF;
        let signed_min = sign_extend_nibble(packed >> 4);
        let scale = super_scale * l as f32;
        let min_val = super_min * signed_min as f32;

        for k in 0..SUB_BLOCK_SIZE {
            let idx = j * SUB_BLOCK_SIZE + k;
            if idx < out.len() {
                out[idx] = min_val + scale * codes[idx] as f32;
            }
        }
    }
}

fn gather_super_block(src: &[f32], start: usize) -> [f32; SUPER_BLOCK_SIZE] {
    let mut buf = [0f32; SUPER_BLOCK_SIZE];
    let end = (start + SUPER_BLOCK_SIZE).min(src.len());
    buf[..end - start].copy_from_slice(&src[start..end]);
    buf
}

fn compress_serial(src: &[f32]) -> Vec<SuperBlock> {
    let nsb = num_super_blocks(src.len());
    (0..nsb)
        .map(|b| quantize_super_block(&gather_super_block(src, b * SUPER_BLOCK_SIZE)))
        .collect()
}

fn compress_parallel(src: &[f32]) -> Vec<SuperBlock> {
    let nsb = num_super_blocks(src.len());
    (0..nsb)
        .into_par_iter()
        .map(|b| quantize_super_block(&gather_super_block(src, b * SUPER_BLOCK_SIZE)))
        .collect()
}

fn encode(blocks: &[SuperBlock]) -> Vec<u8> {
    let mut out = Vec::with_capacity(blocks.len() * SUPER_BLOCK_BYTES);
    for b in blocks {
        out.extend_from_slice(bytemuck::bytes_of(b));
    }
    out
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    Ok(encode(&compress_serial(src)))
}

/// Identical output to [`compress`], routed through rayon per super-block.
pub fn compress_fast(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    Ok(encode(&compress_parallel(src)))
}

pub fn decompress(payload: &[u8], dst: &mut [f32]) -> Result<()> {
    let expected = packed_size(dst.len());
    if payload.len() < expected {
        return Err(BsqError::BufferTooSmall {
            needed: expected,
            got: payload.len(),
        });
    }
    let nsb = num_super_blocks(dst.len());
    for b in 0..nsb {
        let offset = b * SUPER_BLOCK_BYTES;
        let block: SuperBlock = bytemuck::pod_read_unaligned(&payload[offset..offset + SUPER_BLOCK_BYTES]);
        let start = b * SUPER_BLOCK_SIZE;
        let end = (start + SUPER_BLOCK_SIZE).min(dst.len());
        dequantize_super_block(&block, &mut dst[start..end]);
    }
    Ok(())
}

/// Alias of [`decompress`]: the reference `q2_k_fast` variant delegates
/// straight to `q2_k_decompress`, there is no "fast decode" path.
pub fn decompress_fast(payload: &[u8], dst: &mut [f32]) -> Result<()> {
    decompress(payload, dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_tolerance() {
        let src: Vec<f32> = (0..256).map(|i| ((i as f32) - 128.0) * 0.1).collect();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 0.1, "{a} vs {b}");
        }
    }

    #[test]
    fn fast_variant_matches_serial_variant() {
        let src: Vec<f32> = (0..512).map(|i| ((i as f32) - 256.0) * 0.05).collect();
        let serial = compress(&src).unwrap();
        let fast = compress_fast(&src).unwrap();
        assert_eq!(serial, fast);
    }

    #[test]
    fn partial_trailing_super_block_is_handled() {
        let src: Vec<f32> = (0..300).map(|i| i as f32).collect();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst.len(), 300);
    }
}
