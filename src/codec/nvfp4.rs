//! NVFP4: two-level scale FP4 (E2M1). A single `f32` tensor scale, then one
//! E4M3 block scale per 16-element block, then 4-bit codes packed two per
//! byte. Reconstruction: `x ≈ tensor_scale * block_scale * decode(code)`.

use bytemuck::{Pod, Zeroable};

use crate::error::{BsqError, Result};
use crate::float::{fp4, fp8};

pub const BLOCK_SIZE: usize = 16;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Header {
    tensor_scale: f32,
}

const HEADER_SIZE: usize = std::mem::size_of::<Header>();

fn num_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    HEADER_SIZE + num_blocks(num_elements) + num_elements.div_ceil(2)
}

fn choose_tensor_scale(src: &[f32]) -> f32 {
    let abs_max = src.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    if abs_max <= 0.0 {
        1.0
    } else {
        abs_max / fp4::max_norm()
    }
}

fn choose_block_scale_code(block: &[f32], inv_tensor_scale: f32) -> u8 {
    let abs_max = block
        .iter()
        .fold(0.0f32, |acc, v| acc.max((v * inv_tensor_scale).abs()));
    let target = if abs_max <= 0.0 {
        1.0
    } else {
        abs_max / fp8::MAX_NORM
    };
    fp8::from_f32(target)
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let tensor_scale = choose_tensor_scale(src);
    let inv_tensor_scale = 1.0 / tensor_scale;
    let nb = num_blocks(src.len());

    let mut scale_codes = Vec::with_capacity(nb);
    let mut block_scales = Vec::with_capacity(nb);
    for block in src.chunks(BLOCK_SIZE) {
        let code = choose_block_scale_code(block, inv_tensor_scale);
        scale_codes.push(code);
        block_scales.push(fp8::to_f32(code));
    }

    let mut data = Vec::with_capacity(src.len().div_ceil(2));
    let mut idx = 0usize;
    for pair in src.chunks(2) {
        let block_scale0 = block_scales[idx / BLOCK_SIZE];
        let hi = fp4::from_f32(pair[0] * inv_tensor_scale / block_scale0);
        let lo = if pair.len() == 2 {
            let block_scale1 = block_scales[(idx + 1) / BLOCK_SIZE];
            fp4::from_f32(pair[1] * inv_tensor_scale / block_scale1)
        } else {
            0
        };
        data.push((hi << 4) | (lo & 0xF));
        idx += 2;
    }

    let mut out = Vec::with_capacity(packed_size(src.len()));
    out.extend_from_slice(bytemuck::bytes_of(&Header { tensor_scale }));
    out.extend_from_slice(&scale_codes);
    out.extend_from_slice(&data);
    Ok(out)
}

pub fn decompress(payload: &[u8], dst: &mut [f32]) -> Result<()> {
    let expected = packed_size(dst.len());
    if payload.len() < expected {
        return Err(BsqError::BufferTooSmall {
            needed: expected,
            got: payload.len(),
        });
    }
    let header: Header = bytemuck::pod_read_unaligned(&payload[..HEADER_SIZE]);
    let nb = num_blocks(dst.len());
    let scale_codes = &payload[HEADER_SIZE..HEADER_SIZE + nb];
    let data = &payload[HEADER_SIZE + nb..expected];

    for (i, x) in dst.iter_mut().enumerate() {
        let block_scale = fp8::to_f32(scale_codes[i / BLOCK_SIZE]);
        let byte = data[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0xF };
        *x = header.tensor_scale * block_scale * fp4::to_f32(nibble);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_tolerance() {
        let src: Vec<f32> = (0..48).map(|i| (i as f32 - 24.0) * 0.2).collect();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 2.0, "{a} vs {b}");
        }
    }

    #[test]
    fn all_zero_tensor_round_trips_to_zero() {
        let src = vec![0.0f32; 16];
        let payload = compress(&src).unwrap();
        let mut dst = vec![1.0f32; 16];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst, src);
    }
}
