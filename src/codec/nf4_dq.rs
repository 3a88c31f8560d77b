//! NF4_DQ: NF4 with its per-block scales themselves quantized (one `f32`
//! `dq_scale` plus one E4M3 byte per block instead of a raw `f32` each).
//! Two passes, matching the reference: first collect the raw per-block
//! scales, then quantize them once `dq_scale` is known from all of them.

use bytemuck::{Pod, Zeroable};

use crate::codec::nf4::{self, LEVELS};
use crate::error::{BsqError, Result};
use crate::float::fp8;

pub const BLOCK_SIZE: usize = nf4::BLOCK_SIZE;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Header {
    dq_scale: f32,
}

const HEADER_SIZE: usize = std::mem::size_of::<Header>();

fn num_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    HEADER_SIZE + num_blocks(num_elements) + num_elements.div_ceil(2)
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let nb = num_blocks(src.len());

    let raw_scales: Vec<f32> = src
        .chunks(BLOCK_SIZE)
        .map(nf4::choose_block_scale)
        .collect();

    let abs_max = raw_scales.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    let dq_scale = if abs_max <= 0.0 { 1.0 } else { abs_max / fp8::MAX_NORM };

    let scale_codes: Vec<u8> = raw_scales
        .iter()
        .map(|&s| fp8::from_f32(s / dq_scale))
        .collect();
    let block_scales: Vec<f32> = scale_codes.iter().map(|&c| dq_scale * fp8::to_f32(c)).collect();

    let mut data = Vec::with_capacity(src.len().div_ceil(2));
    let mut idx = 0usize;
    for pair in src.chunks(2) {
        let scale0 = block_scales[idx / BLOCK_SIZE];
        let hi = nf4::nearest_code(pair[0] / scale0);
        let lo = if pair.len() == 2 {
            let scale1 = block_scales[(idx + 1) / BLOCK_SIZE];
            nf4::nearest_code(pair[1] / scale1)
        } else {
            0
        };
        data.push((hi << 4) | (lo & 0xF));
        idx += 2;
    }

    let mut out = Vec::with_capacity(packed_size(src.len()));
    out.extend_from_slice(bytemuck::bytes_of(&Header { dq_scale }));
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
        let b = i / BLOCK_SIZE;
        let block_scale = header.dq_scale * fp8::to_f32(scale_codes[b]);
        let byte = data[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0xF };
        *x = block_scale * LEVELS[nibble as usize];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_tolerance() {
        let src: Vec<f32> = (0..128).map(|i| (i as f32 - 64.0) * 0.1).collect();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 2.0, "{a} vs {b}");
        }
    }

    #[test]
    fn all_zero_tensor_round_trips_to_zero() {
        let src = vec![0.0f32; 64];
        let payload = compress(&src).unwrap();
        let mut dst = vec![1.0f32; 64];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst, src);
    }
}
