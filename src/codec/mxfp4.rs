//! MXFP4: block-scaled FP4 (E2M1) with a power-of-two block scale.
//! Block size 32. Layout: `scales: i8[num_blocks]` followed by 4-bit codes
//! packed two per byte (even index high nibble, odd index low nibble),
//! packed continuously across the whole element range.

use crate::error::{BsqError, Result};
use crate::float::fp4;

pub const BLOCK_SIZE: usize = 32;

fn num_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    num_blocks(num_elements) + num_elements.div_ceil(2)
}

fn choose_scale_exponent(abs_max: f32) -> i8 {
    if abs_max <= 0.0 {
        return 0;
    }
    (abs_max / fp4::max_norm()).log2().ceil() as i8
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let nb = num_blocks(src.len());
    let mut scales = Vec::with_capacity(nb);
    let mut block_scale_values = Vec::with_capacity(nb);

    for block in src.chunks(BLOCK_SIZE) {
        let abs_max = block.iter().fold(0.0f32, |acc, v| {
            let v = if v.is_finite() { *v } else { 0.0 };
            acc.max(v.abs())
        });
        let exponent = choose_scale_exponent(abs_max);
        scales.push(exponent as u8);
        block_scale_values.push(2f32.powi(exponent as i32));
    }

    let mut data = Vec::with_capacity(src.len().div_ceil(2));
    let mut chunks = src.chunks(2);
    let mut idx = 0usize;
    while let Some(pair) = chunks.next() {
        let scale0 = block_scale_values[idx / BLOCK_SIZE];
        let v0 = if pair[0].is_finite() { pair[0] } else { 0.0 };
        let hi = fp4::from_f32(v0 / scale0);
        let lo = if pair.len() == 2 {
            let scale1 = block_scale_values[(idx + 1) / BLOCK_SIZE];
            let v1 = if pair[1].is_finite() { pair[1] } else { 0.0 };
            fp4::from_f32(v1 / scale1)
        } else {
            0
        };
        data.push((hi << 4) | (lo & 0xF));
        idx += 2;
    }

    let mut out = Vec::with_capacity(packed_size(src.len()));
    out.extend_from_slice(&scales);
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
    let nb = num_blocks(dst.len());
    let scales = &payload[..nb];
    let data = &payload[nb..expected];

    for (i, x) in dst.iter_mut().enumerate() {
        let exponent = scales[i / BLOCK_SIZE] as i8;
        let scale = 2f32.powi(exponent as i32);
        let byte = data[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0xF };
        *x = scale * fp4::to_f32(nibble);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_tolerance() {
        let src: Vec<f32> = (0..40).map(|i| (i as f32 - 20.0) * 0.3).collect();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 2.0, "{a} vs {b}");
        }
    }

    #[test]
    fn crosses_block_boundary_at_odd_offset() {
        // Element 31 (block 0) paired with element 32 (block 1) in one byte.
        let mut src = vec![0.0f32; 34];
        src[31] = 5.0;
        src[32] = 100.0;
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        assert!(dst[32] > dst[31]);
    }
}
