//! MXFP8: block-scaled FP8 (E4M3) with a power-of-two block scale.
//! Block size 32. Layout: `scales: i8[num_blocks]` followed by
//! `data: u8[num_elements]` (E4M3 codes), no separate header — both array
//! lengths are recoverable from the element count alone.

use crate::error::{BsqError, Result};
use crate::float::fp8;

pub const BLOCK_SIZE: usize = 32;

fn num_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    num_blocks(num_elements) + num_elements
}

fn choose_scale_exponent(abs_max: f32) -> i8 {
    if abs_max <= 0.0 {
        return 0;
    }
    (abs_max / fp8::MAX_NORM).log2().ceil() as i8
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let nb = num_blocks(src.len());
    let mut scales = Vec::with_capacity(nb);
    let mut data = Vec::with_capacity(src.len());

    for block in src.chunks(BLOCK_SIZE) {
        let abs_max = block.iter().fold(0.0f32, |acc, v| {
            let v = if v.is_finite() { *v } else { 0.0 };
            acc.max(v.abs())
        });
        let exponent = choose_scale_exponent(abs_max);
        let scale = 2f32.powi(exponent as i32);
        scales.push(exponent as u8);
        for &x in block {
            let x = if x.is_finite() { x } else { 0.0 };
            data.push(fp8::from_f32(x / scale));
        }
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

    for (b, scale_byte) in scales.iter().enumerate() {
        let exponent = *scale_byte as i8;
        let scale = 2f32.powi(exponent as i32);
        let start = b * BLOCK_SIZE;
        let end = (start + BLOCK_SIZE).min(dst.len());
        for i in start..end {
            dst[i] = scale * fp8::to_f32(data[i]);
        }
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
            assert!((a - b).abs() < 1.0, "{a} vs {b}");
        }
    }

    #[test]
    fn nan_and_inf_inputs_are_treated_as_zero() {
        let src = vec![f32::NAN, f32::INFINITY, 1.0, -1.0];
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst[0], 0.0);
        assert_eq!(dst[1], 0.0);
    }

    #[test]
    fn partial_trailing_block_is_handled() {
        let src: Vec<f32> = (0..33).map(|i| i as f32).collect();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst.len(), 33);
    }
}
