//! Q8_0: block size 32, one `f32` scale per block, signed 8-bit codes.
//! `scale = abs_max / 127`, `code = round(x / scale)` clamped to `[-127, 127]`.

use crate::error::{BsqError, Result};

pub const BLOCK_SIZE: usize = 32;

fn num_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    num_blocks(num_elements) * 4 + num_elements
}

fn choose_scale(block: &[f32]) -> f32 {
    let abs_max = block.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    if abs_max <= 0.0 {
        0.0
    } else {
        abs_max / 127.0
    }
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let nb = num_blocks(src.len());
    let mut scales = Vec::with_capacity(nb);
    let mut codes = Vec::with_capacity(src.len());

    for block in src.chunks(BLOCK_SIZE) {
        let scale = choose_scale(block);
        scales.push(scale);
        for &x in block {
            let code = if scale == 0.0 {
                0
            } else {
                (x / scale).round().clamp(-127.0, 127.0) as i8
            };
            codes.push(code as u8);
        }
    }

    let mut out = Vec::with_capacity(packed_size(src.len()));
    for s in &scales {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out.extend_from_slice(&codes);
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
    let scale_bytes = &payload[..nb * 4];
    let codes = &payload[nb * 4..expected];

    for (i, x) in dst.iter_mut().enumerate() {
        let b = i / BLOCK_SIZE;
        let scale = f32::from_le_bytes(scale_bytes[b * 4..b * 4 + 4].try_into().unwrap());
        *x = scale * (codes[i] as i8) as f32;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_ramp_round_trips_within_one_code() {
        let src: Vec<f32> = (0..32).map(|i| i as f32 - 16.0).collect();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() <= (16.0 / 127.0) + 1e-4, "{a} vs {b}");
        }
    }

    #[test]
    fn all_zero_block_has_zero_scale() {
        let src = vec![0.0f32; 32];
        let payload = compress(&src).unwrap();
        let mut dst = vec![1.0f32; 32];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst, src);
    }
}
