//! NF4: non-uniform 4-bit codebook quantization tuned for roughly-normal
//! weight distributions. Block size 64, one `f32` scale per block
//! (`scale = abs_max`, or 1.0 for an all-zero block), codes are nearest-
//! neighbor indices into [`LEVELS`] packed two per byte.

use crate::error::{BsqError, Result};

pub const BLOCK_SIZE: usize = 64;

/// 16 codebook levels derived from quantiles of a standard normal, the
/// same table used by both NF4 and NF4_DQ.
pub const LEVELS: [f32; 16] = [
    -1.0,
    -0.6961928009986877,
    -0.5250730514526367,
    -0.39491748809814453,
    -0.28444138169288635,
    -0.18477343022823334,
    -0.09105003625154495,
    0.0,
    0.07958029955625534,
    0.16093020141124725,
    0.24611230194568634,
    0.33791524171829224,
    0.44070982933044434,
    0.5626170039176941,
    0.7229568362236023,
    1.0,
];

/// Nearest-level search over [`LEVELS`] for an already-normalized value
/// (`x / scale`, expected roughly in `[-1, 1]`).
pub(crate) fn nearest_code(x: f32) -> u8 {
    let mut best_idx = 0usize;
    let mut best_dist = f32::MAX;
    for (idx, &level) in LEVELS.iter().enumerate() {
        let dist = (level - x).abs();
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }
    best_idx as u8
}

fn num_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    num_blocks(num_elements) * 4 + num_elements.div_ceil(2)
}

pub(crate) fn choose_block_scale(block: &[f32]) -> f32 {
    let abs_max = block.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    if abs_max <= 0.0 {
        1.0
    } else {
        abs_max
    }
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let nb = num_blocks(src.len());
    let mut scales = Vec::with_capacity(nb);
    for block in src.chunks(BLOCK_SIZE) {
        scales.push(choose_block_scale(block));
    }

    let mut data = Vec::with_capacity(src.len().div_ceil(2));
    let mut idx = 0usize;
    for pair in src.chunks(2) {
        let scale0 = scales[idx / BLOCK_SIZE];
        let hi = nearest_code(pair[0] / scale0);
        let lo = if pair.len() == 2 {
            let scale1 = scales[(idx + 1) / BLOCK_SIZE];
            nearest_code(pair[1] / scale1)
        } else {
            0
        };
        data.push((hi << 4) | (lo & 0xF));
        idx += 2;
    }

    let mut out = Vec::with_capacity(packed_size(src.len()));
    for s in &scales {
        out.extend_from_slice(&s.to_le_bytes());
    }
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
    let scale_bytes = &payload[..nb * 4];
    let data = &payload[nb * 4..expected];

    for (i, x) in dst.iter_mut().enumerate() {
        let b = i / BLOCK_SIZE;
        let scale = f32::from_le_bytes(scale_bytes[b * 4..b * 4 + 4].try_into().unwrap());
        let byte = data[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0xF };
        *x = scale * LEVELS[nibble as usize];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_levels_round_trip_exactly() {
        let src: Vec<f32> = LEVELS.to_vec();
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn all_zero_block_round_trips_to_zero() {
        let src = vec![0.0f32; 64];
        let payload = compress(&src).unwrap();
        let mut dst = vec![1.0f32; 64];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst, src);
    }
}
