//! Q4_0: block size 32, one `f32` scale per block, signed 4-bit codes
//! packed two per byte (even index high nibble, odd low). `scale =
//! abs_max / 7`, `code = round(x / scale)` clamped to `[-7, 7]`. Decoding
//! sign-extends the nibble via a left-shift/arithmetic-right-shift pair.

use crate::error::{BsqError, Result};

pub const BLOCK_SIZE: usize = 32;

fn num_blocks(num_elements: usize) -> usize {
    num_elements.div_ceil(BLOCK_SIZE)
}

pub fn packed_size(num_elements: usize) -> usize {
    num_blocks(num_elements) * 4 + num_elements.div_ceil(2)
}

fn choose_scale(block: &[f32]) -> f32 {
    let abs_max = block.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    if abs_max <= 0.0 {
        0.0
    } else {
        abs_max / 7.0
    }
}

fn quantize(x: f32, scale: f32) -> u8 {
    let code = if scale == 0.0 {
        0i8
    } else {
        (x / scale).round().clamp(-7.0, 7.0) as i8
    };
    (code as u8) & 0xF
}

/// Sign-extend a 4-bit two's-complement nibble to `i8`.
fn sign_extend_nibble(qi: u8) -> i8 {
    ((qi << 4) as i8) >> 4
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let nb = num_blocks(src.len());
    let mut scales = Vec::with_capacity(nb);
    let mut data = Vec::with_capacity(src.len().div_ceil(2));

    for block in src.chunks(BLOCK_SIZE) {
        let scale = choose_scale(block);
        scales.push(scale);
        for pair in block.chunks(2) {
            let hi = quantize(pair[0], scale);
            let lo = if pair.len() == 2 { quantize(pair[1], scale) } else { 0 };
            data.push((hi << 4) | lo);
        }
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
        let qi = if i % 2 == 0 { byte >> 4 } else { byte & 0xF };
        *x = scale * sign_extend_nibble(qi) as f32;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_to_seven_codes() {
        let mut src = vec![0.0f32; 32];
        src[0] = 1000.0;
        src[1] = -1000.0;
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; 32];
        decompress(&payload, &mut dst).unwrap();
        assert!((dst[0] - 1000.0).abs() < 1e-2);
        assert!((dst[1] + 1000.0).abs() < 1e-2);
    }

    #[test]
    fn sign_extend_matches_twos_complement() {
        assert_eq!(sign_extend_nibble(0x0), 0);
        assert_eq!(sign_extend_nibble(0x7), 7);
        assert_eq!(sign_extend_nibble(0x8), -8);
        assert_eq!(sign_extend_nibble(0xF), -1);
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
