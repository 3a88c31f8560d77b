//! Flat per-tensor binary16 codec: no header, no scale.

use crate::error::{BsqError, Result};
use crate::float::fp16;

pub fn packed_size(num_elements: usize) -> usize {
    num_elements * 2
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let mut out = Vec::with_capacity(packed_size(src.len()));
    for &x in src {
        out.extend_from_slice(&fp16::from_f32(x).to_le_bytes());
    }
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
    for (i, chunk) in payload[..expected].chunks_exact(2).enumerate() {
        let bits = u16::from_le_bytes([chunk[0], chunk[1]]);
        dst[i] = fp16::to_f32(bits);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_exact_values() {
        let src = vec![1.0f32, -2.0, 0.25, 0.0];
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn overflow_saturates_to_infinity() {
        let payload = compress(&[1.0e9]).unwrap();
        let mut dst = vec![0.0f32; 1];
        decompress(&payload, &mut dst).unwrap();
        assert!(dst[0].is_infinite());
    }
}
