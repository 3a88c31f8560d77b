//! Flat per-tensor BF16 codec: no header, no scale, just one BF16 code per
//! input element.

use crate::error::{BsqError, Result};
use crate::float::bf16;

/// Number of payload bytes produced by [`compress`] for `num_elements`
/// inputs.
pub fn packed_size(num_elements: usize) -> usize {
    num_elements * 2
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let mut out = Vec::with_capacity(packed_size(src.len()));
    for &x in src {
        out.extend_from_slice(&bf16::from_f32(x).to_le_bytes());
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
        dst[i] = bf16::to_f32(bits);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_exact_values() {
        let src = vec![1.0f32, -2.0, 0.5, 0.0];
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(compress(&[]).is_err());
    }

    #[test]
    fn short_payload_is_rejected() {
        let payload = compress(&[1.0, 2.0]).unwrap();
        let mut dst = vec![0.0f32; 2];
        assert!(decompress(&payload[..1], &mut dst).is_err());
    }
}
