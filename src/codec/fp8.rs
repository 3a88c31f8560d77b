//! Per-tensor scaled FP8 (E4M3) codec. One `f32` scale, then one E4M3 byte
//! per element: `code = encode(x / scale)`, `x ≈ scale * decode(code)`.

use bytemuck::{Pod, Zeroable};

use crate::error::{BsqError, Result};
use crate::float::fp8;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Header {
    scale: f32,
}

const HEADER_SIZE: usize = std::mem::size_of::<Header>();

pub fn packed_size(num_elements: usize) -> usize {
    HEADER_SIZE + num_elements
}

fn choose_scale(src: &[f32]) -> f32 {
    let abs_max = src.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    if abs_max <= 0.0 {
        1.0
    } else {
        abs_max / fp8::MAX_NORM
    }
}

pub fn compress(src: &[f32]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    let scale = choose_scale(src);
    let header = Header { scale };

    let mut out = Vec::with_capacity(packed_size(src.len()));
    out.extend_from_slice(bytemuck::bytes_of(&header));
    for &x in src {
        out.push(fp8::from_f32(x / scale));
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
    let header: Header = bytemuck::pod_read_unaligned(&payload[..HEADER_SIZE]);
    let codes = &payload[HEADER_SIZE..expected];
    for (i, &code) in codes.iter().enumerate() {
        dst[i] = header.scale * fp8::to_f32(code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_tolerance() {
        let src = vec![1.0f32, -2.0, 10.0, 0.0, -0.5];
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 0.5, "{a} vs {b}");
        }
    }

    #[test]
    fn all_zero_tensor_uses_unit_scale() {
        let src = vec![0.0f32; 4];
        let payload = compress(&src).unwrap();
        let mut dst = vec![1.0f32; 4];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst, src);
    }
}
