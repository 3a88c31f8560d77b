//! Per-tensor scaled FP4 (E2M1) codec. One `f32` scale, then two 4-bit
//! codes packed per byte (even index in the high nibble, odd in the low).

use bytemuck::{Pod, Zeroable};

use crate::error::{BsqError, Result};
use crate::float::fp4;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Header {
    scale: f32,
}

const HEADER_SIZE: usize = std::mem::size_of::<Header>();

pub fn packed_size(num_elements: usize) -> usize {
    HEADER_SIZE + num_elements.div_ceil(2)
}

fn choose_scale(src: &[f32]) -> f32 {
    let abs_max = src.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
    if abs_max <= 0.0 {
        1.0
    } else {
        abs_max / fp4::max_norm()
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

    for pair in src.chunks(2) {
        let hi = fp4::from_f32(pair[0] / scale);
        let lo = if pair.len() == 2 {
            fp4::from_f32(pair[1] / scale)
        } else {
            0
        };
        out.push((hi << 4) | (lo & 0xF));
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

    for (i, x) in dst.iter_mut().enumerate() {
        let byte = codes[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0xF };
        *x = header.scale * fp4::to_f32(nibble);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_tolerance() {
        let src = vec![1.0f32, -2.0, 4.0, 0.0, -0.5];
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 1.0, "{a} vs {b}");
        }
    }

    #[test]
    fn odd_length_tensor_packs_correctly() {
        let src = vec![1.0f32, -1.0, 3.0];
        let payload = compress(&src).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&payload, &mut dst).unwrap();
        assert_eq!(dst.len(), 3);
    }
}
