//! Dispatch layer binding a [`Method`] tag to its codec. An envelope is a
//! small fixed header (method, shape) followed directly by that codec's
//! payload bytes in one contiguous buffer — the reference keeps this as
//! one arena allocation with a pointer fixup on load; here the "fixup" is
//! just reading typed fields out of byte offsets, so there is nothing to
//! re-seat and nothing to explicitly free.

use bytemuck::{Pod, Zeroable};

use crate::codec::{bf16, fp16, fp4, fp8, iq2, method::Method, mxfp4, mxfp8, nf4, nf4_dq, nvfp4, q2_k, q4_0, q8_0, sparsity};
use crate::error::{BsqError, Result};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct EnvelopeHeader {
    pub method: i32,
    pub _reserved: i32,
    pub num_elements: u64,
    pub num_tokens: u16,
    pub num_features: u16,
    pub sparse_ratio: f32,
}

const HEADER_SIZE: usize = std::mem::size_of::<EnvelopeHeader>();

/// A parsed, still-borrowed view over a loaded envelope buffer.
pub struct Envelope<'a> {
    pub header: EnvelopeHeader,
    pub payload: &'a [u8],
}

fn payload_packed_size(method: Method, num_elements: usize, num_tokens: usize, num_features: usize, sparse_ratio: f32) -> usize {
    match method {
        Method::Q8_0 => q8_0::packed_size(num_elements),
        Method::Q4_0 => q4_0::packed_size(num_elements),
        Method::Q2_K => q2_k::packed_size(num_elements),
        Method::Q2KFast => q2_k::packed_size(num_elements),
        Method::Bf16 => bf16::packed_size(num_elements),
        Method::Fp16 => fp16::packed_size(num_elements),
        Method::Fp8 => fp8::packed_size(num_elements),
        Method::Fp4 => fp4::packed_size(num_elements),
        Method::Mxfp8 => mxfp8::packed_size(num_elements),
        Method::Mxfp4 => mxfp4::packed_size(num_elements),
        Method::Nvfp4 => nvfp4::packed_size(num_elements),
        Method::Nf4 => nf4::packed_size(num_elements),
        Method::Nf4Dq => nf4_dq::packed_size(num_elements),
        Method::Iq2Xxs => iq2::xxs::packed_size(num_elements),
        Method::Iq2Xs => iq2::xs::packed_size(num_elements),
        Method::Iq2S => iq2::s::packed_size(num_elements),
        Method::Topk | Method::TopkIm => sparsity::packed_size(num_tokens, num_features, sparse_ratio),
    }
}

/// Total bytes (header + payload) a compressed buffer for this shape will
/// occupy, without actually compressing anything.
pub fn packed_size(method: Method, num_elements: usize, num_tokens: usize, num_features: usize, sparse_ratio: f32) -> usize {
    HEADER_SIZE + payload_packed_size(method, num_elements, num_tokens, num_features, sparse_ratio)
}

fn compress_payload(src: &[f32], method: Method) -> Result<Vec<u8>> {
    match method {
        Method::Q8_0 => q8_0::compress(src),
        Method::Q4_0 => q4_0::compress(src),
        Method::Q2_K => q2_k::compress(src),
        Method::Q2KFast => q2_k::compress_fast(src),
        Method::Bf16 => bf16::compress(src),
        Method::Fp16 => fp16::compress(src),
        Method::Fp8 => fp8::compress(src),
        Method::Fp4 => fp4::compress(src),
        Method::Mxfp8 => mxfp8::compress(src),
        Method::Mxfp4 => mxfp4::compress(src),
        Method::Nvfp4 => nvfp4::compress(src),
        Method::Nf4 => nf4::compress(src),
        Method::Nf4Dq => nf4_dq::compress(src),
        Method::Iq2Xxs => iq2::xxs::compress(src),
        Method::Iq2Xs => iq2::xs::compress(src),
        Method::Iq2S => iq2::s::compress(src),
        Method::Topk | Method::TopkIm => Err(BsqError::InvalidArgument(
            "sparse methods require compress_2d",
        )),
    }
}

fn build(header: EnvelopeHeader, payload: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(bytemuck::bytes_of(&header));
    out.extend_from_slice(&payload);
    out
}

/// Compress a flat tensor with a non-sparse method. [`Method::Topk`] and
/// [`Method::TopkIm`] are rejected here; use [`compress_2d`] instead.
pub fn compress_1d(src: &[f32], method: Method) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }
    if method.is_sparse() {
        return Err(BsqError::InvalidArgument("sparse methods require compress_2d"));
    }
    let payload = compress_payload(src, method)?;
    let header = EnvelopeHeader {
        method: method as i32,
        _reserved: 0,
        num_elements: src.len() as u64,
        num_tokens: 0,
        num_features: 0,
        sparse_ratio: 0.0,
    };
    Ok(build(header, payload))
}

/// Compress a `num_tokens x num_features` tensor. Sparse methods
/// ([`Method::Topk`], [`Method::TopkIm`]) use `sparse_ratio` to pick how
/// many features survive per row; dense methods ignore `sparse_ratio` and
/// simply flatten the tensor before encoding.
pub fn compress_2d(
    src: &[f32],
    num_tokens: usize,
    num_features: usize,
    method: Method,
    sparse_ratio: f32,
) -> Result<Vec<u8>> {
    if src.len() != num_tokens * num_features {
        return Err(BsqError::InvalidArgument("shape does not match src length"));
    }
    let payload = match method {
        Method::Topk => sparsity::compress_topk(src, num_tokens, num_features, sparse_ratio)?,
        Method::TopkIm => sparsity::compress_topk_im(src, num_tokens, num_features, sparse_ratio)?,
        _ => compress_payload(src, method)?,
    };
    let header = EnvelopeHeader {
        method: method as i32,
        _reserved: 0,
        num_elements: src.len() as u64,
        num_tokens: num_tokens as u16,
        num_features: num_features as u16,
        sparse_ratio: if method.is_sparse() { sparse_ratio } else { 0.0 },
    };
    Ok(build(header, payload))
}

fn method_from_header(header: &EnvelopeHeader) -> Result<Method> {
    num_traits::FromPrimitive::from_i32(header.method)
        .ok_or(BsqError::InvalidArgument("unknown method tag"))
}

/// Parse a compressed buffer's header without copying the payload.
pub fn load(buffer: &[u8]) -> Result<Envelope<'_>> {
    if buffer.len() < HEADER_SIZE {
        return Err(BsqError::BufferTooSmall {
            needed: HEADER_SIZE,
            got: buffer.len(),
        });
    }
    let header: EnvelopeHeader = bytemuck::pod_read_unaligned(&buffer[..HEADER_SIZE]);
    let method = method_from_header(&header)?;
    let expected = packed_size(
        method,
        header.num_elements as usize,
        header.num_tokens as usize,
        header.num_features as usize,
        header.sparse_ratio,
    );
    if buffer.len() < expected {
        return Err(BsqError::BufferTooSmall {
            needed: expected,
            got: buffer.len(),
        });
    }
    Ok(Envelope {
        header,
        payload: &buffer[HEADER_SIZE..expected],
    })
}

/// Decompress a loaded envelope into `dst`, overwriting its full contents.
pub fn decompress(env: &Envelope<'_>, dst: &mut [f32]) -> Result<()> {
    let method = method_from_header(&env.header)?;
    match method {
        Method::Q8_0 => q8_0::decompress(env.payload, dst),
        Method::Q4_0 => q4_0::decompress(env.payload, dst),
        Method::Q2_K => q2_k::decompress(env.payload, dst),
        Method::Q2KFast => q2_k::decompress_fast(env.payload, dst),
        Method::Bf16 => bf16::decompress(env.payload, dst),
        Method::Fp16 => fp16::decompress(env.payload, dst),
        Method::Fp8 => fp8::decompress(env.payload, dst),
        Method::Fp4 => fp4::decompress(env.payload, dst),
        Method::Mxfp8 => mxfp8::decompress(env.payload, dst),
        Method::Mxfp4 => mxfp4::decompress(env.payload, dst),
        Method::Nvfp4 => nvfp4::decompress(env.payload, dst),
        Method::Nf4 => nf4::decompress(env.payload, dst),
        Method::Nf4Dq => nf4_dq::decompress(env.payload, dst),
        Method::Iq2Xxs => iq2::xxs::decompress(env.payload, dst),
        Method::Iq2Xs => iq2::xs::decompress(env.payload, dst),
        Method::Iq2S => iq2::s::decompress(env.payload, dst),
        Method::Topk => sparsity::decompress(
            env.payload,
            dst,
            env.header.num_tokens as usize,
            env.header.num_features as usize,
            env.header.sparse_ratio,
        ),
        Method::TopkIm => sparsity::decompress(
            env.payload,
            dst,
            env.header.num_tokens as usize,
            env.header.num_features as usize,
            env.header.sparse_ratio,
        ),
    }
}

/// Overlay a loaded envelope onto `dst` without zeroing it first. For
/// dense methods this is equivalent to [`decompress`] (every destination
/// slot gets written); for [`Method::Topk`]/[`Method::TopkIm`] only the
/// selected features are touched.
pub fn apply(env: &Envelope<'_>, dst: &mut [f32]) -> Result<()> {
    let method = method_from_header(&env.header)?;
    match method {
        Method::Topk | Method::TopkIm => sparsity::apply(
            env.payload,
            dst,
            env.header.num_tokens as usize,
            env.header.num_features as usize,
            env.header.sparse_ratio,
        ),
        _ => decompress(env, dst),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bf16_round_trip_is_identity_for_exact_values() {
        let src = vec![1.0f32, -2.0, 0.5, 0.0];
        let packed = compress_1d(&src, Method::Bf16).unwrap();
        let env = load(&packed).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&env, &mut dst).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn q8_0_round_trips_a_flat_ramp() {
        let src: Vec<f32> = (0..32).map(|i| i as f32 - 16.0).collect();
        let packed = compress_1d(&src, Method::Q8_0).unwrap();
        let env = load(&packed).unwrap();
        let mut dst = vec![0.0f32; src.len()];
        decompress(&env, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!((a - b).abs() < 0.2, "{a} vs {b}");
        }
    }

    #[test]
    fn sparse_methods_are_rejected_by_compress_1d() {
        let src = vec![1.0f32; 8];
        assert!(compress_1d(&src, Method::Topk).is_err());
    }

    #[test]
    fn topk_im_envelope_round_trips_via_compress_2d() {
        let src = vec![1.0f32, -9.0, 2.0, 0.5];
        let packed = compress_2d(&src, 1, 4, Method::TopkIm, 0.5).unwrap();
        let env = load(&packed).unwrap();
        let mut dst = vec![0.0f32; 4];
        decompress(&env, &mut dst).unwrap();
        assert_eq!(dst[1], -9.0);
    }

    #[test]
    fn packed_size_matches_actual_compressed_length() {
        let src: Vec<f32> = (0..64).map(|i| i as f32 * 0.1).collect();
        let packed = compress_1d(&src, Method::Fp16).unwrap();
        assert_eq!(packed.len(), packed_size(Method::Fp16, src.len(), 0, 0, 0.0));
    }

    #[test]
    fn load_rejects_truncated_buffer() {
        let src = vec![1.0f32; 4];
        let packed = compress_1d(&src, Method::Bf16).unwrap();
        assert!(load(&packed[..packed.len() - 1]).is_err());
    }

    #[test]
    fn apply_overlays_sparse_values_without_zero_fill() {
        let src = vec![0.0f32, 9.0, 0.0, 0.0];
        let packed = compress_2d(&src, 1, 4, Method::TopkIm, 0.25).unwrap();
        let env = load(&packed).unwrap();
        let mut dst = vec![1.0f32; 4];
        apply(&env, &mut dst).unwrap();
        assert_eq!(dst[1], 9.0);
        assert_eq!(dst[0], 1.0);
    }

    #[test]
    fn all_eighteen_methods_round_trip_through_the_envelope() {
        for raw in 0..=17i32 {
            let method: Method = num_traits::FromPrimitive::from_i32(raw).unwrap();
            if method.is_sparse() {
                let src = vec![1.0f32, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0];
                let packed = compress_2d(&src, 1, 8, method, 0.5).unwrap();
                let env = load(&packed).unwrap();
                let mut dst = vec![0.0f32; 8];
                decompress(&env, &mut dst).unwrap();
            } else {
                let src: Vec<f32> = (0..256).map(|i| (i as f32 - 128.0) * 0.1).collect();
                let packed = compress_1d(&src, method).unwrap();
                let env = load(&packed).unwrap();
                let mut dst = vec![0.0f32; src.len()];
                decompress(&env, &mut dst).unwrap();
            }
        }
    }
}
