//! TOPK / TOPK_IM: per-row (token) top-K sparsification over a 2D
//! `num_tokens x num_features` tensor. `TOPK` selects by magnitude,
//! `TOPK_IM` selects by raw (signed) value — both treat NaN as the
//! smallest possible key so it is never selected. Each kept entry is
//! stored as `(u16 feature index, f32 value)`.

use crate::error::{BsqError, Result};

/// NaN-safe magnitude key used by TOPK.
fn importance_abs(v: f32) -> f32 {
    if v == v {
        v.abs()
    } else {
        f32::NEG_INFINITY
    }
}

/// NaN-safe signed key used by TOPK_IM.
fn importance_key(v: f32) -> f32 {
    if v == v {
        v
    } else {
        f32::NEG_INFINITY
    }
}

/// Number of features kept per row: `round(num_features * ratio)`, clamped
/// to `num_features`, bumped to 1 if rounding produced zero for a
/// strictly-positive ratio.
pub fn num_sparse_features(num_features: usize, sparse_ratio: f32) -> usize {
    if num_features == 0 {
        return 0;
    }
    let mut k = (num_features as f32 * sparse_ratio).round() as usize;
    if k > num_features {
        k = num_features;
    }
    if k == 0 && sparse_ratio > 0.0 {
        k = 1;
    }
    k
}

pub fn packed_size(num_tokens: usize, num_features: usize, sparse_ratio: f32) -> usize {
    let k = num_sparse_features(num_features, sparse_ratio);
    num_tokens * k * 6
}

/// Select the top-`k` `(index, value)` pairs from `row` by `key`, returned
/// in ascending feature-index order via a streaming min-heap (the row's
/// natural order is not otherwise meaningful once sparsified).
fn select_topk(row: &[f32], k: usize, key: impl Fn(f32) -> f32) -> Vec<(u16, f32)> {
    use std::collections::BinaryHeap;
    use std::cmp::Ordering;

    struct Entry {
        key: f32,
        idx: u16,
        val: f32,
    }
    impl PartialEq for Entry {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }
    impl Eq for Entry {}
    impl PartialOrd for Entry {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Entry {
        fn cmp(&self, other: &Self) -> Ordering {
            // Reverse so BinaryHeap (a max-heap) behaves as a min-heap on key.
            other.key.partial_cmp(&self.key).unwrap_or(Ordering::Equal)
        }
    }

    let mut heap: BinaryHeap<Entry> = BinaryHeap::with_capacity(k);
    for (idx, &v) in row.iter().enumerate() {
        let k_val = key(v);
        if heap.len() < k {
            heap.push(Entry { key: k_val, idx: idx as u16, val: v });
        } else if let Some(top) = heap.peek() {
            if k_val > top.key {
                heap.pop();
                heap.push(Entry { key: k_val, idx: idx as u16, val: v });
            }
        }
    }

    let mut out: Vec<(u16, f32)> = heap.into_iter().map(|e| (e.idx, e.val)).collect();
    out.sort_by_key(|(idx, _)| *idx);
    out
}

fn compress_with_key(
    src: &[f32],
    num_tokens: usize,
    num_features: usize,
    sparse_ratio: f32,
    key: impl Fn(f32) -> f32 + Copy,
) -> Result<Vec<u8>> {
    if src.len() != num_tokens * num_features {
        return Err(BsqError::InvalidArgument("shape does not match src length"));
    }
    let k = num_sparse_features(num_features, sparse_ratio);
    let mut out = Vec::with_capacity(packed_size(num_tokens, num_features, sparse_ratio));

    for token in 0..num_tokens {
        let row = &src[token * num_features..(token + 1) * num_features];
        let entries = select_topk(row, k, key);
        for (idx, val) in &entries {
            out.extend_from_slice(&idx.to_le_bytes());
            out.extend_from_slice(&val.to_le_bytes());
        }
        // Pad rows that came up short (can only happen if num_features < k,
        // which num_sparse_features already prevents, but keeps layout fixed).
        for _ in entries.len()..k {
            out.extend_from_slice(&0u16.to_le_bytes());
            out.extend_from_slice(&0f32.to_le_bytes());
        }
    }
    Ok(out)
}

pub fn compress_topk(
    src: &[f32],
    num_tokens: usize,
    num_features: usize,
    sparse_ratio: f32,
) -> Result<Vec<u8>> {
    compress_with_key(src, num_tokens, num_features, sparse_ratio, importance_abs)
}

pub fn compress_topk_im(
    src: &[f32],
    num_tokens: usize,
    num_features: usize,
    sparse_ratio: f32,
) -> Result<Vec<u8>> {
    compress_with_key(src, num_tokens, num_features, sparse_ratio, importance_key)
}

fn scatter(
    payload: &[u8],
    dst: &mut [f32],
    num_tokens: usize,
    num_features: usize,
    sparse_ratio: f32,
    zero_fill: bool,
) -> Result<()> {
    let expected = packed_size(num_tokens, num_features, sparse_ratio);
    if payload.len() < expected {
        return Err(BsqError::BufferTooSmall {
            needed: expected,
            got: payload.len(),
        });
    }
    if dst.len() != num_tokens * num_features {
        return Err(BsqError::InvalidArgument("dst shape does not match token/feature count"));
    }
    if zero_fill {
        dst.iter_mut().for_each(|x| *x = 0.0);
    }
    let k = num_sparse_features(num_features, sparse_ratio);
    for token in 0..num_tokens {
        let base = token * k * 6;
        let dense_base = token * num_features;
        for e in 0..k {
            let off = base + e * 6;
            let idx = u16::from_le_bytes([payload[off], payload[off + 1]]) as usize;
            let val = f32::from_le_bytes(payload[off + 2..off + 6].try_into().unwrap());
            if idx < num_features {
                dst[dense_base + idx] = val;
            }
        }
    }
    Ok(())
}

pub fn decompress(
    payload: &[u8],
    dst: &mut [f32],
    num_tokens: usize,
    num_features: usize,
    sparse_ratio: f32,
) -> Result<()> {
    scatter(payload, dst, num_tokens, num_features, sparse_ratio, true)
}

/// Overlay sparse values onto `dst` without zeroing first.
pub fn apply(
    payload: &[u8],
    dst: &mut [f32],
    num_tokens: usize,
    num_features: usize,
    sparse_ratio: f32,
) -> Result<()> {
    scatter(payload, dst, num_tokens, num_features, sparse_ratio, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topk_keeps_largest_magnitude_entries() {
        let src = vec![0.1f32, -5.0, 0.2, 3.0, 0.0, -0.3];
        let payload = compress_topk(&src, 1, 6, 0.5).unwrap();
        let mut dst = vec![0.0f32; 6];
        decompress(&payload, &mut dst, 1, 6, 0.5).unwrap();
        assert_eq!(dst[1], -5.0);
        assert_eq!(dst[3], 3.0);
        assert_eq!(dst[0], 0.0);
    }

    #[test]
    fn topk_im_keeps_largest_signed_entries() {
        let src = vec![-5.0f32, 3.0, 1.0, 2.0];
        let payload = compress_topk_im(&src, 1, 4, 0.5).unwrap();
        let mut dst = vec![0.0f32; 4];
        decompress(&payload, &mut dst, 1, 4, 0.5).unwrap();
        assert_eq!(dst[1], 3.0);
        assert_eq!(dst[3], 2.0);
        assert_eq!(dst[0], 0.0);
    }

    #[test]
    fn apply_does_not_zero_fill() {
        let src = vec![0.0f32, 9.0, 0.0, 0.0];
        let payload = compress_topk_im(&src, 1, 4, 0.25).unwrap();
        let mut dst = vec![1.0f32; 4];
        apply(&payload, &mut dst, 1, 4, 0.25).unwrap();
        assert_eq!(dst[1], 9.0);
        assert_eq!(dst[0], 1.0);
        assert_eq!(dst[2], 1.0);
    }

    #[test]
    fn ratio_rounding_to_zero_is_bumped_to_one() {
        assert_eq!(num_sparse_features(100, 0.001), 1);
        assert_eq!(num_sparse_features(100, 0.0), 0);
    }

    #[test]
    fn nan_is_never_selected() {
        let src = vec![f32::NAN, 1.0, 2.0, f32::NAN];
        let payload = compress_topk(&src, 1, 4, 0.5).unwrap();
        let mut dst = vec![0.0f32; 4];
        decompress(&payload, &mut dst, 1, 4, 0.5).unwrap();
        assert_eq!(dst[1], 1.0);
        assert_eq!(dst[2], 2.0);
        assert!(!dst[0].is_nan());
    }
}
