//! Reconstruction-error metrics for comparing an original tensor against a
//! decompressed one. Timing/throughput measurement is deliberately not part
//! of this module's surface.

use crate::error::{BsqError, Result};

/// Mean absolute error, mean squared error, and maximum absolute error
/// between `original` and `reconstructed`, accumulated in `f64` to match
/// the precision of the reference accumulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub mae: f64,
    pub mse: f64,
    pub max_abs: f64,
}

pub fn measure(original: &[f32], reconstructed: &[f32]) -> Result<Metrics> {
    if original.len() != reconstructed.len() {
        return Err(BsqError::InvalidArgument(
            "original and reconstructed must have the same length",
        ));
    }
    if original.is_empty() {
        return Err(BsqError::InvalidArgument("empty input"));
    }

    let mut mae = 0.0f64;
    let mut mse = 0.0f64;
    let mut max_abs = 0.0f64;
    for (a, b) in original.iter().zip(reconstructed.iter()) {
        let e = *b as f64 - *a as f64;
        let ae = e.abs();
        mae += ae;
        mse += e * e;
        if ae > max_abs {
            max_abs = ae;
        }
    }
    let n = original.len() as f64;
    Ok(Metrics {
        mae: mae / n,
        mse: mse / n,
        max_abs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_tensors_have_zero_error() {
        let src = vec![1.0f32, -2.0, 3.5];
        let m = measure(&src, &src).unwrap();
        assert_eq!(m, Metrics { mae: 0.0, mse: 0.0, max_abs: 0.0 });
    }

    #[test]
    fn constant_offset_is_captured_exactly() {
        let a = vec![1.0f32, 2.0, 3.0];
        let b = vec![2.0f32, 3.0, 4.0];
        let m = measure(&a, &b).unwrap();
        assert!((m.mae - 1.0).abs() < 1e-9);
        assert!((m.mse - 1.0).abs() < 1e-9);
        assert!((m.max_abs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn max_abs_tracks_the_single_worst_element() {
        let a = vec![0.0f32, 0.0, 0.0];
        let b = vec![0.1f32, -5.0, 0.2];
        let m = measure(&a, &b).unwrap();
        assert!((m.max_abs - 5.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(measure(&[1.0, 2.0], &[1.0]).is_err());
    }
}
