//! FP4 E2M1 ↔ FP32. 1 sign / 2 exponent (bias 1) / 1 mantissa, 8 distinct
//! positive magnitudes. The reference implementation builds a table of the
//! 8 representable levels once and quantizes by linear nearest-level search
//! rather than bit arithmetic, so we do the same.

use std::sync::OnceLock;

const EXPONENT_BIAS: i32 = 1;

fn levels() -> &'static [f32; 8] {
    static LEVELS: OnceLock<[f32; 8]> = OnceLock::new();
    LEVELS.get_or_init(build_levels)
}

fn build_levels() -> [f32; 8] {
    let mut levels = [0.0f32; 8];
    for (mant_field, level) in levels.iter_mut().enumerate() {
        // Two-valued mantissa field (0 or 1) per the one mantissa bit, here
        // walked in half-steps to match the original table derivation.
        let exponent_field = mant_field / 2;
        let mant_bit = (mant_field % 2) as f32;
        *level = if exponent_field == 0 {
            (mant_bit / 2.0) * 2f32.powi(1 - EXPONENT_BIAS)
        } else {
            (1.0 + mant_bit / 2.0) * 2f32.powi(exponent_field as i32 - EXPONENT_BIAS)
        };
    }
    levels[0] = 0.0;
    levels
}

/// Quantize an FP32 magnitude (already scaled into FP4 range) to a 4-bit
/// E2M1 code: top bit is sign, bottom 3 bits index [`levels`].
pub fn from_f32(x: f32) -> u8 {
    let sign = (x.is_sign_negative()) as u8;
    let ax = x.abs();

    let table = levels();
    let mut best_idx = 0usize;
    let mut best_dist = f32::MAX;
    for (idx, &level) in table.iter().enumerate() {
        let dist = (level - ax).abs();
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }

    (sign << 3) | (best_idx as u8 & 0x7)
}

/// Widen a 4-bit E2M1 code back to FP32.
pub fn to_f32(v: u8) -> f32 {
    let sign = (v >> 3) & 0x1;
    let mant_field = (v & 0x7) as usize;
    let magnitude = levels()[mant_field];
    if sign != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Largest representable magnitude (used by callers choosing a block scale).
pub fn max_norm() -> f32 {
    levels()[7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_round_trips() {
        assert_eq!(to_f32(from_f32(0.0)), 0.0);
    }

    #[test]
    fn one_round_trips_exactly() {
        assert_eq!(to_f32(from_f32(1.0)), 1.0);
    }

    #[test]
    fn max_norm_is_largest_level() {
        let m = max_norm();
        assert!(levels().iter().all(|&l| l <= m));
    }

    #[test]
    fn nearest_level_search_picks_closest() {
        // Halfway-ish value: just check it lands on one of the 8 levels.
        let code = from_f32(0.9);
        let v = to_f32(code);
        assert!(levels().contains(&v.abs()));
    }

    #[test]
    fn sign_is_preserved() {
        assert!(to_f32(from_f32(-1.5)) < 0.0);
    }
}
