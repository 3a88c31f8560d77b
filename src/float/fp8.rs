//! FP8 E4M3 ↔ FP32. 1 sign / 4 exponent (bias 7) / 3 mantissa, max finite
//! magnitude 448. Ported from the reference `fp32_to_e4m3`/`e4m3_to_fp32`
//! pair shared (in the original) across the FP8, MXFP8, NVFP4 and NF4_DQ
//! codecs; kept as one shared implementation here since all four reuse it
//! verbatim.

const EXPONENT_BIAS: i32 = 7;
const EXP_BITS: i32 = 4;
pub const MAX_NORM: f32 = 448.0;

/// `frexp`: splits `x` into `mantissa * 2^exponent` with `mantissa` in
/// `[0.5, 1)`. Handles FP32 subnormal inputs by renormalizing first.
fn frexp(x: f32) -> (f32, i32) {
    let bits = x.to_bits();
    let exp_field = (bits >> 23) & 0xFF;
    if exp_field == 0 {
        let scaled = x * 8_388_608.0; // 2^23
        let (m, e) = frexp(scaled);
        return (m, e - 23);
    }
    let mantissa_bits = (bits & 0x807F_FFFF) | (126u32 << 23);
    (f32::from_bits(mantissa_bits), exp_field as i32 - 126)
}

/// Quantize an FP32 value to E4M3, saturating non-finite/out-of-range
/// inputs to ±[`MAX_NORM`].
pub fn from_f32(x: f32) -> u8 {
    let x = if !x.is_finite() {
        if x.is_sign_negative() {
            -MAX_NORM
        } else {
            MAX_NORM
        }
    } else {
        x
    };
    let sign = (x.is_sign_negative()) as u8;
    let ax = x.abs();
    if ax == 0.0 {
        return sign << 7;
    }
    let ax = if ax > MAX_NORM { MAX_NORM } else { ax };

    let (mant, exp2) = frexp(ax);
    let mut exponent_field = exp2 - 1 + EXPONENT_BIAS;

    if exponent_field <= 0 {
        let mut mant_field = (ax * 512.0).round() as i32;
        if mant_field > 7 {
            mant_field = 7;
        }
        return (sign << 7) | (mant_field as u8 & 0x7);
    }

    let mut mant_field = (((mant * 2.0) - 1.0) * 8.0).round() as i32;
    if mant_field > 7 {
        mant_field = 0;
        exponent_field += 1;
    }
    if exponent_field >= (1 << EXP_BITS) {
        exponent_field = (1 << EXP_BITS) - 1;
        mant_field = 7;
    }

    (sign << 7) | (((exponent_field as u8) & 0xF) << 3) | (mant_field as u8 & 0x7)
}

/// Widen an E4M3 code back to FP32.
pub fn to_f32(v: u8) -> f32 {
    let sign = (v >> 7) & 0x1;
    let exponent_field = ((v >> 3) & 0xF) as i32;
    let mant_field = (v & 0x7) as f32;

    let result = if exponent_field == 0 {
        (mant_field / 8.0) * 2f32.powi(1 - EXPONENT_BIAS)
    } else {
        let exponent = exponent_field - EXPONENT_BIAS;
        (1.0 + mant_field / 8.0) * 2f32.powi(exponent)
    };
    if sign != 0 {
        -result
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_round_trips() {
        assert_eq!(to_f32(from_f32(0.0)), 0.0);
    }

    #[test]
    fn max_norm_round_trips_close() {
        let code = from_f32(MAX_NORM);
        assert!((to_f32(code) - MAX_NORM).abs() < 1.0);
    }

    #[test]
    fn overflow_saturates() {
        let code = from_f32(1.0e6);
        assert!(to_f32(code) <= MAX_NORM);
    }

    #[test]
    fn one_round_trips_exactly() {
        let code = from_f32(1.0);
        assert_eq!(to_f32(code), 1.0);
    }

    #[test]
    fn sign_is_preserved() {
        assert!(to_f32(from_f32(-2.5)) < 0.0);
    }
}
