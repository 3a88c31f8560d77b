use num_derive::{FromPrimitive, ToPrimitive};

/// Method tag identifying which codec a payload was produced by.
///
/// Numeric values are part of the wire format (stored in
/// [`crate::envelope::EnvelopeHeader`]) and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(i32)]
pub enum Method {
    Q8_0 = 0,
    Q4_0 = 1,
    Q2_K = 2,
    Topk = 3,
    Bf16 = 4,
    Fp16 = 5,
    Fp8 = 6,
    Fp4 = 7,
    Mxfp8 = 8,
    Mxfp4 = 9,
    Nvfp4 = 10,
    Nf4Dq = 11,
    Nf4 = 12,
    Iq2Xxs = 13,
    Iq2Xs = 14,
    Iq2S = 15,
    Q2KFast = 16,
    TopkIm = 17,
}

impl Method {
    /// Whether this method only makes sense on the 2D (tokens × features)
    /// call path. Every other method is 1D-only.
    pub fn is_sparse(self) -> bool {
        matches!(self, Method::Topk | Method::TopkIm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn round_trips_through_i32() {
        for raw in 0..=17i32 {
            let m = Method::from_i32(raw).expect("all 18 tags must decode");
            assert_eq!(m as i32, raw);
        }
    }

    #[test]
    fn sparse_methods_are_exactly_topk_family() {
        assert!(Method::Topk.is_sparse());
        assert!(Method::TopkIm.is_sparse());
        assert!(!Method::Bf16.is_sparse());
        assert!(!Method::Q2_K.is_sparse());
    }
}
