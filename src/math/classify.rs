use core::num::FpCategory;

use super::F128;
use super::fenv::{self, FpExceptions};

pub const FP_NAN: i32 = 0;
pub const FP_INFINITE: i32 = 1;
pub const FP_ZERO: i32 = 2;
pub const FP_SUBNORMAL: i32 = 3;
pub const FP_NORMAL: i32 = 4;

#[inline(always)]
pub fn isfinite(x: F128) -> bool {
    x.is_finite()
}

#[inline(always)]
pub fn isinf(x: F128) -> bool {
    x.is_infinite()
}

#[inline(always)]
pub fn isnan(x: F128) -> bool {
    x.is_nan()
}

#[inline(always)]
pub fn signbit(x: F128) -> bool {
    x.is_sign_negative()
}

#[inline(always)]
pub fn fpclassify(x: F128) -> i32 {
    match x.classify() {
        FpCategory::Nan => FP_NAN,
        FpCategory::Infinite => FP_INFINITE,
        FpCategory::Zero => FP_ZERO,
        FpCategory::Subnormal => FP_SUBNORMAL,
        FpCategory::Normal => FP_NORMAL,
    }
}

/// NaN result for a NaN argument; signaling inputs raise INVALID.
#[cold]
pub(crate) fn propagate_nan(x: F128) -> F128 {
    if x.is_signaling_nan() {
        fenv::raise(FpExceptions::INVALID);
    }
    x.quieted()
}

/// Default NaN for an argument outside the domain.
#[cold]
pub(crate) fn invalid() -> F128 {
    fenv::raise(FpExceptions::INVALID);
    F128::NAN
}

/// Pole of a logarithm.
#[cold]
pub(crate) fn divide_by_zero() -> F128 {
    fenv::raise(FpExceptions::DIV_BY_ZERO);
    F128::NEG_INFINITY
}

#[cold]
pub(crate) fn overflow() -> F128 {
    fenv::raise(FpExceptions::OVERFLOW | FpExceptions::INEXACT);
    F128::INFINITY
}

#[cold]
pub(crate) fn underflow() -> F128 {
    fenv::raise(FpExceptions::UNDERFLOW | FpExceptions::INEXACT);
    F128::ZERO
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn fpclassify_matches_categories() {
        assert_eq!(fpclassify(F128::NAN), FP_NAN);
        assert_eq!(fpclassify(F128::NEG_INFINITY), FP_INFINITE);
        assert_eq!(fpclassify(F128::NEG_ZERO), FP_ZERO);
        assert_eq!(fpclassify(F128::MIN_POSITIVE_SUBNORMAL), FP_SUBNORMAL);
        assert_eq!(fpclassify(F128::E), FP_NORMAL);
        assert!(signbit(F128::NEG_ZERO));
        assert!(isnan(F128::NAN) && !isfinite(F128::NAN) && !isinf(F128::NAN));
    }

    #[test]
    fn signaling_nan_raises_invalid_once_quieted() {
        fenv::take();
        let snan = F128::from_bits(0x7fff_0000_0000_0000_0000_0000_0000_0001);
        let out = propagate_nan(snan);
        assert!(out.is_nan() && !out.is_signaling_nan());
        assert_eq!(fenv::take(), FpExceptions::INVALID);
        let out = propagate_nan(out);
        assert!(out.is_nan());
        assert!(fenv::take().is_empty());
    }
}
