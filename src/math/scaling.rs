use super::F128;
use super::f128::{EXP_BIAS, EXP_MAX, FRAC_MASK, SIGN_MASK, SIG_BITS};
use super::softfloat::{ROUND_LEAD, round_pack, unpack_normalized};

// Past this distance every finite input has over- or underflowed.
const SCALE_LIMIT: i32 = 2 * EXP_MAX + SIG_BITS as i32;

/// `x * 2^n`, rounded once.
#[inline]
pub fn scalbn(x: F128, n: i32) -> F128 {
    if !x.is_finite() || x.is_zero() {
        return x;
    }
    let u = unpack_normalized(x.to_bits());
    let n = n.clamp(-SCALE_LIMIT, SCALE_LIMIT);
    let sig = u.sig << (ROUND_LEAD - SIG_BITS);
    F128::from_bits(round_pack(u.sign, u.exp + n, sig))
}

#[inline(always)]
pub fn ldexp(x: F128, n: i32) -> F128 {
    scalbn(x, n)
}

#[inline(always)]
pub fn scalbln(x: F128, n: i64) -> F128 {
    let n = n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    scalbn(x, n)
}

/// Splits `x` into a mantissa in `[0.5, 1)` and a power of two.
#[inline]
pub fn frexp(x: F128) -> (F128, i32) {
    if !x.is_finite() || x.is_zero() {
        return (x, 0);
    }
    let u = unpack_normalized(x.to_bits());
    let sign = x.to_bits() & SIGN_MASK;
    let mant = sign | (((EXP_BIAS - 1) as u128) << SIG_BITS) | (u.sig & FRAC_MASK);
    (F128::from_bits(mant), u.exp - (EXP_BIAS - 1))
}

/// Exact `2^k` for `k` in the normal range.
#[inline(always)]
pub(crate) const fn pow2(k: i32) -> F128 {
    F128::from_bits(((k + EXP_BIAS) as u128) << SIG_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalbn_moves_the_exponent() {
        assert_eq!(scalbn(F128::ONE, 3).to_f64(), 8.0);
        assert_eq!(scalbn(F128::TEN, -1).to_f64(), 5.0);
        assert_eq!(scalbn(F128::ONE, 16384), F128::INFINITY);
        assert_eq!(scalbn(F128::NEG_ONE, i32::MAX), F128::NEG_INFINITY);
        assert_eq!(scalbn(F128::ONE, -16494), F128::MIN_POSITIVE_SUBNORMAL);
        assert!(scalbn(F128::ONE, -16496).is_zero());
        assert_eq!(scalbn(F128::MIN_POSITIVE_SUBNORMAL, 16494), F128::ONE);
        assert!(scalbn(F128::NAN, 4).is_nan());
        assert!(scalbn(F128::NEG_ZERO, 4).is_sign_negative());
        assert_eq!(ldexp(F128::HALF, 1), F128::ONE);
        assert_eq!(scalbln(F128::ONE, i64::MIN), F128::ZERO);
    }

    #[test]
    fn frexp_normalizes_into_half_open_unit() {
        let (m, e) = frexp(F128::TEN);
        assert_eq!(m.to_f64(), 0.625);
        assert_eq!(e, 4);
        let (m, e) = frexp(F128::MIN_POSITIVE_SUBNORMAL);
        assert_eq!(m, F128::HALF);
        assert_eq!(e, -16493);
        let (m, e) = frexp(F128::from_f64(-0.75));
        assert_eq!(m.to_f64(), -0.75);
        assert_eq!(e, 0);
        assert_eq!(frexp(F128::INFINITY), (F128::INFINITY, 0));
    }

    #[test]
    fn pow2_builds_exact_powers() {
        assert_eq!(pow2(0), F128::ONE);
        assert_eq!(pow2(-1), F128::HALF);
        assert_eq!(pow2(-112), F128::EPSILON);
    }
}
