//! Shared error-free transforms and mixed-precision helpers.

use super::F128;

// Veltkamp splitter for a 113-bit significand: 2^57 + 1 leaves two halves of
// at most 56 bits whose pairwise products are exact.
pub(crate) const SPLIT: F128 = F128::from_bits(0x4038_0000_0000_0000_0080_0000_0000_0000);

/// Knuth's two-sum: `s + err == a + b` exactly, no ordering requirement.
#[inline(always)]
pub(crate) fn two_sum(a: F128, b: F128) -> (F128, F128) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Dekker's fast two-sum, valid when `|a| >= |b|` or `a == 0`.
#[inline(always)]
pub(crate) fn fast_two_sum(a: F128, b: F128) -> (F128, F128) {
    let s = a + b;
    let z = s - a;
    (s, b - z)
}

#[inline(always)]
fn split(a: F128) -> (F128, F128) {
    let t = SPLIT * a;
    let hi = t - (t - a);
    (hi, a - hi)
}

/// `p + err == a * b` exactly, for products far from overflow.
#[inline(always)]
pub(crate) fn two_prod(a: F128, b: F128) -> (F128, F128) {
    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let err = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
    (p, err)
}

/// Splits `x` into a 53-bit head and the binary128 remainder.
#[cfg_attr(feature = "uniform-precision", allow(dead_code))]
#[inline(always)]
pub(crate) fn split_head(x: F128) -> (f64, F128) {
    let head = x.to_f64();
    (head, x - F128::from_f64(head))
}

/// Horner evaluation of small high-order coefficients on the narrowed head
/// of `x`; those terms are scaled by at least `x^5` before they reach the
/// result, so 53 bits suffice.
#[cfg(not(feature = "uniform-precision"))]
#[inline(always)]
pub(crate) fn narrow_horner(x: F128, coeffs: &[f64]) -> F128 {
    let (x, _) = split_head(x);
    let acc = coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c);
    F128::from_f64(acc)
}

/// Full-width evaluation of the high-order tail.
#[cfg(feature = "uniform-precision")]
#[inline(always)]
pub(crate) fn narrow_horner(x: F128, coeffs: &[f64]) -> F128 {
    coeffs
        .iter()
        .rev()
        .fold(F128::ZERO, |acc, &c| acc * x + F128::from_f64(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_recovers_lost_bits() {
        let tiny = F128::from_bits(0x3f00_0000_0000_0000_0000_0000_0000_0000);
        let (s, e) = two_sum(tiny, F128::ONE);
        assert_eq!(s, F128::ONE);
        assert_eq!(e, tiny);
        let (s, e) = fast_two_sum(F128::ONE, tiny);
        assert_eq!(s, F128::ONE);
        assert_eq!(e, tiny);
    }

    #[test]
    fn two_prod_is_exact() {
        let third = F128::ONE / F128::from_i32(3);
        let (p, e) = two_prod(third, F128::from_i32(3));
        // 3 * round(1/3) = 1 - 2^-114 exactly.
        assert_eq!(p, F128::ONE);
        assert_eq!(e.to_bits(), 0xbf8d_0000_0000_0000_0000_0000_0000_0000);
        let (p, e) = two_prod(third, third);
        let (back, err) = two_sum(p, e);
        assert_eq!(back, p);
        assert_eq!(err, e);
        assert!(e.abs() <= p * F128::EPSILON);
    }

    #[test]
    fn split_head_is_exact() {
        let third = F128::ONE / F128::from_i32(3);
        let (head, tail) = split_head(third);
        assert_eq!(head, 1.0 / 3.0);
        assert_eq!(F128::from_f64(head) + tail, third);
    }

    #[test]
    fn narrow_horner_evaluates_polynomial() {
        let x = F128::HALF;
        // 1 + 2x + 3x^2 at 1/2
        assert_eq!(narrow_horner(x, &[1.0, 2.0, 3.0]).to_f64(), 2.75);
    }
}
