//! Table-driven exponential engine shared by exp, exp2, exp10 and expm1.
//!
//! Tang's reduction: x = (32m + j) * log_b(2)/32 + r with |r| <= log_b(2)/64,
//! so b^x = 2^m * 2^(j/32) * b^r. The 2^(j/32) factor comes from
//! `EXP2_TABLE`, b^r - 1 from a polynomial carried as a double-double, and
//! 2^m goes straight into the exponent field. Arguments inside the first
//! half step (n == 0) use the polynomial alone.

use super::F128;
use super::classify::{overflow, propagate_nan, underflow};
use super::double_double::DoubleDouble;
use super::exp_data::EXP2_TABLE;
use super::fenv::{self, FpExceptions};
use super::scaling::{pow2, scalbn};
use super::utils::narrow_horner;

pub(crate) const TABLE_BITS: u32 = 5;
const TABLE_SIZE: i64 = 1 << TABLE_BITS;

// expm1 finalize bands: from 2^113 on, 1 sits below the table's low word;
// below 2^-8 the result is within 2^-8 of -1.
const EXPM1_FOLD_MIN: i32 = 113;
const EXPM1_COLLAPSE_MAX: i32 = -8;
const THREE_HALVES: F128 = F128::from_bits(0x3fff_8000_0000_0000_0000_0000_0000_0000);

/// x = (32m + j) * step + r_hi + r_lo.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ReducedArgument {
    pub(crate) j: usize,
    pub(crate) m: i32,
    pub(crate) r_hi: F128,
    pub(crate) r_lo: F128,
}

/// Constants and finishing steps of one exponential-family function.
pub(crate) trait ExpConfig {
    /// 32 / log_b(2).
    const INV_STEP: F128;
    /// log_b(2)/32 cut to 92 bits, so n * STEP_HI is exact for |n| < 2^21.
    const STEP_HI: F128;
    /// -(log_b(2)/32 - STEP_HI).
    const NEG_STEP_LO: F128;
    /// log_b(2)/64: below it the nearest step is n == 0.
    const HALF_STEP: F128;
    /// ln(b); b^r - 1 = ln(b) r + r^2 Q(r).
    const LN_BASE: DoubleDouble;
    /// Q(r) = POLY_HI[0] + POLY_HI[1] r + ... + POLY_HI[6] r^6 + r^7 * tail(r).
    const POLY_HI: [F128; 7];
    /// tail(r), evaluated in f64 on the narrowed residual.
    const POLY_LO: [f64; 4];
    const OVERFLOW_BOUND: F128;
    const UNDERFLOW_BOUND: F128;
    const TINY_BOUND: F128;
    /// Limit at -inf.
    const NEG_INFINITY_LIMIT: F128;

    /// Result below `UNDERFLOW_BOUND`.
    #[inline(always)]
    fn underflowed() -> F128 {
        underflow()
    }

    /// Result for |x| < `TINY_BOUND`.
    #[inline(always)]
    fn tiny(x: F128) -> F128 {
        F128::ONE + x * Self::LN_BASE.hi
    }

    /// Result from p ~ b^x - 1 when no table step was taken.
    #[inline(always)]
    fn near_zero(p: DoubleDouble) -> F128 {
        F128::ONE + (p.hi + p.lo)
    }

    #[inline(always)]
    fn finalize(p: DoubleDouble, j: usize, m: i32) -> F128 {
        finalize_exp(p, j, m)
    }

    /// b^r - 1 for r = r_hi + r_lo.
    #[inline(always)]
    fn poly(r_hi: F128, r_lo: F128) -> DoubleDouble {
        let c = &Self::POLY_HI;
        let r = r_hi + r_lo;
        let r2 = r * r;
        let tail = narrow_horner(r, &Self::POLY_LO);
        let q01 = c[0] + r * c[1];
        let q23 = c[2] + r * c[3];
        let q45 = c[4] + r * c[5];
        let q6 = c[6] + r * tail;
        let q = q01 + r2 * (q23 + r2 * (q45 + r2 * q6));
        let ln_b = Self::LN_BASE;
        DoubleDouble::new(ln_b.hi * r_hi, (ln_b.hi * r_lo + ln_b.lo * r) + r2 * q)
    }
}

#[inline(always)]
pub(crate) fn reduce<C: ExpConfig>(x: F128) -> ReducedArgument {
    let n = (x * C::INV_STEP).round_ties_even_to_i64();
    let nf = F128::from_i64(n);
    ReducedArgument {
        j: n.rem_euclid(TABLE_SIZE) as usize,
        m: n.div_euclid(TABLE_SIZE) as i32,
        r_hi: x - nf * C::STEP_HI,
        r_lo: nf * C::NEG_STEP_LO,
    }
}

#[inline(always)]
pub(crate) fn exp_generic<C: ExpConfig>(x: F128) -> F128 {
    if !x.is_finite() {
        if x.is_nan() {
            return propagate_nan(x);
        }
        return if x.is_sign_negative() { C::NEG_INFINITY_LIMIT } else { x };
    }
    if x > C::OVERFLOW_BOUND {
        return overflow();
    }
    if x < C::UNDERFLOW_BOUND {
        return C::underflowed();
    }
    let ax = x.abs();
    if ax < C::TINY_BOUND {
        return C::tiny(x);
    }
    if ax < C::HALF_STEP {
        return C::near_zero(C::poly(x, F128::ZERO));
    }

    let red = reduce::<C>(x);
    let p = C::poly(red.r_hi, red.r_lo);
    C::finalize(p, red.j, red.m)
}

/// 2^m * y with overflow and underflow reported.
#[inline(always)]
fn scale(y: F128, m: i32, exact: bool) -> F128 {
    let out = scalbn(y, m);
    if out.is_infinite() {
        fenv::raise(FpExceptions::OVERFLOW | FpExceptions::INEXACT);
    } else if !exact && out.abs() < F128::MIN_POSITIVE {
        fenv::raise(FpExceptions::UNDERFLOW | FpExceptions::INEXACT);
    }
    out
}

/// 2^m * T[j] * (1 + p).
#[inline(always)]
pub(crate) fn finalize_exp(p: DoubleDouble, j: usize, m: i32) -> F128 {
    let t = DoubleDouble::from_bit_pair(EXP2_TABLE[j]);
    let p = p.to_f128();
    let y = t.hi + (t.lo + t.to_f128() * p);
    scale(y, m, j == 0 && p.is_zero())
}

/// 2^m * T[j] * (1 + p) - 1 without cancellation.
#[inline(always)]
pub(crate) fn finalize_expm1(p: DoubleDouble, j: usize, m: i32) -> F128 {
    let t = DoubleDouble::from_bit_pair(EXP2_TABLE[j]);
    let p_sum = p.to_f128();

    if m >= EXPM1_FOLD_MIN {
        let lo = t.lo - scalbn(F128::ONE, -m);
        return scale(t.hi + (t.hi * p_sum + lo), m, false);
    }
    if m <= EXPM1_COLLAPSE_MAX {
        return scalbn(t.hi + (t.hi * p_sum + t.lo), m) - F128::ONE;
    }

    // T.hi * p is split as head * p + (T.hi - head) * p so the large part
    // stays exact; head is 1 or 2, whichever T.hi is closer to.
    let head = if t.hi < THREE_HALVES { F128::ONE } else { F128::TWO };
    let s = DoubleDouble::from_full_exact_add(t.hi, -pow2(-m));
    let s2 = DoubleDouble::from_full_exact_add(s.hi, head * p.hi);
    let small = (head * p.lo + (t.hi - head) * p_sum) + (t.lo + t.lo * p_sum);
    scalbn(s2.hi + (s2.lo + (s.lo + small)), m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::exp::Exp;
    use crate::math::exp2::Exp2;

    #[test]
    fn reduction_splits_steps() {
        let red = reduce::<Exp2>(F128::from_f64(3.25));
        assert_eq!((red.m, red.j), (3, 8));
        assert!(red.r_hi.is_zero() && red.r_lo.is_zero());

        let red = reduce::<Exp2>(F128::from_f64(-1.0 / 64.0 - 1.0));
        // n = round(-32.5) = -32 -> m = -1, j = 0
        assert_eq!((red.m, red.j), (-1, 0));
        assert_eq!(red.r_hi.to_f64(), -1.0 / 64.0);

        let red = reduce::<Exp2>(F128::from_f64(-1.0 / 16.0 - 1.0));
        // n = -34 -> m = -2, j = 30
        assert_eq!((red.m, red.j), (-2, 30));
        assert!(red.r_hi.is_zero());
    }

    #[test]
    fn reduced_residual_stays_within_half_a_step() {
        for k in -400..400 {
            let x = F128::from_f64(k as f64 * 0.173);
            let red = reduce::<Exp>(x);
            let r = red.r_hi + red.r_lo;
            let bound = <Exp as ExpConfig>::HALF_STEP + F128::EPSILON;
            assert!(r.abs() <= bound, "x = {x:?}");
        }
    }

    #[test]
    fn table_starts_at_one_and_ends_below_two() {
        assert_eq!(DoubleDouble::from_bit_pair(EXP2_TABLE[0]).hi, F128::ONE);
        let last = DoubleDouble::from_bit_pair(EXP2_TABLE[31]).hi;
        assert!(last < F128::TWO && last > THREE_HALVES);
    }
}
