//! Table-driven logarithm engine shared by ln, log2, log10 and log1p.
//!
//! x = 2^m * y with y in [1, 2), and y = F + f where F = 1 + j/128 is the
//! nearest grid point, so
//!
//!   log_b(x) = m log_b(2) + log_b(F) + log_b(1 + f/F).
//!
//! The last term uses u = 2f/(2F + f): log(1 + f/F) = 2 atanh(u/2), an odd
//! series in u whose linear term is exact. Arguments within e^(+-1/16) of one
//! skip the table and take F = 1, m = 0 directly.

use super::F128;
use super::classify::{divide_by_zero, invalid, propagate_nan};
use super::double_double::DoubleDouble;
use super::scaling::frexp;
use super::utils::narrow_horner;

pub(crate) const TABLE_BITS: u32 = 7;
const GRID: F128 = F128::from_bits(0x4006_0000_0000_0000_0000_0000_0000_0000);
const INV_GRID: F128 = F128::from_bits(0x3ff8_0000_0000_0000_0000_0000_0000_0000);

// e^(-1/16), e^(1/16)
pub(crate) const NEAR_ONE_LO: F128 = F128::from_bits(0x3ffe_e0fa_bfbc_702a_3ce5_e31f_e060_9359);
pub(crate) const NEAR_ONE_HI: F128 = F128::from_bits(0x3fff_1082_b577_d34e_d7d5_b1a0_19e2_25ca);

/// Constants of one logarithm base.
pub(crate) trait LogConfig {
    /// log_b(1 + j/128) for j in 0..=128.
    const TABLE: &'static [(u128, u128); (1 << TABLE_BITS) + 1];
    /// log_b(e), the factor between the natural series and base b.
    const LOG_E: DoubleDouble;
    /// log_b(2) cut to 97 bits so m * LOG2_HI is exact for every exponent.
    const LOG2_HI: F128;
    const LOG2_LO: F128;
    /// R(w) = POLY_HI[0] + ... + POLY_HI[4] w^4 + w^5 * tail(w).
    const POLY_HI: [F128; 5];
    /// tail(w), evaluated in f64 on the narrowed w.
    const POLY_LO: [f64; 4];

    /// log_b(e) * (2 atanh(u/2) - u) = u^3 R(u^2).
    #[inline(always)]
    fn series(u: F128) -> F128 {
        let c = &Self::POLY_HI;
        let w = u * u;
        let w2 = w * w;
        let tail = narrow_horner(w, &Self::POLY_LO);
        let r01 = c[0] + w * c[1];
        let r23 = c[2] + w * c[3];
        let r4 = c[4] + w * tail;
        u * w * (r01 + w2 * (r23 + w2 * r4))
    }
}

#[inline(always)]
pub(crate) fn log_generic<C: LogConfig>(x: F128) -> F128 {
    if x.is_nan() {
        return propagate_nan(x);
    }
    if x.is_zero() {
        return divide_by_zero();
    }
    if x.is_sign_negative() {
        return invalid();
    }
    if x.is_infinite() {
        return x;
    }
    if x > NEAR_ONE_LO && x < NEAR_ONE_HI {
        return near_one::<C>(x - F128::ONE);
    }
    table_path::<C>(x, F128::ZERO)
}

/// log_b(1 + f) for |f| < 1/15, without the table.
#[inline(always)]
pub(crate) fn near_one<C: LogConfig>(f: F128) -> F128 {
    let g = F128::TWO + f;
    let u1 = (f + f) / g;
    // 2f - u1 (2 + f), formed from exact pieces.
    let u2 = ((f - u1) * F128::TWO - u1 * f) / g;
    let q = C::series(u1);
    let lead = DoubleDouble::from_exact_mult(C::LOG_E.hi, u1);
    lead.hi + (lead.lo + ((C::LOG_E.hi * u2 + C::LOG_E.lo * u1) + q))
}

/// log_b(x) + corr for finite x > 0, where `corr` is a correction below an
/// ulp of the result.
#[inline(always)]
pub(crate) fn table_path<C: LogConfig>(x: F128, corr: F128) -> F128 {
    let (mant, e) = frexp(x);
    let y = mant * F128::TWO;
    let m = F128::from_i32(e - 1);
    let j = ((y - F128::ONE) * GRID).round_ties_even_to_i64() as usize;
    let grid = F128::ONE + F128::from_i64(j as i64) * INV_GRID;
    let f = y - grid;
    let u = (f + f) / ((grid + grid) + f);
    let q = C::series(u);

    let t = DoubleDouble::from_bit_pair(C::TABLE[j]);
    // |m * LOG2_HI| >= |T[j]| unless m == 0.
    let s = DoubleDouble::from_exact_add(m * C::LOG2_HI, t.hi);
    let poly = C::LOG_E.hi * u + (C::LOG_E.lo * u + q);
    let low = s.lo + (m * C::LOG2_LO + (t.lo + corr));
    s.hi + (poly + low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::log::Ln;
    use crate::math::log2::Log2;

    #[test]
    fn tables_close_at_log_two() {
        let ln2 = DoubleDouble::from_bit_pair(<Ln as LogConfig>::TABLE[128]);
        assert_eq!(ln2.hi, F128::LN_2);
        let one = DoubleDouble::from_bit_pair(<Log2 as LogConfig>::TABLE[128]);
        assert_eq!(one.hi, F128::ONE);
        assert!(one.lo.is_zero());
        assert!(DoubleDouble::from_bit_pair(<Ln as LogConfig>::TABLE[0]).hi.is_zero());
    }

    #[test]
    fn log2_split_times_exponent_is_exact() {
        // 15-bit exponents times the 97-bit head need no rounding.
        let m = F128::from_i32(-16493);
        let p = m * <Ln as LogConfig>::LOG2_HI;
        let (hi, lo) = crate::math::utils::two_prod(m, <Ln as LogConfig>::LOG2_HI);
        assert_eq!(p, hi);
        assert!(lo.is_zero());
    }

    #[test]
    fn grid_points_take_no_series_term() {
        // y == F exactly, so only table and exponent terms remain.
        let x = F128::from_f64(1.5 * 8.0);
        let got = table_path::<Log2>(x, F128::ZERO);
        // log2(12)
        let want = F128::from_bits(0x4000_cae0_0d1c_fdeb_43cf_d005_8905_0346);
        assert!((got - want).abs() <= F128::EPSILON * F128::TWO);
    }
}
