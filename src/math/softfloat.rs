//! Integer kernels behind the `F128` operators.
//!
//! Operands are unpacked to (sign, biased exponent, significand) and results
//! are rebuilt by `round_pack`, which owns every rounding decision: the
//! significand arrives with its leading bit at `ROUND_LEAD` and three extra
//! low bits (guard, round, sticky), exactly as in a hardware adder.

use super::f128::{EXP_BIAS, EXP_MASK, EXP_MAX, FRAC_MASK, F128, IMPLICIT_BIT, SIGN_MASK, SIG_BITS};

const GUARD_BITS: u32 = 3;
pub(crate) const ROUND_LEAD: u32 = SIG_BITS + GUARD_BITS;

/// Finite nonzero operand: value = sig * 2^(exp - EXP_BIAS - 112).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Unpacked {
    pub sign: bool,
    pub exp: i32,
    pub sig: u128,
}

/// Subnormals come back with `exp == 1` and no implicit bit.
#[inline(always)]
fn unpack(bits: u128) -> Unpacked {
    let exp = ((bits & EXP_MASK) >> SIG_BITS) as i32;
    let frac = bits & FRAC_MASK;
    let sign = bits & SIGN_MASK != 0;
    if exp == 0 {
        Unpacked { sign, exp: 1, sig: frac }
    } else {
        Unpacked { sign, exp, sig: frac | IMPLICIT_BIT }
    }
}

/// Like `unpack` but the leading bit is always at 112; subnormals get an
/// exponent below 1.
#[inline(always)]
pub(crate) fn unpack_normalized(bits: u128) -> Unpacked {
    let mut u = unpack(bits);
    if u.sig & IMPLICIT_BIT == 0 {
        let shift = u.sig.leading_zeros() as i32 - (127 - SIG_BITS as i32);
        u.sig <<= shift;
        u.exp -= shift;
    }
    u
}

/// Right shift that ORs every bit shifted out into bit 0.
#[inline(always)]
pub(crate) fn shift_right_jam(x: u128, n: u32) -> u128 {
    if n == 0 {
        x
    } else if n < 128 {
        (x >> n) | u128::from(x << (128 - n) != 0)
    } else {
        u128::from(x != 0)
    }
}

/// `x / 2^n` rounded to nearest, ties to even.
#[inline(always)]
pub(crate) fn round_shift(x: u128, n: u32) -> u128 {
    if n == 0 {
        return x;
    }
    if n >= 128 {
        return 0;
    }
    let q = x >> n;
    let rem = x & ((1u128 << n) - 1);
    let half = 1u128 << (n - 1);
    if rem > half || (rem == half && q & 1 == 1) {
        q + 1
    } else {
        q
    }
}

/// 128x128 -> 256-bit product as (high, low).
#[inline(always)]
pub(crate) fn mul_wide(a: u128, b: u128) -> (u128, u128) {
    const LO64: u128 = u64::MAX as u128;
    let (a1, a0) = (a >> 64, a & LO64);
    let (b1, b0) = (b >> 64, b & LO64);
    let p00 = a0 * b0;
    let p01 = a0 * b1;
    let p10 = a1 * b0;
    let p11 = a1 * b1;
    let mid = (p00 >> 64) + (p01 & LO64) + (p10 & LO64);
    let lo = (p00 & LO64) | (mid << 64);
    let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);
    (hi, lo)
}

/// Rounds `sig * 2^(exp - EXP_BIAS - ROUND_LEAD)` to binary128. `sig` must
/// be below `2^(ROUND_LEAD + 1)`; subnormal and overflowing results are
/// handled here.
pub(crate) fn round_pack(sign: bool, exp: i32, sig: u128) -> u128 {
    let sign_bit = if sign { SIGN_MASK } else { 0 };
    if exp >= EXP_MAX {
        return sign_bit | EXP_MASK;
    }
    let (mut exp, mut sig) = (exp, sig);
    if exp <= 0 {
        sig = shift_right_jam(sig, exp.unsigned_abs().saturating_add(1));
        exp = 0;
    }
    let rest = sig & ((1 << GUARD_BITS) - 1);
    let half = 1 << (GUARD_BITS - 1);
    sig >>= GUARD_BITS;
    if rest > half || (rest == half && sig & 1 == 1) {
        sig += 1;
    }
    if exp == 0 {
        // A carry into bit 112 produces the smallest normal encoding.
        return sign_bit | sig;
    }
    if sig >> (SIG_BITS + 1) != 0 {
        sig >>= 1;
        exp += 1;
        if exp >= EXP_MAX {
            return sign_bit | EXP_MASK;
        }
    }
    sign_bit | ((exp as u128) << SIG_BITS) | (sig & FRAC_MASK)
}

/// `round_pack` for a significand whose leading bit may sit anywhere.
pub(crate) fn norm_round_pack(sign: bool, exp: i32, sig: u128) -> u128 {
    if sig == 0 {
        return if sign { SIGN_MASK } else { 0 };
    }
    let shift = sig.leading_zeros() as i32 - (127 - ROUND_LEAD as i32);
    if shift >= 0 {
        round_pack(sign, exp - shift, sig << shift)
    } else {
        round_pack(sign, exp - shift, shift_right_jam(sig, shift.unsigned_abs()))
    }
}

#[inline(always)]
fn propagate_nan(a: F128, b: F128) -> u128 {
    if a.is_nan() {
        a.quieted().to_bits()
    } else {
        b.quieted().to_bits()
    }
}

pub(crate) fn add(a_bits: u128, b_bits: u128) -> u128 {
    let (a, b) = (F128::from_bits(a_bits), F128::from_bits(b_bits));
    if a.is_nan() || b.is_nan() {
        return propagate_nan(a, b);
    }
    if a.is_infinite() {
        if b.is_infinite() && a.is_sign_negative() != b.is_sign_negative() {
            return F128::NAN.to_bits();
        }
        return a_bits;
    }
    if b.is_infinite() {
        return b_bits;
    }
    if a.is_zero() {
        if b.is_zero() {
            return a_bits & b_bits;
        }
        return b_bits;
    }
    if b.is_zero() {
        return a_bits;
    }

    let (big, small) = if (a_bits & !SIGN_MASK) >= (b_bits & !SIGN_MASK) {
        (unpack(a_bits), unpack(b_bits))
    } else {
        (unpack(b_bits), unpack(a_bits))
    };
    let dist = (big.exp - small.exp) as u32;
    let big_sig = big.sig << GUARD_BITS;
    let small_sig = shift_right_jam(small.sig << GUARD_BITS, dist);
    if big.sign == small.sign {
        norm_round_pack(big.sign, big.exp, big_sig + small_sig)
    } else {
        // Exact cancellation gives +0 in round-to-nearest.
        let diff = big_sig - small_sig;
        if diff == 0 {
            return 0;
        }
        norm_round_pack(big.sign, big.exp, diff)
    }
}

#[inline]
pub(crate) fn sub(a_bits: u128, b_bits: u128) -> u128 {
    add(a_bits, b_bits ^ SIGN_MASK)
}

pub(crate) fn mul(a_bits: u128, b_bits: u128) -> u128 {
    let (a, b) = (F128::from_bits(a_bits), F128::from_bits(b_bits));
    if a.is_nan() || b.is_nan() {
        return propagate_nan(a, b);
    }
    let sign_bit = (a_bits ^ b_bits) & SIGN_MASK;
    if a.is_infinite() || b.is_infinite() {
        if a.is_zero() || b.is_zero() {
            return F128::NAN.to_bits();
        }
        return sign_bit | EXP_MASK;
    }
    if a.is_zero() || b.is_zero() {
        return sign_bit;
    }

    let ua = unpack_normalized(a_bits);
    let ub = unpack_normalized(b_bits);
    // Product of two 113-bit significands lies in [2^224, 2^226).
    let (hi, lo) = mul_wide(ua.sig, ub.sig);
    let drop = 2 * SIG_BITS - ROUND_LEAD;
    let sticky = u128::from(lo & ((1 << drop) - 1) != 0);
    let sig = (hi << (128 - drop)) | (lo >> drop) | sticky;
    norm_round_pack(sign_bit != 0, ua.exp + ub.exp - EXP_BIAS, sig)
}

pub(crate) fn div(a_bits: u128, b_bits: u128) -> u128 {
    let (a, b) = (F128::from_bits(a_bits), F128::from_bits(b_bits));
    if a.is_nan() || b.is_nan() {
        return propagate_nan(a, b);
    }
    let sign_bit = (a_bits ^ b_bits) & SIGN_MASK;
    if a.is_infinite() {
        if b.is_infinite() {
            return F128::NAN.to_bits();
        }
        return sign_bit | EXP_MASK;
    }
    if b.is_infinite() {
        return sign_bit;
    }
    if b.is_zero() {
        if a.is_zero() {
            return F128::NAN.to_bits();
        }
        return sign_bit | EXP_MASK;
    }
    if a.is_zero() {
        return sign_bit;
    }

    let ua = unpack_normalized(a_bits);
    let ub = unpack_normalized(b_bits);
    let mut rem = ua.sig;
    let mut exp = ua.exp - ub.exp + EXP_BIAS;
    if rem < ub.sig {
        rem <<= 1;
        exp -= 1;
    }
    // Restoring division, one quotient bit per step down to the guard bits.
    let mut quot: u128 = 0;
    for _ in 0..=ROUND_LEAD {
        quot <<= 1;
        if rem >= ub.sig {
            rem -= ub.sig;
            quot |= 1;
        }
        rem <<= 1;
    }
    quot |= u128::from(rem != 0);
    round_pack(sign_bit != 0, exp, quot)
}
