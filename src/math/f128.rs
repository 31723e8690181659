//! Software IEEE-754 binary128 value.
//!
//! `F128` wraps the raw interchange encoding (1 sign bit, 15 exponent bits,
//! 112 fraction bits). Arithmetic is correctly rounded to nearest-even and
//! never touches the host floating-point environment; the evaluators raise
//! exception flags themselves through [`super::fenv`].

use core::cmp::Ordering;
use core::fmt;
use core::num::FpCategory;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::softfloat;

pub(crate) const SIG_BITS: u32 = 112;
pub(crate) const EXP_BIAS: i32 = 16383;
pub(crate) const EXP_MAX: i32 = 0x7fff;
pub(crate) const SIGN_MASK: u128 = 1 << 127;
pub(crate) const EXP_MASK: u128 = (EXP_MAX as u128) << SIG_BITS;
pub(crate) const FRAC_MASK: u128 = (1 << SIG_BITS) - 1;
pub(crate) const IMPLICIT_BIT: u128 = 1 << SIG_BITS;
pub(crate) const QUIET_BIT: u128 = 1 << (SIG_BITS - 1);

const F64_FRAC_BITS: u32 = 52;
const F64_FRAC_MASK: u64 = (1 << F64_FRAC_BITS) - 1;
const F64_EXP_BIAS: i32 = 1023;
const F64_QUIET_BIT: u64 = 1 << (F64_FRAC_BITS - 1);
// Fraction bits dropped when narrowing to f64.
const NARROW_SHIFT: u32 = SIG_BITS - F64_FRAC_BITS;

/// An IEEE-754 binary128 floating-point number.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct F128(u128);

impl F128 {
    pub const ZERO: Self = Self(0);
    pub const NEG_ZERO: Self = Self(SIGN_MASK);
    pub const ONE: Self = Self(0x3fff_0000_0000_0000_0000_0000_0000_0000);
    pub const NEG_ONE: Self = Self(0xbfff_0000_0000_0000_0000_0000_0000_0000);
    pub const TWO: Self = Self(0x4000_0000_0000_0000_0000_0000_0000_0000);
    pub const HALF: Self = Self(0x3ffe_0000_0000_0000_0000_0000_0000_0000);
    pub const TEN: Self = Self(0x4002_4000_0000_0000_0000_0000_0000_0000);
    pub const INFINITY: Self = Self(EXP_MASK);
    pub const NEG_INFINITY: Self = Self(SIGN_MASK | EXP_MASK);
    /// Default quiet NaN produced by invalid operations.
    pub const NAN: Self = Self(EXP_MASK | QUIET_BIT);
    pub const MAX: Self = Self(EXP_MASK - 1);
    pub const MIN: Self = Self(SIGN_MASK | (EXP_MASK - 1));
    pub const MIN_POSITIVE: Self = Self(IMPLICIT_BIT);
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(1);
    /// 2^-112, the gap between 1 and the next larger value.
    pub const EPSILON: Self = Self(0x3f8f_0000_0000_0000_0000_0000_0000_0000);

    pub const E: Self = Self(0x4000_5bf0_a8b1_4576_9535_5fb8_ac40_4e7a);
    pub const LN_2: Self = Self(0x3ffe_62e4_2fef_a39e_f357_93c7_6730_07e6);
    pub const LN_10: Self = Self(0x4000_26bb_1bbb_5551_582d_d4ad_ac57_05a6);
    pub const LOG2_E: Self = Self(0x3fff_7154_7652_b82f_e177_7d0f_fda0_d23a);
    pub const LOG2_10: Self = Self(0x4000_a934_f097_9a37_15fc_9257_edfe_9b60);
    pub const LOG10_E: Self = Self(0x3ffd_bcb7_b152_6e50_e32a_6ab7_555f_5a68);
    pub const LOG10_2: Self = Self(0x3ffd_3441_3509_f79f_ef31_1f12_b358_16f9);

    #[inline(always)]
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u128 {
        self.0
    }

    #[inline(always)]
    pub const fn is_nan(self) -> bool {
        (self.0 & !SIGN_MASK) > EXP_MASK
    }

    #[inline(always)]
    pub const fn is_signaling_nan(self) -> bool {
        self.is_nan() && self.0 & QUIET_BIT == 0
    }

    #[inline(always)]
    pub const fn is_infinite(self) -> bool {
        (self.0 & !SIGN_MASK) == EXP_MASK
    }

    #[inline(always)]
    pub const fn is_finite(self) -> bool {
        (self.0 & EXP_MASK) != EXP_MASK
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        (self.0 & !SIGN_MASK) == 0
    }

    #[inline(always)]
    pub const fn is_subnormal(self) -> bool {
        (self.0 & EXP_MASK) == 0 && (self.0 & FRAC_MASK) != 0
    }

    #[inline(always)]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    #[inline(always)]
    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }

    pub const fn classify(self) -> FpCategory {
        let exp = self.0 & EXP_MASK;
        let frac = self.0 & FRAC_MASK;
        if exp == EXP_MASK {
            if frac == 0 {
                FpCategory::Infinite
            } else {
                FpCategory::Nan
            }
        } else if exp == 0 {
            if frac == 0 {
                FpCategory::Zero
            } else {
                FpCategory::Subnormal
            }
        } else {
            FpCategory::Normal
        }
    }

    #[inline(always)]
    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_MASK)
    }

    #[inline(always)]
    pub const fn copysign(self, sign: Self) -> Self {
        Self((self.0 & !SIGN_MASK) | (sign.0 & SIGN_MASK))
    }

    /// Same NaN with the quiet bit set; other values unchanged.
    #[inline(always)]
    pub const fn quieted(self) -> Self {
        if self.is_nan() {
            Self(self.0 | QUIET_BIT)
        } else {
            self
        }
    }

    /// Biased exponent field.
    #[inline(always)]
    pub(crate) const fn exponent_field(self) -> i32 {
        ((self.0 & EXP_MASK) >> SIG_BITS) as i32
    }

    /// Smallest value greater than `self`.
    pub const fn next_up(self) -> Self {
        if self.is_nan() || self.0 == EXP_MASK {
            return self;
        }
        if self.is_zero() {
            return Self::MIN_POSITIVE_SUBNORMAL;
        }
        if self.is_sign_negative() {
            Self(self.0 - 1)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Largest value less than `self`.
    pub const fn next_down(self) -> Self {
        self.neg_const().next_up().neg_const()
    }

    #[inline(always)]
    const fn neg_const(self) -> Self {
        Self(self.0 ^ SIGN_MASK)
    }

    /// Exact widening of an `f64`. NaN payloads keep their quiet bit.
    pub const fn from_f64(x: f64) -> Self {
        let bits = x.to_bits();
        let sign = ((bits >> 63) as u128) << 127;
        let exp = ((bits >> F64_FRAC_BITS) & 0x7ff) as i32;
        let frac = (bits & F64_FRAC_MASK) as u128;
        if exp == 0x7ff {
            return Self(sign | EXP_MASK | (frac << NARROW_SHIFT));
        }
        if exp == 0 {
            if frac == 0 {
                return Self(sign);
            }
            let top = 127 - frac.leading_zeros();
            let biased = top as i32 - 1074 + EXP_BIAS;
            let sig = (frac << (SIG_BITS - top)) & FRAC_MASK;
            return Self(sign | ((biased as u128) << SIG_BITS) | sig);
        }
        let biased = exp - F64_EXP_BIAS + EXP_BIAS;
        Self(sign | ((biased as u128) << SIG_BITS) | (frac << NARROW_SHIFT))
    }

    /// Nearest `f64` (ties to even), saturating to infinity and flushing
    /// through the f64 subnormal range.
    pub fn to_f64(self) -> f64 {
        let sign = ((self.0 >> 127) as u64) << 63;
        if self.is_nan() {
            let payload = ((self.0 & FRAC_MASK) >> NARROW_SHIFT) as u64;
            return f64::from_bits(sign | 0x7ff0_0000_0000_0000 | F64_QUIET_BIT | payload);
        }
        if self.is_infinite() {
            return f64::from_bits(sign | 0x7ff0_0000_0000_0000);
        }
        if self.is_zero() {
            return f64::from_bits(sign);
        }
        let u = softfloat::unpack_normalized(self.0);
        let biased = u.exp - EXP_BIAS + F64_EXP_BIAS;
        if biased >= 0x7ff {
            return f64::from_bits(sign | 0x7ff0_0000_0000_0000);
        }
        if biased >= 1 {
            let mut mant = softfloat::round_shift(u.sig, NARROW_SHIFT) as u64;
            let mut biased = biased as u64;
            if mant >> (F64_FRAC_BITS + 1) != 0 {
                mant >>= 1;
                biased += 1;
                if biased >= 0x7ff {
                    return f64::from_bits(sign | 0x7ff0_0000_0000_0000);
                }
            }
            return f64::from_bits(sign | (biased << F64_FRAC_BITS) | (mant & F64_FRAC_MASK));
        }
        let shift = NARROW_SHIFT + (1 - biased) as u32;
        if shift >= 128 {
            return f64::from_bits(sign);
        }
        // A carry into bit 52 lands on the smallest normal encoding.
        let mant = softfloat::round_shift(u.sig, shift) as u64;
        f64::from_bits(sign | mant)
    }

    pub const fn from_i64(n: i64) -> Self {
        if n == 0 {
            return Self::ZERO;
        }
        let sign = if n < 0 { SIGN_MASK } else { 0 };
        let mag = n.unsigned_abs() as u128;
        let top = 127 - mag.leading_zeros();
        let biased = top as i32 + EXP_BIAS;
        Self(sign | ((biased as u128) << SIG_BITS) | ((mag << (SIG_BITS - top)) & FRAC_MASK))
    }

    pub const fn from_i32(n: i32) -> Self {
        Self::from_i64(n as i64)
    }

    /// Rounds to the nearest integer, ties to even. NaN maps to 0 and
    /// magnitudes past `i64` saturate.
    pub fn round_ties_even_to_i64(self) -> i64 {
        if self.is_nan() {
            return 0;
        }
        let neg = self.is_sign_negative();
        if self.is_infinite() {
            return if neg { i64::MIN } else { i64::MAX };
        }
        if self.is_zero() {
            return 0;
        }
        let u = softfloat::unpack_normalized(self.0);
        let e = u.exp - EXP_BIAS;
        if e >= 63 {
            return if neg { i64::MIN } else { i64::MAX };
        }
        if e < -1 {
            return 0;
        }
        let mag = softfloat::round_shift(u.sig, (SIG_BITS as i32 - e) as u32);
        let mag = i64::try_from(mag).unwrap_or(i64::MAX);
        if neg { -mag } else { mag }
    }

    /// True when `self` is a finite integral value.
    pub fn is_integral(self) -> bool {
        if !self.is_finite() {
            return false;
        }
        if self.is_zero() {
            return true;
        }
        let e = self.exponent_field() - EXP_BIAS;
        if e >= SIG_BITS as i32 {
            return true;
        }
        if e < 0 {
            return false;
        }
        let frac_bits = SIG_BITS - e as u32;
        self.0 & ((1u128 << frac_bits) - 1) == 0
    }

    /// Key that orders non-NaN values like the reals, with -0 == +0.
    #[inline(always)]
    fn order_key(self) -> i128 {
        let mag = (self.0 & !SIGN_MASK) as i128;
        if self.is_sign_negative() { -mag } else { mag }
    }
}

impl PartialEq for F128 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.order_key() == other.order_key()
    }
}

impl PartialOrd for F128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.order_key().cmp(&other.order_key()))
    }
}

impl Neg for F128 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.neg_const()
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $kernel:path) => {
        impl $trait for F128 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self($kernel(self.0, rhs.0))
            }
        }

        impl $assign_trait for F128 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, softfloat::add);
impl_binop!(Sub, sub, SubAssign, sub_assign, softfloat::sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, softfloat::mul);
impl_binop!(Div, div, DivAssign, div_assign, softfloat::div);

impl From<f64> for F128 {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

impl From<i32> for F128 {
    fn from(n: i32) -> Self {
        Self::from_i32(n)
    }
}

impl From<i64> for F128 {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl fmt::Debug for F128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F128({:#034x} ~ {:e})", self.0, self.to_f64())
    }
}

impl fmt::LowerHex for F128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
