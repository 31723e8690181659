//! expm1(x) implementation.
//!
//! Shares the base-e reduction and polynomial with exp. The near-zero path
//! returns the polynomial itself, and the table path subtracts one inside a
//! compensated sum (`finalize_expm1`) instead of after rounding, so results
//! near zero keep full relative precision.

use super::F128;
use super::double_double::DoubleDouble;
use super::exp::Exp;
use super::exp_core::{ExpConfig, exp_generic, finalize_expm1};
use super::fenv::{self, FpExceptions};

pub(crate) struct Expm1;

impl ExpConfig for Expm1 {
    const INV_STEP: F128 = Exp::INV_STEP;
    const STEP_HI: F128 = Exp::STEP_HI;
    const NEG_STEP_LO: F128 = Exp::NEG_STEP_LO;
    const HALF_STEP: F128 = Exp::HALF_STEP;
    const LN_BASE: DoubleDouble = Exp::LN_BASE;
    const POLY_HI: [F128; 7] = Exp::POLY_HI;
    const POLY_LO: [f64; 4] = Exp::POLY_LO;
    // 31191.6
    const OVERFLOW_BOUND: F128 = F128::from_bits(0x400d_e75e_6666_6666_6666_6666_6666_6666);
    // -79.0187: e^x is below half an ulp of 1 from here on.
    const UNDERFLOW_BOUND: F128 = F128::from_bits(0xc005_3c13_2617_c1bd_a511_9ce0_75f6_fd22);
    const TINY_BOUND: F128 = Exp::TINY_BOUND;
    const NEG_INFINITY_LIMIT: F128 = F128::NEG_ONE;

    #[inline(always)]
    fn underflowed() -> F128 {
        fenv::raise(FpExceptions::UNDERFLOW | FpExceptions::INEXACT);
        F128::NEG_ONE
    }

    #[inline(always)]
    fn tiny(x: F128) -> F128 {
        x
    }

    #[inline(always)]
    fn near_zero(p: DoubleDouble) -> F128 {
        p.hi + p.lo
    }

    #[inline(always)]
    fn finalize(p: DoubleDouble, j: usize, m: i32) -> F128 {
        finalize_expm1(p, j, m)
    }
}

/// e^x - 1.
#[inline]
pub fn expm1(x: F128) -> F128 {
    exp_generic::<Expm1>(x)
}
