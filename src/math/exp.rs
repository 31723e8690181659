//! exp(x) implementation.
//!
//! Table-driven (Tang) with 32 steps per octave of e^x; see `exp_core`.
//! exp(x) overflows past x ~ 11356.5 and reaches zero below x ~ -11433; the
//! gate bounds are looser and the final scaling reports the exact crossing.

use super::F128;
use super::double_double::DoubleDouble;
use super::exp_core::{ExpConfig, exp_generic};

pub(crate) struct Exp;

impl ExpConfig for Exp {
    const INV_STEP: F128 = F128::from_bits(0x4004_7154_7652_b82f_e177_7d0f_fda0_d23a);
    const STEP_HI: F128 = F128::from_bits(0x3ff9_62e4_2fef_a39e_f357_93c7_6740_0000);
    const NEG_STEP_LO: F128 = F128::from_bits(0x3f9c_ff03_4254_2fc3_2f36_6359_d274_9d7d);
    const HALF_STEP: F128 = F128::from_bits(0x3ff8_62e4_2fef_a39e_f357_93c7_6730_07e6);
    const LN_BASE: DoubleDouble = DoubleDouble::new(F128::ONE, F128::ZERO);
    const POLY_HI: [F128; 7] = [
        F128::from_bits(0x3ffe_0000_0000_0000_0000_0000_0000_0000),
        F128::from_bits(0x3ffc_5555_5555_5555_5555_5555_5555_5c98),
        F128::from_bits(0x3ffa_5555_5555_5555_5555_5555_5555_5768),
        F128::from_bits(0x3ff8_1111_1111_1111_1111_110f_ec16_d8c2),
        F128::from_bits(0x3ff5_6c16_c16c_16c1_6c16_c16b_6f57_04e7),
        F128::from_bits(0x3ff2_a01a_01a0_1a01_a04d_bb1d_423f_9d3d),
        F128::from_bits(0x3fef_a01a_01a0_1a01_a037_9030_6772_b96c),
    ];
    const POLY_LO: [f64; 4] = [
        f64::from_bits(0x3ec7_1de3_a556_8b91),
        f64::from_bits(0x3e92_7e4f_b778_7d48),
        f64::from_bits(0x3e5a_e649_2a95_bb4c),
        f64::from_bits(0x3e21_eedb_160b_60da),
    ];
    // +-12000
    const OVERFLOW_BOUND: F128 = F128::from_bits(0x400c_7700_0000_0000_0000_0000_0000_0000);
    const UNDERFLOW_BOUND: F128 = F128::from_bits(0xc00c_7700_0000_0000_0000_0000_0000_0000);
    // 2^-114
    const TINY_BOUND: F128 = F128::from_bits(0x3f8d_0000_0000_0000_0000_0000_0000_0000);
    const NEG_INFINITY_LIMIT: F128 = F128::ZERO;
}

/// e^x.
#[inline]
pub fn exp(x: F128) -> F128 {
    exp_generic::<Exp>(x)
}
