//! exp2(x) implementation.
//!
//! Same engine as exp with a step of exactly 1/32, so the reduction is exact
//! and integral x gives an exact power of two.

use super::F128;
use super::double_double::DoubleDouble;
use super::exp_core::{ExpConfig, exp_generic};

pub(crate) struct Exp2;

impl ExpConfig for Exp2 {
    const INV_STEP: F128 = F128::from_bits(0x4004_0000_0000_0000_0000_0000_0000_0000);
    const STEP_HI: F128 = F128::from_bits(0x3ffa_0000_0000_0000_0000_0000_0000_0000);
    const NEG_STEP_LO: F128 = F128::ZERO;
    const HALF_STEP: F128 = F128::from_bits(0x3ff9_0000_0000_0000_0000_0000_0000_0000);
    const LN_BASE: DoubleDouble = DoubleDouble::new(
        F128::from_bits(0x3ffe_62e4_2fef_a39e_f357_93c7_6730_07e6),
        F128::from_bits(0xbf8a_2a17_e197_9b31_ace9_3a4e_be5d_148f),
    );
    const POLY_HI: [F128; 7] = [
        F128::from_bits(0x3ffc_ebfb_dff8_2c58_ea86_f16b_06ec_9736),
        F128::from_bits(0x3ffa_c6b0_8d70_4a0b_f8b3_3a76_2bb3_357f),
        F128::from_bits(0x3ff8_3b2a_b6fb_a4e7_729c_cbbe_0b53_f097),
        F128::from_bits(0x3ff5_5d87_fe78_a673_1107_17f5_234c_d619),
        F128::from_bits(0x3ff2_4309_12f8_6c78_76f4_b0a8_03e1_4df9),
        F128::from_bits(0x3fee_ffcb_fc58_8b0c_68aa_b3e2_8c86_fcd6),
        F128::from_bits(0x3feb_62c0_223a_5c82_3ff2_32d4_3bac_e3a5),
    ];
    const POLY_LO: [f64; 4] = [
        f64::from_bits(0x3e7b_5253_d395_a148),
        f64::from_bits(0x3e3e_4cf5_158b_56f4),
        f64::from_bits(0x3dfe_8cb0_b890_c57f),
        f64::from_bits(0x3dbc_3bd9_b305_130a),
    ];
    // +-17000
    const OVERFLOW_BOUND: F128 = F128::from_bits(0x400d_09a0_0000_0000_0000_0000_0000_0000);
    const UNDERFLOW_BOUND: F128 = F128::from_bits(0xc00d_09a0_0000_0000_0000_0000_0000_0000);
    // 2^-114
    const TINY_BOUND: F128 = F128::from_bits(0x3f8d_0000_0000_0000_0000_0000_0000_0000);
    const NEG_INFINITY_LIMIT: F128 = F128::ZERO;
}

/// 2^x.
#[inline]
pub fn exp2(x: F128) -> F128 {
    exp_generic::<Exp2>(x)
}
