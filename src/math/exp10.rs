//! exp10(x) implementation.
//!
//! Table-driven like exp, reducing by steps of log10(2)/32. Integral x up to
//! 48 returns the exact power of ten (5^48 still fits in 113 bits).

use super::F128;
use super::double_double::DoubleDouble;
use super::exp_core::{ExpConfig, exp_generic};

const EXACT_POW10_MAX: i64 = 48;

pub(crate) struct Exp10;

impl ExpConfig for Exp10 {
    const INV_STEP: F128 = F128::from_bits(0x4005_a934_f097_9a37_15fc_9257_edfe_9b60);
    const STEP_HI: F128 = F128::from_bits(0x3ff8_3441_3509_f79f_ef31_1f12_b360_0000);
    const NEG_STEP_LO: F128 = F128::from_bits(0x3f9a_fa41_b743_eca9_679d_5e17_065b_3ad1);
    const HALF_STEP: F128 = F128::from_bits(0x3ff7_3441_3509_f79f_ef31_1f12_b358_16f9);
    const LN_BASE: DoubleDouble = DoubleDouble::new(
        F128::from_bits(0x4000_26bb_1bbb_5551_582d_d4ad_ac57_05a6),
        F128::from_bits(0x3f8c_451c_51fd_9f3b_4bbf_21d0_78c3_d040),
    );
    const POLY_HI: [F128; 7] = [
        F128::from_bits(0x4000_5352_4c73_cea6_8875_0153_39ca_5acb),
        F128::from_bits(0x4000_0470_591d_e2ca_4608_d49f_3b04_2018),
        F128::from_bits(0x3fff_2bd7_609f_d98c_44c7_a947_d97b_69af),
        F128::from_bits(0x3ffe_1429_ffd1_d4d7_6222_e328_e8df_8a8a),
        F128::from_bits(0x3ffc_a7ed_7084_7c8b_5d7b_3e7a_d780_3ad9),
        F128::from_bits(0x3ffb_16e4_dfc3_33a8_6b53_035a_6fc3_25f0),
        F128::from_bits(0x3ff9_4116_b05f_daa5_ce07_577d_272f_99ca),
    ];
    const POLY_LO: [f64; 4] = [
        f64::from_bits(0x3f74_897c_45d9_0847),
        f64::from_bits(0x3f52_ea52_b2d1_5fd4),
        f64::from_bits(0x3f2f_ad01_cb1d_597b),
        f64::from_bits(0x3f08_4fe4_17b5_cf38),
    ];
    // +-5000
    const OVERFLOW_BOUND: F128 = F128::from_bits(0x400b_3880_0000_0000_0000_0000_0000_0000);
    const UNDERFLOW_BOUND: F128 = F128::from_bits(0xc00b_3880_0000_0000_0000_0000_0000_0000);
    // 2^-116
    const TINY_BOUND: F128 = F128::from_bits(0x3f8b_0000_0000_0000_0000_0000_0000_0000);
    const NEG_INFINITY_LIMIT: F128 = F128::ZERO;
}

#[inline]
fn exact_pow10(k: i64) -> F128 {
    let mut acc = F128::ONE;
    for _ in 0..k {
        acc *= F128::TEN;
    }
    acc
}

/// 10^x.
#[inline]
pub fn exp10(x: F128) -> F128 {
    if x >= F128::ONE && x.is_integral() {
        let k = x.round_ties_even_to_i64();
        if k <= EXACT_POW10_MAX {
            return exact_pow10(k);
        }
    }
    exp_generic::<Exp10>(x)
}
