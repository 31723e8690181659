//! log10(x) implementation.
//!
//! log10(x) = m*log10(2) + log10(F) + log10(e)*series(u), with log10(2)
//! split hi/lo so the exponent term is exact.

use super::F128;
use super::double_double::DoubleDouble;
use super::log_core::{LogConfig, log_generic};
use super::log_data::LOG10_TABLE;

pub(crate) struct Log10;

impl LogConfig for Log10 {
    const TABLE: &'static [(u128, u128); 129] = &LOG10_TABLE;
    const LOG_E: DoubleDouble = DoubleDouble::new(
        F128::from_bits(0x3ffd_bcb7_b152_6e50_e32a_6ab7_555f_5a68),
        F128::from_bits(0xbf8b_1e6e_08e5_cfed_d1b2_efee_2e06_95d8),
    );
    const LOG2_HI: F128 = F128::from_bits(0x3ffd_3441_3509_f79f_ef31_1f12_b358_0000);
    const LOG2_LO: F128 = F128::from_bits(0x3f99_6f92_2f04_d5a6_18a8_7a3e_6931_4bce);
    const POLY_HI: [F128; 5] = [
        F128::from_bits(0x3ffa_287a_7636_f435_ecc6_f1cf_8e3f_91a0),
        F128::from_bits(0x3ff7_63c6_2775_250d_8288_555f_7764_7f5d),
        F128::from_bits(0x3ff4_fc3f_a615_105c_7155_0c55_b7a1_d0dd),
        F128::from_bits(0x3ff2_8b4d_f2f3_f047_e65a_fcfa_b92d_3012),
        F128::from_bits(0x3ff0_436e_526a_7ec6_c0c8_e368_2551_bb09),
    ];
    const POLY_LO: [f64; 4] = [
        f64::from_bits(0x3ee1_1ac1_e5a1_9288),
        f64::from_bits(0x3ebd_a5d8_a1ee_5f44),
        f64::from_bits(0x3e9a_28e1_1a54_5d6a),
        f64::from_bits(0x3e77_7fdf_47aa_fea8),
    ];
}

/// Base-10 logarithm.
#[inline]
pub fn log10(x: F128) -> F128 {
    log_generic::<Log10>(x)
}
