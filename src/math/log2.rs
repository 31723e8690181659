//! log2(x) implementation.
//!
//! Same reduction as ln; the exponent contributes m exactly and the series is
//! rescaled by log2(e), whose leading product is formed exactly.

use super::F128;
use super::double_double::DoubleDouble;
use super::log_core::{LogConfig, log_generic};
use super::log_data::LOG2_TABLE;

pub(crate) struct Log2;

impl LogConfig for Log2 {
    const TABLE: &'static [(u128, u128); 129] = &LOG2_TABLE;
    const LOG_E: DoubleDouble = DoubleDouble::new(
        F128::from_bits(0x3fff_7154_7652_b82f_e177_7d0f_fda0_d23a),
        F128::from_bits(0x3f8d_f447_5abb_d546_eb4a_d2c4_5928_b367),
    );
    const LOG2_HI: F128 = F128::ONE;
    const LOG2_LO: F128 = F128::ZERO;
    const POLY_HI: [F128; 5] = [
        F128::from_bits(0x3ffb_ec70_9dc3_a03f_d749_fc15_522b_c302),
        F128::from_bits(0x3ff9_2776_c50e_f9bf_e792_ca73_3137_0be1),
        F128::from_bits(0x3ff6_a617_62a7_aded_93f6_45db_ccfb_5198),
        F128::from_bits(0x3ff4_484b_13d7_c02a_8f83_a9b6_89cc_477f),
        F128::from_bits(0x3ff2_0c9a_8499_4023_1013_58d9_6770_79c0),
    ];
    const POLY_LO: [f64; 4] = [
        f64::from_bits(0x3efc_68f5_68d2_be82),
        f64::from_bits(0x3ed8_9f3b_18ef_b3a7),
        f64::from_bits(0x3eb5_b9a3_4c20_27f3),
        f64::from_bits(0x3e93_8412_de90_abb0),
    ];
}

/// Base-2 logarithm.
#[inline]
pub fn log2(x: F128) -> F128 {
    log_generic::<Log2>(x)
}
