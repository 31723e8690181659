//! ln(x) implementation.
//!
//! Table-driven logarithm (Tang) on a 1/128 grid of the significand with an
//! atanh-style odd series for the residual; see `log_core`.

use super::F128;
use super::double_double::DoubleDouble;
use super::log_core::{LogConfig, log_generic};
use super::log_data::LN_TABLE;

pub(crate) struct Ln;

impl LogConfig for Ln {
    const TABLE: &'static [(u128, u128); 129] = &LN_TABLE;
    const LOG_E: DoubleDouble = DoubleDouble::new(F128::ONE, F128::ZERO);
    const LOG2_HI: F128 = F128::from_bits(0x3ffe_62e4_2fef_a39e_f357_93c7_6730_0000);
    const LOG2_LO: F128 = F128::from_bits(0x3f98_f97b_57a0_79a1_9339_4c5b_16c5_068c);
    const POLY_HI: [F128; 5] = [
        F128::from_bits(0x3ffb_5555_5555_5555_5555_5555_5555_555b),
        F128::from_bits(0x3ff8_9999_9999_9999_9999_9999_997a_8849),
        F128::from_bits(0x3ff6_2492_4924_9249_2492_4931_82eb_7e3d),
        F128::from_bits(0x3ff3_c71c_71c7_1c71_c718_4b66_c9a8_63c7),
        F128::from_bits(0x3ff1_745d_1745_d174_b26c_5ca1_b565_7abe),
    ];
    const POLY_LO: [f64; 4] = [
        f64::from_bits(0x3ef3_b13b_13b0_fd7a),
        f64::from_bits(0x3ed1_1111_12b2_f52b),
        f64::from_bits(0x3eae_1e11_361f_7100),
        f64::from_bits(0x3e8b_0e07_6016_83f2),
    ];
}

/// Natural logarithm.
#[inline]
pub fn ln(x: F128) -> F128 {
    log_generic::<Ln>(x)
}
