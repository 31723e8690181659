//! log1p(x) implementation.
//!
//! Near zero the series runs on f = x directly. Elsewhere 1 + x is formed as
//! an exact two-sum y + c and the table path adds log(1 + c/y) ~ c/y as a
//! correction, so the rounding of 1 + x never reaches the result.

use super::F128;
use super::classify::{divide_by_zero, invalid, propagate_nan};
use super::log::Ln;
use super::log_core::{near_one, table_path};
use super::utils::two_sum;

// e^(-1/16) - 1, e^(1/16) - 1
const NEAR_ZERO_LO: F128 = F128::from_bits(0xbffa_f054_0438_fd5c_31a1_ce01_f9f6_ca74);
const NEAR_ZERO_HI: F128 = F128::from_bits(0x3ffb_082b_577d_34ed_7d5b_1a01_9e22_5c9b);
// 2^-114: log1p(x) rounds to x below this.
const TINY_BOUND: F128 = F128::from_bits(0x3f8d_0000_0000_0000_0000_0000_0000_0000);

/// ln(1 + x).
#[inline]
pub fn log1p(x: F128) -> F128 {
    if x.is_nan() {
        return propagate_nan(x);
    }
    if x == F128::NEG_ONE {
        return divide_by_zero();
    }
    if x < F128::NEG_ONE {
        return invalid();
    }
    if x.is_infinite() {
        return x;
    }
    if x.abs() < TINY_BOUND {
        return x;
    }
    if x > NEAR_ZERO_LO && x < NEAR_ZERO_HI {
        return near_one::<Ln>(x);
    }
    let (y, c) = two_sum(F128::ONE, x);
    table_path::<Ln>(y, c / y)
}
