//! Binary128 exponentials and logarithms.
//!
//! Every entry point is a table-driven evaluator: a short special-value gate,
//! an argument reduction against a precomputed table, a polynomial whose
//! leading terms run in binary128 and whose tail runs in f64, and a
//! compensated reconstruction that keeps the final error within one ulp.
//! Exceptions are reported through the sticky flags in [`fenv`].

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod classify;
mod double_double;
mod exp;
mod exp10;
mod exp2;
mod exp_core;
mod exp_data;
mod expm1;
mod f128;
pub mod fenv;
mod log;
mod log10;
mod log1p;
mod log2;
mod log_core;
mod log_data;
mod scaling;
mod softfloat;
mod utils;

pub use classify::{
    FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL, FP_ZERO, fpclassify, isfinite, isinf, isnan,
    signbit,
};
pub use exp::exp;
pub use exp2::exp2;
pub use exp10::exp10;
pub use expm1::expm1;
pub use f128::F128;
pub use fenv::FpExceptions;
pub use self::log::ln;
/// C spelling of [`ln`].
pub use self::log::ln as log;
pub use log1p::log1p;
pub use log2::log2;
pub use log10::log10;
pub use scaling::{frexp, ldexp, scalbln, scalbn};

impl F128 {
    /// e^self.
    #[inline]
    pub fn exp(self) -> F128 {
        exp(self)
    }

    /// 2^self.
    #[inline]
    pub fn exp2(self) -> F128 {
        exp2(self)
    }

    /// 10^self.
    #[inline]
    pub fn exp10(self) -> F128 {
        exp10(self)
    }

    /// e^self - 1, accurate near zero.
    #[inline]
    pub fn exp_m1(self) -> F128 {
        expm1(self)
    }

    /// Natural logarithm.
    #[inline]
    pub fn ln(self) -> F128 {
        ln(self)
    }

    /// ln(1 + self), accurate near zero.
    #[inline]
    pub fn ln_1p(self) -> F128 {
        log1p(self)
    }

    #[inline]
    pub fn log2(self) -> F128 {
        log2(self)
    }

    #[inline]
    pub fn log10(self) -> F128 {
        log10(self)
    }
}
