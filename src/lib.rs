#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod math;

pub use math::{F128, FpExceptions};

#[cfg(test)]
mod tests {
    use super::math::{self, F128, FpExceptions, fenv};
    use proptest::prelude::*;
    use std::format;

    const MAX_ULP_TOL: u128 = 1;
    const ROUND_TRIP_ULP_TOL: u128 = 4;
    const F64_ULP_TOL: u64 = 1;

    fn order_key(x: F128) -> i128 {
        let bits = x.to_bits();
        let mag = (bits & !(1u128 << 127)) as i128;
        if bits >> 127 != 0 { -mag } else { mag }
    }

    fn ulp_distance(a: F128, b: F128) -> u128 {
        (order_key(a) - order_key(b)).unsigned_abs()
    }

    fn assert_ulp_eq(actual: F128, expected: F128, max_ulps: u128, context: &str) {
        if actual.is_nan() && expected.is_nan() {
            return;
        }
        let ulps = ulp_distance(actual, expected);
        assert!(
            ulps <= max_ulps,
            "{context}: expected {expected:?}, got {actual:?} (ulps={ulps})"
        );
    }

    fn f64_ulps(a: f64, b: f64) -> u64 {
        if a == b {
            return 0;
        }
        if a.is_sign_negative() != b.is_sign_negative() {
            return u64::MAX;
        }
        a.to_bits().abs_diff(b.to_bits())
    }

    fn q(x: f64) -> F128 {
        F128::from_f64(x)
    }

    fn bits(b: u128) -> F128 {
        F128::from_bits(b)
    }

    fn snan() -> F128 {
        bits(0x7fff_0000_0000_0000_0000_0000_0000_0001)
    }

    fn reset_flags() {
        fenv::clear(FpExceptions::all());
    }

    // Correctly rounded binary128 results.
    fn reference_values() -> [(&'static str, fn(F128) -> F128, F128, u128); 30] {
        [
            ("exp(1)", math::exp, F128::ONE, 0x4000_5bf0_a8b1_4576_9535_5fb8_ac40_4e7a),
            ("exp(10)", math::exp, q(10.0), 0x400d_5829_dcf9_5055_f9f0_7ea8_c056_d135),
            ("exp(-1)", math::exp, F128::NEG_ONE, 0x3ffd_78b5_6362_cef3_7c6a_eb7b_1e0a_4154),
            ("exp(100)", math::exp, q(100.0), 0x408f_3494_a9b1_71bf_4acc_2250_9332_2428),
            ("exp(-100)", math::exp, q(-100.0), 0x3f6e_a8c1_f14e_2af5_caf3_dd91_375c_74fd),
            ("exp(0.1)", math::exp, q(0.1), 0x3fff_1aec_7b35_a00d_3a20_ad9d_3c71_f58f),
            ("exp2(0.5)", math::exp2, q(0.5), 0x3fff_6a09_e667_f3bc_c908_b2fb_1366_ea95),
            ("exp2(-10.5)", math::exp2, q(-10.5), 0x3ff4_6a09_e667_f3bc_c908_b2fb_1366_ea95),
            ("exp10(-10)", math::exp10, q(-10.0), 0x3fdd_b7cd_fd9d_7bdb_ab7d_6ae6_881c_b511),
            ("exp10(0.5)", math::exp10, q(0.5), 0x4000_94c5_83ad_a5b5_2920_4a2b_c830_cd9c),
            ("expm1(1)", math::expm1, F128::ONE, 0x3fff_b7e1_5162_8aed_2a6a_bf71_5880_9cf5),
            ("expm1(-1)", math::expm1, F128::NEG_ONE, 0xbffe_43a5_4e4e_9886_41ca_8a42_70fa_df56),
            ("expm1(1e-10)", math::expm1, q(1e-10), 0x3fdd_b7cd_fd9d_da4e_3432_568e_1764_7173),
            ("expm1(0.01)", math::expm1, q(0.01), 0x3ff8_4952_e979_1133_e9e3_572b_3ed5_ad16),
            ("expm1(50)", math::expm1, q(50.0), 0x4047_1910_3e40_80b4_5664_d674_0cf8_c5d9),
            ("expm1(-50)", math::expm1, q(-50.0), 0xbffe_ffff_ffff_ffff_ffff_fe2d_a82a_b81f),
            ("expm1(100)", math::expm1, q(100.0), 0x408f_3494_a9b1_71bf_4acc_2250_9332_2428),
            ("ln(2)", math::ln, F128::TWO, 0x3ffe_62e4_2fef_a39e_f357_93c7_6730_07e6),
            ("ln(10)", math::ln, F128::TEN, 0x4000_26bb_1bbb_5551_582d_d4ad_ac57_05a6),
            ("ln(0.75)", math::ln, q(0.75), 0xbffd_2696_2113_4db9_2783_beb7_676c_0aaa),
            ("ln(1.01)", math::ln, q(1.01), 0x3ff8_460d_6ccc_a367_bc8d_c2ef_7d3a_3044),
            ("log2(10)", math::log2, F128::TEN, 0x4000_a934_f097_9a37_15fc_9257_edfe_9b60),
            ("log2(3)", math::log2, q(3.0), 0x3fff_95c0_1a39_fbd6_879f_a00b_120a_068c),
            ("log2(12)", math::log2, q(12.0), 0x4000_cae0_0d1c_fdeb_43cf_d005_8905_0346),
            ("log2(0.1)", math::log2, q(0.1), 0xc000_a934_f097_9a37_1319_e96b_488e_3ba3),
            ("log10(2)", math::log10, F128::TWO, 0x3ffd_3441_3509_f79f_ef31_1f12_b358_16f9),
            ("log10(7)", math::log10, q(7.0), 0x3ffe_b0b0_b0b7_8cc3_f296_d25f_f150_0bfb),
            ("log1p(1e-10)", math::log1p, q(1e-10), 0x3fdd_b7cd_fd9d_1d69_2bcd_d202_8099_5ed0),
            ("log1p(0.5)", math::log1p, F128::HALF, 0x3ffd_9f32_3ecb_f984_bf2b_68d7_66f4_0522),
            ("log1p(-0.5)", math::log1p, -F128::HALF, 0xbffe_62e4_2fef_a39e_f357_93c7_6730_07e6),
        ]
    }

    #[test]
    fn matches_reference_values() {
        for (name, f, x, want) in reference_values() {
            assert_ulp_eq(f(x), bits(want), MAX_ULP_TOL, name);
        }
    }

    #[test]
    fn exact_results() {
        assert_eq!(math::exp10(F128::ONE), F128::TEN);
        assert_eq!(math::exp10(q(2.0)), q(100.0));
        assert_eq!(math::exp10(q(22.0)), q(1e22));
        assert_eq!(math::exp2(F128::ONE), F128::TWO);
        assert_eq!(math::exp2(F128::NEG_ONE), F128::HALF);
        assert_eq!(math::exp2(q(-16400.0)), math::scalbn(F128::ONE, -16400));
        assert_eq!(math::log2(q(8.0)), q(3.0));
        assert_eq!(math::log2(q(0.25)), q(-2.0));
        assert_eq!(math::exp(F128::ZERO).to_bits(), F128::ONE.to_bits());
        assert_eq!(math::exp(F128::NEG_ZERO).to_bits(), F128::ONE.to_bits());
        assert_eq!(math::exp2(F128::ZERO).to_bits(), F128::ONE.to_bits());
        assert_eq!(math::exp10(F128::ZERO).to_bits(), F128::ONE.to_bits());
        assert_eq!(math::log(F128::E), math::ln(F128::E));
        assert_eq!(math::ln(F128::ONE).to_bits(), F128::ZERO.to_bits());
        assert_eq!(math::log10(F128::ONE).to_bits(), F128::ZERO.to_bits());
        assert_eq!(math::expm1(F128::ZERO).to_bits(), F128::ZERO.to_bits());
        assert_eq!(math::expm1(F128::NEG_ZERO).to_bits(), F128::NEG_ZERO.to_bits());
        assert_eq!(math::log1p(F128::NEG_ZERO).to_bits(), F128::NEG_ZERO.to_bits());
        assert_ulp_eq(math::log10(q(100.0)), F128::TWO, MAX_ULP_TOL, "log10(100)");
    }

    #[test]
    fn tiny_arguments_pass_through() {
        let x = F128::MIN_POSITIVE_SUBNORMAL;
        assert_eq!(math::expm1(x), x);
        assert_eq!(math::log1p(x), x);
        assert_eq!(math::expm1(-x), -x);
        assert_eq!(math::exp(x), F128::ONE);
        assert_eq!(math::exp10(-x), F128::ONE);
    }

    #[test]
    fn exp_special_cases() {
        for f in [math::exp, math::exp2, math::exp10] {
            assert!(f(F128::NAN).is_nan());
            assert_eq!(f(F128::INFINITY), F128::INFINITY);
            assert_eq!(f(F128::NEG_INFINITY).to_bits(), F128::ZERO.to_bits());
        }
        assert!(math::expm1(F128::NAN).is_nan());
        assert_eq!(math::expm1(F128::INFINITY), F128::INFINITY);
        assert_eq!(math::expm1(F128::NEG_INFINITY), F128::NEG_ONE);
    }

    #[test]
    fn log_special_cases() {
        for f in [math::ln, math::log2, math::log10] {
            assert!(f(F128::NAN).is_nan());
            assert_eq!(f(F128::INFINITY), F128::INFINITY);
            assert_eq!(f(F128::ZERO), F128::NEG_INFINITY);
            assert_eq!(f(F128::NEG_ZERO), F128::NEG_INFINITY);
            assert!(f(F128::NEG_ONE).is_nan());
            assert!(f(F128::NEG_INFINITY).is_nan());
        }
        assert!(math::log1p(F128::NAN).is_nan());
        assert_eq!(math::log1p(F128::INFINITY), F128::INFINITY);
        assert_eq!(math::log1p(F128::NEG_ONE), F128::NEG_INFINITY);
        assert!(math::log1p(-F128::TWO).is_nan());
        assert!(math::log1p(F128::NEG_INFINITY).is_nan());
    }

    #[test]
    fn nan_payload_is_kept_and_quieted() {
        let got = math::ln(snan());
        assert!(got.is_nan());
        assert!(!got.is_signaling_nan());
        assert_eq!(got.to_bits() & 1, 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn overflow_and_underflow_raise_flags() {
        reset_flags();
        assert_eq!(math::exp(q(20000.0)), F128::INFINITY);
        assert_eq!(fenv::take(), FpExceptions::OVERFLOW | FpExceptions::INEXACT);

        // Past ln(MAX) ~ 11356.52 but inside the gate.
        assert_eq!(math::exp(q(11357.0)), F128::INFINITY);
        assert!(fenv::test(FpExceptions::OVERFLOW).contains(FpExceptions::OVERFLOW));
        reset_flags();
        assert!(math::exp(q(11356.0)).is_finite());
        assert!(fenv::get().is_empty());

        assert_eq!(math::exp(q(-20000.0)).to_bits(), F128::ZERO.to_bits());
        assert_eq!(fenv::take(), FpExceptions::UNDERFLOW | FpExceptions::INEXACT);

        let sub = math::exp(q(-11400.0));
        assert!(sub.is_subnormal());
        assert!(fenv::take().contains(FpExceptions::UNDERFLOW));

        assert_eq!(math::expm1(q(-100.0)), F128::NEG_ONE);
        assert_eq!(fenv::take(), FpExceptions::UNDERFLOW | FpExceptions::INEXACT);
        assert_eq!(math::expm1(q(-80.0)), F128::NEG_ONE);
        assert_eq!(fenv::take(), FpExceptions::UNDERFLOW | FpExceptions::INEXACT);
        assert_eq!(math::expm1(F128::NEG_INFINITY), F128::NEG_ONE);
        assert!(fenv::get().is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn domain_errors_raise_flags() {
        reset_flags();
        assert_eq!(math::ln(F128::ZERO), F128::NEG_INFINITY);
        assert_eq!(fenv::take(), FpExceptions::DIV_BY_ZERO);
        assert_eq!(math::log1p(F128::NEG_ONE), F128::NEG_INFINITY);
        assert_eq!(fenv::take(), FpExceptions::DIV_BY_ZERO);
        assert!(math::log2(q(-3.0)).is_nan());
        assert_eq!(fenv::take(), FpExceptions::INVALID);
        assert!(math::log1p(F128::NEG_INFINITY).is_nan());
        assert_eq!(fenv::take(), FpExceptions::INVALID);
        assert!(math::exp(snan()).is_nan());
        assert_eq!(fenv::take(), FpExceptions::INVALID);
        assert!(math::log10(F128::NAN).is_nan());
        assert!(math::exp(F128::INFINITY).is_infinite());
        assert!(math::exp(F128::NEG_INFINITY).is_zero());
        assert!(math::ln(F128::INFINITY).is_infinite());
        assert!(fenv::get().is_empty());
    }

    #[test]
    fn methods_forward_to_functions() {
        let x = q(1.75);
        assert_eq!(x.exp(), math::exp(x));
        assert_eq!(x.exp2(), math::exp2(x));
        assert_eq!(x.exp10(), math::exp10(x));
        assert_eq!(x.exp_m1(), math::expm1(x));
        assert_eq!(x.ln(), math::ln(x));
        assert_eq!(x.ln_1p(), math::log1p(x));
        assert_eq!(x.log2(), math::log2(x));
        assert_eq!(x.log10(), math::log10(x));
    }

    #[test]
    fn log_recovers_exponent() {
        for k in [-16000, -1000, -1, 1, 64, 1000, 16000] {
            let x = math::scalbn(F128::ONE, k);
            assert_eq!(math::log2(x), F128::from_i32(k), "log2(2^{k})");
            let want = F128::from_i32(k) * F128::LN_2;
            assert_ulp_eq(math::ln(x), want, MAX_ULP_TOL + 1, &format!("ln(2^{k})"));
        }
    }

    #[test]
    fn expm1_and_log1p_agree_near_zero() {
        for x in [1e-30, -1e-30, 1e-5, -1e-5, 0.03, -0.03, 0.06, -0.06] {
            let x = q(x);
            let y = math::expm1(x);
            assert_ulp_eq(math::log1p(y), x, ROUND_TRIP_ULP_TOL, &format!("log1p(expm1({x:?}))"));
        }
    }

    proptest! {
        #[test]
        fn ptest_exp_matches_std(x in -700.0..700.0_f64) {
            let actual = math::exp(q(x)).to_f64();
            let expected = x.exp();
            prop_assert!(f64_ulps(actual, expected) <= F64_ULP_TOL, "exp({x}): {actual} vs {expected}");
        }

        #[test]
        fn ptest_ln_matches_std(x in 1e-300..1e300_f64) {
            let actual = math::ln(q(x)).to_f64();
            let expected = x.ln();
            prop_assert!(f64_ulps(actual, expected) <= F64_ULP_TOL, "ln({x}): {actual} vs {expected}");
        }

        #[test]
        fn ptest_log1p_matches_std(x in -0.99..1e6_f64) {
            let actual = math::log1p(q(x)).to_f64();
            let expected = x.ln_1p();
            prop_assert!(f64_ulps(actual, expected) <= F64_ULP_TOL, "log1p({x}): {actual} vs {expected}");
        }

        #[test]
        fn ptest_expm1_matches_std(x in -40.0..700.0_f64) {
            let actual = math::expm1(q(x)).to_f64();
            let expected = x.exp_m1();
            prop_assert!(f64_ulps(actual, expected) <= F64_ULP_TOL, "expm1({x}): {actual} vs {expected}");
        }

        #[test]
        fn ptest_log2_log10_match_std(x in 1e-300..1e300_f64) {
            let l2 = math::log2(q(x)).to_f64();
            prop_assert!(f64_ulps(l2, x.log2()) <= F64_ULP_TOL, "log2({x})");
            let l10 = math::log10(q(x)).to_f64();
            prop_assert!(f64_ulps(l10, x.log10()) <= F64_ULP_TOL, "log10({x})");
        }

        #[test]
        fn ptest_exp2_of_integers_is_exact(k in -16382i32..16383) {
            prop_assert_eq!(math::exp2(F128::from_i32(k)), math::scalbn(F128::ONE, k));
        }

        #[test]
        fn ptest_ln_exp_round_trip(x in prop_oneof![-20.0..-1.0_f64, 1.0..20.0_f64]) {
            let x = q(x);
            let back = math::ln(math::exp(x));
            prop_assert!(ulp_distance(back, x) <= ROUND_TRIP_ULP_TOL, "ln(exp({x:?})) = {back:?}");
        }

        #[test]
        fn ptest_exp_ln_round_trip(y in 0.5..8.0_f64) {
            let y = q(y);
            let back = math::exp(math::ln(y));
            prop_assert!(ulp_distance(back, y) <= 2 * ROUND_TRIP_ULP_TOL, "exp(ln({y:?})) = {back:?}");
        }

        #[test]
        fn ptest_exp_monotone(x in -11000.0..11000.0_f64, step in 1e-3..10.0_f64) {
            let a = math::exp(q(x));
            let b = math::exp(q(x + step));
            prop_assert!(a <= b, "exp not monotone at {x}");
        }

        #[test]
        fn ptest_ln_monotone(x in 1e-300..1e300_f64, scale in 1.001..4.0_f64) {
            let a = math::ln(q(x));
            let b = math::ln(q(x * scale));
            prop_assert!(a <= b, "ln not monotone at {x}");
        }
    }
}
